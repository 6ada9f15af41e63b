//! # Sentiment Scorer
//!
//! Finance-tuned lexicon scorer: tokenizes a post, applies negation and
//! intensifier modifiers, looks up unigram/bigram weights, and compresses the
//! running total into a bounded score plus label.
//!
//! `analyze` is total — empty input, emoji soup, or text with no recognizable
//! words all come back as a zero-score neutral result, never an error.

use serde::{Deserialize, Serialize};

use crate::lexicon;
use crate::signal::{self, round3, SentimentLabel};

/// Negation flips and dampens rather than fully inverting: a negated
/// strong-bullish word reads moderately bearish, not symmetric-bearish.
const NEGATION_FACTOR: f64 = -0.75;

/// Per-hit divisor feeding tanh; dampens many weak hits vs. few strong ones.
const NORM_DIVISOR_PER_HIT: f64 = 1.5;

/// Bounded sentiment result for one analyzed text.
///
/// Invariants: `score` in `[-1, 1]`, `magnitude == |score|`, and
/// `word_hits == 0` exactly when `score == 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    /// -1 (very bearish) to +1 (very bullish), rounded to 3 decimals.
    pub score: f64,
    /// Absolute magnitude of sentiment, 0 to 1.
    pub magnitude: f64,
    pub label: SentimentLabel,
    /// Number of sentiment-bearing words found.
    pub word_hits: usize,
}

impl SentimentScore {
    fn neutral() -> Self {
        Self {
            score: 0.0,
            magnitude: 0.0,
            label: SentimentLabel::Neutral,
            word_hits: 0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SentimentAnalyzer;

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Score a free-text post. Pure and total.
    pub fn analyze(&self, text: &str) -> SentimentScore {
        let tokens = tokenize(text);

        let mut total = 0.0f64;
        let mut hits = 0usize;
        let mut negate = false;
        let mut intensifier = 1.0f64;

        // Index-based scan: the bigram branch consumes two tokens, which an
        // iterator would hide.
        let mut i = 0;
        while i < tokens.len() {
            // Strip a leading `$` so cashtag-style words ($nvda) still hit.
            let word = tokens[i].strip_prefix('$').unwrap_or(&tokens[i]);

            // Modifier tokens score nothing themselves and persist only
            // until the next content word.
            if lexicon::is_negator(word) {
                negate = true;
                i += 1;
                continue;
            }
            if let Some(factor) = lexicon::intensifier_factor(word) {
                intensifier = factor;
                i += 1;
                continue;
            }

            // Two-token lookahead: a phrase match wins over a single word at
            // the same position and consumes its second token, so that token
            // can never be re-scored as a unigram.
            let mut weight = None;
            if i + 1 < tokens.len() {
                let bigram = format!("{} {}", word, tokens[i + 1]);
                if let Some(w) = lexicon::weight(&bigram) {
                    weight = Some(w);
                    i += 1;
                }
            }
            let weight = match weight {
                Some(w) => Some(w),
                None => lexicon::weight(word),
            };

            // Zero-weight matches count for nothing but still fall through
            // to the modifier reset below.
            if let Some(w) = weight {
                if w != 0.0 {
                    let mut adjusted = w * intensifier;
                    if negate {
                        adjusted *= NEGATION_FACTOR;
                    }
                    total += adjusted;
                    hits += 1;
                }
            }

            negate = false;
            intensifier = 1.0;
            i += 1;
        }

        if hits == 0 {
            return SentimentScore::neutral();
        }

        let normalized = (total / (hits as f64 * NORM_DIVISOR_PER_HIT)).tanh();
        SentimentScore {
            score: round3(normalized),
            magnitude: round3(normalized.abs()),
            label: signal::label_for(normalized),
            word_hits: hits,
        }
    }
}

/// Lowercase, strip everything except letters, digits, apostrophe, dollar
/// sign, hyphen and whitespace (keeps `$nvda` and `don't` intact, destroys
/// punctuation), then split on whitespace runs.
fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '\'' | '$' | '-') {
                c
            } else {
                ' '
            }
        })
        .collect();
    cleaned.split_whitespace().map(str::to_string).collect()
}
