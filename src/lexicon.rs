//! # Lexicon Store
//!
//! AFINN-style word list extended with market/trading vernacular, plus the
//! negator and intensifier token tables the scorer consults during a scan.
//!
//! The word list lives in `sentiment_lexicon.json` at the crate root and is
//! embedded at compile time. Weights are signed reals in `[-5, 5]`; keys are
//! lowercase unigrams or two-word phrases. The table is parsed once into a
//! process-wide frozen map and never mutated afterwards.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static LEXICON: Lazy<HashMap<String, f64>> = Lazy::new(|| {
    let raw = include_str!("../sentiment_lexicon.json");
    serde_json::from_str::<HashMap<String, f64>>(raw).expect("valid sentiment lexicon")
});

/// Lexicon weight for a word or two-word phrase, if present.
///
/// Zero-weight entries (deliberately neutral words like "sideways") are
/// distinct from absent ones: a zero-weight match still consumes a bigram
/// and expires pending modifiers in the scorer.
#[inline]
pub fn weight(key: &str) -> Option<f64> {
    LEXICON.get(key).copied()
}

/// Number of entries in the embedded lexicon.
pub fn entry_count() -> usize {
    LEXICON.len()
}

/// Negators flip-and-dampen the next scored word.
pub fn is_negator(tok: &str) -> bool {
    matches!(
        tok,
        "not"
            | "never"
            | "no"
            | "without"
            | "don't"
            | "doesn't"
            | "didn't"
            | "won't"
            | "can't"
            | "couldn't"
            | "isn't"
            | "aren't"
            | "wasn't"
            | "weren't"
            | "hardly"
            | "barely"
            | "neither"
            | "nor"
    )
}

/// Multiplicative factor for an intensifier token, if it is one.
pub fn intensifier_factor(tok: &str) -> Option<f64> {
    match tok {
        "absolutely" | "completely" | "totally" | "extremely" | "incredibly" | "massively"
        | "insanely" => Some(1.5),
        "hugely" => Some(1.4),
        "really" | "very" | "super" | "so" => Some(1.3),
        "genuinely" => Some(1.2),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexicon_parses_and_is_nonempty() {
        assert!(entry_count() > 200, "lexicon suspiciously small");
    }

    #[test]
    fn weights_stay_in_band() {
        for w in [weight("bullish"), weight("fraud"), weight("hold")] {
            let w = w.expect("known entry");
            assert!((-5.0..=5.0).contains(&w));
        }
        assert_eq!(weight("bullish"), Some(4.0));
        assert_eq!(weight("fraud"), Some(-5.0));
    }

    #[test]
    fn hold_resolves_to_weak_positive() {
        // The source word list carried "hold" twice; the neutral-section value wins.
        assert_eq!(weight("hold"), Some(0.5));
        assert_eq!(weight("holding"), Some(0.5));
    }

    #[test]
    fn bigram_keys_present() {
        assert_eq!(weight("earnings beat"), Some(4.0));
        assert_eq!(weight("margin call"), Some(-4.0));
        assert_eq!(weight("diamond hands"), Some(4.0));
    }

    #[test]
    fn zero_weight_entries_are_matches() {
        assert_eq!(weight("sideways"), Some(0.0));
        assert_eq!(weight("neutral"), Some(0.0));
        assert_eq!(weight("definitely-not-a-word"), None);
    }

    #[test]
    fn negators_and_intensifiers() {
        assert!(is_negator("not"));
        assert!(is_negator("won't"));
        assert!(!is_negator("bullish"));
        assert_eq!(intensifier_factor("very"), Some(1.3));
        assert_eq!(intensifier_factor("hugely"), Some(1.4));
        assert_eq!(intensifier_factor("calmly"), None);
    }
}
