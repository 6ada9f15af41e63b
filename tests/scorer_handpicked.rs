// tests/scorer_handpicked.rs
//
// Hand-picked real-world-shaped posts with expected direction. These pin the
// scorer's overall behavior on full sentences, not just isolated tokens.

use social_sentiment_analyzer::{SentimentAnalyzer, SentimentLabel};

fn label(text: &str) -> SentimentLabel {
    SentimentAnalyzer::new().analyze(text).label
}

#[test]
fn earnings_blowout_reads_very_bullish() {
    let text = "$NVDA earnings blowout. Revenue beat, guidance raised, data center \
                demand through the roof. This stock is going to the moon. Adding to \
                my position aggressively.";
    assert_eq!(label(text), SentimentLabel::VeryBullish);
}

#[test]
fn margin_collapse_reads_very_bearish() {
    let text = "$TSLA is in trouble. Margins collapsing, competition crushing them \
                in China, and Elon is distracted. Overvalued by at least 50%. This \
                crash is just getting started.";
    assert_eq!(label(text), SentimentLabel::VeryBearish);
}

#[test]
fn breakout_with_intensifier_reads_very_bullish() {
    // Exercises the "breaking out" bigram and a trailing intensifier.
    let text = "Gold breaking out to new highs. Central banks buying record \
                amounts. Real rates falling. $2800 was resistance, now it's \
                support. $3000 is inevitable. Extremely bullish.";
    assert_eq!(label(text), SentimentLabel::VeryBullish);
}

#[test]
fn storage_report_reads_very_bearish() {
    let text = "Natural gas storage report was bearish. Injection well above \
                expectations. Mild weather killing demand. No floor in sight. Avoid.";
    assert_eq!(label(text), SentimentLabel::VeryBearish);
}

#[test]
fn sidelined_chatter_reads_neutral() {
    // Only zero-weight words hit, which counts as no hits at all.
    let text = "Watching from the sidelines. Market is flat, consolidating sideways.";
    let score = SentimentAnalyzer::new().analyze(text);
    assert_eq!(score.label, SentimentLabel::Neutral);
    assert_eq!(score.word_hits, 0);
    assert_eq!(score.score, 0.0);
}

#[test]
fn squeeze_chatter_reads_positive() {
    let text = "Shorts are getting absolutely destroyed right now. Squeeze incoming!";
    let s = SentimentAnalyzer::new().analyze(text);
    assert!(s.score > 0.0);
}
