// tests/summary_properties.rs
//
// Aggregation contract: empty batches, the small-sample signal guard, the
// zero-engagement fallback, and order-independent extreme selection.

use chrono::{TimeZone, Utc};
use social_sentiment_analyzer::{
    summarize, AnalyzedPost, AssetCatalog, EngagementCounts, Platform, SentimentScore,
    TradeSignal,
};
use social_sentiment_analyzer::signal;

fn post(id: &str, score: f64, engagement: u64) -> AnalyzedPost {
    AnalyzedPost {
        id: id.to_string(),
        platform: Platform::Twitter,
        text: format!("text for {id}"),
        author: format!("author_{id}"),
        timestamp: Utc.timestamp_opt(1_786_057_200, 0).single().unwrap(),
        engagement: EngagementCounts::new(engagement, 0, 0),
        sentiment: SentimentScore {
            score,
            magnitude: (score.abs() * 1000.0).round() / 1000.0,
            label: signal::label_for(score),
            word_hits: 2,
        },
    }
}

fn nvda() -> social_sentiment_analyzer::AssetTarget {
    AssetCatalog::default_seed().resolve("NVDA")
}

#[test]
fn empty_batch_is_well_defined() {
    let s = summarize(&[], Platform::Twitter, nvda());
    assert_eq!(s.post_count, 0);
    assert_eq!(s.average_score, 0.0);
    assert_eq!(s.average_magnitude, 0.0);
    assert_eq!(s.distribution.total(), 0);
    assert!(s.most_bullish.is_none());
    assert!(s.most_bearish.is_none());
    assert_eq!(s.engagement_weighted_score, 0.0);
    assert_eq!(s.signal, TradeSignal::Hold);
}

#[test]
fn two_posts_never_produce_a_directional_signal() {
    for (a, b) in [(0.95, 0.9), (-0.95, -0.9), (0.95, -0.9)] {
        let batch = vec![post("a", a, 500), post("b", b, 500)];
        let s = summarize(&batch, Platform::Twitter, nvda());
        assert_eq!(s.signal, TradeSignal::Hold, "scores ({a}, {b})");
    }
}

#[test]
fn zero_engagement_weighted_score_is_exactly_zero() {
    let batch = vec![post("a", 0.9, 0), post("b", 0.8, 0), post("c", 0.85, 0)];
    let s = summarize(&batch, Platform::Twitter, nvda());
    assert_eq!(s.engagement_weighted_score, 0.0);
    assert_eq!(s.signal, TradeSignal::Hold);
    assert!(s.average_score > 0.8);
}

#[test]
fn extremes_are_selected_by_value_not_position() {
    let forward = vec![post("p1", 0.8, 50), post("p2", 0.1, 50), post("p3", -0.9, 50)];
    let mut reversed = forward.clone();
    reversed.reverse();

    for batch in [forward, reversed] {
        let s = summarize(&batch, Platform::Twitter, nvda());
        assert_eq!(s.most_bullish.as_ref().unwrap().sentiment.score, 0.8);
        assert_eq!(s.most_bearish.as_ref().unwrap().sentiment.score, -0.9);
    }
}

#[test]
fn duplicate_extremes_pick_the_first_in_input_order() {
    let batch = vec![post("early", -0.7, 10), post("late", -0.7, 10)];
    let s = summarize(&batch, Platform::Twitter, nvda());
    assert_eq!(s.most_bearish.as_ref().unwrap().id, "early");
}

#[test]
fn recomputation_is_independent_of_previous_batches() {
    let small = vec![post("a", 0.9, 100)];
    let first = summarize(&small, Platform::Twitter, nvda());

    let mut larger = small.clone();
    larger.push(post("b", -0.9, 100));
    larger.push(post("c", 0.2, 100));
    let second = summarize(&larger, Platform::Twitter, nvda());

    // The earlier summary is untouched and the new one is built fresh.
    assert_eq!(first.post_count, 1);
    assert_eq!(second.post_count, 3);
    assert_ne!(first.average_score, second.average_score);
}

#[test]
fn summary_signal_tracks_engagement_weighted_score() {
    // Heavily-engaged bearish voice outweighs two quiet bulls.
    let batch = vec![
        post("loud", -0.9, 50_000),
        post("q1", 0.4, 2),
        post("q2", 0.4, 2),
    ];
    let s = summarize(&batch, Platform::Twitter, nvda());
    assert!(s.engagement_weighted_score < 0.0);
    assert!(matches!(
        s.signal,
        TradeSignal::Sell | TradeSignal::StrongSell
    ));
}
