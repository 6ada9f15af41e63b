// tests/pipeline_e2e.rs
//
// End-to-end over the fixture-backed providers: fetch → normalize → score →
// summarize, for every platform and asset kind.

use social_sentiment_analyzer::ingest::providers::{RedditSource, TwitterSource};
use social_sentiment_analyzer::ingest::{self, types::PostSource};
use social_sentiment_analyzer::{summarize, AssetCatalog, Platform, SentimentAnalyzer};

async fn run_pipeline(
    source: &dyn PostSource,
    asset_input: &str,
) -> social_sentiment_analyzer::SentimentSummary {
    let catalog = AssetCatalog::default_seed();
    let asset = catalog.resolve(asset_input);
    let analyzer = SentimentAnalyzer::new();
    let posts = ingest::analyze_posts(source, &analyzer, &asset)
        .await
        .expect("fixture pipeline must not fail");
    summarize(&posts, source.platform(), asset)
}

#[tokio::test]
async fn reddit_stock_batch_holds_invariants() {
    let summary = run_pipeline(&RedditSource::mock(), "NVDA").await;

    assert_eq!(summary.platform, Platform::Reddit);
    assert_eq!(summary.asset.symbol, "NVDA");
    assert_eq!(summary.post_count, 8);
    assert_eq!(summary.distribution.total(), 8);
    assert!(summary.most_bullish.is_some());
    assert!(summary.most_bearish.is_some());
    assert!((-1.0..=1.0).contains(&summary.average_score));
    assert!((-1.0..=1.0).contains(&summary.engagement_weighted_score));

    let hi = summary.most_bullish.as_ref().unwrap().sentiment.score;
    let lo = summary.most_bearish.as_ref().unwrap().sentiment.score;
    assert!(hi >= summary.average_score);
    assert!(lo <= summary.average_score);
}

#[tokio::test]
async fn twitter_commodity_batch_holds_invariants() {
    let summary = run_pipeline(&TwitterSource::mock(), "gold").await;

    assert_eq!(summary.platform, Platform::Twitter);
    assert_eq!(summary.asset.symbol, "GC");
    assert_eq!(summary.post_count, 4);
    assert_eq!(summary.distribution.total(), 4);
    // Fixture engagement is nonzero, so the weighted score is real.
    let ew = summary.engagement_weighted_score;
    assert!((-1.0..=1.0).contains(&ew));
}

#[tokio::test]
async fn every_asset_kind_reaches_a_summary() {
    for input in ["NVDA", "gold", "tech", "spy", "btc", "ZZZZ"] {
        let reddit = run_pipeline(&RedditSource::mock(), input).await;
        assert!(reddit.post_count > 0, "{input} reddit batch empty");
        let twitter = run_pipeline(&TwitterSource::mock(), input).await;
        assert!(twitter.post_count > 0, "{input} twitter batch empty");
    }
}

#[tokio::test]
async fn pipeline_is_deterministic() {
    let a = run_pipeline(&RedditSource::mock(), "NVDA").await;
    let b = run_pipeline(&RedditSource::mock(), "NVDA").await;
    assert_eq!(a, b);
}

#[tokio::test]
async fn scored_posts_carry_sane_fields() {
    let catalog = AssetCatalog::default_seed();
    let asset = catalog.resolve("spy");
    let analyzer = SentimentAnalyzer::new();
    let posts = ingest::analyze_posts(&TwitterSource::mock(), &analyzer, &asset)
        .await
        .unwrap();

    for post in &posts {
        assert!(!post.id.is_empty());
        assert!(!post.author.is_empty());
        assert!(!post.text.is_empty());
        assert_eq!(post.platform, Platform::Twitter);
        assert_eq!(
            post.sentiment.magnitude,
            (post.sentiment.score.abs() * 1000.0).round() / 1000.0
        );
    }
    // The fixture authors come from the includes expansion, not raw ids.
    assert!(posts.iter().any(|p| p.author == "spy_calls"));
}
