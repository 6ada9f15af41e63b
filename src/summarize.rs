//! # Post Aggregator
//!
//! Turns a batch of scored posts into a single per-(platform, asset) summary:
//! label distribution, simple and engagement-weighted averages, the extreme
//! posts, and a derived trading signal.
//!
//! A summary is computed fresh from its batch and never mutated; re-running
//! on a larger batch produces an independent summary (no incremental update).

use serde::{Deserialize, Serialize};

use crate::assets::AssetTarget;
use crate::ingest::types::{EngagementCounts, Platform};
use crate::sentiment::SentimentScore;
use crate::signal::{self, round3, SentimentLabel, TradeSignal};

/// A post with its engagement data and computed sentiment attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedPost {
    pub id: String,
    pub platform: Platform,
    pub text: String,
    pub author: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub engagement: EngagementCounts,
    pub sentiment: SentimentScore,
}

/// Post counts per sentiment band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelDistribution {
    pub very_bearish: usize,
    pub bearish: usize,
    pub neutral: usize,
    pub bullish: usize,
    pub very_bullish: usize,
}

impl LabelDistribution {
    pub fn bump(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::VeryBearish => self.very_bearish += 1,
            SentimentLabel::Bearish => self.bearish += 1,
            SentimentLabel::Neutral => self.neutral += 1,
            SentimentLabel::Bullish => self.bullish += 1,
            SentimentLabel::VeryBullish => self.very_bullish += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.very_bearish + self.bearish + self.neutral + self.bullish + self.very_bullish
    }
}

/// Aggregate sentiment for one (platform, asset) post batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSummary {
    pub asset: AssetTarget,
    pub platform: Platform,
    pub post_count: usize,
    pub average_score: f64,
    pub average_magnitude: f64,
    pub distribution: LabelDistribution,
    pub most_bullish: Option<AnalyzedPost>,
    pub most_bearish: Option<AnalyzedPost>,
    /// Weighted by `ln(1 + total engagement)`; higher engagement, more pull.
    pub engagement_weighted_score: f64,
    pub signal: TradeSignal,
}

impl SentimentSummary {
    fn empty(platform: Platform, asset: AssetTarget) -> Self {
        Self {
            asset,
            platform,
            post_count: 0,
            average_score: 0.0,
            average_magnitude: 0.0,
            distribution: LabelDistribution::default(),
            most_bullish: None,
            most_bearish: None,
            engagement_weighted_score: 0.0,
            signal: TradeSignal::Hold,
        }
    }
}

/// Summarize a batch in a single pass. Total: an empty batch yields the
/// well-defined zero summary with a Hold signal.
///
/// Extremes are selected by raw score with strict comparisons, seeded from
/// the first post, so the first occurrence wins ties and a single-post batch
/// returns that post for both fields. Input order is preserved while
/// scanning; callers that want a display sort should sort a copy.
pub fn summarize(
    posts: &[AnalyzedPost],
    platform: Platform,
    asset: AssetTarget,
) -> SentimentSummary {
    if posts.is_empty() {
        return SentimentSummary::empty(platform, asset);
    }

    let mut distribution = LabelDistribution::default();
    let mut total_score = 0.0f64;
    let mut total_magnitude = 0.0f64;
    let mut weighted_score_sum = 0.0f64;
    let mut weight_sum = 0.0f64;
    let mut most_bullish = &posts[0];
    let mut most_bearish = &posts[0];

    for post in posts {
        total_score += post.sentiment.score;
        total_magnitude += post.sentiment.magnitude;
        distribution.bump(post.sentiment.label);

        // ln(1 + engagement) dampens outliers; weight is 0 only for posts
        // with no engagement at all.
        let weight = (post.engagement.total() as f64).ln_1p();
        weighted_score_sum += post.sentiment.score * weight;
        weight_sum += weight;

        if post.sentiment.score > most_bullish.sentiment.score {
            most_bullish = post;
        }
        if post.sentiment.score < most_bearish.sentiment.score {
            most_bearish = post;
        }
    }

    let count = posts.len() as f64;
    // All-zero-engagement batches fall back to 0, not to the simple average.
    let ew_score = if weight_sum > 0.0 {
        weighted_score_sum / weight_sum
    } else {
        0.0
    };

    SentimentSummary {
        asset,
        platform,
        post_count: posts.len(),
        average_score: round3(total_score / count),
        average_magnitude: round3(total_magnitude / count),
        distribution,
        most_bullish: Some(most_bullish.clone()),
        most_bearish: Some(most_bearish.clone()),
        engagement_weighted_score: round3(ew_score),
        signal: signal::signal_for(ew_score, posts.len()),
    }
}
