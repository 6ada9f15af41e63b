//! # Signal Policy
//!
//! Threshold rules shared by the scorer (per-post labels) and the aggregator
//! (batch trading signals). Label boundaries deliberately mix `<=` and `<`;
//! keep them exactly as written — downstream consumers depend on where the
//! band edges fall.

use serde::{Deserialize, Serialize};

/// Per-post sentiment band, derived from a normalized score in `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    VeryBearish,
    Bearish,
    Neutral,
    Bullish,
    VeryBullish,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::VeryBearish => "very_bearish",
            SentimentLabel::Bearish => "bearish",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Bullish => "bullish",
            SentimentLabel::VeryBullish => "very_bullish",
        }
    }
}

/// Discrete batch-level signal derived from an engagement-weighted score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeSignal {
    StrongBuy,
    Buy,
    Hold,
    Sell,
    StrongSell,
}

impl TradeSignal {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeSignal::StrongBuy => "strong_buy",
            TradeSignal::Buy => "buy",
            TradeSignal::Hold => "hold",
            TradeSignal::Sell => "sell",
            TradeSignal::StrongSell => "strong_sell",
        }
    }
}

/// Batches smaller than this always signal Hold, whatever the score.
pub const MIN_POSTS_FOR_SIGNAL: usize = 3;

/// Map a per-post score in `[-1, 1]` onto its label band.
pub fn label_for(score: f64) -> SentimentLabel {
    if score <= -0.5 {
        SentimentLabel::VeryBearish
    } else if score <= -0.15 {
        SentimentLabel::Bearish
    } else if score < 0.15 {
        SentimentLabel::Neutral
    } else if score < 0.5 {
        SentimentLabel::Bullish
    } else {
        SentimentLabel::VeryBullish
    }
}

/// Map an engagement-weighted batch score onto a trading signal.
///
/// Small batches are an insufficient sample and always yield Hold.
pub fn signal_for(score: f64, post_count: usize) -> TradeSignal {
    if post_count < MIN_POSTS_FOR_SIGNAL {
        return TradeSignal::Hold;
    }
    if score >= 0.5 {
        TradeSignal::StrongBuy
    } else if score >= 0.15 {
        TradeSignal::Buy
    } else if score > -0.15 {
        TradeSignal::Hold
    } else if score > -0.5 {
        TradeSignal::Sell
    } else {
        TradeSignal::StrongSell
    }
}

/// Round to 3 decimal places. Applied once, as the final formatting step on
/// every reported real.
pub(crate) fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}
