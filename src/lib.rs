// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod assets;
pub mod ingest;
pub mod lexicon;
pub mod render;
pub mod sentiment;
pub mod signal;
pub mod summarize;

// ---- Re-exports for stable public API ----
pub use crate::assets::{AssetCatalog, AssetKind, AssetTarget};
pub use crate::ingest::types::{EngagementCounts, Platform, PostSource, RawPost};
pub use crate::sentiment::{SentimentAnalyzer, SentimentScore};
pub use crate::signal::{SentimentLabel, TradeSignal, MIN_POSTS_FOR_SIGNAL};
pub use crate::summarize::{summarize, AnalyzedPost, LabelDistribution, SentimentSummary};
