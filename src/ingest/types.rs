// src/ingest/types.rs
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::assets::AssetTarget;

/// Social platform a post came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Reddit,
    Twitter,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Reddit => "reddit",
            Platform::Twitter => "twitter",
        }
    }

    /// Human-facing name for report headers.
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Reddit => "Reddit",
            Platform::Twitter => "X/Twitter",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Engagement triple supplied by the platform source. The mapping from
/// platform-native fields (ups/comments/crossposts, likes/replies/retweets)
/// onto this triple is each provider's responsibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementCounts {
    pub likes: u64,
    pub replies: u64,
    pub shares: u64,
}

impl EngagementCounts {
    pub fn new(likes: u64, replies: u64, shares: u64) -> Self {
        Self {
            likes,
            replies,
            shares,
        }
    }

    pub fn total(&self) -> u64 {
        self.likes + self.replies + self.shares
    }
}

/// A fetched post before scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPost {
    pub id: String,
    pub author: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub engagement: EngagementCounts,
}

/// A source of posts for one platform (live API or embedded fixtures).
#[async_trait::async_trait]
pub trait PostSource: Send + Sync {
    async fn fetch_posts(&self, asset: &AssetTarget) -> Result<Vec<RawPost>>;
    fn platform(&self) -> Platform;
}
