//! Reddit post source.
//!
//! Mock mode (the default) parses embedded search-listing fixtures through
//! the same serde model the live endpoint uses, so the wire types stay
//! honest. Live mode hits `oauth.reddit.com` search with an app token
//! (`REDDIT_BEARER_TOKEN`).

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::DateTime;
use serde::Deserialize;

use crate::assets::{AssetKind, AssetTarget};
use crate::ingest::types::{EngagementCounts, Platform, PostSource, RawPost};

const ENV_TOKEN: &str = "REDDIT_BEARER_TOKEN";
const SEARCH_URL: &str = "https://oauth.reddit.com/search.json";
const USER_AGENT: &str = "social-sentiment/1.0";

// --- Search listing (t3) wire model; unknown fields are ignored ---

#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    children: Vec<Child>,
}

#[derive(Debug, Deserialize)]
struct Child {
    data: RedditPost,
}

#[derive(Debug, Deserialize)]
struct RedditPost {
    id: String,
    title: String,
    #[serde(default)]
    selftext: String,
    author: String,
    /// Reddit sends fractional unix seconds.
    created_utc: f64,
    /// Net score; can go negative on heavily-downvoted posts.
    score: i64,
    num_comments: u64,
    #[serde(default)]
    num_crossposts: u64,
}

pub struct RedditSource {
    mode: Mode,
}

enum Mode {
    Mock,
    Http { client: reqwest::Client, token: String },
}

impl RedditSource {
    /// Deterministic fixture-backed source.
    pub fn mock() -> Self {
        Self { mode: Mode::Mock }
    }

    /// Live search with an OAuth app token.
    pub fn from_token(token: impl Into<String>) -> Self {
        Self {
            mode: Mode::Http {
                client: reqwest::Client::new(),
                token: token.into(),
            },
        }
    }

    /// Live source when `REDDIT_BEARER_TOKEN` is set, fixtures otherwise.
    pub fn from_env() -> Self {
        match std::env::var(ENV_TOKEN) {
            Ok(token) if !token.trim().is_empty() => Self::from_token(token),
            _ => Self::mock(),
        }
    }

    fn fixture_for(kind: AssetKind) -> &'static str {
        match kind {
            // No dedicated crypto feed; the stock fixture doubles for it.
            AssetKind::Stock | AssetKind::Crypto => {
                include_str!("../../../fixtures/reddit_stock.json")
            }
            AssetKind::Commodity => include_str!("../../../fixtures/reddit_commodity.json"),
            AssetKind::Sector => include_str!("../../../fixtures/reddit_sector.json"),
            AssetKind::Market => include_str!("../../../fixtures/reddit_market.json"),
        }
    }

    fn posts_from_listing(listing: Listing) -> Vec<RawPost> {
        listing
            .data
            .children
            .into_iter()
            .map(|child| {
                let p = child.data;
                // Title carries most of the signal; keep the original
                // "title. selftext" concatenation.
                let text = format!("{}. {}", p.title, p.selftext);
                RawPost {
                    id: p.id,
                    author: p.author,
                    text,
                    created_at: DateTime::from_timestamp(p.created_utc as i64, 0)
                        .unwrap_or_default(),
                    engagement: EngagementCounts {
                        likes: p.score.max(0) as u64,
                        replies: p.num_comments,
                        shares: p.num_crossposts,
                    },
                }
            })
            .collect()
    }

    fn search_query(asset: &AssetTarget) -> String {
        std::iter::once(asset.symbol.as_str())
            .chain(asset.aliases.iter().take(3).map(String::as_str))
            .map(|t| format!("\"{t}\""))
            .collect::<Vec<_>>()
            .join(" OR ")
    }
}

#[async_trait]
impl PostSource for RedditSource {
    async fn fetch_posts(&self, asset: &AssetTarget) -> Result<Vec<RawPost>> {
        let listing: Listing = match &self.mode {
            Mode::Mock => serde_json::from_str(Self::fixture_for(asset.kind))
                .context("parsing reddit fixture listing")?,
            Mode::Http { client, token } => {
                let resp = client
                    .get(SEARCH_URL)
                    .query(&[
                        ("q", Self::search_query(asset).as_str()),
                        ("sort", "relevance"),
                        ("t", "week"),
                        ("limit", "100"),
                    ])
                    .bearer_auth(token)
                    .header(reqwest::header::USER_AGENT, USER_AGENT)
                    .send()
                    .await
                    .context("reddit search request")?;
                resp.json().await.context("decoding reddit search listing")?
            }
        };
        Ok(Self::posts_from_listing(listing))
    }

    fn platform(&self) -> Platform {
        Platform::Reddit
    }
}
