//! X/Twitter post source.
//!
//! Same shape as the Reddit source: fixture-backed mock mode by default,
//! live v2 recent-search when `TWITTER_BEARER_TOKEN` is set. Authors are
//! resolved through the response's `includes.users` expansion, falling back
//! to the raw author id.

use std::collections::HashMap;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::assets::{AssetKind, AssetTarget};
use crate::ingest::types::{EngagementCounts, Platform, PostSource, RawPost};

const ENV_TOKEN: &str = "TWITTER_BEARER_TOKEN";
const SEARCH_URL: &str = "https://api.x.com/2/tweets/search/recent";

// --- v2 recent-search wire model ---

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<Tweet>,
    #[serde(default)]
    includes: Includes,
}

#[derive(Debug, Default, Deserialize)]
struct Includes {
    #[serde(default)]
    users: Vec<User>,
}

#[derive(Debug, Deserialize)]
struct Tweet {
    id: String,
    text: String,
    author_id: String,
    created_at: DateTime<Utc>,
    public_metrics: PublicMetrics,
}

#[derive(Debug, Deserialize)]
struct PublicMetrics {
    retweet_count: u64,
    reply_count: u64,
    like_count: u64,
    quote_count: u64,
}

#[derive(Debug, Deserialize)]
struct User {
    id: String,
    username: String,
}

pub struct TwitterSource {
    mode: Mode,
}

enum Mode {
    Mock,
    Http { client: reqwest::Client, token: String },
}

impl TwitterSource {
    /// Deterministic fixture-backed source.
    pub fn mock() -> Self {
        Self { mode: Mode::Mock }
    }

    /// Live recent-search with an app-only bearer token.
    pub fn from_token(token: impl Into<String>) -> Self {
        Self {
            mode: Mode::Http {
                client: reqwest::Client::new(),
                token: token.into(),
            },
        }
    }

    /// Live source when `TWITTER_BEARER_TOKEN` is set, fixtures otherwise.
    pub fn from_env() -> Self {
        match std::env::var(ENV_TOKEN) {
            Ok(token) if !token.trim().is_empty() => Self::from_token(token),
            _ => Self::mock(),
        }
    }

    fn fixture_for(kind: AssetKind) -> &'static str {
        match kind {
            AssetKind::Stock | AssetKind::Crypto => {
                include_str!("../../../fixtures/twitter_stock.json")
            }
            AssetKind::Commodity => include_str!("../../../fixtures/twitter_commodity.json"),
            AssetKind::Sector => include_str!("../../../fixtures/twitter_sector.json"),
            AssetKind::Market => include_str!("../../../fixtures/twitter_market.json"),
        }
    }

    fn posts_from_response(resp: SearchResponse) -> Vec<RawPost> {
        let users: HashMap<&str, &str> = resp
            .includes
            .users
            .iter()
            .map(|u| (u.id.as_str(), u.username.as_str()))
            .collect();

        resp.data
            .into_iter()
            .map(|tweet| {
                let author = users
                    .get(tweet.author_id.as_str())
                    .map(|u| u.to_string())
                    .unwrap_or_else(|| tweet.author_id.clone());
                RawPost {
                    id: tweet.id,
                    author,
                    text: tweet.text,
                    created_at: tweet.created_at,
                    engagement: EngagementCounts {
                        likes: tweet.public_metrics.like_count,
                        replies: tweet.public_metrics.reply_count,
                        // Quote tweets are shares too.
                        shares: tweet.public_metrics.retweet_count
                            + tweet.public_metrics.quote_count,
                    },
                }
            })
            .collect()
    }

    /// Cashtag + name query, retweets and non-English excluded.
    fn search_query(asset: &AssetTarget) -> String {
        format!("${} OR \"{}\" -is:retweet lang:en", asset.symbol, asset.name)
    }
}

#[async_trait]
impl PostSource for TwitterSource {
    async fn fetch_posts(&self, asset: &AssetTarget) -> Result<Vec<RawPost>> {
        let resp: SearchResponse = match &self.mode {
            Mode::Mock => serde_json::from_str(Self::fixture_for(asset.kind))
                .context("parsing twitter fixture response")?,
            Mode::Http { client, token } => {
                let resp = client
                    .get(SEARCH_URL)
                    .query(&[
                        ("query", Self::search_query(asset).as_str()),
                        ("tweet.fields", "created_at,public_metrics,lang"),
                        ("user.fields", "username"),
                        ("expansions", "author_id"),
                        ("max_results", "100"),
                    ])
                    .bearer_auth(token)
                    .send()
                    .await
                    .context("twitter search request")?;
                resp.json().await.context("decoding twitter search response")?
            }
        };
        Ok(Self::posts_from_response(resp))
    }

    fn platform(&self) -> Platform {
        Platform::Twitter
    }
}
