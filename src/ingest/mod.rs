// src/ingest/mod.rs
//! Post acquisition: platform providers, text cleanup, and the glue that
//! turns fetched posts into scored [`AnalyzedPost`]s.

pub mod providers;
pub mod types;

use anyhow::Result;

use crate::assets::AssetTarget;
use crate::sentiment::SentimentAnalyzer;
use crate::summarize::AnalyzedPost;
use crate::ingest::types::PostSource;

/// Normalize platform text before scoring: decode HTML entities, strip tags,
/// fold typographic quotes to ASCII, collapse whitespace, cap length.
pub fn normalize_post_text(s: &str) -> String {
    // 1) HTML entity decode (Reddit selftext routinely carries &amp; etc.)
    let mut out = html_escape::decode_html_entities(s).to_string();

    // 2) Strip HTML tags
    static RE_TAGS: once_cell::sync::OnceCell<regex::Regex> = once_cell::sync::OnceCell::new();
    let re_tags = RE_TAGS.get_or_init(|| regex::Regex::new(r"(?is)</?[^>]+>").unwrap());
    out = re_tags.replace_all(&out, "").to_string();

    // 3) Normalize “ ” ‘ ’ « » to ASCII quotes
    out = out
        .replace(['\u{201C}', '\u{201D}', '\u{00AB}', '\u{00BB}'], "\"")
        .replace(['\u{2018}', '\u{2019}'], "'");

    // 4) Collapse whitespace
    static RE_WS: once_cell::sync::OnceCell<regex::Regex> = once_cell::sync::OnceCell::new();
    let re_ws = RE_WS.get_or_init(|| regex::Regex::new(r"\s+").unwrap());
    out = re_ws.replace_all(&out, " ").to_string();
    out = out.trim().to_string();

    // 5) Length cap: 1500 chars
    if out.chars().count() > 1500 {
        out = out.chars().take(1500).collect();
    }

    out
}

/// Fetch one platform's posts for an asset and score each of them.
/// Input order is preserved, which is what makes the summary's
/// first-occurrence tie-break deterministic.
pub async fn analyze_posts(
    source: &dyn PostSource,
    analyzer: &SentimentAnalyzer,
    asset: &AssetTarget,
) -> Result<Vec<AnalyzedPost>> {
    let raw = source.fetch_posts(asset).await?;
    let platform = source.platform();

    tracing::debug!(platform = %platform, count = raw.len(), "scoring fetched posts");

    Ok(raw
        .into_iter()
        .map(|post| {
            let text = normalize_post_text(&post.text);
            let sentiment = analyzer.analyze(&text);
            AnalyzedPost {
                id: post.id,
                platform,
                text,
                author: post.author,
                timestamp: post.created_at,
                engagement: post.engagement,
                sentiment,
            }
        })
        .collect())
}
