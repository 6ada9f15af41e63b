//! Terminal report rendering.
//!
//! Pure string builders over [`SentimentScore`]/[`SentimentSummary`]; the
//! binary just prints what comes back. Colors are plain ANSI escapes so the
//! output stays stable across terminals.

use std::fmt::Write as _;

use crate::assets::AssetTarget;
use crate::signal::TradeSignal;
use crate::summarize::{AnalyzedPost, SentimentSummary};

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";

const BAR_WIDTH: usize = 20;
const TEXT_TRUNCATE: usize = 120;

/// Color band for a score; tracks the label thresholds.
fn score_color(score: f64) -> String {
    if score <= -0.5 {
        RED.to_string()
    } else if score <= -0.15 {
        format!("{RED}{DIM}")
    } else if score < 0.15 {
        YELLOW.to_string()
    } else if score < 0.5 {
        format!("{GREEN}{DIM}")
    } else {
        GREEN.to_string()
    }
}

pub fn signal_display(signal: TradeSignal) -> String {
    match signal {
        TradeSignal::StrongBuy => format!("{GREEN}{BOLD}STRONG BUY{RESET}"),
        TradeSignal::Buy => format!("{GREEN}BUY{RESET}"),
        TradeSignal::Hold => format!("{YELLOW}HOLD{RESET}"),
        TradeSignal::Sell => format!("{RED}SELL{RESET}"),
        TradeSignal::StrongSell => format!("{RED}{BOLD}STRONG SELL{RESET}"),
    }
}

/// 21-cell bar with a fixed center pipe and a `#` marker at the score's
/// position; the center pipe wins when the score sits exactly at 0.
pub fn score_bar(score: f64) -> String {
    let center = BAR_WIDTH / 2;
    let pos = ((score + 1.0) / 2.0 * BAR_WIDTH as f64).round() as usize;
    (0..=BAR_WIDTH)
        .map(|i| {
            if i == center {
                '|'
            } else if i == pos {
                '#'
            } else {
                '-'
            }
        })
        .collect()
}

/// Sign prefix matching the report convention: explicit `+` only for
/// strictly positive scores.
fn signed3(score: f64) -> String {
    let sign = if score > 0.0 { "+" } else { "" };
    format!("{sign}{score:.3}")
}

fn truncated(text: &str) -> String {
    if text.chars().count() > TEXT_TRUNCATE {
        let head: String = text.chars().take(TEXT_TRUNCATE).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

/// Three-line block for one post: rank, score, bar, author, text, engagement.
pub fn render_post(post: &AnalyzedPost, index: usize) -> String {
    let color = score_color(post.sentiment.score);
    let mut out = String::new();
    let _ = writeln!(
        out,
        "  {DIM}{:>2}.{RESET} {color}{}{RESET} [{}] {DIM}@{}{RESET}",
        index + 1,
        signed3(post.sentiment.score),
        score_bar(post.sentiment.score),
        post.author,
    );
    let _ = writeln!(out, "      {DIM}{}{RESET}", truncated(&post.text));
    let _ = writeln!(
        out,
        "      {CYAN}{} likes | {} replies | {} shares{RESET}",
        post.engagement.likes, post.engagement.replies, post.engagement.shares,
    );
    out
}

/// Full summary block: header, counts, averages, signal, distribution, and
/// the two extreme posts.
pub fn render_summary(summary: &SentimentSummary) -> String {
    let platform = summary.platform.display_name();
    let color = score_color(summary.average_score);
    let rule = "=".repeat(70);

    let mut out = String::new();
    let _ = writeln!(out, "\n{rule}");
    let _ = writeln!(
        out,
        "{BOLD}  {platform} Sentiment: {} ({}){RESET}",
        summary.asset.name, summary.asset.symbol,
    );
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "  Asset type:      {}", summary.asset.kind.as_str());
    let _ = writeln!(out, "  Posts analyzed:  {}", summary.post_count);
    let _ = writeln!(
        out,
        "  Avg sentiment:   {color}{}{RESET}  [{}]",
        signed3(summary.average_score),
        score_bar(summary.average_score),
    );
    let _ = writeln!(out, "  Avg magnitude:   {:.3}", summary.average_magnitude);
    let _ = writeln!(
        out,
        "  EW sentiment:    {color}{}{RESET}  (engagement-weighted)",
        signed3(summary.engagement_weighted_score),
    );
    let _ = writeln!(out, "  Signal:          {}", signal_display(summary.signal));
    let _ = writeln!(out);
    let _ = writeln!(out, "  Distribution:");
    let d = &summary.distribution;
    let _ = writeln!(out, "    {RED}{BOLD}very bearish: {}{RESET}", d.very_bearish);
    let _ = writeln!(out, "    {RED}bearish:      {}{RESET}", d.bearish);
    let _ = writeln!(out, "    {YELLOW}neutral:      {}{RESET}", d.neutral);
    let _ = writeln!(out, "    {GREEN}bullish:      {}{RESET}", d.bullish);
    let _ = writeln!(out, "    {GREEN}{BOLD}very bullish: {}{RESET}", d.very_bullish);

    if let Some(post) = &summary.most_bullish {
        let _ = writeln!(out, "\n  {GREEN}Most bullish:{RESET}");
        let _ = write!(out, "{}", render_post(post, 0));
    }
    if let Some(post) = &summary.most_bearish {
        let _ = writeln!(out, "\n  {RED}Most bearish:{RESET}");
        let _ = write!(out, "{}", render_post(post, 0));
    }

    out
}

/// Run banner printed once at startup.
pub fn render_banner(asset: &AssetTarget, source_label: &str, live: bool) -> String {
    let mode = if live { "live APIs" } else { "mock data" };
    format!(
        "\n{BOLD}{MAGENTA}Social Sentiment Analyzer{RESET}\n{DIM}Asset: {} ({}) | Type: {} | Source: {} | Mode: {}{RESET}\n",
        asset.name,
        asset.symbol,
        asset.kind.as_str(),
        source_label,
        mode,
    )
}
