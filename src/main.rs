//! Social Sentiment Analyzer — Binary Entrypoint
//! Resolves the requested asset, pulls posts per platform, scores them, and
//! prints the per-platform sentiment report.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use social_sentiment_analyzer::ingest::providers::{RedditSource, TwitterSource};
use social_sentiment_analyzer::ingest::{self, types::PostSource};
use social_sentiment_analyzer::{render, summarize, AssetCatalog, SentimentAnalyzer};

#[derive(Debug, Parser)]
#[command(
    name = "social-sentiment-analyzer",
    about = "Score social-media sentiment for an asset and derive a trading signal."
)]
struct Cli {
    /// Ticker, name, or alias of the asset to scan (e.g. NVDA, gold, "tech").
    #[arg(default_value = "SPY")]
    asset: String,

    /// Restrict the scan to a single platform (default: all).
    #[arg(long, visible_alias = "platform", value_enum)]
    source: Option<SourceArg>,

    /// Asset catalog override file (JSON or TOML).
    #[arg(long)]
    assets_config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SourceArg {
    Reddit,
    Twitter,
}

/// Compact stderr logs, quiet unless RUST_LOG says otherwise.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,social_sentiment_analyzer=info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env in local/dev; no-op where unset. Enables ASSETS_CONFIG_PATH
    // and the provider tokens.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();

    let catalog = match &cli.assets_config {
        Some(path) => AssetCatalog::load_from_file(path),
        None => AssetCatalog::load_default(),
    };
    let asset = catalog.resolve(&cli.asset);
    let analyzer = SentimentAnalyzer::new();

    let sources: Vec<Box<dyn PostSource>> = match cli.source {
        Some(SourceArg::Reddit) => vec![Box::new(RedditSource::from_env())],
        Some(SourceArg::Twitter) => vec![Box::new(TwitterSource::from_env())],
        None => vec![
            Box::new(RedditSource::from_env()),
            Box::new(TwitterSource::from_env()),
        ],
    };

    let source_label = match cli.source {
        Some(SourceArg::Reddit) => "reddit",
        Some(SourceArg::Twitter) => "twitter",
        None => "all",
    };
    let live = std::env::var("REDDIT_BEARER_TOKEN").is_ok()
        || std::env::var("TWITTER_BEARER_TOKEN").is_ok();
    print!("{}", render::render_banner(&asset, source_label, live));

    for source in &sources {
        let platform = source.platform();
        let posts = match ingest::analyze_posts(source.as_ref(), &analyzer, &asset).await {
            Ok(posts) => posts,
            Err(e) => {
                tracing::warn!(error = ?e, platform = %platform, "fetching posts failed");
                eprintln!("  {} fetch failed: {e:#}", platform.display_name());
                continue;
            }
        };

        // Display copy is sorted most-bullish-first; the summary keeps fetch
        // order so extreme-post tie-breaks stay deterministic.
        let mut display = posts.clone();
        display.sort_by(|a, b| {
            b.sentiment
                .score
                .partial_cmp(&a.sentiment.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        println!(
            "\n{}  {} Posts:{}",
            render::BOLD,
            platform.display_name(),
            render::RESET
        );
        println!("  {}", "-".repeat(66));
        for (i, post) in display.iter().enumerate() {
            print!("{}", render::render_post(post, i));
        }

        let summary = summarize(&posts, platform, asset.clone());
        print!("{}", render::render_summary(&summary));
    }

    Ok(())
}
