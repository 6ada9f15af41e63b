//! # Asset Catalog
//!
//! Maps free-text user input ("nvda", "$NVDA", "gold", "tech stocks") to a
//! canonical asset descriptor. The descriptor is a pass-through label on the
//! sentiment summary; nothing downstream interprets it.
//!
//! - Loads from JSON or TOML config (an array/table of assets).
//! - Lookup order: symbol match → alias match → synthesized stock ticker.
//! - Includes a built-in `default_seed()` with common stocks, commodities,
//!   sectors, indices, and crypto; used as fallback if no config is found.

use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::warn;

pub const DEFAULT_ASSETS_CONFIG_PATH: &str = "config/assets.json";
pub const ENV_ASSETS_CONFIG_PATH: &str = "ASSETS_CONFIG_PATH";

/// Asset class, carried for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    Stock,
    Commodity,
    Sector,
    Market,
    Crypto,
}

impl AssetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Stock => "stock",
            AssetKind::Commodity => "commodity",
            AssetKind::Sector => "sector",
            AssetKind::Market => "market",
            AssetKind::Crypto => "crypto",
        }
    }
}

/// Canonical asset descriptor attached to summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetTarget {
    /// e.g. "AAPL", "GC" (gold futures), "XLE" (energy sector ETF)
    pub symbol: String,
    /// Human-readable name.
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AssetKind,
    /// Spellings people use in social posts, lowercase.
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// The lookup table. Immutable once constructed.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetCatalog {
    assets: Vec<AssetTarget>,
}

impl AssetCatalog {
    /// Load the catalog from a JSON or TOML file.
    /// Falls back to `default_seed()` on any error (a broken catalog file
    /// should degrade the lookup, not kill the run).
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(s) => parse_catalog(&s).unwrap_or_else(|| {
                warn!(path = %path.display(), "unparseable asset catalog, using built-in seed");
                Self::default_seed()
            }),
            Err(_) => Self::default_seed(),
        }
    }

    /// Load using env var + fallbacks:
    /// 1) $ASSETS_CONFIG_PATH
    /// 2) config/assets.json
    /// 3) built-in seed
    pub fn load_default() -> Self {
        if let Ok(p) = std::env::var(ENV_ASSETS_CONFIG_PATH) {
            return Self::load_from_file(p);
        }
        Self::load_from_file(DEFAULT_ASSETS_CONFIG_PATH)
    }

    /// Resolve free-text input to an asset. Total: unknown input becomes a
    /// synthesized stock ticker so the pipeline always has a target.
    pub fn resolve(&self, input: &str) -> AssetTarget {
        let stripped = input.trim().trim_start_matches('$');

        // Direct symbol match, case-insensitive.
        let upper = stripped.to_ascii_uppercase();
        if let Some(a) = self.assets.iter().find(|a| a.symbol == upper) {
            return a.clone();
        }

        // Alias match.
        let lower = stripped.to_ascii_lowercase();
        if let Some(a) = self
            .assets
            .iter()
            .find(|a| a.aliases.iter().any(|al| al == &lower))
        {
            return a.clone();
        }

        // Unknown — treat as a stock ticker.
        AssetTarget {
            symbol: upper.clone(),
            name: upper,
            kind: AssetKind::Stock,
            aliases: vec![lower.clone(), format!("${lower}")],
        }
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Built-in catalog of widely-discussed assets.
    pub fn default_seed() -> Self {
        fn t(symbol: &str, name: &str, kind: AssetKind, aliases: &[&str]) -> AssetTarget {
            AssetTarget {
                symbol: symbol.to_string(),
                name: name.to_string(),
                kind,
                aliases: aliases.iter().map(|s| s.to_string()).collect(),
            }
        }
        use AssetKind::*;

        let assets = vec![
            // Stocks
            t("AAPL", "Apple Inc.", Stock, &["apple", "aapl", "$aapl", "appl"]),
            t("TSLA", "Tesla Inc.", Stock, &["tesla", "tsla", "$tsla", "elon"]),
            t("NVDA", "NVIDIA Corp.", Stock, &["nvidia", "nvda", "$nvda", "nvdia"]),
            t("MSFT", "Microsoft Corp.", Stock, &["microsoft", "msft", "$msft"]),
            t("AMZN", "Amazon.com Inc.", Stock, &["amazon", "amzn", "$amzn", "aws"]),
            t(
                "GOOG",
                "Alphabet Inc.",
                Stock,
                &["google", "goog", "$goog", "alphabet", "googl"],
            ),
            t(
                "META",
                "Meta Platforms Inc.",
                Stock,
                &["meta", "$meta", "facebook", "zuck"],
            ),
            t("AMD", "Advanced Micro Devices", Stock, &["amd", "$amd"]),
            // Commodities
            t("GC", "Gold", Commodity, &["gold", "xau", "gc", "gold futures"]),
            t(
                "CL",
                "Crude Oil (WTI)",
                Commodity,
                &["oil", "crude", "wti", "cl", "crude oil"],
            ),
            t("SI", "Silver", Commodity, &["silver", "xag", "si", "silver futures"]),
            t("NG", "Natural Gas", Commodity, &["natgas", "natural gas", "ng"]),
            // Sectors
            t(
                "XLK",
                "Technology Sector",
                Sector,
                &["tech", "technology", "tech sector", "xlk"],
            ),
            t(
                "XLF",
                "Financial Sector",
                Sector,
                &["financials", "banks", "banking", "financial sector", "xlf"],
            ),
            t(
                "XLE",
                "Energy Sector",
                Sector,
                &["energy", "energy sector", "oil stocks", "xle"],
            ),
            t(
                "XLV",
                "Healthcare Sector",
                Sector,
                &["healthcare", "health", "pharma", "biotech", "xlv"],
            ),
            // Market-wide
            t(
                "SPY",
                "S&P 500",
                Market,
                &["spy", "s&p", "s&p 500", "sp500", "spx", "the market"],
            ),
            t(
                "QQQ",
                "Nasdaq 100",
                Market,
                &["qqq", "nasdaq", "nasdaq 100", "tech stocks"],
            ),
            t("DIA", "Dow Jones", Market, &["dow", "djia", "dow jones", "dia"]),
            t(
                "IWM",
                "Russell 2000",
                Market,
                &["russell", "small caps", "iwm", "russell 2000"],
            ),
            // Crypto
            t("BTC", "Bitcoin", Crypto, &["bitcoin", "btc", "$btc"]),
            t("ETH", "Ethereum", Crypto, &["ethereum", "eth", "$eth"]),
        ];

        Self { assets }
    }
}

impl Default for AssetCatalog {
    fn default() -> Self {
        Self::default_seed()
    }
}

fn parse_catalog(s: &str) -> Option<AssetCatalog> {
    // JSON first: either a bare array or an {"assets": [...]} document.
    if let Ok(assets) = serde_json::from_str::<Vec<AssetTarget>>(s) {
        return Some(AssetCatalog { assets });
    }
    if let Ok(cat) = serde_json::from_str::<AssetCatalog>(s) {
        return Some(cat);
    }
    // TOML: [[assets]] tables.
    if let Ok(cat) = toml::from_str::<AssetCatalog>(s) {
        return Some(cat);
    }
    None
}
