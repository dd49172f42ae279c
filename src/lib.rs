#![allow(clippy::const_is_empty)]
#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::type_complexity)]
#![allow(clippy::too_many_arguments)]

// Core modules
pub mod analysis;
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (for the binaries and integration tests)
pub use crate::models::OhlcvTimeSeries;
pub use app::App;
pub use config::PERSISTENCE;
pub use data::{MarketData, MarketDataProvider, YahooProvider};
pub use engine::{RadarEngine, build_report};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Symbols to monitor, comma separated (e.g. BTC-USD,GC=F). Defaults to the saved selection.
    #[arg(long, value_delimiter = ',', value_parser = parse_symbol)]
    pub symbols: Option<Vec<String>>,

    /// Refresh every 60 seconds (`--watch` in the terminal radar)
    #[arg(long, alias = "watch", default_value_t = false)]
    pub auto_refresh: bool,

    /// Symbol to open in the sniper chart
    #[arg(long)]
    pub chart: Option<String>,
}

/// Trims each `--symbols` entry so "BTC-USD, GC=F" names two clean tickers.
fn parse_symbol(raw: &str) -> Result<String, String> {
    let symbol = raw.trim();
    if symbol.is_empty() {
        return Err("empty symbol in --symbols".to_string());
    }
    Ok(symbol.to_string())
}

/// Main application entry point - creates the GUI app
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
