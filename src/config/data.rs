//! Market data fetch and cache settings

use std::time::Duration;

/// Yahoo Finance chart endpoint settings.
pub struct YahooConfig {
    pub base_url: &'static str,
    /// Lookback window understood by the chart API (`3mo` = ~63 daily bars).
    pub range: &'static str,
    pub interval: &'static str,
    pub timeout_ms: u64,
    pub user_agent: &'static str,
}

pub struct DataConfig {
    pub yahoo: YahooConfig,
    /// A series must have strictly more bars than this to be usable.
    pub min_bars_exclusive: usize,
    pub cache_ttl: Duration,
    pub auto_refresh_interval: Duration,
}

pub const DATA: DataConfig = DataConfig {
    yahoo: YahooConfig {
        base_url: "https://query1.finance.yahoo.com/v8/finance/chart",
        range: "3mo",
        interval: "1d",
        timeout_ms: 10_000,
        user_agent: "Mozilla/5.0 (agent-sniper radar)",
    },
    min_bars_exclusive: 30,
    cache_ttl: Duration::from_secs(60),
    auto_refresh_interval: Duration::from_secs(60),
};
