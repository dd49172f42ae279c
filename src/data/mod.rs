mod cache;
mod market_data;
mod provider;
mod yahoo;

pub use {
    cache::BarCache,
    market_data::MarketData,
    provider::{MarketDataProvider, YahooProvider},
    yahoo::{YahooResponse, normalize_chart},
};
