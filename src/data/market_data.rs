use {
    crate::{
        config::{DATA, DF},
        data::{BarCache, MarketDataProvider},
        models::OhlcvTimeSeries,
    },
    anyhow::{Result, bail},
};

/// Cached access to validated price series.
///
/// Any failure along the way (transport, decode, too little history) collapses
/// into `None` so callers can simply skip the symbol.
pub struct MarketData {
    provider: Box<dyn MarketDataProvider>,
    cache: BarCache,
    min_bars_exclusive: usize,
}

impl MarketData {
    pub fn new(provider: Box<dyn MarketDataProvider>) -> Self {
        Self::with_cache(provider, BarCache::new(DATA.cache_ttl))
    }

    pub fn with_cache(provider: Box<dyn MarketDataProvider>, cache: BarCache) -> Self {
        Self {
            provider,
            cache,
            min_bars_exclusive: DATA.min_bars_exclusive,
        }
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    pub fn cache(&self) -> &BarCache {
        &self.cache
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub async fn series_for(&mut self, symbol: &str) -> Option<OhlcvTimeSeries> {
        if let Some(series) = self.cache.get(symbol) {
            return Some(series.clone());
        }

        match self.fetch_validated(symbol).await {
            Ok(series) => {
                self.cache.insert(series.clone());
                Some(series)
            }
            Err(e) => {
                log::warn!("{} unavailable: {:#}", symbol, e);
                None
            }
        }
    }

    async fn fetch_validated(&self, symbol: &str) -> Result<OhlcvTimeSeries> {
        let candles = self.provider.fetch_candles(symbol).await?;
        let series = OhlcvTimeSeries::from_candles(symbol, candles);

        if series.klines() <= self.min_bars_exclusive {
            bail!(
                "only {} bars from {} (need more than {})",
                series.klines(),
                self.provider.name(),
                self.min_bars_exclusive
            );
        }

        if DF.log_fetch {
            log::info!(
                "Loaded {} bars for {} from {}",
                series.klines(),
                symbol,
                self.provider.name()
            );
        }
        Ok(series)
    }
}
