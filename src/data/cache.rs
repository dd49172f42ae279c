use {
    crate::{config::DF, models::OhlcvTimeSeries, utils::AppInstant},
    std::{collections::HashMap, time::Duration},
};

struct CachedSeries {
    stored_at: AppInstant,
    series: OhlcvTimeSeries,
}

/// Per-symbol memo of fetched series with a fixed time-to-live.
/// Expiry is checked on lookup; `clear` drops every entry at once.
pub struct BarCache {
    ttl: Duration,
    entries: HashMap<String, CachedSeries>,
}

impl BarCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, symbol: &str) -> Option<&OhlcvTimeSeries> {
        self.get_at(symbol, AppInstant::now())
    }

    /// Lookup against an explicit clock reading.
    pub fn get_at(&self, symbol: &str, now: AppInstant) -> Option<&OhlcvTimeSeries> {
        let entry = self.entries.get(symbol)?;
        let age = now.saturating_duration_since(entry.stored_at);
        if age >= self.ttl {
            if DF.log_cache {
                log::info!("Cache stale for {} ({:.1}s old)", symbol, age.as_secs_f64());
            }
            return None;
        }
        if DF.log_cache {
            log::info!("Cache hit for {}", symbol);
        }
        Some(&entry.series)
    }

    pub fn insert(&mut self, series: OhlcvTimeSeries) {
        self.insert_at(series, AppInstant::now());
    }

    pub fn insert_at(&mut self, series: OhlcvTimeSeries, now: AppInstant) {
        self.entries.insert(
            series.symbol.clone(),
            CachedSeries {
                stored_at: now,
                series,
            },
        );
    }

    pub fn clear(&mut self) {
        if DF.log_cache {
            log::info!("Clearing {} cached series", self.entries.len());
        }
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::domain::Candle};

    fn series(symbol: &str) -> OhlcvTimeSeries {
        OhlcvTimeSeries::from_candles(symbol, vec![Candle::new(0, 1.0, 2.0, 0.5, 1.5)])
    }

    #[test]
    fn serves_fresh_entries() {
        let mut cache = BarCache::new(Duration::from_secs(60));
        let t0 = AppInstant::now();
        cache.insert_at(series("BTC-USD"), t0);

        let hit = cache.get_at("BTC-USD", t0 + Duration::from_secs(59));
        assert_eq!(hit.map(|s| s.symbol.as_str()), Some("BTC-USD"));
        assert!(cache.get_at("ETH-USD", t0).is_none());
    }

    #[test]
    fn expires_after_ttl() {
        let mut cache = BarCache::new(Duration::from_secs(60));
        let t0 = AppInstant::now();
        cache.insert_at(series("GC=F"), t0);

        assert!(cache.get_at("GC=F", t0 + Duration::from_secs(60)).is_none());
        // Stale entries stay until overwritten or cleared.
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn reinsert_restarts_the_clock() {
        let mut cache = BarCache::new(Duration::from_secs(60));
        let t0 = AppInstant::now();
        cache.insert_at(series("SOL-USD"), t0);
        cache.insert_at(series("SOL-USD"), t0 + Duration::from_secs(50));

        assert!(cache.get_at("SOL-USD", t0 + Duration::from_secs(100)).is_some());
    }

    #[test]
    fn clear_drops_everything() {
        let mut cache = BarCache::new(Duration::from_secs(60));
        cache.insert(series("BTC-USD"));
        cache.insert(series("EURUSD=X"));
        cache.clear();

        assert!(cache.is_empty());
        assert!(cache.get("BTC-USD").is_none());
    }
}
