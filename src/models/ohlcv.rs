use {
    crate::domain::Candle,
    itertools::Itertools,
    serde::{Deserialize, Serialize},
};

/// Column-oriented daily price history for one symbol.
/// Timestamps are strictly increasing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OhlcvTimeSeries {
    pub symbol: String,
    pub timestamps: Vec<i64>,
    pub open_prices: Vec<f64>,
    pub high_prices: Vec<f64>,
    pub low_prices: Vec<f64>,
    pub close_prices: Vec<f64>,
}

impl OhlcvTimeSeries {
    /// Builds a series from provider rows in any order.
    /// Rows are sorted by timestamp; on duplicate timestamps the last row wins.
    pub fn from_candles(symbol: impl Into<String>, mut candles: Vec<Candle>) -> Self {
        candles.sort_by_key(|c| c.timestamp_ms);
        let candles: Vec<Candle> = candles
            .into_iter()
            .rev()
            .unique_by(|c| c.timestamp_ms)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();

        let len = candles.len();
        let mut ts_vec = Vec::with_capacity(len);
        let mut open_vec = Vec::with_capacity(len);
        let mut high_vec = Vec::with_capacity(len);
        let mut low_vec = Vec::with_capacity(len);
        let mut close_vec = Vec::with_capacity(len);

        for c in &candles {
            ts_vec.push(c.timestamp_ms);
            open_vec.push(c.open_price);
            high_vec.push(c.high_price);
            low_vec.push(c.low_price);
            close_vec.push(c.close_price);
        }

        Self {
            symbol: symbol.into(),
            timestamps: ts_vec,
            open_prices: open_vec,
            high_prices: high_vec,
            low_prices: low_vec,
            close_prices: close_vec,
        }
    }

    pub fn get_candle(&self, idx: usize) -> Candle {
        Candle::new(
            self.timestamps[idx],
            self.open_prices[idx],
            self.high_prices[idx],
            self.low_prices[idx],
            self.close_prices[idx],
        )
    }

    pub fn candles(&self) -> impl Iterator<Item = Candle> + '_ {
        (0..self.klines()).map(|idx| self.get_candle(idx))
    }

    pub fn last_candle(&self) -> Option<Candle> {
        self.klines().checked_sub(1).map(|idx| self.get_candle(idx))
    }

    pub fn klines(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Lowest low and highest high over the whole series.
    pub fn price_bounds(&self) -> Option<(f64, f64)> {
        if self.is_empty() {
            return None;
        }
        let low = self.low_prices.iter().copied().fold(f64::INFINITY, f64::min);
        let high = self
            .high_prices
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        Some((low, high))
    }
}
