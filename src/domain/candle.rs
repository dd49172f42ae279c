use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandleType {
    Bullish,
    Bearish,
}

/// A single daily bar, already normalized at the provider boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp_ms: i64,

    pub open_price: f64,
    pub high_price: f64,
    pub low_price: f64,
    pub close_price: f64,
}

impl Candle {
    // A constructor for convenience
    pub fn new(timestamp_ms: i64, open: f64, high: f64, low: f64, close: f64) -> Self {
        Candle {
            timestamp_ms,
            open_price: open,
            high_price: high,
            low_price: low,
            close_price: close,
        }
    }

    /// Doji candles (close == open) count as bullish.
    pub fn get_type(&self) -> CandleType {
        if self.close_price >= self.open_price {
            CandleType::Bullish
        } else {
            CandleType::Bearish
        }
    }

    /// Strictly closed above its open.
    pub fn closed_up(&self) -> bool {
        self.close_price > self.open_price
    }

    /// Strictly closed below its open.
    pub fn closed_down(&self) -> bool {
        self.close_price < self.open_price
    }

    // Returns the low and high of the candle body as a tuple
    pub fn body_range(&self) -> (f64, f64) {
        match self.get_type() {
            CandleType::Bullish => (self.open_price, self.close_price),
            CandleType::Bearish => (self.close_price, self.open_price),
        }
    }

    /// All four prices are finite numbers.
    pub fn is_finite(&self) -> bool {
        [
            self.open_price,
            self.high_price,
            self.low_price,
            self.close_price,
        ]
        .iter()
        .all(|p| p.is_finite())
    }
}
