use serde::{Deserialize, Serialize};

/// A chart overlay point: the bar's timestamp and the price the triangle sits on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub timestamp_ms: i64,
    pub price: f64,
}

/// Zone-confirmed engulfing signals, in chronological order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SniperMarkers {
    /// Bullish engulfing at support, placed on the bar's low.
    pub buys: Vec<Marker>,
    /// Bearish engulfing at resistance, placed on the bar's high.
    pub sells: Vec<Marker>,
}

impl SniperMarkers {
    pub fn is_empty(&self) -> bool {
        self.buys.is_empty() && self.sells.is_empty()
    }
}
