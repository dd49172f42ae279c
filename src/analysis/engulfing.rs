use {
    crate::{
        analysis::{ZoneLevels, is_near_any},
        domain::Candle,
        models::{Marker, OhlcvTimeSeries, SniperMarkers},
    },
    itertools::Itertools,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngulfingKind {
    Bullish,
    Bearish,
}

/// Classifies a two-candle pair. The current body must open beyond the previous close
/// and close beyond the previous open, against a previous candle of the opposite colour.
pub fn detect_engulfing(prev: &Candle, curr: &Candle) -> Option<EngulfingKind> {
    let bullish = curr.closed_up()
        && prev.closed_down()
        && curr.open_price < prev.close_price
        && curr.close_price > prev.open_price;
    if bullish {
        return Some(EngulfingKind::Bullish);
    }

    let bearish = curr.closed_down()
        && prev.closed_up()
        && curr.open_price > prev.close_price
        && curr.close_price < prev.open_price;
    if bearish {
        return Some(EngulfingKind::Bearish);
    }

    None
}

/// Engulfing candles that print on a zone: bullish ones whose low sits near a support
/// become buys, bearish ones whose high sits near a resistance become sells.
pub fn find_sniper_markers(
    series: &OhlcvTimeSeries,
    levels: &ZoneLevels,
    tolerance: f64,
) -> SniperMarkers {
    let mut markers = SniperMarkers::default();

    for (prev, curr) in series.candles().tuple_windows() {
        match detect_engulfing(&prev, &curr) {
            Some(EngulfingKind::Bullish)
                if is_near_any(curr.low_price, &levels.supports, tolerance) =>
            {
                markers.buys.push(Marker {
                    timestamp_ms: curr.timestamp_ms,
                    price: curr.low_price,
                });
            }
            Some(EngulfingKind::Bearish)
                if is_near_any(curr.high_price, &levels.resistances, tolerance) =>
            {
                markers.sells.push(Marker {
                    timestamp_ms: curr.timestamp_ms,
                    price: curr.high_price,
                });
            }
            _ => {}
        }
    }

    markers
}
