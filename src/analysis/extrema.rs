use {
    crate::models::OhlcvTimeSeries,
    argminmax::ArgMinMax,
    serde::{Deserialize, Serialize},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtremumKind {
    /// Value is <= every value in its window.
    Minimum,
    /// Value is >= every value in its window.
    Maximum,
}

/// Historical swing levels ("fundos" and "topos") of a series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZoneLevels {
    /// Lows of local-minimum bars, chronological.
    pub supports: Vec<f64>,
    /// Highs of local-maximum bars, chronological.
    pub resistances: Vec<f64>,
}

/// Indices whose value is an extremum of the closed window `[i - order, i + order]`.
/// Ties qualify. Bars closer than `order` to either end never qualify.
pub fn local_extrema_indices(values: &[f64], order: usize, kind: ExtremumKind) -> Vec<usize> {
    let end = values.len().saturating_sub(order);
    (order..end)
        .filter(|&i| {
            let window = &values[i - order..=i + order];
            let (min_idx, max_idx) = window.argminmax();
            match kind {
                ExtremumKind::Minimum => values[i] <= window[min_idx],
                ExtremumKind::Maximum => values[i] >= window[max_idx],
            }
        })
        .collect()
}

/// Support levels from local minima of lows, resistance levels from local maxima of highs.
pub fn find_zone_levels(series: &OhlcvTimeSeries, order: usize) -> ZoneLevels {
    let supports = local_extrema_indices(&series.low_prices, order, ExtremumKind::Minimum)
        .into_iter()
        .map(|i| series.low_prices[i])
        .collect();
    let resistances = local_extrema_indices(&series.high_prices, order, ExtremumKind::Maximum)
        .into_iter()
        .map(|i| series.high_prices[i])
        .collect();

    ZoneLevels {
        supports,
        resistances,
    }
}
