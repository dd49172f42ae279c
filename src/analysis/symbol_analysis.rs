use crate::{
    analysis::{ZoneLevels, compute_rsi, find_sniper_markers, find_zone_levels, score_latest},
    config::{DF, SniperConfig},
    models::{OhlcvTimeSeries, ScoreRecord, SniperMarkers},
};

/// Full signal picture for one symbol, shared by the radar table and the chart.
#[derive(Debug, Clone)]
pub struct SymbolAnalysis {
    pub series: OhlcvTimeSeries,
    pub levels: ZoneLevels,
    /// Aligned with the series bars.
    pub rsi: Vec<Option<f64>>,
    pub record: ScoreRecord,
    pub markers: SniperMarkers,
}

impl SymbolAnalysis {
    pub fn symbol(&self) -> &str {
        &self.series.symbol
    }
}

/// Runs every calculator over `series`. Returns `None` for an empty series.
pub fn analyze_symbol(series: OhlcvTimeSeries, config: &SniperConfig) -> Option<SymbolAnalysis> {
    let latest = series.last_candle()?;

    let trace_label = format!("Analyze [{}]", series.symbol);
    crate::trace_time!(&trace_label, 2000, {
        let levels = find_zone_levels(&series, config.extrema_order);
        let rsi = compute_rsi(&series.close_prices, config.rsi_period);
        let latest_rsi = rsi.last().copied().flatten();
        let record = score_latest(&latest, latest_rsi, &levels, config);
        let markers = find_sniper_markers(&series, &levels, config.zone_tolerance_pct);

        if DF.log_scoring {
            log::info!(
                "{}: {} supports, {} resistances, rsi {:?} => {} ({}), {} buys / {} sells",
                series.symbol,
                levels.supports.len(),
                levels.resistances.len(),
                latest_rsi,
                record.signal,
                record.score,
                markers.buys.len(),
                markers.sells.len(),
            );
        }

        Some(SymbolAnalysis {
            series,
            levels,
            rsi,
            record,
            markers,
        })
    })
}
