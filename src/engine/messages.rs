use crate::models::{ChartData, RadarReport};

/// A request to refresh the radar for a set of symbols
#[derive(Debug, Clone, PartialEq)]
pub struct JobRequest {
    /// Symbols in display order.
    pub symbols: Vec<String>,
    /// Symbol whose full analysis should come back for the chart.
    pub chart_symbol: Option<String>,
    /// Drop every memoized series before fetching ("refresh now").
    pub clear_cache: bool,
}

/// The result returned by the worker
#[derive(Debug, Clone)]
pub struct JobResult {
    pub report: RadarReport,
    pub chart: Option<ChartData>,
    pub duration_ms: u128,
}
