use {
    crate::{analysis::SymbolAnalysis, models::ScoreRecord},
    serde::{Deserialize, Serialize},
};

/// One line of the probability radar table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub symbol: String,
    pub record: ScoreRecord,
}

/// Output of one refresh cycle over the selected symbols.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RadarReport {
    /// Rows in selection order; unavailable symbols are absent.
    pub rows: Vec<ReportRow>,
    /// Symbols that yielded no usable data this cycle.
    pub skipped: Vec<String>,
    pub generated_at_ms: i64,
}

/// Everything the sniper chart needs for one symbol.
#[derive(Debug, Clone)]
pub struct ChartData {
    pub symbol: String,
    pub analysis: SymbolAnalysis,
}
