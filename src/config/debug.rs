//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log every provider round-trip (symbol, rows returned).
    pub log_fetch: bool,

    /// Log cache hits, misses and wipes.
    pub log_cache: bool,

    /// Log the score breakdown for each symbol on refresh.
    pub log_scoring: bool,

    /// Activate trace_time macro (for cool scope-level timing)
    pub log_performance: bool,

    /// Anything about the chart symbol selection
    pub log_selection: bool,
}

pub const DF: LogFlags = LogFlags {
    log_fetch: true,
    log_cache: false,
    log_scoring: false,
    log_performance: false,
    log_selection: false,
};

pub const LOG_PERFORMANCE: bool = DF.log_performance;
