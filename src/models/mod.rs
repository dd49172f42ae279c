mod markers;
mod ohlcv;
mod report;
mod signal;

pub use {
    markers::{Marker, SniperMarkers},
    ohlcv::OhlcvTimeSeries,
    report::{ChartData, RadarReport, ReportRow},
    signal::{ColorBand, ScoreRecord, SignalKind},
};
