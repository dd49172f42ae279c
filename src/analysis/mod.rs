// Signal computation: zones, momentum, scoring and candle patterns
pub mod engulfing;
pub mod extrema;
pub mod rsi;
pub mod symbol_analysis;
pub mod zone_scoring;

pub use engulfing::{EngulfingKind, detect_engulfing, find_sniper_markers};
pub use extrema::{ExtremumKind, ZoneLevels, find_zone_levels, local_extrema_indices};
pub use rsi::{compute_rsi, latest_rsi};
pub use symbol_analysis::{SymbolAnalysis, analyze_symbol};
pub use zone_scoring::{ZoneProximity, is_near_any, is_near_level, score_latest};
