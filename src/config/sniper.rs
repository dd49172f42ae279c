//! Signal computation constants (Immutable Blueprints)

/// Parameters for zone detection, RSI and scoring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SniperConfig {
    /// Half-width of the symmetric extrema window (bars each side).
    pub extrema_order: usize,
    /// Number of close-to-close deltas averaged by the RSI.
    pub rsi_period: usize,
    /// Relative distance at which a price counts as "at" a zone level.
    pub zone_tolerance_pct: f64,
    pub rsi_oversold: f64,
    pub rsi_overbought: f64,
    pub scoring: ScoringWeights,
}

/// Score values emitted by the proximity scorer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub base: i32,
    /// Applied on a support touch with oversold RSI.
    pub strong_bonus: i32,
    /// Applied on a plain support touch.
    pub weak_bonus: i32,
    /// Below this the signal reads red.
    pub red_below: i32,
    /// Above this the signal reads green.
    pub green_above: i32,
}

pub const SNIPER: SniperConfig = SniperConfig {
    extrema_order: 5,
    rsi_period: 14,
    zone_tolerance_pct: 0.02,
    rsi_oversold: 30.0,
    rsi_overbought: 70.0,
    scoring: ScoringWeights {
        base: 50,
        strong_bonus: 30,
        weak_bonus: 10,
        red_below: 40,
        green_above: 60,
    },
};

impl Default for SniperConfig {
    fn default() -> Self {
        SNIPER
    }
}
