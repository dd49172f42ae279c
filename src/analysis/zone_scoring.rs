use crate::{
    analysis::ZoneLevels,
    config::SniperConfig,
    domain::Candle,
    models::{ColorBand, ScoreRecord, SignalKind},
};

/// Which side of the book the latest bar is leaning on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneProximity {
    pub near_support: bool,
    pub near_resistance: bool,
}

/// `|price - level| / level <= tolerance`. Non-positive levels never match.
#[inline]
pub fn is_near_level(price: f64, level: f64, tolerance: f64) -> bool {
    level > 0.0 && (price - level).abs() / level <= tolerance
}

pub fn is_near_any(price: f64, levels: &[f64], tolerance: f64) -> bool {
    levels
        .iter()
        .any(|&level| is_near_level(price, level, tolerance))
}

impl ZoneProximity {
    /// Support is judged on the bar's low, resistance on its high.
    pub fn of(candle: &Candle, levels: &ZoneLevels, tolerance: f64) -> Self {
        Self {
            near_support: is_near_any(candle.low_price, &levels.supports, tolerance),
            near_resistance: is_near_any(candle.high_price, &levels.resistances, tolerance),
        }
    }
}

/// Scores the latest bar against the detected zones and its RSI.
///
/// Support is tested first, so a bar touching both zones reads as support.
/// An undefined RSI satisfies neither the oversold nor the overbought threshold.
pub fn score_latest(
    latest: &Candle,
    rsi: Option<f64>,
    levels: &ZoneLevels,
    config: &SniperConfig,
) -> ScoreRecord {
    let weights = &config.scoring;
    let proximity = ZoneProximity::of(latest, levels, config.zone_tolerance_pct);

    let oversold = rsi.is_some_and(|v| v < config.rsi_oversold);
    let overbought = rsi.is_some_and(|v| v > config.rsi_overbought);

    let (signal, score) = if proximity.near_support {
        if oversold {
            (SignalKind::SupportOversold, weights.base + weights.strong_bonus)
        } else {
            (SignalKind::Support, weights.base + weights.weak_bonus)
        }
    } else if proximity.near_resistance {
        if overbought {
            (
                SignalKind::ResistanceOverbought,
                weights.base - weights.strong_bonus,
            )
        } else {
            (SignalKind::Resistance, weights.base - weights.weak_bonus)
        }
    } else {
        (SignalKind::Neutral, weights.base)
    };

    ScoreRecord {
        price: latest.close_price,
        rsi,
        signal,
        score,
        band: ColorBand::from_score(score, config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SNIPER;

    fn bar(low: f64, high: f64) -> Candle {
        Candle::new(0, low, high, low, high)
    }

    fn levels(supports: &[f64], resistances: &[f64]) -> ZoneLevels {
        ZoneLevels {
            supports: supports.to_vec(),
            resistances: resistances.to_vec(),
        }
    }

    #[test]
    fn proximity_uses_relative_distance_to_level() {
        // |100 - 98.1| / 98.1 = 0.0194
        assert!(is_near_level(100.0, 98.1, 0.02));
        // |100 - 95| / 95 = 0.0526
        assert!(!is_near_level(100.0, 95.0, 0.02));
        assert!(is_near_level(100.0, 100.0, 0.0));
        assert!(!is_near_level(0.0, 0.0, 0.02));
    }

    #[test]
    fn support_with_low_rsi_is_an_opportunity() {
        let r = score_latest(&bar(100.0, 110.0), Some(25.0), &levels(&[98.1], &[]), &SNIPER);
        assert_eq!(r.signal, SignalKind::SupportOversold);
        assert_eq!(r.score, 80);
        assert_eq!(r.band, ColorBand::Green);
        assert_eq!(r.price, 110.0);
    }

    #[test]
    fn support_with_rsi_at_threshold_is_plain_support() {
        let r = score_latest(&bar(100.0, 110.0), Some(30.0), &levels(&[98.1], &[]), &SNIPER);
        assert_eq!(r.signal, SignalKind::Support);
        assert_eq!(r.score, 60);
        assert_eq!(r.band, ColorBand::Yellow);
    }

    #[test]
    fn resistance_branches() {
        let lv = levels(&[], &[111.0]);
        let hot = score_latest(&bar(100.0, 110.0), Some(75.0), &lv, &SNIPER);
        assert_eq!(hot.signal, SignalKind::ResistanceOverbought);
        assert_eq!(hot.score, 20);
        assert_eq!(hot.band, ColorBand::Red);

        let calm = score_latest(&bar(100.0, 110.0), Some(70.0), &lv, &SNIPER);
        assert_eq!(calm.signal, SignalKind::Resistance);
        assert_eq!(calm.score, 40);
        assert_eq!(calm.band, ColorBand::Yellow);
    }

    #[test]
    fn support_takes_precedence_over_resistance() {
        let r = score_latest(
            &bar(100.0, 101.0),
            Some(80.0),
            &levels(&[99.5], &[101.5]),
            &SNIPER,
        );
        assert_eq!(r.signal, SignalKind::Support);
    }

    #[test]
    fn far_from_zones_is_neutral() {
        let r = score_latest(&bar(100.0, 110.0), Some(10.0), &levels(&[95.0], &[130.0]), &SNIPER);
        assert_eq!(r.signal, SignalKind::Neutral);
        assert_eq!(r.score, 50);
        assert_eq!(r.band, ColorBand::Yellow);
    }

    #[test]
    fn undefined_rsi_never_crosses_thresholds() {
        let r = score_latest(&bar(100.0, 110.0), None, &levels(&[100.0], &[]), &SNIPER);
        assert_eq!(r.signal, SignalKind::Support);
        let r = score_latest(&bar(100.0, 110.0), None, &levels(&[], &[110.0]), &SNIPER);
        assert_eq!(r.signal, SignalKind::Resistance);
    }

    #[test]
    fn scoring_is_deterministic() {
        let lv = levels(&[98.1, 120.0], &[111.0]);
        let first = score_latest(&bar(100.0, 110.0), Some(42.0), &lv, &SNIPER);
        for _ in 0..10 {
            assert_eq!(score_latest(&bar(100.0, 110.0), Some(42.0), &lv, &SNIPER), first);
        }
    }
}
