//! Simple-moving-average RSI over close-to-close deltas.

use crate::models::OhlcvTimeSeries;

/// RSI value when a window has neither gains nor losses.
/// RS is 0/0 there; 50 keeps the table numeric and sits between both thresholds.
pub const FLAT_WINDOW_RSI: f64 = 50.0;

/// One entry per close. The first `period` entries are `None`; from index `period`
/// onwards each value averages the last `period` deltas with a plain rolling mean.
///
/// A window with no losses and some gains reads exactly 100.
pub fn compute_rsi(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; closes.len()];
    if period == 0 || closes.len() <= period {
        return out;
    }

    let deltas: Vec<f64> = closes.windows(2).map(|w| w[1] - w[0]).collect();

    for idx in period..closes.len() {
        // deltas[idx - 1] is the change into bar idx; the window is deltas[idx - period..idx].
        // Recomputed per window: a loss-free window sums to exactly zero.
        let window = &deltas[idx - period..idx];
        let gain_sum: f64 = window.iter().map(|d| d.max(0.0)).sum();
        let loss_sum: f64 = window.iter().map(|d| (-d).max(0.0)).sum();
        out[idx] = Some(rsi_from_averages(
            gain_sum / period as f64,
            loss_sum / period as f64,
        ));
    }

    out
}

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        if avg_gain > 0.0 { 100.0 } else { FLAT_WINDOW_RSI }
    } else {
        let rs = avg_gain / avg_loss;
        (100.0 - 100.0 / (1.0 + rs)).clamp(0.0, 100.0)
    }
}

/// RSI of the most recent bar, if the series is long enough.
pub fn latest_rsi(series: &OhlcvTimeSeries, period: usize) -> Option<f64> {
    compute_rsi(&series.close_prices, period)
        .last()
        .copied()
        .flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_period_values_are_undefined() {
        let closes: Vec<f64> = (0..30).map(|i| 100.0 + (i % 3) as f64).collect();
        let rsi = compute_rsi(&closes, 14);
        assert_eq!(rsi.len(), 30);
        assert!(rsi[..14].iter().all(Option::is_none));
        assert!(rsi[14..].iter().all(Option::is_some));
    }

    #[test]
    fn fourteen_equal_gains_read_100() {
        let closes: Vec<f64> = (0..15).map(|i| 50.0 + 2.0 * i as f64).collect();
        let rsi = compute_rsi(&closes, 14);
        assert_eq!(rsi[14], Some(100.0));
    }

    #[test]
    fn all_losses_read_0() {
        let closes: Vec<f64> = (0..20).map(|i| 200.0 - i as f64).collect();
        let rsi = compute_rsi(&closes, 14);
        assert_eq!(rsi[19], Some(0.0));
    }

    #[test]
    fn flat_window_reads_neutral() {
        let closes = vec![10.0; 16];
        let rsi = compute_rsi(&closes, 14);
        assert_eq!(rsi[15], Some(FLAT_WINDOW_RSI));
    }

    #[test]
    fn matches_hand_computed_value() {
        // 14 deltas: seven +2 and seven -1 => avg gain 1.0, avg loss 0.5, RS 2 => RSI 66.67
        let mut closes = vec![100.0];
        for i in 0..14 {
            let prev = *closes.last().unwrap();
            closes.push(if i % 2 == 0 { prev + 2.0 } else { prev - 1.0 });
        }
        let rsi = compute_rsi(&closes, 14)[14].unwrap();
        assert!((rsi - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn rolling_window_drops_old_deltas() {
        // 14 losses then 14 gains: by the last bar the window only holds gains.
        let mut closes: Vec<f64> = (0..15).map(|i| 100.0 - i as f64).collect();
        let bottom = *closes.last().unwrap();
        closes.extend((1..=14).map(|i| bottom + i as f64));
        let rsi = compute_rsi(&closes, 14);
        assert_eq!(rsi[14], Some(0.0));
        assert_eq!(rsi.last().copied().flatten(), Some(100.0));
    }

    #[test]
    fn gains_after_a_crash_read_exactly_100() {
        let mut closes = vec![250_000.0, 125_000.0, 240_000.0, 1_000.0, 120_000.0, 3.0];
        for i in 0..14 {
            let prev = *closes.last().unwrap();
            closes.push(prev + 0.01 + 0.03 * i as f64);
        }
        let rsi = compute_rsi(&closes, 14);
        assert_eq!(rsi.last().copied().flatten(), Some(100.0));
    }

    #[test]
    fn values_stay_in_bounds() {
        let closes: Vec<f64> = (0..200)
            .map(|i| 1000.0 + 50.0 * ((i as f64) * 0.3).sin() + ((i * 13) % 7) as f64)
            .collect();
        for v in compute_rsi(&closes, 14).into_iter().flatten() {
            assert!((0.0..=100.0).contains(&v), "rsi {} out of range", v);
        }
    }

    #[test]
    fn short_input_is_all_none() {
        assert!(compute_rsi(&[1.0, 2.0], 14).iter().all(Option::is_none));
        assert!(compute_rsi(&[], 14).is_empty());
    }
}
