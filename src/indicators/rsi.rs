// =============================================================================
// Relative Strength Index (RSI) — EMA smoothing
// =============================================================================
//
// RSI measures the speed and magnitude of recent price changes to evaluate
// whether an asset is overbought or oversold.
//
// Step 1 — Seed average gain / average loss with the plain mean of the first
//          `days` price changes.  Flat days count toward the loss side (with
//          magnitude zero).
// Step 2 — Smooth both averages with alpha = 2 / (days + 1) for every later
//          change.  The side that did not move still decays:
//            gain = alpha * up   + (1 - alpha) * gain
//            loss = alpha * down + (1 - alpha) * loss
// Step 3 — RS  = gain / loss   (+inf when loss is exactly zero)
//          RSI = 100 - 100 / (1 + RS)
//
// Only the final RSI is produced; the series is consumed whole.
// =============================================================================

use super::ema::smoothing_factor;

/// Compute the RSI after processing all of `closes` with a `days` look-back.
///
/// Returns `None` when `days == 0` or `closes.len() <= days` (fewer than
/// `days` price changes available).
pub fn calculate_rsi(closes: &[f64], days: usize) -> Option<f64> {
    if days == 0 || closes.len() <= days {
        return None;
    }

    let changes: Vec<f64> = closes.windows(2).map(|w| w[1] - w[0]).collect();

    let (sum_gain, sum_loss) = changes[..days]
        .iter()
        .fold((0.0_f64, 0.0_f64), |(g, l), &change| {
            if change > 0.0 {
                (g + change, l)
            } else {
                (g, l + change.abs())
            }
        });

    let mut gain = sum_gain / days as f64;
    let mut loss = sum_loss / days as f64;

    let alpha = smoothing_factor(days);
    for &change in &changes[days..] {
        let (up, down) = if change > 0.0 {
            (change, 0.0)
        } else {
            (0.0, change.abs())
        };
        gain = alpha * up + (1.0 - alpha) * gain;
        loss = alpha * down + (1.0 - alpha) * loss;
    }

    Some(rsi_from_averages(gain, loss))
}

/// Convert smoothed gain / loss into an RSI value.
///
/// A loss of exactly zero makes RS infinite, which pins RSI at 100 even when
/// the gain is zero too.
fn rsi_from_averages(gain: f64, loss: f64) -> f64 {
    let rs = if loss == 0.0 { f64::INFINITY } else { gain / loss };
    100.0 - 100.0 / (1.0 + rs)
}
