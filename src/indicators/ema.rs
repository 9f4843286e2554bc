// =============================================================================
// Exponential Moving Average (EMA) — single-step recurrence
// =============================================================================
//
// EMA gives more weight to recent prices, making it more responsive to new
// information than the Simple Moving Average (SMA).
//
// Formula:
//   alpha  = 2 / (period + 1)
//   EMA_t  = value_t * alpha + EMA_{t-1} * (1 - alpha)
//
// The recurrence only ever needs the newest observation and the previous EMA
// state, so the indicators drive it one value at a time.
// =============================================================================

/// Smoothing factor `2 / (period + 1)` for an EMA of the given period.
pub fn smoothing_factor(period: usize) -> f64 {
    2.0 / (period as f64 + 1.0)
}

/// Advance an EMA by one observation.
pub fn next_ema(previous: f64, value: f64, period: usize) -> f64 {
    let alpha = smoothing_factor(period);
    alpha * value + (1.0 - alpha) * previous
}

/// Arithmetic mean of the first `period` values, used to seed an EMA.
///
/// Returns `None` when `period == 0` or fewer than `period` values exist.
pub fn seed_mean(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    Some(values[..period].iter().sum::<f64>() / period as f64)
}
