// =============================================================================
// Moving Average Convergence Divergence (MACD)
// =============================================================================
//
// MACD line  = EMA(short) - EMA(long)
// Signal     = EMA(signal) of the MACD line
// Histogram  = MACD line - signal
//
// Seeding:
//   - The short and long EMAs are each seeded with the mean of the first
//     `short` / `long` closes, computed independently from the head of the
//     series before any recurrence runs.
//   - Both EMAs then advance from index `long` onward, one close at a time.
//   - The first signal value is the plain mean of the first `signal` MACD
//     values; later values follow the EMA recurrence.
//
// Output lengths for `n` closes:
//   macd      = n - long                       (0 when n < long)
//   signal    = macd - signal_period + 1       (0 when negative)
//   histogram = signal
// =============================================================================

use serde::Serialize;

use super::ema::{next_ema, seed_mean};

/// EMA periods that parameterise a MACD computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacdPeriods {
    pub short: usize,
    pub long: usize,
    pub signal: usize,
}

impl MacdPeriods {
    /// The classic 12 / 26 / 9 configuration.
    pub const STANDARD: Self = Self {
        short: 12,
        long: 26,
        signal: 9,
    };
}

/// The three MACD output lines.
///
/// `signal[i]` and `histogram[i]` line up with `macd[i + signal_period - 1]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MacdSeries {
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
    pub histogram: Vec<f64>,
}

/// Most recent value of each MACD line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacdPoint {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

impl MacdSeries {
    /// The last (macd, signal, histogram) triple, or `None` before the signal
    /// line has started.
    pub fn latest(&self) -> Option<MacdPoint> {
        Some(MacdPoint {
            macd: *self.macd.last()?,
            signal: *self.signal.last()?,
            histogram: *self.histogram.last()?,
        })
    }
}

/// Standard 12 / 26 / 9 MACD over `closes`.
pub fn calculate_macd(closes: &[f64]) -> MacdSeries {
    calculate_macd_with(closes, MacdPeriods::STANDARD)
}

/// MACD over `closes` with explicit periods.
///
/// Returns empty lines when there are fewer than `periods.long` closes or any
/// period is zero.
pub fn calculate_macd_with(closes: &[f64], periods: MacdPeriods) -> MacdSeries {
    let MacdPeriods {
        short,
        long,
        signal: signal_period,
    } = periods;

    if signal_period == 0 {
        return MacdSeries::default();
    }
    let (Some(mut short_ema), Some(mut long_ema)) =
        (seed_mean(closes, short), seed_mean(closes, long))
    else {
        return MacdSeries::default();
    };

    let steps = closes.len() - long;
    let mut out = MacdSeries {
        macd: Vec::with_capacity(steps),
        signal: Vec::with_capacity((steps + 1).saturating_sub(signal_period)),
        histogram: Vec::with_capacity((steps + 1).saturating_sub(signal_period)),
    };

    for &close in &closes[long..] {
        short_ema = next_ema(short_ema, close, short);
        long_ema = next_ema(long_ema, close, long);

        let macd = short_ema - long_ema;
        out.macd.push(macd);

        if out.macd.len() < signal_period {
            continue;
        }
        let signal = match out.signal.last() {
            Some(&previous) => next_ema(previous, macd, signal_period),
            None => out.macd.iter().sum::<f64>() / signal_period as f64,
        };
        out.signal.push(signal);
        out.histogram.push(macd - signal);
    }

    out
}
