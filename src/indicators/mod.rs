// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free implementations of the indicators used by the trend
// analyser.  Scalar indicators return `Option<f64>` so callers are forced to
// handle the insufficient-data case; MACD returns its three lines, which are
// simply empty until enough history exists.

pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;
