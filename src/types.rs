// =============================================================================
// Shared verdict types used by the trend analyser and the console
// =============================================================================

use serde::Serialize;

/// Short-term SMA relative to long-term SMA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Upward,
    Downward,
    Converging,
}

impl TrendDirection {
    pub fn from_averages(short: f64, long: f64) -> Self {
        if short > long {
            Self::Upward
        } else if short < long {
            Self::Downward
        } else {
            Self::Converging
        }
    }
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upward => write!(f, "upward"),
            Self::Downward => write!(f, "downward"),
            Self::Converging => write!(f, "converging"),
        }
    }
}

/// RSI band.  Thresholds are strict: exactly 70 or 30 is neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RsiZone {
    Overbought,
    Oversold,
    Neutral,
}

impl RsiZone {
    pub const OVERBOUGHT_ABOVE: f64 = 70.0;
    pub const OVERSOLD_BELOW: f64 = 30.0;

    pub fn from_rsi(rsi: f64) -> Self {
        if rsi > Self::OVERBOUGHT_ABOVE {
            Self::Overbought
        } else if rsi < Self::OVERSOLD_BELOW {
            Self::Oversold
        } else {
            Self::Neutral
        }
    }
}

impl std::fmt::Display for RsiZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overbought => write!(f, "overbought"),
            Self::Oversold => write!(f, "oversold"),
            Self::Neutral => write!(f, "neutral"),
        }
    }
}

/// MACD line relative to its signal line.  Equality counts as bearish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Crossover {
    Bullish,
    Bearish,
}

impl Crossover {
    pub fn from_lines(macd: f64, signal: f64) -> Self {
        if macd > signal {
            Self::Bullish
        } else {
            Self::Bearish
        }
    }
}

impl std::fmt::Display for Crossover {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bullish => write!(f, "bullish"),
            Self::Bearish => write!(f, "bearish"),
        }
    }
}

/// Sign of the MACD histogram.  Zero counts as downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Momentum {
    Upward,
    Downward,
}

impl Momentum {
    pub fn from_histogram(histogram: f64) -> Self {
        if histogram > 0.0 {
            Self::Upward
        } else {
            Self::Downward
        }
    }
}

impl std::fmt::Display for Momentum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upward => write!(f, "upward momentum"),
            Self::Downward => write!(f, "downward momentum"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_direction_classification() {
        assert_eq!(TrendDirection::from_averages(2.0, 1.0), TrendDirection::Upward);
        assert_eq!(TrendDirection::from_averages(1.0, 2.0), TrendDirection::Downward);
        assert_eq!(TrendDirection::from_averages(1.5, 1.5), TrendDirection::Converging);
    }

    #[test]
    fn rsi_zone_boundaries_are_strict() {
        assert_eq!(RsiZone::from_rsi(70.0), RsiZone::Neutral);
        assert_eq!(RsiZone::from_rsi(70.01), RsiZone::Overbought);
        assert_eq!(RsiZone::from_rsi(30.0), RsiZone::Neutral);
        assert_eq!(RsiZone::from_rsi(29.99), RsiZone::Oversold);
        assert_eq!(RsiZone::from_rsi(100.0), RsiZone::Overbought);
    }

    #[test]
    fn ties_are_bearish_and_downward() {
        assert_eq!(Crossover::from_lines(0.0, 0.0), Crossover::Bearish);
        assert_eq!(Momentum::from_histogram(0.0), Momentum::Downward);
        assert_eq!(Crossover::from_lines(0.5, 0.4), Crossover::Bullish);
        assert_eq!(Momentum::from_histogram(1e-9), Momentum::Upward);
    }

    #[test]
    fn display_labels() {
        assert_eq!(TrendDirection::Converging.to_string(), "converging");
        assert_eq!(RsiZone::Oversold.to_string(), "oversold");
        assert_eq!(Crossover::Bullish.to_string(), "bullish");
        assert_eq!(Momentum::Downward.to_string(), "downward momentum");
    }

    #[test]
    fn serialises_lowercase() {
        let json = serde_json::to_string(&RsiZone::Overbought).unwrap();
        assert_eq!(json, "\"overbought\"");
    }
}
