// =============================================================================
// Trend Analysis
// =============================================================================
//
// Runs SMA, RSI and MACD over one symbol's daily closes and turns the results
// into verdicts.
//
// Decision rules:
//   direction = SMA(20) vs SMA(50) over the most recent 20 / 50 sessions
//   zone      = RSI(14) > 70 overbought, < 30 oversold, else neutral
//   crossover = latest MACD > latest signal ? bullish : bearish
//   momentum  = latest histogram > 0 ? upward : downward
//
// An indicator without enough history yields `None` and a "not enough data"
// line.  Only malformed input is an error.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::indicators::macd::{calculate_macd, MacdPoint};
use crate::indicators::rsi::calculate_rsi;
use crate::indicators::sma::trailing_sma;
use crate::market_data::{DailyTimeSeries, PriceSeries};
use crate::types::{Crossover, Momentum, RsiZone, TrendDirection};

pub const SMA_SHORT_DAYS: usize = 20;
pub const SMA_LONG_DAYS: usize = 50;
pub const RSI_DAYS: usize = 14;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SmaComparison {
    pub short: f64,
    pub long: f64,
    pub direction: TrendDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RsiReading {
    pub value: f64,
    pub zone: RsiZone,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacdReading {
    #[serde(flatten)]
    pub latest: MacdPoint,
    pub crossover: Crossover,
    pub momentum: Momentum,
}

/// Full verdict for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendReport {
    pub sessions: usize,
    pub latest_date: NaiveDate,
    pub latest_close: f64,
    pub sma: Option<SmaComparison>,
    pub rsi: Option<RsiReading>,
    pub macd: Option<MacdReading>,
}

/// Parse a raw daily time series and analyse it.
pub fn analyse_daily_series(series: &DailyTimeSeries) -> Result<TrendReport> {
    let prices = PriceSeries::from_daily(series).context("invalid daily time series")?;
    analyse(&prices)
}

/// Analyse an ordered price series.
pub fn analyse(prices: &PriceSeries) -> Result<TrendReport> {
    let (latest_date, latest_close) = prices.latest().context("price series is empty")?;
    let closes = prices.closes();

    let sma = match (
        trailing_sma(closes, SMA_SHORT_DAYS),
        trailing_sma(closes, SMA_LONG_DAYS),
    ) {
        (Some(short), Some(long)) => Some(SmaComparison {
            short,
            long,
            direction: TrendDirection::from_averages(short, long),
        }),
        _ => None,
    };
    debug!(sessions = closes.len(), ?sma, "SMA comparison");

    let rsi = calculate_rsi(closes, RSI_DAYS).map(|value| RsiReading {
        value,
        zone: RsiZone::from_rsi(value),
    });
    debug!(?rsi, "RSI reading");

    let macd = calculate_macd(closes).latest().map(|latest| MacdReading {
        latest,
        crossover: Crossover::from_lines(latest.macd, latest.signal),
        momentum: Momentum::from_histogram(latest.histogram),
    });
    debug!(?macd, "MACD reading");

    Ok(TrendReport {
        sessions: prices.len(),
        latest_date,
        latest_close,
        sma,
        rsi,
        macd,
    })
}

impl TrendReport {
    /// Human-readable verdict, one line per classification.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(5);

        lines.push(match self.sma.map(|s| s.direction) {
            Some(TrendDirection::Converging) => "Trends are converging.".to_string(),
            Some(direction) => {
                format!("Short-term trend is {direction} compared to long-term.")
            }
            None => format!(
                "Not enough data to compare the {SMA_SHORT_DAYS}-day and {SMA_LONG_DAYS}-day trends."
            ),
        });

        match self.rsi {
            Some(RsiReading { value, zone }) => {
                lines.push(format!("RSI ({RSI_DAYS}-day): {value:.2}"));
                lines.push(
                    match zone {
                        RsiZone::Overbought => "The stock is potentially overbought - the market \
                                                might correct (price might go down).",
                        RsiZone::Oversold => "The stock is potentially oversold - it might be a \
                                              good buying opportunity.",
                        RsiZone::Neutral => "The stock is neither overbought nor oversold.",
                    }
                    .to_string(),
                );
            }
            None => lines.push(format!("RSI ({RSI_DAYS}-day): not enough data.")),
        }

        match self.macd {
            Some(reading) => {
                lines.push(
                    match reading.crossover {
                        Crossover::Bullish => "MACD is above the signal line - bullish signal.",
                        Crossover::Bearish => "MACD is below the signal line - bearish signal.",
                    }
                    .to_string(),
                );
                lines.push(
                    match reading.momentum {
                        Momentum::Upward => {
                            "MACD histogram is positive, indicating upward momentum."
                        }
                        Momentum::Downward => {
                            "MACD histogram is not positive, indicating downward momentum."
                        }
                    }
                    .to_string(),
                );
            }
            None => lines.push("Not enough data for MACD analysis.".to_string()),
        }

        lines
    }
}
