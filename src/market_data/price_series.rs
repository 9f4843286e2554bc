// =============================================================================
// PriceSeries — chronologically ordered daily closes
// =============================================================================
//
// Built from the raw daily mapping: date keys are parsed as ISO dates, sorted
// ascending, and each quote's "4. close" is parsed as a float.  Any malformed
// entry rejects the whole series.

use anyhow::{bail, ensure, Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;

use super::DailyTimeSeries;

/// Field name of the closing price inside each daily quote.
pub const CLOSE_FIELD: &str = "4. close";

#[derive(Debug, Deserialize)]
struct DailyQuote {
    #[serde(rename = "4. close")]
    close: CloseValue,
}

/// Alpha Vantage sends decimals as strings; plain numbers are accepted too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CloseValue {
    Text(String),
    Number(f64),
}

impl CloseValue {
    fn parse(&self) -> Result<f64> {
        let value = match self {
            Self::Text(raw) => raw
                .trim()
                .parse::<f64>()
                .with_context(|| format!("close '{raw}' is not a number"))?,
            Self::Number(n) => *n,
        };
        ensure!(value.is_finite(), "close {value} is not finite");
        Ok(value)
    }
}

/// Daily closes, oldest first, one per session date.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    dates: Vec<NaiveDate>,
    closes: Vec<f64>,
}

impl PriceSeries {
    /// Parse and order a raw daily time series.
    ///
    /// Fails on an empty mapping, a key that is not a `YYYY-MM-DD` date, two
    /// keys naming the same date, or a quote whose close is missing or not a
    /// finite number.
    pub fn from_daily(series: &DailyTimeSeries) -> Result<Self> {
        ensure!(!series.is_empty(), "time series contains no sessions");

        let mut sessions = Vec::with_capacity(series.len());
        for (key, quote) in series {
            let date = NaiveDate::parse_from_str(key, "%Y-%m-%d")
                .with_context(|| format!("invalid session date '{key}'"))?;
            let quote: DailyQuote = serde_json::from_value(quote.clone())
                .with_context(|| format!("quote for {key} has no usable '{CLOSE_FIELD}'"))?;
            let close = quote
                .close
                .parse()
                .with_context(|| format!("bad close for {key}"))?;
            sessions.push((date, close));
        }

        sessions.sort_by_key(|&(date, _)| date);
        if let Some(pair) = sessions.windows(2).find(|w| w[0].0 == w[1].0) {
            bail!("duplicate session date {}", pair[0].0);
        }

        let (dates, closes) = sessions.into_iter().unzip();
        Ok(Self { dates, closes })
    }

    pub fn closes(&self) -> &[f64] {
        &self.closes
    }

    pub fn len(&self) -> usize {
        self.closes.len()
    }

    /// Most recent session and its close.
    pub fn latest(&self) -> Option<(NaiveDate, f64)> {
        Some((*self.dates.last()?, *self.closes.last()?))
    }
}
