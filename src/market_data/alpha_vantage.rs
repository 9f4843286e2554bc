// =============================================================================
// Alpha Vantage REST Client — daily time series
// =============================================================================
//
// SECURITY: the API key travels as a query parameter, so it is never logged
// and transport errors are stripped of their URL before they leave this
// module.
// =============================================================================

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::{DailyTimeSeries, DataSource};
use crate::config::{AppConfig, OutputSize};
use crate::error::FetchError;

/// Top-level key holding the daily sessions.
pub const TIME_SERIES_KEY: &str = "Time Series (Daily)";

/// Keys Alpha Vantage uses to explain why no data was returned.
const NOTICE_KEYS: [&str; 3] = ["Error Message", "Note", "Information"];

/// Alpha Vantage REST API client.
#[derive(Clone)]
pub struct AlphaVantageClient {
    api_key: String,
    base_url: String,
    output_size: OutputSize,
    client: reqwest::Client,
}

impl AlphaVantageClient {
    /// Create a client from the loaded configuration.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("failed to build HTTP client")?;

        debug!(base_url = %config.base_url, "AlphaVantageClient initialised");

        Ok(Self {
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            output_size: config.output_size,
            client,
        })
    }

    fn query_url(&self) -> String {
        format!("{}/query", self.base_url)
    }
}

impl DataSource for AlphaVantageClient {
    /// GET /query?function=TIME_SERIES_DAILY
    #[instrument(skip(self), name = "alpha_vantage::fetch_daily")]
    async fn fetch_daily(&self, symbol: &str) -> Result<DailyTimeSeries, FetchError> {
        let resp = self
            .client
            .get(self.query_url())
            .query(&[
                ("function", "TIME_SERIES_DAILY"),
                ("symbol", symbol),
                ("outputsize", self.output_size.as_str()),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.without_url()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body: Value = resp
            .json()
            .await
            .map_err(|e| FetchError::Transport(e.without_url()))?;

        let series = extract_time_series(body)?;
        debug!(symbol, sessions = series.len(), "daily time series received");
        Ok(series)
    }
}

/// Pull the daily mapping out of a decoded response body.
///
/// A body without the time-series object is reported as
/// [`FetchError::MissingTimeSeries`], carrying the API's own notice when it
/// sent one (unknown symbol, rate limit, invalid key).
pub fn extract_time_series(body: Value) -> Result<DailyTimeSeries, FetchError> {
    let mut root = match body {
        Value::Object(root) => root,
        other => {
            return Err(FetchError::Malformed(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            )))
        }
    };

    match root.remove(TIME_SERIES_KEY) {
        Some(Value::Object(series)) => Ok(series),
        Some(other) => Err(FetchError::MissingTimeSeries {
            reason: format!("'{TIME_SERIES_KEY}' is {}, not an object", json_kind(&other)),
        }),
        None => {
            let notice = NOTICE_KEYS
                .iter()
                .find_map(|key| root.get(*key).and_then(Value::as_str));
            if let Some(text) = notice {
                warn!(notice = %text, "market data API returned a notice instead of data");
            }
            Err(FetchError::MissingTimeSeries {
                reason: notice
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("response has no '{TIME_SERIES_KEY}' key")),
            })
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
