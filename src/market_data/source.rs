//! Data source trait definition.

use crate::error::FetchError;

/// Raw `"Time Series (Daily)"` mapping: ISO date -> quote object.
pub type DailyTimeSeries = serde_json::Map<String, serde_json::Value>;

/// Anything that can supply a symbol's daily time series.
pub trait DataSource {
    async fn fetch_daily(&self, symbol: &str) -> Result<DailyTimeSeries, FetchError>;
}
