pub mod alpha_vantage;
pub mod price_series;
pub mod source;

pub use alpha_vantage::AlphaVantageClient;
pub use price_series::PriceSeries;
pub use source::{DailyTimeSeries, DataSource};

/// Builders for daily time series used across the test suites.
#[cfg(test)]
pub mod fixtures {
    use chrono::{Duration, NaiveDate};
    use serde_json::json;

    use super::DailyTimeSeries;

    /// One session per calendar day starting 2024-01-01, closes in order.
    pub fn daily_series(closes: &[f64]) -> DailyTimeSeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        closes
            .iter()
            .enumerate()
            .map(|(i, close)| {
                let date = start + Duration::days(i as i64);
                let quote = json!({
                    "1. open": close.to_string(),
                    "2. high": close.to_string(),
                    "3. low": close.to_string(),
                    "4. close": close.to_string(),
                    "5. volume": "1000"
                });
                (date.format("%Y-%m-%d").to_string(), quote)
            })
            .collect()
    }
}
