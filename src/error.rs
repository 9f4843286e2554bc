// =============================================================================
// Data-source errors
// =============================================================================
//
// Everything that can go wrong before a time series reaches the analyser.
// The console reports all of these the same way (one failure line naming the
// symbol) but logs the variant so transport trouble and "no data" stay
// distinguishable in the logs.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    /// Network or TLS failure, timeout, or an undecodable body.  The request
    /// URL (which carries the API key) is stripped before construction.
    #[error("request failed: {0}")]
    Transport(reqwest::Error),

    /// The API answered with a non-success HTTP status.
    #[error("market data API returned HTTP {0}")]
    Status(reqwest::StatusCode),

    /// The body decoded as JSON but is not an object.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The response has no daily time series (unknown symbol, rate limit,
    /// bad API key).  `reason` carries the API's own message when present.
    #[error("no daily time series in response: {reason}")]
    MissingTimeSeries { reason: String },
}
