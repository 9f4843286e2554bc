// =============================================================================
// Application Configuration — environment-driven settings
// =============================================================================
//
// Everything the data source needs to reach Alpha Vantage.  Values come from
// the process environment (after `.env` has been merged by `dotenv`); every
// field has a default so a missing or unparsable variable never stops the
// tool from starting.
//
// SECURITY: the API key is never logged.  `Debug` prints it redacted.
// =============================================================================

use std::time::Duration;

use tracing::{info, warn};

pub const ENV_API_KEY: &str = "ALPHAVANTAGE_API_KEY";
pub const ENV_BASE_URL: &str = "ALPHAVANTAGE_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "STOCK_TREND_TIMEOUT_SECS";
pub const ENV_OUTPUT_SIZE: &str = "STOCK_TREND_OUTPUT_SIZE";

// =============================================================================
// Default-value helpers
// =============================================================================

fn default_api_key() -> String {
    // Alpha Vantage's public key; only serves a handful of demo symbols.
    "demo".to_string()
}

fn default_base_url() -> String {
    "https://www.alphavantage.co".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

// =============================================================================
// OutputSize
// =============================================================================

/// How much history Alpha Vantage should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputSize {
    /// Latest 100 sessions.
    #[default]
    Compact,
    /// Full history.
    Full,
}

impl OutputSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Full => "full",
        }
    }
}

impl std::fmt::Display for OutputSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OutputSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "full" => Ok(Self::Full),
            other => Err(format!("unknown output size '{other}'")),
        }
    }
}

// =============================================================================
// AppConfig
// =============================================================================

#[derive(Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
    pub output_size: OutputSize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: default_api_key(),
            base_url: default_base_url(),
            timeout: Duration::from_secs(default_timeout_secs()),
            output_size: OutputSize::default(),
        }
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("output_size", &self.output_size)
            .finish()
    }
}

impl AppConfig {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// Blank values count as unset.  Unparsable values are replaced by their
    /// defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Self::default();

        match get(ENV_API_KEY) {
            Some(key) => config.api_key = key,
            None => warn!(
                var = ENV_API_KEY,
                "API key not set, falling back to the public demo key"
            ),
        }

        if let Some(url) = get(ENV_BASE_URL) {
            config.base_url = url.trim_end_matches('/').to_string();
        }

        if let Some(raw) = get(ENV_TIMEOUT_SECS) {
            match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => warn!(
                    var = ENV_TIMEOUT_SECS,
                    value = %raw,
                    default = default_timeout_secs(),
                    "invalid timeout, using default"
                ),
            }
        }

        if let Some(raw) = get(ENV_OUTPUT_SIZE) {
            match raw.parse::<OutputSize>() {
                Ok(size) => config.output_size = size,
                Err(e) => warn!(var = ENV_OUTPUT_SIZE, error = %e, "using default output size"),
            }
        }

        info!(
            base_url = %config.base_url,
            timeout_secs = config.timeout.as_secs(),
            output_size = %config.output_size,
            "configuration loaded"
        );

        config
    }
}

// =============================================================================
// Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let cfg = AppConfig::from_lookup(|_| None);
        assert_eq!(cfg.api_key, "demo");
        assert_eq!(cfg.base_url, "https://www.alphavantage.co");
        assert_eq!(cfg.timeout, Duration::from_secs(10));
        assert_eq!(cfg.output_size, OutputSize::Compact);
    }

    #[test]
    fn reads_all_variables() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            (ENV_API_KEY, "SECRET123"),
            (ENV_BASE_URL, "http://localhost:8080/"),
            (ENV_TIMEOUT_SECS, "30"),
            (ENV_OUTPUT_SIZE, "FULL"),
        ]));
        assert_eq!(cfg.api_key, "SECRET123");
        assert_eq!(cfg.base_url, "http://localhost:8080");
        assert_eq!(cfg.timeout, Duration::from_secs(30));
        assert_eq!(cfg.output_size, OutputSize::Full);
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            (ENV_API_KEY, "   "),
            (ENV_TIMEOUT_SECS, "0"),
            (ENV_OUTPUT_SIZE, "huge"),
        ]));
        assert_eq!(cfg.api_key, "demo");
        assert_eq!(cfg.timeout, Duration::from_secs(10));
        assert_eq!(cfg.output_size, OutputSize::Compact);
    }

    #[test]
    fn debug_redacts_api_key() {
        let cfg = AppConfig::from_lookup(lookup_from(&[(ENV_API_KEY, "SECRET123")]));
        let printed = format!("{cfg:?}");
        assert!(!printed.contains("SECRET123"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn output_size_parsing() {
        assert_eq!("compact".parse::<OutputSize>(), Ok(OutputSize::Compact));
        assert_eq!(" Full ".parse::<OutputSize>(), Ok(OutputSize::Full));
        assert!("".parse::<OutputSize>().is_err());
    }
}
