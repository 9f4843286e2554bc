// =============================================================================
// Stock Trend — Main Entry Point
// =============================================================================
//
// Interactive loop: read a ticker, fetch its daily closes from Alpha Vantage,
// print the SMA / RSI / MACD verdict, repeat until `exit`.
//
// Verdicts go to stdout; logs go to stderr (RUST_LOG, default `warn`).
// =============================================================================

// ── Module declarations ──────────────────────────────────────────────────────
mod analysis;
mod config;
mod console;
mod error;
mod indicators;
mod market_data;
mod types;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::market_data::AlphaVantageClient;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // ── 1. Environment & logging ─────────────────────────────────────────
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // ── 2. Config & data source ──────────────────────────────────────────
    let config = AppConfig::from_env();
    let source = AlphaVantageClient::new(&config)?;

    // ── 3. Console loop ──────────────────────────────────────────────────
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    console::run(stdin, &mut stdout, &source).await?;

    info!("stock-trend shut down");
    Ok(())
}
