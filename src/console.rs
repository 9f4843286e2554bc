// =============================================================================
// Console Loop — prompt, fetch, analyse, print, repeat
// =============================================================================
//
// One symbol per line.  `exit` (any case) or end of input stops the loop and
// prints the farewell exactly once.  Fetch and analysis failures are reported
// per symbol and never end the loop; only a failing output stream does.

use std::io::Write;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, error, info, warn};

use crate::analysis;
use crate::market_data::DataSource;

pub const PROMPT: &str = "Enter the stock symbol you wish to analyse (or type 'exit' to quit): ";
pub const FAREWELL: &str = "Exiting program.";
const EXIT_COMMAND: &str = "exit";

/// Drive the interactive loop until `exit` or end of input.
pub async fn run<R, W, S>(input: R, output: &mut W, source: &S) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    S: DataSource,
{
    let mut lines = input.lines();

    loop {
        writeln!(output, "{PROMPT}")?;
        output.flush()?;

        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => {
                debug!("end of input");
                break;
            }
            Err(e) => {
                warn!(error = %e, "failed to read input, stopping");
                break;
            }
        };

        let symbol = line.trim();
        if symbol.is_empty() {
            continue;
        }
        if symbol.eq_ignore_ascii_case(EXIT_COMMAND) {
            break;
        }

        analyse_symbol(symbol, output, source).await?;
        writeln!(output)?;
    }

    writeln!(output, "{FAREWELL}")?;
    output.flush()?;
    Ok(())
}

/// Fetch one symbol and print its verdict, or a single failure line.
async fn analyse_symbol<W, S>(symbol: &str, output: &mut W, source: &S) -> Result<()>
where
    W: Write,
    S: DataSource,
{
    let series = match source.fetch_daily(symbol).await {
        Ok(series) => series,
        Err(e) => {
            warn!(symbol, error = %e, "failed to fetch stock data");
            writeln!(output, "Failed to fetch stock data for symbol: {symbol}")?;
            return Ok(());
        }
    };

    match analysis::analyse_daily_series(&series) {
        Ok(report) => {
            info!(
                symbol,
                sessions = report.sessions,
                latest_date = %report.latest_date,
                latest_close = report.latest_close,
                "trend analysed"
            );
            for line in report.lines() {
                writeln!(output, "{line}")?;
            }
        }
        Err(e) => {
            error!(symbol, error = %format!("{e:#}"), "trend analysis failed");
            writeln!(output, "Error analysing trend: {e:#}")?;
        }
    }

    Ok(())
}
