//! db_runner: read one request from stdin, write one response to stdout
//!
//! Exit status is 0 for `ok: true` and 1 otherwise. Logs go to stderr.

use std::io::{Read, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use encrypted_db_runner::consts::DEFAULT_LOG_FILTER;
use encrypted_db_runner::{load_config, Runner};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    let config = load_config();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.filter))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .context("Failed to read request from stdin")?;
    debug!(bytes = raw.len(), "request received");

    let response = Runner::new(config).handle_raw(&raw);

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", response.to_json()).context("Failed to write response to stdout")?;
    stdout.flush().context("Failed to flush stdout")?;

    Ok(if response.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
