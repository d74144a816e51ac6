use crate::error::{CliError, Result};
use std::fs::File;
use std::path::PathBuf;
use tracing_subscriber::{
    EnvFilter,
    filter::LevelFilter,
    fmt::{self},
    prelude::*,
};

/// Environment variable holding `RUST_LOG`-style directives that replace the verbosity flags.
pub const LOG_ENV_VAR: &str = "WORDSEARCH_LOG";

fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::OFF;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Builds the filter: directives from [`LOG_ENV_VAR`] when set, else the flag level.
///
/// `--quiet` always wins. Invalid directives are skipped.
fn build_filter(verbosity: u8, quiet: bool, env_directives: Option<&str>) -> EnvFilter {
    let builder = EnvFilter::builder().with_default_directive(level_filter(verbosity, quiet).into());
    match env_directives.map(str::trim).filter(|d| !d.is_empty()) {
        Some(directives) if !quiet => builder.parse_lossy(directives),
        _ => builder.parse_lossy(""),
    }
}

pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<PathBuf>) -> Result<()> {
    let env_directives = std::env::var(LOG_ENV_VAR).ok();
    let filter = build_filter(verbosity, quiet, env_directives.as_deref());

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer);

    if let Some(path) = log_file {
        let file = File::create(&path).map_err(CliError::Io)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_thread_ids(true)
            .with_target(true);

        subscriber
            .with(file_layer)
            .try_init()
            .map_err(|e| CliError::Other(anyhow::anyhow!("Failed to install logger: {}", e)))?;
    } else {
        subscriber
            .try_init()
            .map_err(|e| CliError::Other(anyhow::anyhow!("Failed to install logger: {}", e)))?;
    }

    Ok(())
}
