// src/logging.rs

//! Logging setup for `dagsim` using `tracing` + `tracing-subscriber`.
//!
//! The level comes from `--log-level`, then the `DAGSIM_LOG` environment
//! variable (any name `tracing::Level` parses, e.g. "debug" or "WARN"),
//! then falls back to `info`.
//!
//! Stdout belongs to the snapshot stream (text frames or JSON lines, see
//! `--format`), so log events always go to stderr. That keeps
//! `dagsim --headless --format json | jq` working at any log level.

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::fmt;

use crate::cli::LogLevel;

/// Environment variable consulted when `--log-level` is absent.
pub const LOG_ENV_VAR: &str = "DAGSIM_LOG";

/// Install the global subscriber. Call once from `main`.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let level = cli_level
        .map(Level::from)
        .or_else(|| env_level(std::env::var(LOG_ENV_VAR).ok().as_deref()))
        .unwrap_or(Level::INFO);

    fmt()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

/// Level named by the environment variable; unknown names are ignored.
fn env_level(value: Option<&str>) -> Option<Level> {
    value.and_then(|s| s.trim().parse().ok())
}

impl From<LogLevel> for Level {
    fn from(lvl: LogLevel) -> Self {
        match lvl {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}
