// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

use crate::render::OutputFormat;

/// Command-line arguments for `dagsim`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dagsim",
    version,
    about = "Simulate a dependency-aware list scheduler over a task DAG.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to a graph config file (TOML).
    ///
    /// If omitted, the built-in demo graph is used.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Number of workers (overrides `[config].workers`).
    #[arg(long, value_name = "N")]
    pub workers: Option<usize>,

    /// Simulated time per step in headless mode (overrides `[config].tick`).
    #[arg(long, value_name = "T")]
    pub tick: Option<f64>,

    /// Real-time to simulated-time multiplier (overrides `[config].speed`).
    #[arg(long, value_name = "S")]
    pub speed: Option<f64>,

    /// Step with a fixed tick as fast as possible instead of in real time.
    #[arg(long)]
    pub headless: bool,

    /// Start over every time the run completes (until Ctrl-C).
    #[arg(long = "loop", conflicts_with = "headless")]
    pub repeat: bool,

    /// Output format for snapshots.
    #[arg(long, value_enum, value_name = "FORMAT", default_value = "text")]
    pub format: OutputFormat,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DAGSIM_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Validate and print the graph, but don't run the simulation.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
