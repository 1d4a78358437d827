// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod demo;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod render;
pub mod types;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{
    find_default_config, load_and_validate, validate_config_section, ConfigSection,
};
use crate::dag::{Scheduler, TaskGraph};
use crate::engine::{spawn_ticker, CoreDriver, DriverEvent, DriverOptions, Runtime};
use crate::errors::DagsimError;
use crate::render::ConsoleSink;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading (or the built-in demo graph)
/// - scheduler + core driver + async runtime
/// - a tick source (wall-clock ticker, or a fixed-step feeder in headless mode)
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let (section, graph) = load_graph(&args)?;
    let section = apply_overrides(section, &args)?;

    if args.dry_run {
        print_dry_run(&graph, &section);
        return Ok(());
    }

    let scheduler = Scheduler::new(graph, section.workers);
    let options = DriverOptions {
        speed: section.speed,
        exit_when_complete: !args.repeat,
        restart_when_complete: args.repeat,
    };

    let (tx, rx) = mpsc::channel::<DriverEvent>(64);

    // Ctrl-C → graceful shutdown.
    {
        let tx = tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            let _ = tx.send(DriverEvent::ShutdownRequested).await;
        });
    }

    if args.headless {
        spawn_fixed_steps(tx.clone(), section.tick, section.max_steps);
    } else {
        let _ticker = spawn_ticker(tx.clone(), Duration::from_millis(section.tick_interval_ms));
    }
    drop(tx);

    info!(
        workers = section.workers,
        headless = args.headless,
        speed = section.speed,
        "starting simulation"
    );

    let core = CoreDriver::new(scheduler, options);
    let runtime = Runtime::new(core, rx, ConsoleSink::stdout(args.format));
    let last = runtime.run().await?;

    if args.headless && !last.complete {
        return Err(DagsimError::StepLimitExceeded(section.max_steps).into());
    }

    Ok(())
}

/// Graph from `--config`, else from `Dagsim.toml` in the working directory,
/// else the demo graph with default settings.
fn load_graph(args: &CliArgs) -> Result<(ConfigSection, TaskGraph)> {
    let path = match &args.config {
        Some(path) => Some(PathBuf::from(path)),
        None => find_default_config("."),
    };

    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading graph config");
            let cfg = load_and_validate(&path)?;
            Ok((cfg.config, cfg.into_graph()))
        }
        None => {
            debug!("no config file found; using built-in demo graph");
            Ok((ConfigSection::default(), demo::demo_graph()?))
        }
    }
}

/// Apply CLI overrides on top of the `[config]` section and re-validate.
fn apply_overrides(mut section: ConfigSection, args: &CliArgs) -> Result<ConfigSection> {
    if let Some(workers) = args.workers {
        section.workers = workers;
    }
    if let Some(tick) = args.tick {
        section.tick = tick;
    }
    if let Some(speed) = args.speed {
        section.speed = speed;
    }
    validate_config_section(&section)?;
    Ok(section)
}

/// Push `max_steps` fixed advances, then ask the runtime to stop. A run
/// that finishes earlier makes the runtime exit first and the sends fail.
fn spawn_fixed_steps(tx: mpsc::Sender<DriverEvent>, delta: f64, max_steps: usize) {
    tokio::spawn(async move {
        for _ in 0..max_steps {
            if tx.send(DriverEvent::Advance { delta }).await.is_err() {
                return;
            }
        }
        let _ = tx.send(DriverEvent::ShutdownRequested).await;
    });
}

/// Dry-run output: print tasks, deps, a topological order and the makespan
/// of a headless run.
fn print_dry_run(graph: &TaskGraph, section: &ConfigSection) {
    println!("dagsim dry-run");
    println!("  config.workers = {}", section.workers);
    println!("  config.tick = {}", section.tick);
    println!("  config.speed = {}", section.speed);
    println!();

    println!("tasks ({}):", graph.len());
    for task in graph.all_tasks() {
        println!("  - {} ({})", task.id, task.label);
        println!("      duration: {}", task.duration);
        if !task.dependencies.is_empty() {
            println!("      after: {:?}", task.dependencies);
        }
    }
    println!();
    println!("topological order: {:?}", graph.topological_order());

    let mut scheduler = Scheduler::new(graph.clone(), section.workers);
    match scheduler.run_to_completion(section.tick, section.max_steps) {
        Ok(steps) => println!(
            "makespan: {} ({} steps of {})",
            scheduler.clock(),
            steps,
            section.tick
        ),
        Err(e) => println!("makespan: unavailable ({e})"),
    }

    debug!("dry-run complete (no simulation output)");
}
