// src/engine/event_handlers.rs

//! Event handling logic for the core driver.

use tracing::{debug, info};

use crate::dag::Scheduler;
use crate::engine::DriverOptions;
use crate::errors::Result;
use crate::render::Frame;
use crate::types::SimTime;

/// Command produced by the pure core, to be executed by the outer IO shell.
#[derive(Debug, Clone)]
pub enum DriverCommand {
    /// Hand this frame to the snapshot sink.
    Publish(Frame),
    /// Request that the runtime exits (run complete).
    RequestExit,
}

/// Decision returned by the core after handling a single `DriverEvent`.
#[derive(Debug, Clone)]
pub struct DriverStep {
    /// Commands the IO shell should execute.
    pub commands: Vec<DriverCommand>,
    /// Whether the outer runtime loop should keep running.
    pub keep_running: bool,
}

impl DriverStep {
    pub(crate) fn idle() -> Self {
        Self {
            commands: Vec::new(),
            keep_running: true,
        }
    }
}

/// Advance the scheduler by a simulated `delta`.
///
/// - A completed run is never stepped again; the event is dropped (or turned
///   into an exit request when the driver exits on completion).
/// - Otherwise the step's frame is published, and completion is handled
///   according to `options`.
pub fn handle_advance(
    scheduler: &mut Scheduler,
    options: &DriverOptions,
    delta: SimTime,
) -> Result<DriverStep> {
    if scheduler.is_complete() {
        debug!(delta, "run already complete; ignoring advance");
        if options.exit_when_complete && !options.restart_when_complete {
            return Ok(DriverStep {
                commands: vec![DriverCommand::RequestExit],
                keep_running: false,
            });
        }
        return Ok(DriverStep::idle());
    }

    let report = scheduler.try_step(delta)?;
    let just_completed = report.run_just_completed;

    let mut commands = vec![DriverCommand::Publish(Frame::after_step(
        report,
        scheduler.snapshot(),
    ))];
    let mut keep_running = true;

    if just_completed {
        if options.restart_when_complete {
            info!(run_id = scheduler.run_id(), "run complete; restarting");
            commands.extend(handle_reset(scheduler).commands);
        } else if options.exit_when_complete {
            commands.push(DriverCommand::RequestExit);
            keep_running = false;
        }
    }

    Ok(DriverStep {
        commands,
        keep_running,
    })
}

/// Convert elapsed wall-clock time into a simulated delta and advance.
pub fn handle_tick(
    scheduler: &mut Scheduler,
    options: &DriverOptions,
    real_elapsed: SimTime,
) -> Result<DriverStep> {
    handle_advance(scheduler, options, real_elapsed * options.speed)
}

/// Start a fresh run on the same graph and worker count.
pub fn handle_reset(scheduler: &mut Scheduler) -> DriverStep {
    scheduler.reset();
    DriverStep {
        commands: vec![DriverCommand::Publish(Frame::initial(scheduler.snapshot()))],
        keep_running: true,
    }
}
