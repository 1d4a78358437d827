// src/engine/core.rs

//! Pure core driver state machine.
//!
//! This module contains a synchronous, deterministic "core driver" that
//! consumes [`DriverEvent`]s and produces:
//! - an updated scheduler state
//! - a list of commands describing what the IO shell should do next
//!
//! The async shell (`engine::runtime::Runtime`) is responsible for reading
//! events from channels and handing frames to the snapshot sink. The core is
//! unit-testable without Tokio or channels.

use crate::dag::{RunSnapshot, Scheduler};
use crate::engine::event_handlers::{
    handle_advance, handle_reset, handle_tick, DriverCommand, DriverStep,
};
use crate::engine::{DriverEvent, DriverOptions};
use crate::errors::Result;
use crate::render::Frame;

/// Pure core driver state.
///
/// Owns the scheduler (and with it the single active run) plus the driver
/// options. It has **no** channels, no Tokio types, and does not perform
/// any IO.
#[derive(Debug)]
pub struct CoreDriver {
    scheduler: Scheduler,
    options: DriverOptions,
}

impl CoreDriver {
    pub fn new(scheduler: Scheduler, options: DriverOptions) -> Self {
        Self { scheduler, options }
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn snapshot(&self) -> RunSnapshot {
        self.scheduler.snapshot()
    }

    pub fn is_complete(&self) -> bool {
        self.scheduler.is_complete()
    }

    /// Commands to run before any event arrives: publish the initial frame.
    pub fn start(&self) -> DriverStep {
        DriverStep {
            commands: vec![DriverCommand::Publish(Frame::initial(
                self.scheduler.snapshot(),
            ))],
            keep_running: true,
        }
    }

    /// Handle a single driver event, updating core state and returning the
    /// resulting commands for the IO shell.
    pub fn step(&mut self, event: DriverEvent) -> Result<DriverStep> {
        match event {
            DriverEvent::Tick { real_elapsed } => {
                handle_tick(&mut self.scheduler, &self.options, real_elapsed)
            }
            DriverEvent::Advance { delta } => {
                handle_advance(&mut self.scheduler, &self.options, delta)
            }
            DriverEvent::Reset => Ok(handle_reset(&mut self.scheduler)),
            DriverEvent::ShutdownRequested => Ok(DriverStep {
                commands: Vec::new(),
                keep_running: false,
            }),
        }
    }
}
