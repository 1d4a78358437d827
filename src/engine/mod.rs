// src/engine/mod.rs

//! Driver for the simulated scheduler.
//!
//! The scheduler core only knows `step(delta)`. This module is the external
//! driver around it:
//! - the pure [`core`] state machine maps [`DriverEvent`]s (ticks, resets,
//!   shutdown) onto scheduler steps and produces commands
//! - the async [`runtime`] shell owns the event channel and is the single
//!   writer of scheduler state, so steps are serialised even when ticks come
//!   from a real timer
//! - [`ticker`] turns wall-clock time into tick events

use crate::types::SimTime;

/// Runtime options used by both the core and the async shell.
#[derive(Debug, Clone, Copy)]
pub struct DriverOptions {
    /// Real-time to simulated-time multiplier applied to `Tick` events.
    pub speed: f64,
    /// Stop the runtime once every task is done.
    pub exit_when_complete: bool,
    /// Start a fresh run as soon as the current one completes. Takes
    /// precedence over `exit_when_complete`.
    pub restart_when_complete: bool,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            speed: 1.0,
            exit_when_complete: true,
            restart_when_complete: false,
        }
    }
}

/// Events flowing into the runtime from tickers, signal handlers, etc.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverEvent {
    /// Wall-clock time passed; scaled by `speed` into a simulated delta.
    Tick { real_elapsed: SimTime },
    /// Advance by an exact simulated delta (headless / fixed-tick drivers).
    Advance { delta: SimTime },
    /// Throw away the current run and start a fresh one.
    Reset,
    /// Graceful shutdown requested (e.g. Ctrl-C).
    ShutdownRequested,
}

pub mod core;
pub mod event_handlers;
pub mod runtime;
pub mod ticker;

pub use self::core::CoreDriver;
pub use event_handlers::{DriverCommand, DriverStep};
pub use runtime::Runtime;
pub use ticker::spawn_ticker;
