// src/engine/runtime.rs

use std::fmt;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::dag::RunSnapshot;
use crate::errors::Result;
use crate::render::SnapshotSink;

use super::core::CoreDriver;
use super::{DriverCommand, DriverEvent};

/// Drives the scheduler in response to `DriverEvent`s and delegates drawing
/// to a `SnapshotSink`.
///
/// This is a pure IO shell around `CoreDriver`, which contains all the
/// driver semantics. Events are consumed one at a time from a single
/// channel, which makes this loop the only writer of scheduler state.
pub struct Runtime<S: SnapshotSink> {
    core: CoreDriver,
    event_rx: mpsc::Receiver<DriverEvent>,
    sink: S,
}

impl<S: SnapshotSink> fmt::Debug for Runtime<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("core", &self.core)
            .finish_non_exhaustive()
    }
}

impl<S: SnapshotSink> Runtime<S> {
    pub fn new(core: CoreDriver, event_rx: mpsc::Receiver<DriverEvent>, sink: S) -> Self {
        Self {
            core,
            event_rx,
            sink,
        }
    }

    /// Main event loop.
    ///
    /// - Publishes the initial frame.
    /// - Consumes `DriverEvent`s from `event_rx` and feeds them to the core.
    /// - Executes the commands returned by the core.
    ///
    /// Returns the final snapshot once the channel closes, shutdown is
    /// requested, or the core asks to exit.
    pub async fn run(mut self) -> Result<RunSnapshot> {
        info!("dagsim runtime started");

        let start = self.core.start();
        for command in start.commands {
            self.execute_command(command).await?;
        }

        loop {
            let event = match self.event_rx.recv().await {
                Some(e) => e,
                None => {
                    info!("driver event channel closed; exiting");
                    break;
                }
            };

            debug!(?event, "runtime received event");

            let step = self.core.step(event)?;

            for command in step.commands {
                self.execute_command(command).await?;
            }

            if !step.keep_running {
                info!("core requested exit; stopping runtime");
                break;
            }
        }

        info!("runtime exiting");
        Ok(self.core.snapshot())
    }

    async fn execute_command(&mut self, command: DriverCommand) -> Result<()> {
        match command {
            DriverCommand::Publish(frame) => self.sink.publish(frame).await,
            DriverCommand::RequestExit => {
                // keep_running=false already stops the loop; nothing to do.
                info!("core issued RequestExit command");
                Ok(())
            }
        }
    }
}
