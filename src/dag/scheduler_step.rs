// src/dag/scheduler_step.rs

//! Step-by-step execution result types for the scheduler.

use serde::Serialize;

use crate::types::{SimTime, TaskId, WorkerId};

/// A task that was placed on a worker during a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dispatch {
    pub task: TaskId,
    pub worker: WorkerId,
}

/// Structured result of a single scheduler step.
///
/// Renderers can use this to draw timelines without diffing snapshots, and
/// tests use it to make assertions about exactly what changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StepReport {
    /// Simulated clock after the step.
    pub clock: SimTime,
    /// Tasks that reached `Done` in this step.
    pub completed: Vec<TaskId>,
    /// Tasks promoted from `Pending` to `Ready` in this step.
    pub promoted: Vec<TaskId>,
    /// Tasks that started running in this step.
    pub dispatched: Vec<Dispatch>,
    /// Whether this step caused the run to finish.
    pub run_just_completed: bool,
}

impl StepReport {
    /// Whether nothing changed apart from (possibly) the clock.
    pub fn is_quiet(&self) -> bool {
        self.completed.is_empty() && self.promoted.is_empty() && self.dispatched.is_empty()
    }
}
