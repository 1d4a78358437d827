// src/dag/task_info.rs

//! Task construction records and their per-run state.

use serde::{Deserialize, Serialize};

use crate::types::{SimTime, TaskId, WorkerId};

/// Static description of a task, as supplied when a graph is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSpec {
    pub id: TaskId,
    /// Human-readable name; opaque to the scheduler.
    #[serde(default)]
    pub label: String,
    /// Tasks that must reach `Done` before this one may start.
    #[serde(default, rename = "after")]
    pub dependencies: Vec<TaskId>,
    /// Nominal simulated execution time.
    pub duration: SimTime,
}

impl TaskSpec {
    pub fn new(id: impl Into<TaskId>, duration: SimTime) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            dependencies: Vec::new(),
            duration,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn after(mut self, dep: impl Into<TaskId>) -> Self {
        self.dependencies.push(dep.into());
        self
    }

    pub fn after_all(mut self, deps: impl IntoIterator<Item = impl Into<TaskId>>) -> Self {
        self.dependencies.extend(deps.into_iter().map(Into::into));
        self
    }
}

/// Per-run state of a task.
///
/// Transitions only ever move forward: `Pending -> Ready -> Running -> Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum TaskStatus {
    /// Waiting on at least one dependency.
    Pending,
    /// All dependencies done; waiting for a free worker.
    Ready,
    /// Occupying exactly one worker.
    Running,
    /// Terminal.
    Done,
}

impl TaskStatus {
    /// Position in the state machine, used to check forward-only movement.
    pub fn rank(self) -> u8 {
        match self {
            TaskStatus::Pending => 0,
            TaskStatus::Ready => 1,
            TaskStatus::Running => 2,
            TaskStatus::Done => 3,
        }
    }
}

/// Runtime view of a task: the static spec plus everything the run mutates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskNode {
    pub id: TaskId,
    pub label: String,
    pub dependencies: Vec<TaskId>,
    pub duration: SimTime,
    pub status: TaskStatus,
    /// Set only while `Running`.
    pub assigned_worker: Option<WorkerId>,
    pub started_at: Option<SimTime>,
    pub finished_at: Option<SimTime>,
    /// Percentage in `[0, 100]`; 100 once `Done`.
    pub progress: f64,
}

impl TaskNode {
    pub(crate) fn from_spec(spec: &TaskSpec) -> Self {
        Self {
            id: spec.id.clone(),
            label: spec.label.clone(),
            dependencies: spec.dependencies.clone(),
            duration: spec.duration,
            status: TaskStatus::Pending,
            assigned_worker: None,
            started_at: None,
            finished_at: None,
            progress: 0.0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == TaskStatus::Running
    }

    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }
}
