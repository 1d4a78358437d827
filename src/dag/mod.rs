// src/dag/mod.rs

//! Task DAG and the simulated list scheduler.
//!
//! - [`graph`] holds the immutable dependency structure, validated once at
//!   construction.
//! - [`task_info`] defines task specs, statuses and per-run task state.
//! - [`readiness`] promotes pending tasks whose dependencies are done.
//! - [`workers`] is the bounded pool of execution slots.
//! - [`scheduler`] contains the per-run state machine driven by `step(delta)`.
//! - [`scheduler_step`] defines the result type for scheduler steps.
//! - [`stats`] derives counts, utilisation and snapshots for renderers.

pub mod graph;
pub mod readiness;
pub mod scheduler;
pub mod scheduler_step;
pub mod stats;
pub mod task_info;
pub mod workers;

pub use graph::TaskGraph;
pub use readiness::ReadinessEvaluator;
pub use scheduler::Scheduler;
pub use scheduler_step::{Dispatch, StepReport};
pub use stats::{RunSnapshot, Statistics};
pub use task_info::{TaskNode, TaskSpec, TaskStatus};
pub use workers::{Worker, WorkerPool};
