// src/dag/stats.rs

//! Read-only statistics and snapshots for an external renderer.

use serde::Serialize;

use crate::dag::task_info::{TaskNode, TaskStatus};
use crate::dag::workers::Worker;
use crate::types::SimTime;

/// Counts and utilisation derived from the current run state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Statistics {
    pub total_tasks: usize,
    pub pending_count: usize,
    pub ready_count: usize,
    pub running_count: usize,
    pub completed_count: usize,
    pub total_workers: usize,
    pub elapsed_time: SimTime,
    /// `running / workers * 100`, or 0 with no workers.
    pub worker_utilization: f64,
}

impl Statistics {
    pub fn collect(tasks: &[TaskNode], workers: &[Worker], clock: SimTime) -> Self {
        let count = |status: TaskStatus| tasks.iter().filter(|t| t.status == status).count();

        let running_count = count(TaskStatus::Running);
        let total_workers = workers.len();
        let worker_utilization = if total_workers == 0 {
            0.0
        } else {
            running_count as f64 / total_workers as f64 * 100.0
        };

        Self {
            total_tasks: tasks.len(),
            pending_count: count(TaskStatus::Pending),
            ready_count: count(TaskStatus::Ready),
            running_count,
            completed_count: count(TaskStatus::Done),
            total_workers,
            elapsed_time: clock,
            worker_utilization,
        }
    }
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSnapshot {
    /// Increments on every reset; lets a renderer drop stale frames.
    pub run_id: u64,
    pub clock: SimTime,
    pub complete: bool,
    pub tasks: Vec<TaskNode>,
    pub workers: Vec<Worker>,
    pub stats: Statistics,
}
