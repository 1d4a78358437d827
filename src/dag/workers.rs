// src/dag/workers.rs

//! Bounded pool of simulated execution slots.

use serde::Serialize;
use tracing::debug;

use crate::dag::task_info::{TaskNode, TaskStatus};
use crate::types::{SimTime, TaskId, WorkerId};

/// A single execution slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Worker {
    pub id: WorkerId,
    /// Task occupying this worker, `None` when idle.
    pub current_task: Option<TaskId>,
}

impl Worker {
    pub fn is_idle(&self) -> bool {
        self.current_task.is_none()
    }
}

/// Fixed-size set of workers. The size never changes for the lifetime of a
/// run; a different worker count needs a fresh run.
#[derive(Debug, Clone)]
pub struct WorkerPool {
    workers: Vec<Worker>,
}

impl WorkerPool {
    pub fn new(count: usize) -> Self {
        let workers = (0..count)
            .map(|i| Worker {
                id: WorkerId(i),
                current_task: None,
            })
            .collect();
        Self { workers }
    }

    pub fn len(&self) -> usize {
        self.workers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }

    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    /// Idle workers in ascending id order.
    pub fn idle_workers(&self) -> Vec<WorkerId> {
        self.workers
            .iter()
            .filter(|w| w.is_idle())
            .map(|w| w.id)
            .collect()
    }

    /// Start `task` on `worker` at simulated time `now`.
    ///
    /// # Panics
    ///
    /// If the worker does not exist or is busy, or if the task is not
    /// `Ready`. The dispatch loop never does either, so hitting this means
    /// the scheduler state is already corrupt.
    pub fn assign(&mut self, worker: WorkerId, task: &mut TaskNode, now: SimTime) {
        let slot = self
            .workers
            .get_mut(worker.index())
            .unwrap_or_else(|| panic!("assign: unknown worker {worker}"));
        assert!(
            slot.is_idle(),
            "assign: worker {worker} is busy with {:?}",
            slot.current_task
        );
        assert!(
            task.status == TaskStatus::Ready,
            "assign: task '{}' is {:?}, expected Ready",
            task.id,
            task.status
        );

        slot.current_task = Some(task.id.clone());
        task.status = TaskStatus::Running;
        task.assigned_worker = Some(worker);
        task.started_at = Some(now);
        task.progress = 0.0;

        debug!(task = %task.id, %worker, at = now, "task assigned to worker");
    }

    /// Free `worker`, returning the task it was holding.
    pub fn release(&mut self, worker: WorkerId) -> Option<TaskId> {
        let released = self
            .workers
            .get_mut(worker.index())
            .and_then(|w| w.current_task.take());
        if let Some(ref task) = released {
            debug!(task = %task, %worker, "worker released");
        }
        released
    }

    /// Empty every slot (used when a run is reset).
    pub fn clear(&mut self) {
        for w in &mut self.workers {
            w.current_task = None;
        }
    }
}
