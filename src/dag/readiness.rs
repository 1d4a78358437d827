// src/dag/readiness.rs

//! Pending -> Ready promotion.

use tracing::debug;

use crate::dag::graph::TaskGraph;
use crate::dag::task_info::{TaskNode, TaskStatus};
use crate::types::TaskId;

/// Promotes `Pending` tasks whose dependencies are all `Done`.
///
/// `tasks` is indexed in graph construction order.
pub struct ReadinessEvaluator<'a> {
    graph: &'a TaskGraph,
    tasks: &'a mut [TaskNode],
}

impl<'a> ReadinessEvaluator<'a> {
    pub fn new(graph: &'a TaskGraph, tasks: &'a mut [TaskNode]) -> Self {
        Self { graph, tasks }
    }

    /// Promote every eligible `Pending` task and return the promoted ids in
    /// construction order.
    ///
    /// Tasks already past `Pending` are never touched, so calling this twice
    /// in a row is a no-op the second time.
    pub fn update_readiness(&mut self) -> Vec<TaskId> {
        // Decide first, then mutate.
        let graph = self.graph;
        let tasks: &[TaskNode] = self.tasks;
        let candidates: Vec<usize> = (0..tasks.len())
            .filter(|&i| tasks[i].status == TaskStatus::Pending && deps_done(graph, tasks, i))
            .collect();

        candidates
            .into_iter()
            .map(|i| {
                let task = &mut self.tasks[i];
                task.status = TaskStatus::Ready;
                debug!(task = %task.id, "dependencies satisfied; marking Ready");
                task.id.clone()
            })
            .collect()
    }
}

fn deps_done(graph: &TaskGraph, tasks: &[TaskNode], index: usize) -> bool {
    graph
        .dep_indices(index)
        .iter()
        .all(|&dep| tasks[dep].status == TaskStatus::Done)
}
