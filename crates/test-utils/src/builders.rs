#![allow(dead_code)]

use dagsim::dag::{Scheduler, TaskGraph, TaskSpec};

/// Builder for task graphs to simplify test setup.
pub struct GraphBuilder {
    specs: Vec<TaskSpec>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self { specs: Vec::new() }
    }

    /// Add a task with the given id, duration and dependencies.
    pub fn task(mut self, id: &str, duration: f64, after: &[&str]) -> Self {
        self.specs
            .push(TaskSpec::new(id, duration).after_all(after.iter().copied()));
        self
    }

    pub fn with_spec(mut self, spec: TaskSpec) -> Self {
        self.specs.push(spec);
        self
    }

    pub fn specs(self) -> Vec<TaskSpec> {
        self.specs
    }

    pub fn build(self) -> TaskGraph {
        TaskGraph::new(self.specs).expect("Failed to build valid graph from builder")
    }

    pub fn scheduler(self, workers: usize) -> Scheduler {
        Scheduler::new(self.build(), workers)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// `A -> B -> C`, each with duration 100.
pub fn linear_chain() -> GraphBuilder {
    GraphBuilder::new()
        .task("A", 100.0, &[])
        .task("B", 100.0, &["A"])
        .task("C", 100.0, &["B"])
}

/// `A` (100) fans out to `B` and `C` (50 each), which join into `D` (10).
pub fn diamond() -> GraphBuilder {
    GraphBuilder::new()
        .task("A", 100.0, &[])
        .task("B", 50.0, &["A"])
        .task("C", 50.0, &["A"])
        .task("D", 10.0, &["B", "C"])
}
