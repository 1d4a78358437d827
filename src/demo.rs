// src/demo.rs

//! Built-in demonstration graph, used when no config file is given.

use crate::dag::{TaskGraph, TaskSpec};
use crate::errors::Result;

/// A small build-pipeline style DAG with two independent roots, a fan-out
/// and a join, so that both idle workers and ready queues show up with the
/// default two workers.
pub fn demo_specs() -> Vec<TaskSpec> {
    vec![
        TaskSpec::new("fetch", 300.0).label("Fetch sources"),
        TaskSpec::new("deps", 200.0).label("Resolve dependencies"),
        TaskSpec::new("parse", 200.0).label("Parse").after("fetch"),
        TaskSpec::new("lint", 150.0).label("Lint").after("fetch"),
        TaskSpec::new("typecheck", 250.0)
            .label("Type check")
            .after_all(["parse", "deps"]),
        TaskSpec::new("codegen", 300.0).label("Generate code").after("typecheck"),
        TaskSpec::new("test", 350.0)
            .label("Run tests")
            .after_all(["codegen", "lint"]),
        TaskSpec::new("package", 100.0)
            .label("Package")
            .after("test"),
    ]
}

pub fn demo_graph() -> Result<TaskGraph> {
    Ok(TaskGraph::new(demo_specs())?)
}
