// src/dag/graph.rs

use std::collections::HashMap;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::dag::task_info::TaskSpec;
use crate::errors::GraphError;
use crate::types::{SimTime, TaskId};

/// Internal node structure: the `TaskSpec` plus resolved adjacency by index.
#[derive(Debug, Clone)]
struct DagNode {
    spec: TaskSpec,
    /// Indices of direct dependencies.
    deps: Vec<usize>,
    /// Indices of direct dependents.
    dependents: Vec<usize>,
}

/// Immutable dependency structure of a simulation.
///
/// Nodes are kept in construction order. Every scheduling decision that has
/// to break a tie (readiness evaluation, dispatch) walks the graph in this
/// order, which keeps runs deterministic.
#[derive(Debug, Clone)]
pub struct TaskGraph {
    nodes: Vec<DagNode>,
    index: HashMap<TaskId, usize>,
    topo_order: Vec<usize>,
}

impl TaskGraph {
    /// Build and validate a graph from an ordered list of task specs.
    ///
    /// Rejects duplicate ids, unknown or self dependencies, non-positive or
    /// non-finite durations, and dependency cycles.
    pub fn new(specs: Vec<TaskSpec>) -> Result<Self, GraphError> {
        let mut index: HashMap<TaskId, usize> = HashMap::with_capacity(specs.len());

        for (i, spec) in specs.iter().enumerate() {
            if index.insert(spec.id.clone(), i).is_some() {
                return Err(GraphError::DuplicateTask(spec.id.clone()));
            }
            if !valid_duration(spec.duration) {
                return Err(GraphError::InvalidDuration {
                    task: spec.id.clone(),
                    duration: spec.duration,
                });
            }
        }

        let mut nodes: Vec<DagNode> = specs
            .into_iter()
            .map(|spec| DagNode {
                spec,
                deps: Vec::new(),
                dependents: Vec::new(),
            })
            .collect();

        // Resolve dependency names to indices; repeated entries collapse, in the
        // stored `TaskSpec` as well.
        for i in 0..nodes.len() {
            let mut deps = Vec::with_capacity(nodes[i].spec.dependencies.len());
            for dep in &nodes[i].spec.dependencies {
                if *dep == nodes[i].spec.id {
                    return Err(GraphError::SelfDependency(dep.clone()));
                }
                let Some(&j) = index.get(dep) else {
                    return Err(GraphError::UnknownDependency {
                        task: nodes[i].spec.id.clone(),
                        dependency: dep.clone(),
                    });
                };
                if !deps.contains(&j) {
                    deps.push(j);
                }
            }
            for &j in &deps {
                nodes[j].dependents.push(i);
            }
            let unique: Vec<TaskId> = deps.iter().map(|&j| nodes[j].spec.id.clone()).collect();
            nodes[i].spec.dependencies = unique;
            nodes[i].deps = deps;
        }

        let topo_order = check_acyclic(&nodes)?;

        Ok(Self {
            nodes,
            index,
            topo_order,
        })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All task specs, in construction order.
    pub fn all_tasks(&self) -> impl Iterator<Item = &TaskSpec> {
        self.nodes.iter().map(|n| &n.spec)
    }

    /// Position of a task in construction order.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn task(&self, id: &str) -> Option<&TaskSpec> {
        self.index_of(id).map(|i| &self.nodes[i].spec)
    }

    /// Immediate dependencies of a task, each listed once (empty for
    /// unknown ids).
    pub fn dependencies_of(&self, id: &str) -> &[TaskId] {
        self.task(id)
            .map(|spec| spec.dependencies.as_slice())
            .unwrap_or(&[])
    }

    /// Immediate dependents of a task (tasks listing it as a dependency).
    pub fn dependents_of(&self, id: &str) -> Vec<&str> {
        match self.index_of(id) {
            Some(i) => self.nodes[i]
                .dependents
                .iter()
                .map(|&j| self.nodes[j].spec.id.as_str())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Task ids in an order where every task follows all of its dependencies.
    pub fn topological_order(&self) -> Vec<&str> {
        self.topo_order
            .iter()
            .map(|&i| self.nodes[i].spec.id.as_str())
            .collect()
    }

    pub(crate) fn dep_indices(&self, i: usize) -> &[usize] {
        &self.nodes[i].deps
    }
}

fn valid_duration(duration: SimTime) -> bool {
    duration.is_finite() && duration > 0.0
}

/// Returns a topological order of node indices, or the task on a cycle.
///
/// Edge direction: dep -> task, so a task listing `after = ["A"]` gets the
/// edge `A -> task`.
fn check_acyclic(nodes: &[DagNode]) -> Result<Vec<usize>, GraphError> {
    let mut graph: DiGraphMap<usize, ()> = DiGraphMap::new();

    for i in 0..nodes.len() {
        graph.add_node(i);
    }
    for (i, node) in nodes.iter().enumerate() {
        for &dep in &node.deps {
            graph.add_edge(dep, i, ());
        }
    }

    toposort(&graph, None)
        .map_err(|cycle| GraphError::Cycle(nodes[cycle.node_id()].spec.id.clone()))
}
