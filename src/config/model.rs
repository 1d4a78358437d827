// src/config/model.rs

use serde::Deserialize;

use crate::dag::{TaskGraph, TaskSpec};
use crate::types::SimTime;

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [config]
/// workers = 2
/// tick = 50.0
///
/// [[task]]
/// id = "A"
/// label = "Load input"
/// duration = 100.0
///
/// [[task]]
/// id = "B"
/// duration = 50.0
/// after = ["A"]
/// ```
///
/// `[[task]]` is an array of tables on purpose: its order is the graph's
/// construction order, which decides dispatch tie-breaks.
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfigFile {
    #[serde(default)]
    pub config: ConfigSection,

    #[serde(default)]
    pub task: Vec<TaskSpec>,
}

/// Validated configuration.
///
/// Only obtainable through `TryFrom<RawConfigFile>`, which also builds the
/// task graph, so holding a `ConfigFile` means the graph is a valid DAG.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub config: ConfigSection,
    graph: TaskGraph,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(config: ConfigSection, graph: TaskGraph) -> Self {
        Self { config, graph }
    }

    pub fn graph(&self) -> &TaskGraph {
        &self.graph
    }

    pub fn into_graph(self) -> TaskGraph {
        self.graph
    }

    /// Ordered task specs, as they appeared in the file.
    pub fn to_task_specs(&self) -> Vec<TaskSpec> {
        self.graph.all_tasks().cloned().collect()
    }
}

/// `[config]` section: simulation and driver parameters.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ConfigSection {
    /// Size of the worker pool for a run.
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Simulated time advanced per tick in headless mode.
    #[serde(default = "default_tick")]
    pub tick: SimTime,

    /// Real-time to simulated-time multiplier for the live driver.
    #[serde(default = "default_speed")]
    pub speed: f64,

    /// Period of the live ticker, in milliseconds of wall-clock time.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Upper bound on steps in headless mode.
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,
}

fn default_workers() -> usize {
    2
}

fn default_tick() -> SimTime {
    50.0
}

fn default_speed() -> f64 {
    1.0
}

fn default_tick_interval_ms() -> u64 {
    100
}

fn default_max_steps() -> usize {
    10_000
}

impl Default for ConfigSection {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            tick: default_tick(),
            speed: default_speed(),
            tick_interval_ms: default_tick_interval_ms(),
            max_steps: default_max_steps(),
        }
    }
}
