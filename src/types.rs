// src/types.rs

use std::fmt;

use serde::Serialize;

/// Canonical task identifier used throughout the crate.
pub type TaskId = String;

/// Simulated time, in abstract units (the demo treats them as milliseconds).
pub type SimTime = f64;

/// Identifier of an execution slot in the worker pool.
///
/// Workers are numbered `0..W` in creation order; that order is also the
/// order in which idle workers are handed out during dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct WorkerId(pub usize);

impl WorkerId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "W{}", self.0)
    }
}
