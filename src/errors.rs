// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

use crate::types::{SimTime, TaskId};

/// Structural problems with a task graph, detected once at construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("duplicate task id '{0}'")]
    DuplicateTask(TaskId),

    #[error("task '{task}' has unknown dependency '{dependency}'")]
    UnknownDependency { task: TaskId, dependency: TaskId },

    #[error("task '{0}' cannot depend on itself")]
    SelfDependency(TaskId),

    #[error("task '{task}' has invalid duration {duration} (must be finite and > 0)")]
    InvalidDuration { task: TaskId, duration: SimTime },

    #[error("cycle detected in task DAG involving task '{0}'")]
    Cycle(TaskId),
}

#[derive(Error, Debug)]
pub enum DagsimError {
    #[error("Invalid graph: {0}")]
    InvalidGraph(#[from] GraphError),

    #[error("Invalid step: {0}")]
    InvalidStep(String),

    #[error("Run did not complete within {0} steps")]
    StepLimitExceeded(usize),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, DagsimError>;
