// src/render/mod.rs

//! Downstream rendering of scheduler state.
//!
//! The scheduler never draws anything. The runtime hands a [`Frame`] to a
//! [`SnapshotSink`] after every step; what happens next (console lines, JSON
//! for a browser, a recording in tests) is up to the sink.

pub mod backend;
pub mod console;

use serde::Serialize;

use crate::dag::{RunSnapshot, StepReport};

pub use backend::SnapshotSink;
pub use console::{render_text, ConsoleSink, OutputFormat};

/// One published frame: the full snapshot plus what the last step changed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    /// `None` for frames published at run start (initial or after a reset).
    pub report: Option<StepReport>,
    pub snapshot: RunSnapshot,
}

impl Frame {
    pub fn initial(snapshot: RunSnapshot) -> Self {
        Self {
            report: None,
            snapshot,
        }
    }

    pub fn after_step(report: StepReport, snapshot: RunSnapshot) -> Self {
        Self {
            report: Some(report),
            snapshot,
        }
    }
}
