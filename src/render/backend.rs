// src/render/backend.rs

//! Pluggable snapshot sink abstraction.
//!
//! The runtime talks to a `SnapshotSink` instead of writing to stdout
//! directly. This makes it easy to swap in a recording sink in tests while
//! keeping the console implementation in [`console`](super::console).

use std::future::Future;
use std::pin::Pin;

use crate::errors::Result;

use super::Frame;

/// Trait abstracting where published frames go.
pub trait SnapshotSink: Send {
    /// Deliver one frame to the renderer.
    fn publish(&mut self, frame: Frame) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>>;
}
