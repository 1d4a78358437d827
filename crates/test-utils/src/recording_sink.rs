use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use dagsim::errors::Result;
use dagsim::render::{Frame, SnapshotSink};

/// A sink that records every published frame for later assertions.
#[derive(Clone, Default)]
pub struct RecordingSink {
    frames: Arc<Mutex<Vec<Frame>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the recorded frames; stays valid after the sink has
    /// been moved into a runtime.
    pub fn frames(&self) -> Arc<Mutex<Vec<Frame>>> {
        Arc::clone(&self.frames)
    }
}

impl SnapshotSink for RecordingSink {
    fn publish(&mut self, frame: Frame) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        let frames = Arc::clone(&self.frames);
        Box::pin(async move {
            frames.lock().unwrap().push(frame);
            Ok(())
        })
    }
}
