// src/render/console.rs

use std::fmt::Write as _;
use std::future::Future;
use std::io::Write;
use std::pin::Pin;

use clap::ValueEnum;

use crate::errors::{Error, Result};

use super::{Frame, SnapshotSink};

/// How frames are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line per frame, plus event lines.
    #[default]
    Text,
    /// One JSON object per frame (JSON lines).
    Json,
}

/// Writes frames to stdout (or any writer).
pub struct ConsoleSink {
    format: OutputFormat,
    out: Box<dyn Write + Send>,
}

impl ConsoleSink {
    pub fn new(format: OutputFormat, out: Box<dyn Write + Send>) -> Self {
        Self { format, out }
    }

    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(format, Box::new(std::io::stdout()))
    }

    fn write_frame(&mut self, frame: &Frame) -> Result<()> {
        let text = match self.format {
            OutputFormat::Text => render_text(frame),
            OutputFormat::Json => serde_json::to_string(frame).map_err(Error::from)?,
        };
        writeln!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(())
    }
}

impl SnapshotSink for ConsoleSink {
    fn publish(&mut self, frame: Frame) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        // Writes are tiny and synchronous; no need to hop to a blocking pool.
        let result = self.write_frame(&frame);
        Box::pin(async move { result })
    }
}

/// Human-readable rendering of a frame.
///
/// ```text
///   done   fetch
///   start  parse on W0
/// [run 0] t=300.0  done 1/8  running 2  ready 0  pending 5  util 100.0%  | W0:parse W1:lint
/// ```
pub fn render_text(frame: &Frame) -> String {
    let mut out = String::new();

    if let Some(report) = &frame.report {
        for task in &report.completed {
            let _ = writeln!(out, "  done   {task}");
        }
        for d in &report.dispatched {
            let _ = writeln!(out, "  start  {} on {}", d.task, d.worker);
        }
    }

    let snap = &frame.snapshot;
    let stats = &snap.stats;
    let _ = write!(
        out,
        "[run {}] t={:.1}  done {}/{}  running {}  ready {}  pending {}  util {:.1}%  |",
        snap.run_id,
        snap.clock,
        stats.completed_count,
        stats.total_tasks,
        stats.running_count,
        stats.ready_count,
        stats.pending_count,
        stats.worker_utilization,
    );
    for worker in &snap.workers {
        let task = worker.current_task.as_deref().unwrap_or("-");
        let _ = write!(out, " {}:{}", worker.id, task);
    }
    if snap.complete {
        out.push_str("  (complete)");
    }

    out
}
