// src/engine/ticker.rs

//! Wall-clock ticker feeding `Tick` events into the runtime.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::debug;

use super::DriverEvent;

/// Spawn a task that sends a `Tick` every `period`, carrying the measured
/// wall-clock time since the previous tick in milliseconds.
///
/// The task ends when the receiving side of `tx` is dropped.
pub fn spawn_ticker(tx: mpsc::Sender<DriverEvent>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        // The first tick completes immediately; use it as the time origin.
        let mut last = interval.tick().await;

        loop {
            let now: Instant = interval.tick().await;
            let real_elapsed = now.duration_since(last).as_nanos() as f64 / 1_000_000.0;
            last = now;

            if tx.send(DriverEvent::Tick { real_elapsed }).await.is_err() {
                debug!("runtime gone; ticker stopping");
                break;
            }
        }
    })
}
