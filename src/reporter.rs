// SPDX-License-Identifier: MIT

//! Periodic metrics reporter
//!
//! A long-lived background task that wakes on a fixed interval, snapshots the
//! metrics store, and logs one summary line per route: route, average
//! response time, error count, request count. An empty store produces no
//! output for that cycle.

use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::info;

use crate::metrics::MetricsStore;

/// Background reporter over a [`MetricsStore`].
pub struct Reporter {
    store: MetricsStore,
    interval: Duration,
}

/// Handle to a spawned reporter task.
///
/// Normal operation never stops the reporter; [`stop`](Self::stop) exists so
/// a shutdown path can cancel it cleanly.
pub struct ReporterHandle {
    handle: JoinHandle<()>,
}

impl ReporterHandle {
    /// Cancel the reporter task.
    pub fn stop(&self) {
        self.handle.abort();
    }

    /// Whether the task has exited (only after [`stop`](Self::stop)).
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Reporter {
    pub fn new(store: MetricsStore, interval: Duration) -> Self {
        Self { store, interval }
    }

    /// Run one reporting cycle: take a single snapshot and log one summary
    /// line per route. Returns the emitted lines.
    ///
    /// The snapshot uses the store's shared-read path, so in-flight requests
    /// are blocked at most for the duration of taking the snapshot.
    pub fn run_cycle(&self) -> Vec<String> {
        let snapshot = self.store.snapshot();

        let mut lines = Vec::with_capacity(snapshot.len());
        for (route, stats) in &snapshot {
            let line = stats.summary_line(route);
            info!("{}", line);
            lines.push(line);
        }
        lines
    }

    /// Spawn the reporting loop: one cycle per interval tick, forever.
    pub fn spawn(self) -> ReporterHandle {
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            // The first tick of a tokio interval fires immediately; skip it
            // so the first report lands one full interval after startup.
            ticker.tick().await;

            loop {
                ticker.tick().await;
                self.run_cycle();
            }
        });

        ReporterHandle { handle }
    }
}
