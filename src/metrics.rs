// SPDX-License-Identifier: MIT

//! Per-route metrics aggregation
//!
//! This module provides the shared store behind the metrics middleware and
//! the periodic reporter:
//! - response-time samples per route, in arrival order
//! - error counts per route (any final status other than 200 OK)
//! - request counts per route
//!
//! The store is a cheap `Clone` handle; the middleware writes through it and
//! the reporter reads consistent snapshots from it.

use axum::http::StatusCode;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tracing::warn;

#[derive(Debug, Default)]
struct StoreInner {
    durations: HashMap<String, Vec<Duration>>,
    errors: HashMap<String, u64>,
    requests: HashMap<String, u64>,
}

/// Aggregated view of one route inside a [`MetricsStore`] snapshot.
///
/// Only routes with at least one recorded request appear in a snapshot, so
/// `requests` is never zero and `average` is always well defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteStats {
    /// Mean response time over all samples for the route.
    pub average: Duration,
    /// Requests whose final status was not 200 OK.
    pub errors: u64,
    /// All requests observed for the route.
    pub requests: u64,
}

impl RouteStats {
    /// One human-readable summary line: route, average duration, error count,
    /// request count. This is the text the reporter logs each cycle and the
    /// format other tooling may parse.
    pub fn summary_line(&self, route: &str) -> String {
        format!(
            "{} - avg response time: {:?}, errors: {}, requests: {}",
            route, self.average, self.errors, self.requests
        )
    }
}

/// Thread-safe per-route metrics accumulator.
///
/// Many concurrent writers (one per in-flight request) and an occasional
/// reader (the reporter) share one `RwLock`; each [`record`](Self::record)
/// call updates sample list, request count, and error count under a single
/// exclusive acquisition so readers never observe a torn update. The lock is
/// never held across an await point.
#[derive(Debug, Clone, Default)]
pub struct MetricsStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl MetricsStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed request: append the duration sample, bump the
    /// request count, and bump the error count iff the final status was not
    /// 200 OK. Atomic with respect to concurrent `record` and `snapshot`.
    pub fn record(&self, route: &str, elapsed: Duration, status: StatusCode) {
        let mut inner = match self.inner.write() {
            Ok(guard) => guard,
            Err(poisoned) => {
                // The lock only guards map mutation, which cannot panic; a
                // poisoned guard still holds consistent state.
                warn!("metrics store lock poisoned, recovering");
                poisoned.into_inner()
            }
        };

        inner
            .durations
            .entry(route.to_string())
            .or_default()
            .push(elapsed);

        if status != StatusCode::OK {
            *inner.errors.entry(route.to_string()).or_insert(0) += 1;
        }

        *inner.requests.entry(route.to_string()).or_insert(0) += 1;
    }

    /// Take a read-consistent snapshot of every route seen so far.
    ///
    /// Writers are blocked only while the snapshot is built. Routes with no
    /// samples are absent from the result, never present with a zero count.
    pub fn snapshot(&self) -> HashMap<String, RouteStats> {
        let inner = match self.inner.read() {
            Ok(guard) => guard,
            Err(poisoned) => {
                warn!("metrics store lock poisoned, recovering");
                poisoned.into_inner()
            }
        };

        inner
            .durations
            .iter()
            .map(|(route, samples)| {
                let total: Duration = samples.iter().sum();
                let stats = RouteStats {
                    average: total / samples.len() as u32,
                    errors: inner.errors.get(route).copied().unwrap_or(0),
                    requests: inner.requests.get(route).copied().unwrap_or(0),
                };
                (route.clone(), stats)
            })
            .collect()
    }

    /// Duration samples recorded for `route`, in arrival order.
    pub fn durations(&self, route: &str) -> Vec<Duration> {
        let inner = match self.inner.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        inner.durations.get(route).cloned().unwrap_or_default()
    }
}
