// SPDX-License-Identifier: MIT

//! routewatch - per-route HTTP performance monitoring
//!
//! A lightweight library that instruments any axum service with per-route
//! performance metrics (latency, error rate, throughput) and periodically
//! logs aggregated summaries.
//!
//! # Features
//!
//! - Thread-safe per-route metrics store (durations, error counts, request
//!   counts) with consistent snapshots
//! - Drop-in axum middleware that times every request and records its final
//!   status
//! - Background reporter that logs one summary line per route on a fixed
//!   interval
//! - In-memory monitoring-data document with JSON read/replace endpoints
//!
//! # Usage
//!
//! ```rust,no_run
//! use axum::{middleware, routing::get, Router};
//! use routewatch::{MetricsStore, Reporter};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = MetricsStore::new();
//!
//!     // Log per-route summaries every 5 minutes
//!     let _reporter = Reporter::new(store.clone(), Duration::from_secs(300)).spawn();
//!
//!     let app: Router = Router::new()
//!         .route("/", get(|| async { "Hello, world!" }))
//!         .layer(middleware::from_fn_with_state(
//!             store.clone(),
//!             routewatch::middleware::track_metrics,
//!         ));
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

// Re-export public modules
pub mod config;
pub mod metrics;
pub mod middleware;
pub mod monitoring;
pub mod observer;
pub mod reporter;
pub mod types;

// Re-export commonly used types

// Metrics core
pub use metrics::{MetricsStore, RouteStats};
pub use observer::ResponseObserver;
pub use reporter::{Reporter, ReporterHandle};

// Configuration
pub use config::Config;

// Monitoring-data store
pub use monitoring::MonitoringStore;

// Error types
pub use types::{ApiError, AppState, ErrorResponse};

#[cfg(test)]
mod monitoring_test;
#[cfg(test)]
mod observer_test;
