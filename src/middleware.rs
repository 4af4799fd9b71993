// SPDX-License-Identifier: MIT

//! Middleware for metrics collection

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

use crate::{metrics::MetricsStore, observer::ResponseObserver};

/// Middleware to track per-route request metrics.
///
/// Times the downstream handler, captures its final status through a
/// [`ResponseObserver`], and records path, elapsed wall-clock time, and
/// status into the injected [`MetricsStore`]. The response passes through
/// unchanged; handler panics propagate.
///
/// Attach with `axum::middleware::from_fn_with_state`:
///
/// ```rust,no_run
/// use axum::{middleware, routing::get, Router};
/// use routewatch::MetricsStore;
///
/// let store = MetricsStore::new();
/// let app: Router = Router::new()
///     .route("/", get(|| async { "ok" }))
///     .layer(middleware::from_fn_with_state(
///         store.clone(),
///         routewatch::middleware::track_metrics,
///     ));
/// ```
pub async fn track_metrics(
    State(store): State<MetricsStore>,
    req: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let path = req.uri().path().to_string();

    let mut observer = ResponseObserver::new();

    // Process the request
    let response = next.run(req).await;

    // First commit wins; the handler's status is the only commit here.
    observer.set_status(response.status());

    store.record(&path, start.elapsed(), observer.status());

    response
}
