// SPDX-License-Identifier: MIT

//! routewatch API monitoring server
//!
//! A lightweight HTTP service that:
//! - Records latency, error count, and throughput for every route it serves
//! - Logs one aggregated summary line per route on a fixed interval
//! - Exposes a small monitoring-data document over JSON endpoints
//!
//! All configuration comes from environment variables; missing or invalid
//! values fall back to defaults instead of failing startup.

use anyhow::Context;
use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::info;

// Import from the library
use routewatch::{
    middleware, monitoring, types::AppState, Config, MetricsStore, MonitoringStore, Reporter,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .json()
        .init();

    info!(
        "starting routewatch api monitoring server v{}",
        env!("CARGO_PKG_VERSION")
    );

    // get configuration from environment
    let config = Config::from_env();
    if let Err(e) = config.validate() {
        return Err(anyhow::anyhow!("invalid configuration: {}", e));
    }

    info!("api port: {}", config.api_port);
    info!("report interval: {:?}", config.report_interval);
    if config.monitoring_seed.is_some() {
        info!("monitoring data seeded from environment");
    }

    // create the metrics store and start the periodic reporter
    let metrics = MetricsStore::new();
    let _reporter = Reporter::new(metrics.clone(), config.report_interval).spawn();

    // create application state
    let state = AppState {
        metrics: metrics.clone(),
        monitoring: MonitoringStore::with_seed(config.monitoring_seed),
    };

    // build the router; the metrics middleware wraps every route
    let app = Router::new()
        .route("/", get(monitoring::home_page))
        .route("/health", get(monitoring::health_check))
        .route("/data", get(monitoring::get_monitoring_data))
        .route("/data/update", post(monitoring::update_monitoring_data))
        .with_state(state)
        .layer(axum_middleware::from_fn_with_state(
            metrics,
            middleware::track_metrics,
        ))
        .layer(TraceLayer::new_for_http());

    // start server
    let addr = format!("0.0.0.0:{}", config.api_port);

    info!("routewatch listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    axum::serve(listener, app.into_make_service())
        .await
        .context("server error")?;

    Ok(())
}
