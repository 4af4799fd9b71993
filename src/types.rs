// SPDX-License-Identifier: MIT

//! Common types and errors used throughout the routewatch library

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::{metrics::MetricsStore, monitoring::MonitoringStore};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Per-route metrics accumulator (written by the middleware)
    pub metrics: MetricsStore,
    /// Monitoring-data document store
    pub monitoring: MonitoringStore,
}

/// Error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: Option<String>,
}

/// API error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("No monitoring data available")]
    NoMonitoringData,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            ApiError::NoMonitoringData => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::InternalError(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(ErrorResponse {
            error: error_message,
            details: None,
        });

        (status, body).into_response()
    }
}
