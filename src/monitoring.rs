// SPDX-License-Identifier: MIT

//! Monitoring-data store and HTTP handlers
//!
//! A small in-memory JSON document that external tooling reads and replaces
//! wholesale, plus the home-page and health endpoints. The document can be
//! seeded at startup from the `MONITORING_DATA` environment variable.

use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::{Arc, RwLock};
use tracing::info;

use crate::types::{ApiError, AppState};

/// Shared monitoring-data document.
///
/// Readers get the whole document; writers replace it wholesale. The lock is
/// never held across an await point.
#[derive(Debug, Clone, Default)]
pub struct MonitoringStore {
    data: Arc<RwLock<Map<String, Value>>>,
}

impl MonitoringStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with an initial document.
    pub fn with_seed(seed: Option<Map<String, Value>>) -> Self {
        Self {
            data: Arc::new(RwLock::new(seed.unwrap_or_default())),
        }
    }

    /// The current document, or `None` if nothing has been stored yet.
    pub fn get(&self) -> Option<Map<String, Value>> {
        let data = match self.data.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if data.is_empty() {
            None
        } else {
            Some(data.clone())
        }
    }

    /// Replace the document wholesale.
    pub fn replace(&self, new_data: Map<String, Value>) {
        let mut data = match self.data.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *data = new_data;
    }
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub message: String,
}

/// Home page endpoint
pub async fn home_page() -> &'static str {
    info!("endpoint hit: home page");
    "Welcome to the HomePage!"
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "Everything is OK!".to_string(),
    })
}

/// Return the current monitoring-data document
pub async fn get_monitoring_data(
    State(state): State<AppState>,
) -> Result<Json<Map<String, Value>>, ApiError> {
    match state.monitoring.get() {
        Some(data) => Ok(Json(data)),
        None => Err(ApiError::NoMonitoringData),
    }
}

/// Replace the monitoring-data document from a JSON object body
pub async fn update_monitoring_data(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let new_data = match body {
        Value::Object(map) => map,
        _ => {
            return Err(ApiError::InvalidRequest(
                "monitoring data must be a JSON object".to_string(),
            ))
        }
    };

    state.monitoring.replace(new_data.clone());
    info!("monitoring data updated ({} keys)", new_data.len());

    Ok(Json(new_data))
}
