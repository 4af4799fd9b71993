// SPDX-License-Identifier: MIT

//! Environment-driven configuration
//!
//! Every value has a sensible default; a missing or unparseable variable
//! falls back to the default instead of failing startup.

use serde_json::{Map, Value};
use std::time::Duration;
use tracing::warn;

/// Default reporting interval: 5 minutes.
pub const DEFAULT_REPORT_INTERVAL_SECS: u64 = 300;
/// Default API listen port.
pub const DEFAULT_API_PORT: u16 = 8080;

/// Service configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// How often the reporter logs per-route summaries
    pub report_interval: Duration,
    /// TCP port the HTTP server listens on
    pub api_port: u16,
    /// Initial monitoring-data document, if one was seeded
    pub monitoring_seed: Option<Map<String, Value>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            report_interval: Duration::from_secs(DEFAULT_REPORT_INTERVAL_SECS),
            api_port: DEFAULT_API_PORT,
            monitoring_seed: None,
        }
    }
}

impl Config {
    /// Create configuration from environment variables
    ///
    /// Environment variables:
    /// - `REPORT_INTERVAL_SECS`: reporting interval in seconds (default: 300);
    ///   zero or unparseable values fall back to the default
    /// - `API_PORT`: HTTP listen port (default: 8080)
    /// - `MONITORING_DATA`: optional JSON object seeding the monitoring-data
    ///   store; ignored with a warning if it does not parse as an object
    pub fn from_env() -> Self {
        let report_interval = std::env::var("REPORT_INTERVAL_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|&secs| secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_REPORT_INTERVAL_SECS));

        let api_port = std::env::var("API_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_API_PORT);

        let monitoring_seed = std::env::var("MONITORING_DATA").ok().and_then(|raw| {
            match serde_json::from_str::<Value>(&raw) {
                Ok(Value::Object(map)) => Some(map),
                Ok(_) => {
                    warn!("MONITORING_DATA is not a JSON object, ignoring");
                    None
                }
                Err(e) => {
                    warn!("MONITORING_DATA is not valid JSON, ignoring: {}", e);
                    None
                }
            }
        });

        Self {
            report_interval,
            api_port,
            monitoring_seed,
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.report_interval.is_zero() {
            return Err("report_interval must be greater than 0".to_string());
        }

        if self.api_port == 0 {
            return Err("api_port must be greater than 0".to_string());
        }

        Ok(())
    }
}
