//! Health report model

use serde::Serialize;
use serde_json::Value;

/// Combined backend + IA service health
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum HealthReport {
    Ok {
        backend: &'static str,
        ia_service: Value,
        status: &'static str,
        timestamp: i64,
    },
    Degraded {
        backend: &'static str,
        ia_service: &'static str,
        error: String,
        timestamp: i64,
    },
}

impl HealthReport {
    pub fn ok(ia_service: Value) -> Self {
        Self::Ok {
            backend: "healthy",
            ia_service,
            status: "all_services_ok",
            timestamp: chrono::Utc::now().timestamp(),
        }
    }

    pub fn unreachable(error: impl Into<String>) -> Self {
        Self::Degraded {
            backend: "healthy",
            ia_service: "unreachable",
            error: error.into(),
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}
