//! IA Service Client
//!
//! HTTP client for the downstream prediction service.

use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;

use crate::config::Config;
use crate::models::{IaFeatures, PredictionResult};

/// IA client errors
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// No response was received (connect, timeout, DNS)
    #[error("{0}")]
    Network(String),

    /// The service answered with an unexpected status
    #[error("status {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The response body could not be decoded
    #[error("{0}")]
    Parse(String),

    /// The request could not be built
    #[error("{0}")]
    Request(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            ClientError::Request(err.to_string())
        } else if err.is_decode() {
            ClientError::Parse(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

/// Client for the IA prediction service
#[derive(Debug, Clone)]
pub struct PredictionClient {
    base_url: String,
    health_timeout: Duration,
    predict_timeout: Duration,
    http_client: reqwest::Client,
}

impl PredictionClient {
    /// Create new client from configuration
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.ia_service_url.clone(),
            health_timeout: config.health_timeout,
            predict_timeout: config.predict_timeout,
            http_client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the IA service health document
    pub async fn health(&self) -> Result<Value, ClientError> {
        let url = format!("{}/health", self.base_url);

        let response = self.http_client
            .get(&url)
            .timeout(self.health_timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Upstream { status: status.as_u16(), body });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Parse(e.to_string()))
    }

    /// Submit features to `POST /predict`
    pub async fn predict(&self, features: &IaFeatures) -> Result<PredictionResult, ClientError> {
        let url = format!("{}/predict", self.base_url);

        let response = self.http_client
            .post(&url)
            .timeout(self.predict_timeout)
            .json(features)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("IA prediction failed ({}): {}", status.as_u16(), body);
            return Err(ClientError::Upstream { status: status.as_u16(), body });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Parse(e.to_string()))
    }
}
