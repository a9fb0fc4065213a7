//! Error handling

use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde_json::json;

use crate::client::ClientError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// IA service unreachable or timed out
    #[error("IA service unavailable: {0}")]
    ServiceUnavailable(String),

    /// IA service answered with a non-200 status
    #[error("IA service error: {body}")]
    Upstream { status: u16, body: String },

    /// Request body does not match the accident schema
    #[error("Invalid accident payload: {0}")]
    InvalidPayload(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AppError::InvalidPayload(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = self.to_string();

        if status.is_server_error() {
            tracing::error!("{}", detail);
        } else {
            tracing::warn!("{}", detail);
        }

        let body = Json(json!({
            "detail": detail,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Network(msg) => AppError::ServiceUnavailable(msg),
            ClientError::Upstream { status, body } => AppError::Upstream { status, body },
            ClientError::Parse(msg) | ClientError::Request(msg) => AppError::Internal(msg),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidPayload(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::InvalidPayload(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_mapping() {
        let err: AppError = ClientError::Network("connection refused".into()).into();
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.to_string(), "IA service unavailable: connection refused");

        let err: AppError = ClientError::Upstream { status: 404, body: "Not Found".into() }.into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "IA service error: Not Found");

        let err: AppError = ClientError::Parse("missing field `confidence`".into()).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("confidence"));
    }

    #[test]
    fn test_invalid_upstream_status_becomes_bad_gateway() {
        let err = AppError::Upstream { status: 42, body: String::new() };
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_response_body() {
        let response = AppError::ServiceUnavailable("timed out".into()).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["detail"], "IA service unavailable: timed out");
        assert_eq!(body["status"], 503);
    }
}
