//! Test helpers: in-process IA service stubs and router drivers

use axum::{body::Body, http::{Request, StatusCode}, Router};
use serde_json::Value;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::ServiceExt;

use crate::config::Config;
use crate::{create_router, AppState};

/// Serve `router` on an ephemeral port, returning its base URL
pub async fn spawn_stub(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Base URL of a port nothing listens on
pub async fn unused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Gateway router pointed at `ia_service_url`
pub fn app_for(ia_service_url: String) -> Router {
    let config = Config {
        ia_service_url,
        health_timeout: Duration::from_secs(2),
        predict_timeout: Duration::from_secs(2),
        ..Config::default()
    };
    create_router(AppState::new(config)).unwrap()
}

/// Drive one request through `app`, decoding the JSON body
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}
