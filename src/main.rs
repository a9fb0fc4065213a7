//! Accident Prediction Gateway
//!
//! HTTP backend that validates accident descriptions, forwards them to the
//! IA prediction service and relays its answer.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────┐   JSON    ┌──────────────────────────┐   JSON    ┌────────────┐
//! │ Frontend │ ────────▶ │  Gateway (Axum)          │ ────────▶ │ IA service │
//! │          │ ◀──────── │  validate · remap · map  │ ◀──────── │ /predict   │
//! └──────────┘           │  errors                  │           │ /health    │
//!                        └──────────────────────────┘           └────────────┘
//! ```

mod config;
mod client;
mod models;
mod handlers;
mod middleware;
mod error;

#[cfg(test)]
mod test_support;

use anyhow::Context;
use axum::{
    Router,
    routing::{get, post},
    http::HeaderValue,
    middleware as axum_middleware,
};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
    compression::CompressionLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    init_tracing(&config);

    tracing::info!("Accident Prediction Gateway starting ({})...", config.environment);
    tracing::info!("IA service: {}", config.ia_service_url);
    tracing::info!("CORS origins: {}", config.cors_origins.join(", "));

    let state = AppState::new(config.clone());
    let app = create_router(state)?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!("🚀 Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

/// Initialize logging; JSON lines when `Config::json_logs` is set
fn init_tracing(config: &config::Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "accident_gateway=debug,tower_http=debug".into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.json_logs {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
    pub client: client::PredictionClient,
}

impl AppState {
    pub fn new(config: config::Config) -> Self {
        let client = client::PredictionClient::new(&config);
        Self { config, client }
    }
}

/// CORS restricted to the configured origins, credentials allowed
fn cors_layer(config: &config::Config) -> anyhow::Result<CorsLayer> {
    let origins = config
        .cors_origins
        .iter()
        .map(|o| {
            o.parse::<HeaderValue>()
                .with_context(|| format!("invalid CORS origin: {}", o))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}

/// Create the main router with all routes
fn create_router(state: AppState) -> anyhow::Result<Router> {
    let cors = cors_layer(&state.config)?;

    let api_routes = Router::new()
        .route("/api/predict", post(handlers::predict::predict))
        .route("/api/test-prediction", get(handlers::predict::test_prediction));

    Ok(Router::new()
        .route("/", get(handlers::root::info))
        .route("/health", get(handlers::health::check))
        .merge(api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::request_id::propagate))
        .with_state(state))
}
