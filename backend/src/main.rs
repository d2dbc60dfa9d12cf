//! Compliance Certificate Dashboard - Proxy Server
//!
//! Thin HTTP boundary between the dashboard frontend and the
//! spreadsheet-backed script service that is the system of record. The proxy
//! relays requests and responses; all domain logic lives in the shared crate.

use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod external;
mod handlers;
mod routes;

pub use config::Config;
use external::ScriptClient;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub upstream: ScriptClient,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ccd_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Compliance Certificate Dashboard proxy");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!("Upstream store: {}", config.upstream.url);

    let upstream = ScriptClient::new(&config.upstream)?;

    let state = AppState {
        upstream,
        config: Arc::new(config.clone()),
    };

    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Compliance Certificate Dashboard API v1.0"
}
