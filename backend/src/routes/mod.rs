//! Route definitions for the Compliance Certificate Dashboard proxy

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Certificate record relay
        .route(
            "/records",
            get(handlers::list_records)
                .post(handlers::mutate_records)
                .fallback(handlers::method_not_allowed),
        )
}
