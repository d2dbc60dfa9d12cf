//! HTTP handlers for the `/api/records` proxy boundary
//!
//! The proxy performs no domain logic: GET relays the upstream list, POST
//! forwards the `{action, data, id}` envelope verbatim after checking that
//! `action` is present, and upstream status codes are relayed as-is.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::AppState;

/// GET /api/records - relay the upstream certificate list
pub async fn list_records(State(state): State<AppState>) -> AppResult<Response> {
    let (status, body) = state.upstream.fetch_records().await?;
    tracing::debug!(status, "relayed list from upstream");
    Ok(relay(status, body))
}

/// POST /api/records - forward a mutation envelope to the upstream store
pub async fn mutate_records(
    State(state): State<AppState>,
    Json(envelope): Json<Value>,
) -> AppResult<Response> {
    let action = envelope
        .get("action")
        .and_then(Value::as_str)
        .unwrap_or("")
        .trim();
    if action.is_empty() {
        return Err(AppError::ActionRequired);
    }

    let (status, body) = state.upstream.forward_action(&envelope).await?;
    tracing::debug!(action, status, "relayed action to upstream");
    Ok(relay(status, body))
}

/// Fallback for unsupported methods on /api/records
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

fn relay(status: u16, body: Value) -> Response {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
    (status, Json(body)).into_response()
}
