//! Health check route

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Serialize)]
pub struct HealthResponse {
    ok: bool,
}

/// GET /health - constant liveness acknowledgment
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}
