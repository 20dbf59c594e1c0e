/*
 * Responsibility
 * - GET / (liveness check for development/debugging)
 * - No auth, no branching
 */
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StatusBody {
    pub status: &'static str,
}

pub async fn status() -> impl IntoResponse {
    (StatusCode::OK, Json(StatusBody { status: "ok" }))
}
