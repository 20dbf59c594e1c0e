/*
 * Responsibility
 * - GET /secure
 * - Only reached once the Basic auth middleware has accepted the request
 */
use axum::{http::StatusCode, response::IntoResponse};

pub const WELCOME: &str = "Welcome, authorized user!";

pub async fn secure() -> impl IntoResponse {
    (StatusCode::OK, WELCOME)
}
