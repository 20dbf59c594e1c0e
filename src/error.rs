/*
 * Responsibility
 * - Application-wide AppError
 * - IntoResponse (HTTP status / headers / body)
 * - Rejected Basic credentials answer with a WWW-Authenticate challenge
 */
use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("unauthorized")]
    Unauthorized { challenge: HeaderValue },
    #[error("internal server error")]
    Internal,
}

impl AppError {
    pub fn unauthorized(challenge: &HeaderValue) -> Self {
        Self::Unauthorized {
            challenge: challenge.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Unauthorized { challenge } => (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, challenge)],
                "Unauthorized",
            )
                .into_response(),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
            )
                .into_response(),
        }
    }
}
