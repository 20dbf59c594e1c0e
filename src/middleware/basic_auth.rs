//! Basic credential check → reject with a challenge, or pass the request through.
//!
//! The rejection reason is logged but never changes the response: a malformed
//! header and a wrong password both get the same 401.

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::error::AppError;
use crate::state::AppState;

/// Gate every route of `router` behind Basic auth.
///
/// ```ignore
/// let protected = Router::new().route("/secure", get(secure));
/// let protected = middleware::basic_auth::apply(protected, state.clone());
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.route_layer(middleware::from_fn_with_state(state, basic_auth_middleware))
}

async fn basic_auth_middleware(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    if let Err(err) = state.auth.check(req.headers()) {
        tracing::warn!(
            error = %err,
            method = %req.method(),
            path = %req.uri().path(),
            "basic auth rejected"
        );
        return Err(AppError::unauthorized(state.auth.challenge()));
    }

    tracing::debug!(
        user = %state.auth.credentials().username(),
        "basic auth accepted"
    );

    Ok(next.run(req).await)
}
