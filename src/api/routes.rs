/*
 * Responsibility
 * - URL structure of the gate
 * - /secure sits behind Basic auth (route_layer, so unknown paths stay 404)
 */
use axum::{Router, routing::get};

use crate::api::handlers::secure::secure;
use crate::middleware::basic_auth;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new().route("/secure", get(secure));

    basic_auth::apply(protected, state)
}
