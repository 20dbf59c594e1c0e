/*
 * Responsibility
 * - Shared context attached to the Router (AppState)
 *   - the Basic credential verifier, built once at startup
 * - Cloned per request (Arc inside)
 */
use std::sync::Arc;

use crate::services::auth::BasicAuthVerifier;

#[derive(Clone, Debug)]
pub struct AppState {
    pub auth: Arc<BasicAuthVerifier>,
}

impl AppState {
    pub fn new(auth: Arc<BasicAuthVerifier>) -> Self {
        Self { auth }
    }
}
