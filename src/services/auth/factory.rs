/// Factory: build `BasicAuthVerifier` from application `Config`.
use std::sync::Arc;

use crate::config::Config;
use crate::error::AppError;
use crate::services::auth::{BasicAuthVerifier, Credentials};

pub fn build_basic_auth_verifier(config: &Config) -> Result<Arc<BasicAuthVerifier>, AppError> {
    let credentials = Credentials::new(&config.basic_auth_username, &config.basic_auth_password);

    let verifier = BasicAuthVerifier::new(credentials, &config.basic_auth_realm).map_err(|err| {
        tracing::error!(error = ?err, "invalid basic auth realm");
        AppError::Internal
    })?;

    Ok(Arc::new(verifier))
}
