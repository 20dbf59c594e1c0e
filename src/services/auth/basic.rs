//! HTTP Basic credential verification.
//!
//! The verifier is a pure function of the request headers and the credential
//! pair it was built with. Every failure is fail-closed: `verify` answers
//! `false`, `check` answers the reason so the caller can log it.

use std::fmt;

use axum::http::{HeaderMap, HeaderValue, header};
use base64::{Engine, engine::general_purpose::STANDARD};
use thiserror::Error;

const BASIC_PREFIX: &str = "Basic ";

/// The single username/password pair accepted by the gate.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

// never print the password
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Why a request was rejected.
///
/// Only used for diagnostics; every variant maps to the same 401.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BasicAuthError {
    #[error("authorization header is missing")]
    MissingHeader,
    #[error("authorization header is not visible ascii")]
    MalformedHeader,
    #[error("authorization scheme is not Basic")]
    UnsupportedScheme,
    #[error("credentials are not valid base64: {0}")]
    InvalidEncoding(#[from] base64::DecodeError),
    #[error("decoded credentials are not valid utf-8")]
    InvalidUtf8,
    #[error("decoded credentials have no ':' separator")]
    MissingSeparator,
    #[error("username or password mismatch")]
    InvalidCredentials,
}

impl From<std::string::FromUtf8Error> for BasicAuthError {
    fn from(_: std::string::FromUtf8Error) -> Self {
        Self::InvalidUtf8
    }
}

/// Decodes a `Basic <base64(user:pass)>` header value into its two parts.
///
/// The split happens at the first `:` so the password may contain colons.
pub fn parse_basic(value: &str) -> Result<(String, String), BasicAuthError> {
    let encoded = value
        .strip_prefix(BASIC_PREFIX)
        .ok_or(BasicAuthError::UnsupportedScheme)?;

    let decoded = String::from_utf8(STANDARD.decode(encoded)?)?;

    let (username, password) = decoded
        .split_once(':')
        .ok_or(BasicAuthError::MissingSeparator)?;

    Ok((username.to_string(), password.to_string()))
}

#[derive(Debug, Clone)]
pub struct BasicAuthVerifier {
    credentials: Credentials,
    challenge: HeaderValue,
}

impl BasicAuthVerifier {
    /// Builds a verifier for `credentials`, answering rejected requests with
    /// `WWW-Authenticate: Basic realm="<realm>"`.
    pub fn new(
        credentials: Credentials,
        realm: &str,
    ) -> Result<Self, header::InvalidHeaderValue> {
        let challenge = HeaderValue::from_str(&format!("Basic realm=\"{realm}\""))?;
        Ok(Self {
            credentials,
            challenge,
        })
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Value for the `WWW-Authenticate` response header.
    pub fn challenge(&self) -> &HeaderValue {
        &self.challenge
    }

    pub fn check(&self, headers: &HeaderMap) -> Result<(), BasicAuthError> {
        let value = headers
            .get(header::AUTHORIZATION)
            .ok_or(BasicAuthError::MissingHeader)?
            .to_str()
            .map_err(|_| BasicAuthError::MalformedHeader)?;

        let (username, password) = parse_basic(value)?;

        if self.credentials.matches(&username, &password) {
            Ok(())
        } else {
            Err(BasicAuthError::InvalidCredentials)
        }
    }

    /// `true` iff the headers carry exactly the configured credentials.
    pub fn verify(&self, headers: &HeaderMap) -> bool {
        self.check(headers).is_ok()
    }
}
