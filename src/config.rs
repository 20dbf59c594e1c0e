/*
 * Responsibility
 * - Load settings from the environment (listen port, Basic credentials, realm)
 * - Validate them (startup fails on invalid values)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_USERNAME: &str = "foo";
const DEFAULT_PASSWORD: &str = "foo";
const DEFAULT_REALM: &str = "Access to the site";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,

    pub basic_auth_username: String,
    pub basic_auth_password: String,
    pub basic_auth_realm: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("addr", &self.addr)
            .field("app_env", &self.app_env)
            .field("basic_auth_username", &self.basic_auth_username)
            .field("basic_auth_realm", &self.basic_auth_realm)
            .finish_non_exhaustive()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port: u16 = match lookup("PORT") {
            Some(s) => s.parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => DEFAULT_PORT,
        };

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = lookup("APP_ENV")
            .map(|v| AppEnv::parse(&v))
            .unwrap_or(AppEnv::Development);

        let basic_auth_username =
            lookup("BASIC_AUTH_USERNAME").unwrap_or_else(|| DEFAULT_USERNAME.to_string());
        // a ':' in the username would make the decoded pair ambiguous
        if basic_auth_username.is_empty() || basic_auth_username.contains(':') {
            return Err(ConfigError::Invalid("BASIC_AUTH_USERNAME"));
        }

        let basic_auth_password =
            lookup("BASIC_AUTH_PASSWORD").unwrap_or_else(|| DEFAULT_PASSWORD.to_string());

        let basic_auth_realm =
            lookup("BASIC_AUTH_REALM").unwrap_or_else(|| DEFAULT_REALM.to_string());
        if !is_valid_realm(&basic_auth_realm) {
            return Err(ConfigError::Invalid("BASIC_AUTH_REALM"));
        }

        Ok(Self {
            addr,
            app_env,
            basic_auth_username,
            basic_auth_password,
            basic_auth_realm,
        })
    }
}

// The realm is emitted inside a quoted-string, so no quote or escape.
fn is_valid_realm(realm: &str) -> bool {
    realm.chars().all(|c| c == ' ' || (c.is_ascii_graphic() && c != '"' && c != '\\'))
}
