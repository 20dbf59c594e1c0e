use std::fmt;
use std::net::SocketAddr;

const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, PartialEq, Eq)]
pub struct ConfigError(&'static str);

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid configuration: {}", self.0)
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_port(std::env::var("STATUS_PORT").ok().as_deref())
    }

    // Listens on all interfaces.
    fn from_port(port: Option<&str>) -> Result<Self, ConfigError> {
        let port: u16 = match port {
            Some(s) => s.parse().map_err(|_| ConfigError("STATUS_PORT"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            addr: SocketAddr::from(([0, 0, 0, 0], port)),
        })
    }
}
