//! Host configuration from the process environment.
//!
//! `.env` is loaded by `main` before this runs; real environment variables
//! win over the file.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, SocketAddr};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT {0:?}")]
    InvalidPort(String),
    #[error("invalid HOST {0:?}")]
    InvalidHost(String),
}

/// Where the SSR host listens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Read `HOST` and `PORT` from the environment.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when either value is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when either value is present but malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let ip: IpAddr = host.trim().parse().map_err(|_| ConfigError::InvalidHost(host.clone()))?;
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        Ok(Self { addr: SocketAddr::new(ip, port) })
    }
}
