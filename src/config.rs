//! Host configuration parsed from environment variables.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid port number.
    #[error("invalid PORT {value:?}: {reason}")]
    InvalidPort { value: String, reason: String },

    /// `HOST` is set but is not an IP address.
    #[error("invalid HOST {value:?}: {reason}")]
    InvalidHost { value: String, reason: String },

    /// `[package.metadata.leptos]` is missing or malformed.
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub assets_dir: PathBuf,
}

impl ServerConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: bind address (default `0.0.0.0`)
    /// - `PORT`: bind port (default 3000)
    /// - `ASSETS_DIR`: static files served for unmatched paths
    ///   (default `<manifest>/public`)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when `HOST` or `PORT` cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`], reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when `HOST` or `PORT` cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = parse_host(lookup("HOST").as_deref())?;
        let port = parse_port(lookup("PORT").as_deref())?;
        let assets_dir = lookup("ASSETS_DIR")
            .filter(|v| !v.trim().is_empty())
            .map_or_else(default_assets_dir, PathBuf::from);

        Ok(Self { addr: SocketAddr::new(host, port), assets_dir })
    }
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public")
}

fn parse_host(raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    let value = raw.map_or(DEFAULT_HOST, str::trim);
    value
        .parse()
        .map_err(|e: std::net::AddrParseError| ConfigError::InvalidHost { value: value.to_owned(), reason: e.to_string() })
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    let Some(value) = raw.map(str::trim) else {
        return Ok(DEFAULT_PORT);
    };
    value
        .parse()
        .map_err(|e: std::num::ParseIntError| ConfigError::InvalidPort { value: value.to_owned(), reason: e.to_string() })
}
