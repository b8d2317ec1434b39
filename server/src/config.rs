//! Server configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub static_dir: PathBuf,
    pub compression: bool,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `STATIC_DIR`: default `public/` next to the workspace root
    /// - `COMPRESSION`: `1/true/yes/on` or `0/false/no/off`, default on
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").map_or(Ok(DEFAULT_HOST), |raw| parse_var("HOST", raw))?;
        let port = lookup("PORT").map_or(Ok(DEFAULT_PORT), |raw| parse_var("PORT", raw))?;
        let static_dir = lookup("STATIC_DIR").map_or_else(default_static_dir, PathBuf::from);
        let compression = match lookup("COMPRESSION") {
            Some(raw) => match parse_bool(&raw) {
                Some(value) => value,
                None => return Err(ConfigError::Invalid { var: "COMPRESSION", value: raw }),
            },
            None => true,
        };

        Ok(Self { host, port, static_dir, compression })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<T: FromStr>(var: &'static str, raw: String) -> Result<T, ConfigError> {
    match raw.trim().parse() {
        Ok(value) => Ok(value),
        Err(_) => Err(ConfigError::Invalid { var, value: raw }),
    }
}

fn default_static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../public")
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
