use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// Environment variable overriding the listen address.
pub const ADDR_ENV: &str = "ADDR";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// CORS origins. A `"*"` entry allows any origin without credentials.
    pub allowed_origins: Vec<String>,
    pub request_timeout_secs: u64,
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8080)),
            allowed_origins: vec![
                "http://localhost:5173".into(),
                "http://localhost:3000".into(),
            ],
            request_timeout_secs: 10,
            max_body_bytes: 1 << 20,
        }
    }
}

impl ServerConfig {
    /// Parse a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> ServerResult<Self> {
        toml::from_str(text).map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Read a TOML config file.
    pub fn from_file(path: &Path) -> ServerResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Apply the `ADDR` environment variable, if set.
    pub fn with_env_overrides(self) -> ServerResult<Self> {
        match std::env::var(ADDR_ENV) {
            Ok(value) if !value.trim().is_empty() => self.with_bind(&value),
            _ => Ok(self),
        }
    }

    /// Override the listen address.
    ///
    /// Accepts a bare port (`8080`), a port with a leading colon (`:8080`),
    /// or a full socket address (`127.0.0.1:8080`). Bare ports bind on all
    /// interfaces.
    pub fn with_bind(mut self, value: &str) -> ServerResult<Self> {
        self.bind_addr = parse_bind(value)?;
        Ok(self)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }
}

fn parse_bind(value: &str) -> ServerResult<SocketAddr> {
    let value = value.trim();
    let port_text = value.strip_prefix(':').unwrap_or(value);
    if let Ok(port) = port_text.parse::<u16>() {
        return Ok(SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)));
    }
    value
        .parse()
        .map_err(|_| ServerError::Config(format!("invalid listen address: {value}")))
}
