//! Server configuration.

use std::net::SocketAddr;

use memo_core::{MemoError, MemoResult, StoreConfig};

/// Server configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Report missing memos as 404 instead of 500.
    pub not_found_as_404: bool,
    pub store: StoreConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            not_found_as_404: false,
            store: StoreConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Build from `MEMO_HOST`, `MEMO_PORT` (or `PORT`), `MEMO_NOT_FOUND_AS_404`
    /// and the store variables.
    pub fn from_env() -> MemoResult<Self> {
        let mut config = Self {
            store: StoreConfig::from_env(),
            ..Self::default()
        };

        if let Ok(host) = std::env::var("MEMO_HOST") {
            config.host = host;
        }

        if let Ok(port) = std::env::var("MEMO_PORT").or_else(|_| std::env::var("PORT")) {
            config.port = parse_port(&port)?;
        }

        if let Ok(value) = std::env::var("MEMO_NOT_FOUND_AS_404") {
            config.not_found_as_404 = parse_flag(&value);
        }

        Ok(config)
    }

    /// Address to bind.
    pub fn socket_addr(&self) -> MemoResult<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| MemoError::configuration(format!("invalid bind address: {}", e)))
    }
}

fn parse_port(value: &str) -> MemoResult<u16> {
    value
        .trim()
        .parse()
        .map_err(|_| MemoError::configuration(format!("'{}' is not a valid port number", value)))
}

/// `1`, `true`, `yes` and `on` (any case) enable a flag; anything else disables it.
fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
