//! Server configuration loaded via OrthoConfig.
//!
//! Values come from `ROSTER_*` environment variables, command-line flags, or
//! a configuration file, in OrthoConfig's usual precedence.

use std::net::SocketAddr;
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
/// Port the service listens on when none is configured.
pub const DEFAULT_PORT: u16 = 10_000;

/// Listener, storage, and CORS settings for the roster service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ROSTER")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    #[ortho_config(default = 10000)]
    pub port: u16,
    /// JSON document backing the user store. In-memory when unset.
    pub store_path: Option<PathBuf>,
    /// Single origin allowed by CORS. Any origin when unset.
    pub cors_origin: Option<String>,
}

/// Errors raised while turning settings into a listener address.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// Host and port do not form a socket address.
    #[error("invalid bind address {host}:{port}: {source}")]
    BindAddress {
        /// Configured host.
        host: String,
        /// Configured port.
        port: u16,
        /// Parse failure.
        #[source]
        source: std::net::AddrParseError,
    },
}

impl ServerSettings {
    /// Configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Socket address to bind.
    ///
    /// # Errors
    ///
    /// [`SettingsError::BindAddress`] when the host is not an IP literal.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = self.host();
        let literal = if host.contains(':') {
            format!("[{host}]:{}", self.port)
        } else {
            format!("{host}:{}", self.port)
        };
        literal
            .parse()
            .map_err(|source| SettingsError::BindAddress {
                host: host.to_owned(),
                port: self.port,
                source,
            })
    }

    /// Configured CORS origin with surrounding whitespace removed; blank
    /// values count as unset.
    pub fn cors_origin(&self) -> Option<&str> {
        self.cors_origin
            .as_deref()
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
    }
}
