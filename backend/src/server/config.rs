//! HTTP server configuration object.

use std::net::SocketAddr;
use std::path::PathBuf;

use roster_backend::settings::{ServerSettings, SettingsError};

/// Resolved configuration for [`super::create_server`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) store_path: Option<PathBuf>,
    pub(crate) cors_origin: Option<String>,
}

impl ServerConfig {
    /// Configuration binding `bind_addr` with an in-memory store and
    /// permissive CORS.
    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "startup uses from_settings; tests build configs directly")
    )]
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            store_path: None,
            cors_origin: None,
        }
    }

    /// Resolve loaded settings.
    ///
    /// # Errors
    ///
    /// Propagates [`SettingsError`] for an unusable bind address.
    pub fn from_settings(settings: &ServerSettings) -> Result<Self, SettingsError> {
        Ok(Self {
            bind_addr: settings.bind_addr()?,
            store_path: settings.store_path.clone(),
            cors_origin: settings.cors_origin().map(str::to_owned),
        })
    }

    /// Persist users to the JSON document at `path`.
    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "startup uses from_settings; tests build configs directly")
    )]
    #[must_use]
    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = Some(path.into());
        self
    }

    /// Socket address the server binds.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
