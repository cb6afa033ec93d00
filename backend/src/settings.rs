//! Service configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `ACCOUNTS_*` environment variables and
//! configuration files, in OrthoConfig's usual precedence.

use std::net::{SocketAddr, ToSocketAddrs};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind address {address}: {message}")]
    InvalidBindAddress { address: String, message: String },
}

/// Process settings for the accounts server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ACCOUNTS")]
pub struct AppSettings {
    /// Interface to listen on.
    pub host: Option<String>,
    /// TCP port to listen on.
    #[ortho_config(default = 5002)]
    pub port: u16,
    /// PostgreSQL URL; when absent records are kept in memory.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    #[ortho_config(default = 10)]
    pub database_max_connections: u32,
}

impl AppSettings {
    /// Interface to listen on, falling back to all IPv4 interfaces.
    #[must_use]
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Configured database URL, ignoring blank values.
    #[must_use]
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Pool size requested for the PostgreSQL store.
    #[must_use]
    pub const fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    /// Resolve host and port into a socket address.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidBindAddress`] when the host does not
    /// resolve.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let address = format!("{}:{}", self.host(), self.port());
        let invalid = |message: String| SettingsError::InvalidBindAddress {
            address: address.clone(),
            message,
        };
        (self.host(), self.port())
            .to_socket_addrs()
            .map_err(|err| invalid(err.to_string()))?
            .next()
            .ok_or_else(|| invalid("host resolved to no addresses".to_owned()))
    }
}
