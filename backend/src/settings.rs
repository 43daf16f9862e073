//! Process settings loaded via OrthoConfig.
//!
//! Values are layered CLI over environment (`USERBASE_*`) over defaults.

use std::net::{IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::{ParseValidationModeError, ValidationMode};

const DEFAULT_HOST: &str = "0.0.0.0";

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// The host is not an IP address.
    #[error("invalid host {host:?}: expected an IP address")]
    InvalidHost { host: String },
    /// The validation mode is not recognised.
    #[error(transparent)]
    InvalidValidationMode(#[from] ParseValidationModeError),
}

/// Settings for the user service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USERBASE")]
pub struct AppSettings {
    /// Interface to bind, as an IP address.
    pub host: Option<String>,
    /// TCP port to bind.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// Validation strictness: `strict` or `off`.
    pub validation: Option<String>,
}

impl AppSettings {
    /// Socket address the server should listen on.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidHost`] when `host` is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = self.host.as_deref().unwrap_or(DEFAULT_HOST).trim();
        let ip: IpAddr = host.parse().map_err(|_| SettingsError::InvalidHost {
            host: host.to_owned(),
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Validation mode applied by the user store.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidValidationMode`] for unknown modes.
    pub fn validation_mode(&self) -> Result<ValidationMode, SettingsError> {
        self.validation
            .as_deref()
            .map_or_else(|| Ok(ValidationMode::default()), str::parse::<ValidationMode>)
            .map_err(SettingsError::from)
    }
}
