//! Configuration loading from disk and environment.

use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use crate::config::schema::ServiceConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable that overrides the listener port.
pub const PORT_ENV: &str = "PORT";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ServiceConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Resolve the effective configuration: file (or defaults), then `PORT`.
pub fn resolve_config(path: Option<&Path>) -> Result<ServiceConfig, ConfigError> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    if let Ok(port) = env::var(PORT_ENV) {
        apply_port_override(&mut config, &port);
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Replace the listener port, keeping the configured host. Invalid values
/// are logged and ignored.
pub fn apply_port_override(config: &mut ServiceConfig, port: &str) {
    let port: u16 = match port.trim().parse() {
        Ok(port) => port,
        Err(e) => {
            tracing::warn!(value = %port, error = %e, "Ignoring invalid {PORT_ENV}");
            return;
        }
    };

    match config.listener.bind_address.parse::<SocketAddr>() {
        Ok(mut addr) => {
            addr.set_port(port);
            config.listener.bind_address = addr.to_string();
        }
        Err(_) => {
            config.listener.bind_address = format!("0.0.0.0:{port}");
        }
    }
    tracing::info!(bind_address = %config.listener.bind_address, "Listener port taken from {PORT_ENV}");
}
