//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Keep the upstream timeout below the whole-request timeout
//! - Check the upstream base URL is a usable http(s) URL
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServiceConfig → Result<(), Vec<ValidationError>>

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ServiceConfig;
use crate::upstream::client::parse_base_url;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not a socket address")]
    BindAddress(String),

    #[error("upstream.base_url: {0}")]
    UpstreamUrl(String),

    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("upstream.timeout_secs ({upstream}) must be below timeouts.request_secs ({request})")]
    UpstreamTimeoutNotBelowRequest { upstream: u64, request: u64 },

    #[error("observability.log_level '{0}' is not a valid level")]
    LogLevel(String),

    #[error("observability.metrics_address '{0}' is not a socket address")]
    MetricsAddress(String),
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.listener.bind_address.clone()));
    }

    if let Err(e) = parse_base_url(&config.upstream.base_url) {
        errors.push(ValidationError::UpstreamUrl(e.to_string()));
    }

    if config.upstream.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("upstream.timeout_secs"));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("timeouts.request_secs"));
    }
    // A slow upstream must hit its own timeout before the request timeout.
    let (upstream, request) = (config.upstream.timeout_secs, config.timeouts.request_secs);
    if upstream > 0 && request > 0 && upstream >= request {
        errors.push(ValidationError::UpstreamTimeoutNotBelowRequest { upstream, request });
    }

    if config.observability.log_level.parse::<tracing::Level>().is_err() {
        errors.push(ValidationError::LogLevel(config.observability.log_level.clone()));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&ServiceConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ServiceConfig::default();
        config.listener.bind_address = "localhost".into();
        config.upstream.base_url = "ftp://books".into();
        config.upstream.timeout_secs = 0;
        config.observability.log_level = "loud".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::ZeroTimeout("upstream.timeout_secs")));
        assert!(errors.contains(&ValidationError::LogLevel("loud".into())));
    }

    #[test]
    fn test_upstream_timeout_must_be_below_request_timeout() {
        let mut config = ServiceConfig::default();
        config.upstream.timeout_secs = 5;
        config.timeouts.request_secs = 1;
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::UpstreamTimeoutNotBelowRequest { upstream: 5, request: 1 }])
        );

        config.timeouts.request_secs = 5;
        assert!(validate_config(&config).is_err());

        config.timeouts.request_secs = 6;
        assert_eq!(validate_config(&config), Ok(()));
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = ServiceConfig::default();
        config.observability.metrics_address = "nowhere".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::MetricsAddress("nowhere".into())])
        );
    }
}
