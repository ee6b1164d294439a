//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Every scenario resolves to an absolute http(s) URL
//! - Validate value ranges and addresses
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: CallerConfig → Result<(), Vec<ValidationError>>

use std::fmt;
use std::net::SocketAddr;

use crate::client::template::build_url;
use crate::config::schema::CallerConfig;
use crate::scenario::{ScenarioId, SCENARIOS};

/// One semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validate a parsed configuration.
pub fn validate_config(config: &CallerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::new(
            "listener.bind_address",
            format!("'{}' is not a socket address", config.listener.bind_address),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::new(
            "timeouts.request_secs",
            "must be greater than 0",
        ));
    }

    if config.timeouts.connect_secs == Some(0) {
        errors.push(ValidationError::new(
            "timeouts.connect_secs",
            "must be greater than 0 when set",
        ));
    }

    match config.timeouts.downstream_secs {
        Some(0) => errors.push(ValidationError::new(
            "timeouts.downstream_secs",
            "must be greater than 0 when set",
        )),
        Some(secs) if secs >= config.timeouts.request_secs => errors.push(ValidationError::new(
            "timeouts.downstream_secs",
            format!("must be below timeouts.request_secs ({})", config.timeouts.request_secs),
        )),
        _ => {}
    }

    for key in config.receiver.endpoints.keys() {
        if key.parse::<ScenarioId>().is_err() {
            errors.push(ValidationError::new(
                format!("receiver.endpoints.{key}"),
                "unknown scenario",
            ));
        }
    }

    for scenario in SCENARIOS {
        let Some(template) = config.receiver.endpoint_for(scenario) else {
            errors.push(ValidationError::new(
                "receiver.endpoints",
                format!("no endpoint for {} and no base_url", scenario.label),
            ));
            continue;
        };

        match build_url(&template, scenario.path_vars, scenario.query) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => errors.push(ValidationError::new(
                format!("receiver.endpoints.{}", scenario.label),
                format!("unsupported scheme '{}'", url.scheme()),
            )),
            Err(e) => errors.push(ValidationError::new(
                format!("receiver.endpoints.{}", scenario.label),
                e.to_string(),
            )),
        }
    }

    if config.observability.log_level.parse::<tracing::Level>().is_err() {
        errors.push(ValidationError::new(
            "observability.log_level",
            format!("'{}' is not a log level", config.observability.log_level),
        ));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::new(
            "observability.metrics_address",
            format!("'{}' is not a socket address", config.observability.metrics_address),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
