//! Settings validation.
//!
//! Serde handles syntax; this module checks value ranges and the relation
//! between the inbound and outbound deadlines. Every violation is reported,
//! not just the first.

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::RelayConfig;

/// A single semantic problem in a [`RelayConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is not a valid socket address: {value}")]
    InvalidAddress { field: &'static str, value: String },

    #[error("{0} must be greater than zero")]
    Zero(&'static str),

    #[error(
        "server.request_timeout_secs ({request}) must exceed forward.timeout_secs ({forward})"
    )]
    DeadlineOrder { request: u64, forward: u64 },
}

/// Validate a settings value. Pure function; no I/O.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }
    if config.listener.max_body_bytes == 0 {
        errors.push(ValidationError::Zero("listener.max_body_bytes"));
    }
    if config.forward.timeout_secs == 0 {
        errors.push(ValidationError::Zero("forward.timeout_secs"));
    }
    if config.forward.connect_timeout_secs == 0 {
        errors.push(ValidationError::Zero("forward.connect_timeout_secs"));
    }
    if config.server.request_timeout_secs == 0 {
        errors.push(ValidationError::Zero("server.request_timeout_secs"));
    } else if config.server.request_timeout_secs <= config.forward.timeout_secs {
        errors.push(ValidationError::DeadlineOrder {
            request: config.server.request_timeout_secs,
            forward: config.forward.timeout_secs,
        });
    }
    if config.observability.metrics_enabled
        && config.observability.metrics_listen_addr().is_none()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
