//! Relay settings schema.
//!
//! Operational settings for the relay binaries. All types derive Serde traits
//! for deserialization from a TOML settings file, and every field has a default
//! so an empty file is a valid configuration.
//!
//! The webhook target itself is *not* part of these settings; it lives in the
//! MCP client configuration document and is resolved per call by
//! [`ConfigResolver`](crate::config::ConfigResolver).

use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

/// Root settings for the webhook relay.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RelayConfig {
    /// Listener configuration for the HTTP front-end.
    pub listener: ListenerConfig,

    /// Outbound webhook call settings.
    pub forward: ForwardConfig,

    /// Inbound request handling on the HTTP front-end.
    pub server: ServerConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8000").
    pub bind_address: String,

    /// Maximum accepted request body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_string(),
            max_body_bytes: 1024 * 1024,
        }
    }
}

/// Outbound webhook call settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ForwardConfig {
    /// Total deadline for one webhook POST, including reading the body.
    pub timeout_secs: u64,

    /// Deadline for establishing the TCP/TLS connection.
    pub connect_timeout_secs: u64,

    /// User-Agent sent with every webhook POST.
    pub user_agent: String,

    /// Honor `HTTP_PROXY`/`HTTPS_PROXY`/`NO_PROXY` from the environment.
    pub system_proxy: bool,
}

impl Default for ForwardConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            connect_timeout_secs: 10,
            user_agent: concat!("webhook-relay/", env!("CARGO_PKG_VERSION")).to_string(),
            system_proxy: true,
        }
    }
}

/// Inbound request handling.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Whole-request deadline on the HTTP front-end.
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 60,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log line format.
    pub log_format: LogFormat,

    /// Enable the Prometheus exporter.
    pub metrics_enabled: bool,

    /// Prometheus scrape address.
    pub metrics_address: String,
}

impl ObservabilityConfig {
    /// Exporter address when metrics are enabled and the address parses.
    ///
    /// Validation rejects an enabled exporter with a bad address, so after
    /// loading this is `Some` exactly when metrics are enabled.
    pub fn metrics_listen_addr(&self) -> Option<SocketAddr> {
        if !self.metrics_enabled {
            return None;
        }
        self.metrics_address.parse().ok()
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
