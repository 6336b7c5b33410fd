//! Webhook relay library.
//!
//! Accepts a JSON payload over HTTP (`POST /webhook`) or as the MCP
//! `send_webhook` tool and forwards it to the single webhook configured as
//! `WEBHOOK_URL`, returning the webhook's status, headers and body.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod mcp;
pub mod observability;
pub mod webhook;

pub use config::{ConfigResolver, RelayConfig};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use mcp::WebhookMcpServer;
pub use webhook::{ForwardError, ForwardResponse, WebhookForwarder};
