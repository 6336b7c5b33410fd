//! Webhook forwarding subsystem.
//!
//! # Data Flow
//! ```text
//! front-end (HTTP route or MCP tool)
//!     → forwarder.rs (resolve target, serialize, POST)
//!     → types.rs (ForwardResponse | ForwardError)
//!     → front-end renders the outcome in its own idiom
//! ```

pub mod forwarder;
pub mod types;

pub use forwarder::WebhookForwarder;
pub use types::{ForwardError, ForwardResponse};
