//! MCP tool-protocol front-end.
//!
//! # Data Flow
//! ```text
//! stdio JSON-RPC (rmcp)
//!     → server.rs (initialize, tools/list)
//!     → tools.rs send_webhook → WebhookForwarder
//!     → CallToolResult {status_code, headers, content} | {error}
//! ```

pub mod server;
pub mod tools;

pub use server::WebhookMcpServer;
