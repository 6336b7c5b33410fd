//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! Relay settings (TOML, optional):
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RelayConfig (immutable for the process lifetime)
//!
//! Webhook target (MCP client JSON document), on every forward:
//!     → resolver.rs (read, extract mcpServers.webhook-mcp-server.env)
//!     → WEBHOOK_URL or None
//! ```
//!
//! # Design Decisions
//! - Settings errors are fatal at startup; document errors are never fatal
//! - The document is re-read per call so edits apply without a restart
//! - All settings fields have defaults to allow minimal files

pub mod loader;
pub mod resolver;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_or_default, ConfigError};
pub use resolver::{default_config_path, ConfigResolver, ServerEnv};
pub use schema::{ForwardConfig, ListenerConfig, LogFormat, ObservabilityConfig, RelayConfig, ServerConfig};
