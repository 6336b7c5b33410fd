//! Webhook target resolution from the MCP client configuration document.
//!
//! The document is the JSON file MCP clients use to register servers:
//!
//! ```text
//! { "mcpServers": { "webhook-mcp-server": { "env": { "WEBHOOK_URL": "https://..." } } } }
//! ```
//!
//! It is read fresh on every call. Any failure to read or parse it is logged
//! and treated as "no configuration", so a broken file only disables
//! forwarding and never fails the caller.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

/// Key of this server's entry under `mcpServers`.
pub const SERVER_NAME: &str = "webhook-mcp-server";

/// Key holding the webhook target inside the server's `env` mapping.
pub const WEBHOOK_URL_KEY: &str = "WEBHOOK_URL";

/// The `env` mapping of this server's entry.
pub type ServerEnv = BTreeMap<String, String>;

#[derive(Debug, Error)]
enum ResolveError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Default document location: `~/.codeium/windsurf/mcp_config.json`.
pub fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join(".codeium")
        .join("windsurf")
        .join("mcp_config.json")
}

/// Resolves the webhook target for each forward.
///
/// Holds only the document location and an optional process-level override;
/// the document itself is never cached.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    path: PathBuf,
    url_override: Option<String>,
}

impl ConfigResolver {
    /// Resolver reading the document at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            url_override: None,
        }
    }

    /// Use `url` in preference to the document's `WEBHOOK_URL`.
    ///
    /// Empty strings are ignored so an unset-but-exported variable behaves
    /// like an unset one.
    pub fn with_url_override(mut self, url: Option<String>) -> Self {
        self.url_override = url.filter(|u| !u.trim().is_empty());
        self
    }

    /// Location of the configuration document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read this server's `env` mapping. Never fails; problems yield an empty map.
    pub fn load_env(&self) -> ServerEnv {
        match read_server_env(&self.path) {
            Ok(env) => env,
            Err(e) => {
                tracing::warn!(error = %e, "Error reading config file");
                ServerEnv::new()
            }
        }
    }

    /// The webhook target, or `None` when nothing usable is configured.
    pub fn resolve_webhook_url(&self) -> Option<String> {
        if let Some(url) = &self.url_override {
            return Some(url.clone());
        }
        self.load_env()
            .remove(WEBHOOK_URL_KEY)
            .filter(|u| !u.trim().is_empty())
    }
}

fn read_server_env(path: &Path) -> Result<ServerEnv, ResolveError> {
    let content = fs::read_to_string(path).map_err(|source| ResolveError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document: Value = serde_json::from_str(&content).map_err(|source| ResolveError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(extract_server_env(&document))
}

/// Pull `mcpServers.<SERVER_NAME>.env` out of a parsed document.
///
/// Non-string values are skipped; a missing path yields an empty map.
pub fn extract_server_env(document: &Value) -> ServerEnv {
    let Some(env) = document
        .get("mcpServers")
        .and_then(Value::as_object)
        .and_then(|servers| servers.get(SERVER_NAME))
        .and_then(|server| server.get("env"))
        .and_then(Value::as_object)
    else {
        return ServerEnv::new();
    };

    env.iter()
        .filter_map(|(key, value)| match value.as_str() {
            Some(s) => Some((key.clone(), s.to_string())),
            None => {
                tracing::debug!(key = %key, "Ignoring non-string env value");
                None
            }
        })
        .collect()
}
