//! Webhook relay, MCP stdio front-end.
//!
//! Serves the `send_webhook` tool over stdin/stdout.

use std::path::PathBuf;

use clap::Parser;
use rmcp::{transport::stdio, ServiceExt};

use webhook_relay::config::{default_config_path, load_or_default, ConfigResolver};
use webhook_relay::mcp::WebhookMcpServer;
use webhook_relay::observability::{self, LogTarget};
use webhook_relay::webhook::WebhookForwarder;

/// MCP server with a single webhook tool.
#[derive(Parser, Debug)]
#[command(name = "webhook-mcp-server", version, about)]
struct Args {
    /// MCP client configuration document holding WEBHOOK_URL.
    #[arg(long, env = "CONFIG_PATH")]
    config_path: Option<PathBuf>,

    /// Webhook URL taking precedence over the configuration document.
    #[arg(long, env = "WEBHOOK_URL", hide_env_values = true)]
    webhook_url: Option<String>,

    /// Relay settings file (TOML); only the forward and observability sections apply.
    #[arg(long)]
    settings: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = load_or_default(args.settings.as_deref())?;

    // stdout is the transport.
    observability::init_logging(config.observability.log_format, LogTarget::Stderr);

    let resolver = ConfigResolver::new(args.config_path.unwrap_or_else(default_config_path))
        .with_url_override(args.webhook_url);
    tracing::info!(config_path = %resolver.path().display(), "starting webhook MCP server");

    if let Some(addr) = config.observability.metrics_listen_addr() {
        observability::metrics::init_metrics(addr);
    }

    let forwarder = WebhookForwarder::new(resolver, &config.forward)?;
    let service = WebhookMcpServer::new(forwarder).serve(stdio()).await?;

    service.waiting().await?;

    Ok(())
}
