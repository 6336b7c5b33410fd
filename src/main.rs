//! Webhook relay, HTTP front-end.
//!
//! ```text
//!   POST /webhook ──▶ ┌──────────────┐    ┌─────────────────┐    ┌──────────────┐
//!   (JSON body)       │ http server  │───▶│ WebhookForwarder│───▶│ WEBHOOK_URL  │
//!   ◀──────────────── │ (axum)       │◀───│ (reqwest)       │◀───│ (target)     │
//!   {status_code,     └──────────────┘    └───────┬─────────┘    └──────────────┘
//!    headers,                                     │ per call
//!    content}                                     ▼
//!                                          ConfigResolver
//!                                          (mcp_config.json)
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use webhook_relay::config::{default_config_path, load_or_default, ConfigResolver};
use webhook_relay::http::HttpServer;
use webhook_relay::lifecycle::{signals, Shutdown};
use webhook_relay::observability::{self, LogTarget};
use webhook_relay::webhook::WebhookForwarder;

/// Relay JSON payloads posted to /webhook to the configured webhook URL.
#[derive(Parser, Debug)]
#[command(name = "webhook-relay", version, about)]
struct Args {
    /// MCP client configuration document holding WEBHOOK_URL.
    #[arg(long, env = "CONFIG_PATH")]
    config_path: Option<PathBuf>,

    /// Webhook URL taking precedence over the configuration document.
    #[arg(long, env = "WEBHOOK_URL", hide_env_values = true)]
    webhook_url: Option<String>,

    /// Relay settings file (TOML).
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = load_or_default(args.settings.as_deref())?;
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    observability::init_logging(config.observability.log_format, LogTarget::Stdout);
    tracing::info!("webhook-relay v{} starting", env!("CARGO_PKG_VERSION"));

    let resolver = ConfigResolver::new(args.config_path.unwrap_or_else(default_config_path))
        .with_url_override(args.webhook_url);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        config_path = %resolver.path().display(),
        forward_timeout_secs = config.forward.timeout_secs,
        "Configuration loaded"
    );

    if let Some(addr) = config.observability.metrics_listen_addr() {
        observability::metrics::init_metrics(addr);
    }

    let forwarder = WebhookForwarder::new(resolver, &config.forward)?;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Arc::new(Shutdown::new());
    let server_shutdown = shutdown.subscribe();
    signals::spawn_signal_listener(shutdown);

    HttpServer::new(config, forwarder)
        .run(listener, server_shutdown)
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
