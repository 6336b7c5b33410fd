//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Bytes;
use axum::http::{HeaderMap, Method, StatusCode};
use axum::Router;
use tokio::net::TcpListener;

use webhook_relay::config::{ConfigResolver, ForwardConfig};
use webhook_relay::webhook::WebhookForwarder;

/// One request as seen by the mock target.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// A webhook target answering every request with a fixed response.
pub struct MockTarget {
    pub addr: SocketAddr,
    hits: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockTarget {
    pub fn url(&self) -> String {
        format!("http://{}/hook", self.addr)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// Start a mock target on an ephemeral port.
pub async fn start_mock_target(
    status: u16,
    body: &'static str,
    extra_headers: &'static [(&'static str, &'static str)],
) -> MockTarget {
    start_delayed_target(Duration::ZERO, status, body, extra_headers).await
}

/// Start a mock target that waits `delay` before answering.
pub async fn start_delayed_target(
    delay: Duration,
    status: u16,
    body: &'static str,
    extra_headers: &'static [(&'static str, &'static str)],
) -> MockTarget {
    let hits = Arc::new(AtomicUsize::new(0));
    let requests = Arc::new(Mutex::new(Vec::new()));

    let handler_hits = hits.clone();
    let handler_requests = requests.clone();
    let app = Router::new().fallback(
        move |method: Method, headers: HeaderMap, request_body: Bytes| {
            let hits = handler_hits.clone();
            let requests = handler_requests.clone();
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                requests.lock().unwrap().push(RecordedRequest {
                    method,
                    headers,
                    body: request_body,
                });
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }

                let mut response_headers = HeaderMap::new();
                for (name, value) in extra_headers {
                    response_headers.append(*name, value.parse().unwrap());
                }
                (
                    StatusCode::from_u16(status).unwrap(),
                    response_headers,
                    body,
                )
            }
        },
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockTarget {
        addr,
        hits,
        requests,
    }
}

/// An address nothing listens on.
pub async fn refused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

/// Write an MCP client configuration document pointing at `url`.
pub fn write_mcp_config(dir: &Path, url: &str) -> PathBuf {
    let path = dir.join("mcp_config.json");
    let document = serde_json::json!({
        "mcpServers": {
            "webhook-mcp-server": {
                "command": "webhook-mcp-server",
                "env": { "WEBHOOK_URL": url }
            }
        }
    });
    std::fs::write(&path, document.to_string()).unwrap();
    path
}

/// A forwarder reading its target from `config_path`.
pub fn forwarder_for(config_path: impl Into<PathBuf>) -> WebhookForwarder {
    forwarder_with_timeout(config_path, 5)
}

/// Like [`forwarder_for`], with a total deadline of `timeout_secs` per forward.
pub fn forwarder_with_timeout(
    config_path: impl Into<PathBuf>,
    timeout_secs: u64,
) -> WebhookForwarder {
    let config = ForwardConfig {
        timeout_secs,
        connect_timeout_secs: 2,
        system_proxy: false,
        ..ForwardConfig::default()
    };
    WebhookForwarder::new(ConfigResolver::new(config_path), &config).unwrap()
}
