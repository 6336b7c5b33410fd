//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum router (`GET /`, `POST /webhook`)
//! - Wire up middleware (request id, tracing, deadline, body limit)
//! - Serve on a listener until shutdown is signalled

use std::time::Duration;

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::RelayConfig;
use crate::http::request::{request_id, UuidRequestId};
use crate::http::response::ApiError;
use crate::webhook::{ForwardResponse, WebhookForwarder};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub forwarder: WebhookForwarder,
}

/// HTTP front-end for the relay.
pub struct HttpServer {
    router: Router,
    config: RelayConfig,
}

impl HttpServer {
    /// Create a new HTTP server forwarding through `forwarder`.
    pub fn new(config: RelayConfig, forwarder: WebhookForwarder) -> Self {
        let state = AppState { forwarder };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &RelayConfig, state: AppState) -> Router {
        let middleware = ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(RequestBodyLimitLayer::new(config.listener.max_body_bytes))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.server.request_timeout_secs,
            )));

        Router::new()
            .route("/", get(info_handler))
            .route("/webhook", post(webhook_handler))
            .with_state(state)
            .layer(DefaultBodyLimit::disable())
            .layer(middleware)
    }

    /// The fully layered router, for in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Serve on `listener` until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Static description of the available endpoints.
async fn info_handler() -> Json<Value> {
    Json(serde_json::json!({
        "name": "Webhook HTTP Server",
        "description": "HTTP server version of the webhook MCP server",
        "endpoints": [
            { "path": "/", "method": "GET", "description": "This information" },
            { "path": "/webhook", "method": "POST", "description": "Send a webhook request" }
        ]
    }))
}

/// Forward the request body to the configured webhook target.
async fn webhook_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ForwardResponse>, ApiError> {
    let request_id = request_id(&headers);

    let payload: Value = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(request_id = %request_id, error = %e, "Rejecting non-JSON body");
        ApiError::InvalidPayload(e)
    })?;

    tracing::debug!(request_id = %request_id, "Forwarding webhook payload");
    let response = state.forwarder.forward(&payload).await?;

    Ok(Json(response))
}
