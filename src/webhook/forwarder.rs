//! The forwarding operation shared by both front-ends.
//!
//! # Responsibilities
//! - Resolve the webhook target (fresh read per call)
//! - Serialize the payload to JSON text
//! - POST it once with `Content-Type: application/json`
//! - Return the downstream status, headers and raw body, or a [`ForwardError`]
//!
//! # Design Decisions
//! - No retries: a webhook POST is not idempotent
//! - Downstream 3xx/4xx/5xx are responses, not errors; redirects are not followed
//! - No idle connections are kept, so every call dials the target afresh

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, CONTENT_TYPE};
use serde::Serialize;
use url::Url;

use crate::config::{ConfigResolver, ForwardConfig};
use crate::observability::metrics;
use crate::webhook::types::{ForwardError, ForwardResponse};

/// Forwards JSON payloads to the configured webhook target.
///
/// Cheap to clone; clones share the underlying HTTP client.
#[derive(Debug, Clone)]
pub struct WebhookForwarder {
    resolver: ConfigResolver,
    client: reqwest::Client,
}

impl WebhookForwarder {
    /// Build a forwarder with the timeouts from `config`.
    pub fn new(resolver: ConfigResolver, config: &ForwardConfig) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .pool_max_idle_per_host(0)
            .redirect(reqwest::redirect::Policy::none())
            .user_agent(config.user_agent.clone());
        if !config.system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;

        Ok(Self { resolver, client })
    }

    /// The resolver consulted on every call.
    pub fn resolver(&self) -> &ConfigResolver {
        &self.resolver
    }

    /// POST `payload` to the webhook target.
    pub async fn forward<T>(&self, payload: &T) -> Result<ForwardResponse, ForwardError>
    where
        T: Serialize + ?Sized,
    {
        let start_time = Instant::now();
        let result = self.try_forward(payload).await;

        match &result {
            Ok(response) => {
                tracing::info!(
                    status = response.status_code,
                    elapsed_ms = start_time.elapsed().as_millis() as u64,
                    "Webhook delivered"
                );
                metrics::record_forward("response", Some(response.status_code), start_time);
            }
            Err(e) => {
                tracing::warn!(kind = e.kind(), error = %e, "Webhook not delivered");
                metrics::record_forward(e.kind(), None, start_time);
            }
        }

        result
    }

    async fn try_forward<T>(&self, payload: &T) -> Result<ForwardResponse, ForwardError>
    where
        T: Serialize + ?Sized,
    {
        let raw_url = self
            .resolver
            .resolve_webhook_url()
            .ok_or(ForwardError::NotConfigured)?;
        let url = parse_target(&raw_url)?;
        let body = serde_json::to_vec(payload).map_err(ForwardError::Serialization)?;

        tracing::debug!(
            host = url.host_str().unwrap_or_default(),
            bytes = body.len(),
            "Sending webhook"
        );

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(ForwardError::Transport)?;

        let status_code = response.status().as_u16();
        let headers = flatten_headers(response.headers());
        let content = response.text().await.map_err(ForwardError::Transport)?;

        Ok(ForwardResponse {
            status_code,
            headers,
            content,
        })
    }
}

/// Accept only absolute `http`/`https` URLs.
fn parse_target(raw: &str) -> Result<Url, ForwardError> {
    let url = Url::parse(raw.trim()).map_err(|e| ForwardError::InvalidUrl {
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ForwardError::InvalidUrl {
            reason: format!("unsupported scheme {other:?}"),
        }),
    }
}

/// Collapse a header map to one string per name, joining repeats with `", "`.
fn flatten_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut flat: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes());
        match flat.get_mut(name.as_str()) {
            Some(existing) => {
                existing.push_str(", ");
                existing.push_str(&value);
            }
            None => {
                flat.insert(name.as_str().to_string(), value.into_owned());
            }
        }
    }
    flat
}
