//! Metrics collection and exposition.
//!
//! # Metrics
//! - `webhook_forward_total` (counter): forwards by outcome
//! - `webhook_forward_duration_seconds` (histogram): forward latency by outcome
//! - `webhook_downstream_status_total` (counter): target status codes by class
//!
//! Recording goes through the `metrics` facade and is a no-op until
//! [`init_metrics`] installs the Prometheus exporter.

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter listening on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one forward attempt.
///
/// `outcome` is `"response"` for completed exchanges or a
/// [`ForwardError::kind`](crate::webhook::ForwardError::kind) label.
pub fn record_forward(outcome: &'static str, status: Option<u16>, start_time: Instant) {
    let elapsed = start_time.elapsed().as_secs_f64();

    counter!("webhook_forward_total", "outcome" => outcome).increment(1);
    histogram!("webhook_forward_duration_seconds", "outcome" => outcome).record(elapsed);

    if let Some(status) = status {
        counter!("webhook_downstream_status_total", "class" => status_class(status)).increment(1);
    }
}

fn status_class(status: u16) -> &'static str {
    match status {
        100..=199 => "1xx",
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        _ => "5xx",
    }
}
