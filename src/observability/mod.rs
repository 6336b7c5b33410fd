//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Forwarder and front-ends produce:
//!     → logging.rs (structured log events, stdout or stderr)
//!     → metrics.rs (forward counters and latency histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout/stderr)
//!     → Metrics endpoint (Prometheus scrape, opt-in)
//! ```

pub mod logging;
pub mod metrics;

pub use logging::{init_logging, LogTarget};
