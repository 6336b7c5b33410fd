//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! signals.rs: SIGTERM/SIGINT → Shutdown::trigger
//! shutdown.rs: broadcast → HTTP serve loop stops accepting, drains, exits
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
