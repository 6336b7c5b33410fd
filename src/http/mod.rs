//! HTTP front-end.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum router, middleware)
//!     → request.rs (request id)
//!     → POST /webhook: parse JSON body → WebhookForwarder
//!     → 200 {status_code, headers, content} | response.rs (500 {detail})
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::X_REQUEST_ID;
pub use response::ApiError;
pub use server::HttpServer;
