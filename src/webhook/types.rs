//! Forward outcome types.

use std::collections::BTreeMap;
use std::error::Error as StdError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A completed HTTP exchange with the webhook target.
///
/// Built for every status code the target returns; a 404 or 500 from the
/// target is still a response, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForwardResponse {
    pub status_code: u16,
    /// Response headers. Repeated headers are joined with `", "`.
    pub headers: BTreeMap<String, String>,
    /// Raw response body text, never re-parsed.
    pub content: String,
}

/// Why a payload could not be forwarded.
///
/// The `Display` output is the single error message surfaced to callers.
#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("WEBHOOK_URL not configured in environment variables")]
    NotConfigured,

    #[error("Error sending webhook: invalid WEBHOOK_URL: {reason}")]
    InvalidUrl { reason: String },

    #[error("Error sending webhook: payload is not serializable as JSON: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("Error sending webhook: {}", error_chain(.0))]
    Transport(#[source] reqwest::Error),
}

impl ForwardError {
    /// Short label for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ForwardError::NotConfigured => "not_configured",
            ForwardError::InvalidUrl { .. } => "invalid_url",
            ForwardError::Serialization(_) => "serialization",
            ForwardError::Transport(_) => "transport",
        }
    }
}

/// Render an error and all of its sources, outermost first.
///
/// reqwest's top-level message ("error sending request for url ...") omits
/// the cause, which is the part callers need.
fn error_chain(error: &(dyn StdError + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_configured_message_is_stable() {
        assert_eq!(
            ForwardError::NotConfigured.to_string(),
            "WEBHOOK_URL not configured in environment variables"
        );
    }

    #[test]
    fn serialization_error_keeps_cause() {
        let mut map = std::collections::HashMap::new();
        map.insert((1, 2), "tuple keys are not JSON");
        let err = ForwardError::Serialization(serde_json::to_vec(&map).unwrap_err());

        assert_eq!(err.kind(), "serialization");
        assert!(err.to_string().starts_with("Error sending webhook: payload"));
        assert!(err.to_string().contains("key must be a string"));
    }

    #[test]
    fn chain_includes_nested_sources() {
        let inner = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let outer = std::io::Error::other(Wrapper(inner));
        assert_eq!(error_chain(&outer), "wrapped: refused");
    }

    #[derive(Debug)]
    struct Wrapper(std::io::Error);

    impl std::fmt::Display for Wrapper {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "wrapped")
        }
    }

    impl StdError for Wrapper {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(&self.0)
        }
    }
}
