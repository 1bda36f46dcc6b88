// ── Core error types ──
//
// Run-level errors from linkdown-core. The `From<linkdown_api::Error>`
// impl translates transport and decode failures into variants the
// binary can map to exit codes without knowing about reqwest.

use linkdown_api::LeafError;
use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot connect to {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Request to {url} timed out after {timeout_secs}s")]
    Timeout { url: String, timeout_secs: u64 },

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Group not found: {name}")]
    GroupNotFound { name: String },

    #[error("Not found: {url}")]
    NotFound { url: String },

    #[error("Unreadable response: {message}")]
    Decode { message: String },

    #[error("No interfaces collected and {skipped} item(s) skipped; group left unchanged")]
    IncompleteWalk { skipped: usize },

    #[error("Malformed interface DN '{dn}': {segments} segment(s), need at least 3")]
    MalformedDn { dn: String, segments: usize },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error (HTTP {status}) from {url}")]
    Api { url: String, status: u16 },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// Returns `true` if a remote service rejected our credentials.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::AuthenticationFailed { .. })
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<linkdown_api::Error> for CoreError {
    fn from(err: linkdown_api::Error) -> Self {
        match err {
            linkdown_api::Error::Authentication { url, status } => CoreError::AuthenticationFailed {
                message: format!("{url} answered HTTP {status}"),
            },
            linkdown_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout {
                        url: e.url().map(ToString::to_string).unwrap_or_default(),
                        timeout_secs: 0,
                    }
                } else {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                }
            }
            linkdown_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            linkdown_api::Error::Timeout { url, timeout_secs } => {
                CoreError::Timeout { url, timeout_secs }
            }
            linkdown_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            linkdown_api::Error::Http { status: 404, url, .. } => CoreError::NotFound { url },
            linkdown_api::Error::Http { status, url, .. } => CoreError::Api { url, status },
            linkdown_api::Error::Deserialization { message, body: _ } => {
                CoreError::Decode { message }
            }
            linkdown_api::Error::GroupNotFound { name } => CoreError::GroupNotFound { name },
            linkdown_api::Error::Leaf(e) => e.into(),
        }
    }
}

impl From<LeafError> for CoreError {
    fn from(err: LeafError) -> Self {
        match err {
            LeafError::TooFewSegments { dn, segments } => CoreError::MalformedDn { dn, segments },
        }
    }
}
