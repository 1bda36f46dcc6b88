use thiserror::Error;

use crate::leaf::LeafError;

/// Top-level error type for the `linkdown-api` crate.
///
/// Covers every failure mode across both API surfaces: transport,
/// HTTP status, response decoding, and group resolution.
/// `linkdown-core` maps these into run-level diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Credentials rejected (HTTP 401/403).
    #[error("Authentication failed for {url} (HTTP {status})")]
    Authentication { url: String, status: u16 },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Request timed out.
    #[error("Request to {url} timed out after {timeout_secs}s")]
    Timeout { url: String, timeout_secs: u64 },

    /// TLS handshake or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── HTTP ────────────────────────────────────────────────────────
    /// Non-2xx response, with the raw body for debugging.
    #[error("HTTP {status} from {url}")]
    Http {
        status: u16,
        url: String,
        body: String,
    },

    // ── Data ────────────────────────────────────────────────────────
    /// XML or JSON decoding failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },

    /// The group search returned no group with the requested display name.
    #[error("Group '{name}' not found")]
    GroupNotFound { name: String },

    /// An interface DN could not be turned into a leaf token.
    #[error(transparent)]
    Leaf(#[from] LeafError),
}

impl Error {
    /// Returns `true` if the remote service rejected our credentials.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Http { status: 404, .. } | Self::GroupNotFound { .. } => true,
            _ => false,
        }
    }

    /// Returns `true` for failures that happened before a response arrived.
    pub fn is_connection(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_connect() || e.is_request(),
            Self::Tls(_) => true,
            _ => false,
        }
    }

    /// Wrap a decode failure, keeping the body (lossily) for diagnostics.
    pub(crate) fn deserialization(message: impl ToString, body: &[u8]) -> Self {
        Self::Deserialization {
            message: message.to_string(),
            body: String::from_utf8_lossy(body).into_owned(),
        }
    }
}
