// Shared transport configuration for building reqwest::Client instances.
//
// Both the Candid and Turbo clients share TLS, timeout, and basic-auth
// handling through this module, avoiding duplicated builder logic.

use std::path::PathBuf;
use std::time::Duration;

use bytes::Bytes;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, trace, warn};
use url::Url;

use crate::error::Error;

/// Per-request timeout used when nothing else is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// TLS verification mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsMode {
    /// Use the system certificate store.
    #[default]
    System,
    /// Use a custom CA certificate from the given PEM file.
    CustomCa(PathBuf),
    /// Accept any certificate (for self-signed appliances). Opt-in only.
    DangerAcceptInvalid,
}

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub tls: TlsMode,
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            tls: TlsMode::System,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let mut builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.timeout)
            .user_agent(concat!("linkdown/", env!("CARGO_PKG_VERSION")));

        match &self.tls {
            TlsMode::System => {}
            TlsMode::CustomCa(path) => {
                let cert_pem = std::fs::read(path)
                    .map_err(|e| Error::Tls(format!("failed to read CA cert: {e}")))?;
                let cert = reqwest::Certificate::from_pem(&cert_pem)
                    .map_err(|e| Error::Tls(format!("invalid CA cert: {e}")))?;
                builder = builder.add_root_certificate(cert);
            }
            TlsMode::DangerAcceptInvalid => {
                warn!("TLS certificate verification is disabled");
                builder = builder.danger_accept_invalid_certs(true);
            }
        }

        builder
            .build()
            .map_err(|e| Error::Tls(format!("failed to build HTTP client: {e}")))
    }
}

/// Basic-auth credentials attached to every request.
#[derive(Debug, Clone)]
pub struct BasicAuth {
    pub username: String,
    pub password: SecretString,
}

impl BasicAuth {
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }

    pub(crate) fn apply(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.basic_auth(&self.username, Some(self.password.expose_secret()))
    }
}

/// Append an absolute request path to a host URL.
///
/// `https://host` + `/api/v1/x` -> `https://host/api/v1/x`. Any path the
/// host already carries is kept as a prefix. Each `/`-separated piece is
/// pushed as one percent-encoded segment, so a `?` or `#` inside an
/// identifier stays part of the path.
pub(crate) fn join_path(base: &Url, path: &str) -> Result<Url, Error> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
        .pop_if_empty()
        .extend(path.split('/').filter(|s| !s.is_empty()));
    Ok(url)
}

/// Classify a reqwest failure; client-side timeouts carry the limit.
fn request_error(err: reqwest::Error, url: &Url, timeout: Duration) -> Error {
    if err.is_timeout() {
        Error::Timeout {
            url: url.to_string(),
            timeout_secs: timeout.as_secs(),
        }
    } else {
        Error::Transport(err)
    }
}

/// Send a request and return the raw body of a 2xx response.
///
/// 401/403 become [`Error::Authentication`], any other non-2xx status
/// becomes [`Error::Http`] carrying the body.
pub(crate) async fn execute(
    req: reqwest::RequestBuilder,
    url: &Url,
    timeout: Duration,
) -> Result<Bytes, Error> {
    let resp = req
        .send()
        .await
        .map_err(|e| request_error(e, url, timeout))?;

    let status = resp.status();
    debug!(%url, status = status.as_u16(), "response received");

    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return Err(Error::Authentication {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = resp
        .bytes()
        .await
        .map_err(|e| request_error(e, url, timeout))?;
    trace!(%url, len = body.len(), "response body read");

    if !status.is_success() {
        return Err(Error::Http {
            status: status.as_u16(),
            url: url.to_string(),
            body: String::from_utf8_lossy(&body).into_owned(),
        });
    }

    Ok(body)
}
