// ── Runtime sync configuration ──
//
// These types describe *how* to reach both services and how to run the
// walk. They carry credential data and tuning, but never touch disk.
// The binary constructs a `SyncConfig` and hands it in.

use std::path::PathBuf;
use std::time::Duration;

use linkdown_api::{BasicAuth, GroupTemplate, TlsMode, TransportConfig};
use secrecy::SecretString;
use url::Url;

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification (self-signed certs). Only when explicitly asked for.
    DangerAcceptInvalid,
}

/// Connection settings for one service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Service root (e.g., `https://candid.example`).
    pub url: Url,
    pub username: String,
    pub password: SecretString,
    pub tls: TlsVerification,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ServiceConfig {
    pub fn transport(&self) -> TransportConfig {
        let tls = match &self.tls {
            TlsVerification::SystemDefaults => TlsMode::System,
            TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
        };
        TransportConfig {
            tls,
            timeout: self.timeout,
        }
    }

    pub fn auth(&self) -> BasicAuth {
        BasicAuth::new(self.username.clone(), self.password.clone())
    }
}

/// What to do when a single fabric or event cannot be processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Record the item as skipped and continue with the rest.
    #[default]
    Skip,
    /// Fail the whole run on the first error.
    Abort,
}

/// Walk and update behaviour, independent of where the services live.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    pub group: GroupTemplate,
    pub policy: FailurePolicy,
    /// Event-detail fetches in flight per fabric. 1 = strictly sequential.
    pub concurrency: usize,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            group: GroupTemplate::default(),
            policy: FailurePolicy::Skip,
            concurrency: 1,
        }
    }
}

/// Everything needed for one run.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Candid assurance appliance (source).
    pub candid: ServiceConfig,
    /// Turbonomic instance (target).
    pub turbo: ServiceConfig,
    pub options: SyncOptions,
}
