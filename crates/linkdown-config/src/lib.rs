//! Configuration for linkdown.
//!
//! TOML file + environment + command-line overrides, credential
//! resolution, and translation to `linkdown_core::SyncConfig`. Core never
//! reads files; the binary calls [`load_config`] then [`resolve`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use linkdown_core::{
    FailurePolicy, GroupTemplate, ServiceConfig, SyncConfig, SyncOptions, TlsVerification,
};

/// Prefix for environment overrides, e.g. `LINKDOWN_TURBO__URL`.
pub const ENV_PREFIX: &str = "LINKDOWN_";

const REDACTED: &str = "********";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("{field} is not configured")]
    MissingField { field: String },

    #[error("no password configured for {service}")]
    NoCredentials { service: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "ServiceSection::candid")]
    pub candid: ServiceSection,

    #[serde(default = "ServiceSection::turbo")]
    pub turbo: ServiceSection,

    /// Group name and criteria template.
    #[serde(default)]
    pub group: GroupTemplate,

    #[serde(default)]
    pub sync: SyncSection,
}

/// Connection settings for one service.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceSection {
    /// Base URL (e.g., "https://candid.example").
    pub url: Option<String>,

    pub username: Option<String>,

    /// Password (plaintext -- prefer `password_env`).
    pub password: Option<String>,

    /// Environment variable name containing the password.
    pub password_env: Option<String>,

    /// Accept self-signed certificates.
    #[serde(default)]
    pub insecure: bool,

    /// Path to custom CA certificate.
    pub ca_cert: Option<PathBuf>,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl ServiceSection {
    fn with_username(username: &str) -> Self {
        Self {
            url: None,
            username: Some(username.into()),
            password: None,
            password_env: None,
            insecure: false,
            ca_cert: None,
            timeout: default_timeout(),
        }
    }

    fn candid() -> Self {
        Self::with_username("admin")
    }

    fn turbo() -> Self {
        Self::with_username("administrator")
    }
}

fn default_timeout() -> u64 {
    60
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SyncSection {
    /// Fail the run on the first fabric/event error instead of skipping it.
    #[serde(default)]
    pub strict: bool,

    /// Event-detail fetches in flight per fabric.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

impl Default for SyncSection {
    fn default() -> Self {
        Self {
            strict: false,
            concurrency: default_concurrency(),
        }
    }
}

fn default_concurrency() -> usize {
    1
}

impl Config {
    /// Built-in defaults, before any file or environment is applied.
    pub fn defaults() -> Self {
        Self {
            candid: ServiceSection::candid(),
            turbo: ServiceSection::turbo(),
            group: GroupTemplate::default(),
            sync: SyncSection::default(),
        }
    }

    /// Copy with plaintext passwords masked, for display.
    pub fn redacted(&self) -> Self {
        let mut cfg = self.clone();
        for svc in [&mut cfg.candid, &mut cfg.turbo] {
            if svc.password.is_some() {
                svc.password = Some(REDACTED.into());
            }
        }
        cfg
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "linkdown", "linkdown").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("linkdown");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config: defaults, then the TOML file (if present), then
/// `LINKDOWN_*` environment variables using `__` for nesting.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = path.map_or_else(config_path, Path::to_path_buf);

    let figment = Figment::new()
        .merge(Serialized::defaults(Config::defaults()))
        .merge(Toml::file(&path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

// ── Resolution ──────────────────────────────────────────────────────

/// Per-service values supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct ServiceOverrides {
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Everything the command line can override.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub candid: ServiceOverrides,
    pub turbo: ServiceOverrides,
    pub group: Option<String>,
    /// Applies to both services when set.
    pub insecure: bool,
    pub timeout: Option<u64>,
    pub strict: bool,
    pub concurrency: Option<usize>,
}

/// Merge command-line overrides into `cfg` and build the runtime config.
pub fn resolve(cfg: &Config, overrides: &Overrides) -> Result<SyncConfig, ConfigError> {
    let (candid, options) = resolve_walk(cfg, overrides)?;
    let turbo = resolve_service("turbo", &cfg.turbo, &overrides.turbo, overrides)?;
    Ok(SyncConfig {
        candid,
        turbo,
        options,
    })
}

/// Like [`resolve`], but only the Candid side; Turbonomic settings are
/// not required.
pub fn resolve_walk(
    cfg: &Config,
    overrides: &Overrides,
) -> Result<(ServiceConfig, SyncOptions), ConfigError> {
    let candid = resolve_service("candid", &cfg.candid, &overrides.candid, overrides)?;
    Ok((candid, resolve_options(cfg, overrides)?))
}

fn resolve_options(cfg: &Config, overrides: &Overrides) -> Result<SyncOptions, ConfigError> {
    let concurrency = overrides.concurrency.unwrap_or(cfg.sync.concurrency);
    if concurrency == 0 {
        return Err(ConfigError::Validation {
            field: "sync.concurrency".into(),
            reason: "must be at least 1".into(),
        });
    }

    let mut group = cfg.group.clone();
    if let Some(ref name) = overrides.group {
        group.name.clone_from(name);
    }
    if group.name.is_empty() {
        return Err(ConfigError::MissingField {
            field: "group.name".into(),
        });
    }

    let policy = if overrides.strict || cfg.sync.strict {
        FailurePolicy::Abort
    } else {
        FailurePolicy::Skip
    };

    Ok(SyncOptions {
        group,
        policy,
        concurrency,
    })
}

fn resolve_service(
    name: &str,
    section: &ServiceSection,
    service: &ServiceOverrides,
    overrides: &Overrides,
) -> Result<ServiceConfig, ConfigError> {
    let url_str = service
        .url
        .as_deref()
        .or(section.url.as_deref())
        .ok_or_else(|| ConfigError::MissingField {
            field: format!("{name}.url"),
        })?;
    let url = Url::parse(url_str).map_err(|e| ConfigError::Validation {
        field: format!("{name}.url"),
        reason: format!("{url_str}: {e}"),
    })?;

    let username = service
        .username
        .clone()
        .or_else(|| section.username.clone())
        .ok_or_else(|| ConfigError::MissingField {
            field: format!("{name}.username"),
        })?;

    let password = resolve_password(name, section, service)?;

    let tls = if overrides.insecure || section.insecure {
        TlsVerification::DangerAcceptInvalid
    } else if let Some(ref ca) = section.ca_cert {
        TlsVerification::CustomCa(ca.clone())
    } else {
        TlsVerification::SystemDefaults
    };

    let timeout = overrides.timeout.unwrap_or(section.timeout);
    if timeout == 0 {
        return Err(ConfigError::Validation {
            field: format!("{name}.timeout"),
            reason: "must be at least 1 second".into(),
        });
    }

    Ok(ServiceConfig {
        url,
        username,
        password,
        tls,
        timeout: Duration::from_secs(timeout),
    })
}

/// Command line (or its env binding) -> `password_env` -> plaintext.
fn resolve_password(
    name: &str,
    section: &ServiceSection,
    service: &ServiceOverrides,
) -> Result<SecretString, ConfigError> {
    if let Some(ref pw) = service.password {
        return Ok(SecretString::from(pw.clone()));
    }

    if let Some(ref env_name) = section.password_env {
        if let Ok(val) = std::env::var(env_name) {
            return Ok(SecretString::from(val));
        }
    }

    if let Some(ref pw) = section.password {
        return Ok(SecretString::from(pw.clone()));
    }

    Err(ConfigError::NoCredentials {
        service: name.into(),
    })
}
