//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text and a process exit code.

use miette::Diagnostic;
use thiserror::Error;

use linkdown_config::ConfigError;
use linkdown_core::CoreError;

pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to {url}")]
    #[diagnostic(
        code(linkdown::connection_failed),
        help(
            "Check that the service is running and reachable.\n\
             Reason: {reason}\n\
             For self-signed certificates try --insecure (-k) or set ca_cert."
        )
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("Request to {url} timed out after {seconds}s")]
    #[diagnostic(
        code(linkdown::timeout),
        help("Increase the limit with --timeout or check the service's responsiveness.")
    )]
    Timeout { url: String, seconds: u64 },

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(linkdown::auth_failed),
        help(
            "Verify the username and password for that service.\n\
             Flags: --candid-user/--candid-password, --turbo-user/--turbo-password"
        )
    )]
    AuthFailed { message: String },

    #[error("No password configured for {service}")]
    #[diagnostic(
        code(linkdown::no_credentials),
        help(
            "Pass --{service}-password, or set {service}.password_env in the config file \
             to the name of an environment variable holding it."
        )
    )]
    NoCredentials { service: String },

    // ── Resources ────────────────────────────────────────────────────
    #[error("Turbonomic group '{name}' not found")]
    #[diagnostic(
        code(linkdown::group_not_found),
        help("Create a dynamic physical-machine group with that exact display name, or pass --group.")
    )]
    GroupNotFound { name: String },

    #[error("Not found: {url}")]
    #[diagnostic(code(linkdown::not_found))]
    NotFound { url: String },

    // ── Remote data ──────────────────────────────────────────────────
    #[error("API error (HTTP {status}) from {url}")]
    #[diagnostic(code(linkdown::api_error))]
    Api { url: String, status: u16 },

    #[error("Unreadable response: {message}")]
    #[diagnostic(
        code(linkdown::decode),
        help("Re-run with -vv to log the raw response body.")
    )]
    Decode { message: String },

    #[error("Refusing to update: no interfaces collected, {skipped} fabric(s)/event(s) skipped")]
    #[diagnostic(
        code(linkdown::incomplete_walk),
        help(
            "Candid answered the fabric list but none of the events could be read,\n\
             so the group was left as it is. Re-run with -v to see each skipped item."
        )
    )]
    IncompleteWalk { skipped: usize },

    #[error("Malformed interface DN '{dn}' ({segments} segment(s))")]
    #[diagnostic(
        code(linkdown::malformed_dn),
        help("Drop --strict to skip events like this one instead of failing the run.")
    )]
    MalformedDn { dn: String, segments: usize },

    // ── Configuration ────────────────────────────────────────────────
    #[error("{field} is not configured")]
    #[diagnostic(
        code(linkdown::missing_setting),
        help("Set it in the config file (see: linkdown config path) or pass the matching flag.")
    )]
    MissingSetting { field: String },

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(linkdown::validation))]
    Validation { field: String, reason: String },

    #[error(transparent)]
    #[diagnostic(code(linkdown::config))]
    Config(Box<figment::Error>),

    // ── IO / Serialization ────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render output: {message}")]
    #[diagnostic(code(linkdown::render))]
    Render { message: String },
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::GroupNotFound { .. } | Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::MissingSetting { .. } | Self::Validation { .. } | Self::Config(_) => {
                exit_code::USAGE
            }
            _ => exit_code::GENERAL,
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Render {
            message: err.to_string(),
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { url, reason } => CliError::ConnectionFailed { url, reason },
            CoreError::AuthenticationFailed { message } => CliError::AuthFailed { message },
            CoreError::Timeout { url, timeout_secs } => CliError::Timeout {
                url,
                seconds: timeout_secs,
            },
            CoreError::GroupNotFound { name } => CliError::GroupNotFound { name },
            CoreError::NotFound { url } => CliError::NotFound { url },
            CoreError::Decode { message } => CliError::Decode { message },
            CoreError::IncompleteWalk { skipped } => CliError::IncompleteWalk { skipped },
            CoreError::MalformedDn { dn, segments } => CliError::MalformedDn { dn, segments },
            CoreError::Api { url, status } => CliError::Api { url, status },
            CoreError::Config { message } => CliError::Validation {
                field: "config".into(),
                reason: message,
            },
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::MissingField { field } => CliError::MissingSetting { field },
            ConfigError::NoCredentials { service } => CliError::NoCredentials { service },
            ConfigError::Figment(e) => CliError::Config(e),
            ConfigError::Serialization(e) => CliError::Render {
                message: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_map_to_exit_codes() {
        let cases = [
            (
                CoreError::AuthenticationFailed {
                    message: "401".into(),
                },
                exit_code::AUTH,
            ),
            (
                CoreError::GroupNotFound { name: "g".into() },
                exit_code::NOT_FOUND,
            ),
            (
                CoreError::Timeout {
                    url: "u".into(),
                    timeout_secs: 60,
                },
                exit_code::TIMEOUT,
            ),
            (
                CoreError::ConnectionFailed {
                    url: "u".into(),
                    reason: "refused".into(),
                },
                exit_code::CONNECTION,
            ),
            (
                CoreError::Api {
                    url: "u".into(),
                    status: 500,
                },
                exit_code::GENERAL,
            ),
            (CoreError::IncompleteWalk { skipped: 3 }, exit_code::GENERAL),
        ];
        for (core, code) in cases {
            assert_eq!(CliError::from(core).exit_code(), code);
        }
    }

    #[test]
    fn config_errors_are_usage_or_auth() {
        let missing = CliError::from(ConfigError::MissingField {
            field: "candid.url".into(),
        });
        assert_eq!(missing.exit_code(), exit_code::USAGE);

        let creds = CliError::from(ConfigError::NoCredentials {
            service: "turbo".into(),
        });
        assert_eq!(creds.exit_code(), exit_code::AUTH);
    }
}
