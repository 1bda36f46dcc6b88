//! Command handlers: load config, build the core objects, render results.

pub mod config_cmd;
pub mod interfaces;
pub mod sync;

use linkdown_config::{Config, Overrides, ServiceOverrides};

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Load the config file named by `--config`, or the default location.
///
/// A missing default file is fine; a missing `--config` file is not.
pub(crate) fn load(global: &GlobalOpts) -> Result<Config, CliError> {
    if let Some(ref path) = global.config {
        if !path.is_file() {
            return Err(CliError::Validation {
                field: "--config".into(),
                reason: format!("{} does not exist", path.display()),
            });
        }
    }
    Ok(linkdown_config::load_config(global.config.as_deref())?)
}

pub(crate) fn overrides(global: &GlobalOpts) -> Overrides {
    Overrides {
        candid: ServiceOverrides {
            url: global.candid_url.clone(),
            username: global.candid_user.clone(),
            password: global.candid_password.clone(),
        },
        turbo: ServiceOverrides {
            url: global.turbo_url.clone(),
            username: global.turbo_user.clone(),
            password: global.turbo_password.clone(),
        },
        group: global.group.clone(),
        insecure: global.insecure,
        timeout: global.timeout,
        strict: global.strict,
        concurrency: global.concurrency,
    }
}
