//! Config subcommand handlers.

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

pub fn handle(args: &ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Path => {
            let path = global
                .config
                .clone()
                .unwrap_or_else(linkdown_config::config_path);
            output::print_output(&path.display().to_string(), global.quiet)
        }

        ConfigCommand::Show => {
            let cfg = super::load(global)?.redacted();
            let toml = cfg.to_toml()?;
            let out = output::render_single(&global.output, &cfg, |_| toml.clone(), |_| toml.clone())?;
            output::print_output(out.trim_end(), global.quiet)
        }
    }
}
