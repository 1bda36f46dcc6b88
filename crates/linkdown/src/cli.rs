//! Clap derive structures for the `linkdown` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// linkdown -- keep a Turbonomic group in step with Candid link-down events
#[derive(Debug, Parser)]
#[command(
    name = "linkdown",
    version,
    about = "Sync Candid link-down interfaces into a Turbonomic dynamic group",
    long_about = "Walks every fabric known to Candid, collects the interfaces named by \
        its smart events, and rewrites the criteria of a Turbonomic physical-machine \
        group so that it selects hosts attached to the affected leaf switches.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Config file (default: platform config dir)
    #[arg(long, env = "LINKDOWN_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Candid base URL
    #[arg(long, env = "LINKDOWN_CANDID_URL", global = true)]
    pub candid_url: Option<String>,

    /// Candid username
    #[arg(long, env = "LINKDOWN_CANDID_USER", global = true)]
    pub candid_user: Option<String>,

    /// Candid password
    #[arg(long, env = "LINKDOWN_CANDID_PASSWORD", global = true, hide_env_values = true)]
    pub candid_password: Option<String>,

    /// Turbonomic base URL
    #[arg(long, env = "LINKDOWN_TURBO_URL", global = true)]
    pub turbo_url: Option<String>,

    /// Turbonomic username
    #[arg(long, env = "LINKDOWN_TURBO_USER", global = true)]
    pub turbo_user: Option<String>,

    /// Turbonomic password
    #[arg(long, env = "LINKDOWN_TURBO_PASSWORD", global = true, hide_env_values = true)]
    pub turbo_password: Option<String>,

    /// Display name of the Turbonomic group to rewrite
    #[arg(long, env = "LINKDOWN_GROUP_NAME", global = true)]
    pub group: Option<String>,

    /// Accept self-signed TLS certificates on both services
    #[arg(long, short = 'k', env = "LINKDOWN_INSECURE", global = true)]
    pub insecure: bool,

    /// Per-request timeout in seconds
    #[arg(long, env = "LINKDOWN_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Fail on the first unreadable fabric or event instead of skipping it
    #[arg(long, global = true)]
    pub strict: bool,

    /// Event-detail requests in flight per fabric
    #[arg(long, global = true)]
    pub concurrency: Option<usize>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "LINKDOWN_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output Enum ──────────────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// Plain text, one value per line (scripting)
    Plain,
}

// ── Commands ─────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Walk Candid and rewrite the Turbonomic group's criteria
    Sync(SyncArgs),

    /// Walk Candid and list link-down interfaces without touching Turbonomic
    #[command(alias = "if")]
    Interfaces,

    /// Inspect CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct SyncArgs {
    /// Resolve the group and build the update, but do not send it
    #[arg(long, short = 'n')]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the config file location
    Path,

    /// Display the merged configuration, passwords masked
    Show,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
