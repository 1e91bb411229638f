//! Command-line interface.

pub mod completions;
pub mod input;
pub mod output;
pub mod parse;
pub mod push;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::constants;
use crate::error::Result;

/// Sealenv - bulk-provision .env secrets into GitHub Actions.
#[derive(Parser)]
#[command(
    name = "sealenv",
    about = "Bulk-provision .env secrets into GitHub Actions with sealed-box encryption",
    version,
    after_help = "Values are sealed locally; plaintext never leaves this machine."
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a config file (defaults to ./.sealenv.toml)
    #[arg(long, global = true, env = "SEALENV_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Seal and push every secret in a .env file to a repository
    Push(PushArgs),

    /// List the keys a .env file would push, without contacting GitHub
    Parse {
        /// Path to .env file (reads stdin when omitted)
        #[arg(short, long, value_name = "PATH")]
        file: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for `sealenv push`.
#[derive(Args, Debug)]
pub struct PushArgs {
    /// Target repository as owner/name
    pub resource: String,

    /// Path to .env file (reads stdin when omitted)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Token with secrets write access
    #[arg(long, env = constants::TOKEN_ENV, hide_env_values = true)]
    pub token: Option<String>,

    /// Print the run result as JSON
    #[arg(long)]
    pub json: bool,

    /// Secrets pushed concurrently
    #[arg(short, long, env = "SEALENV_CONCURRENCY")]
    pub concurrency: Option<usize>,

    /// Per-request timeout in seconds
    #[arg(long, env = "SEALENV_TIMEOUT", value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Retries for transient failures
    #[arg(long, env = "SEALENV_RETRIES")]
    pub retries: Option<u32>,

    /// REST API base URL (GitHub Enterprise)
    #[arg(long, env = "SEALENV_API_URL", value_name = "URL")]
    pub api_url: Option<String>,
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Push(args) => push::execute(args, cli.config.as_deref()),
        Command::Parse { file, json } => parse::execute(file.as_deref(), json),
        Command::Completions { shell } => completions::execute(shell),
    }
}
