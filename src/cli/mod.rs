//! Command-line interface.

pub mod completions;
pub mod generate;
pub mod output;

use clap::{Args, Parser, Subcommand};

/// crane-ssh - SSH onboarding automation for developers.
#[derive(Parser)]
#[command(
    name = "crane-ssh",
    about = "Generate an SSH key, register a host alias, copy the public key",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate or reuse an SSH key, register a host alias, publish the
    /// public key
    Generate(GenerateArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Flags for `generate`. Anything left out is prompted for interactively.
#[derive(Args)]
pub struct GenerateArgs {
    /// SSH server host (e.g. github.com)
    #[arg(long)]
    pub host: Option<String>,

    /// Alias to register in the SSH config
    #[arg(long)]
    pub alias: Option<String>,

    /// Key file name under ~/.ssh (default: id_rsa)
    #[arg(long = "keyName", alias = "key-name", value_name = "NAME")]
    pub key_name: Option<String>,

    /// Key passphrase (empty for none)
    #[arg(long, env = "CRANE_SSH_PASSPHRASE", hide_env_values = true)]
    pub passphrase: Option<String>,
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    match command {
        Command::Generate(args) => generate::execute(args),
        Command::Completions { shell } => completions::execute(shell),
    }
}
