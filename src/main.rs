//! crane-ssh - SSH onboarding automation for developers.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crane_ssh::cli::output;
use crane_ssh::cli::{execute, Cli};
use crane_ssh::error::CraneError;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Mistyping the one real subcommand is answered with usage text and
        // a clean exit, not an error status.
        Err(err) if err.kind() == ErrorKind::InvalidSubcommand => {
            print_usage();
            return;
        }
        Err(err) => err.exit(),
    };

    // Initialize tracing subscriber with env-filter support. Logs go to
    // stderr so key material printed on stdout stays machine-copyable.
    let filter = EnvFilter::try_from_env("CRANE_SSH_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("crane_ssh=debug")
        } else {
            EnvFilter::new("crane_ssh=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let Some(command) = cli.command else {
        print_usage();
        return;
    };

    if let Err(e) = execute(command) {
        let suggestion = match &e {
            CraneError::KeyGenFailed(_) => Some("is ssh-keygen installed and on PATH?"),
            CraneError::MissingRequiredArgument(_) => {
                Some("pass --host and --alias, or answer the prompts")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}

/// Print usage help to stdout.
fn print_usage() {
    let mut cmd = Cli::command();
    let _ = cmd.print_help();
}
