//! The `generate` command: provision a key pair, register the host alias,
//! publish the public key.

use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};

use dialoguer::{Input, Password};
use zeroize::Zeroizing;

use crate::cli::{output, GenerateArgs};
use crate::core::clipboard::{Clipboard, SystemClipboard};
use crate::core::config::{self, AppendOutcome, HostEntry};
use crate::core::constants::{CONFIG_FILE, DEFAULT_KEY_NAME, KEY_BITS, KEY_TYPE, SSH_DIR};
use crate::core::keys::{self, KeyGenerator, ProvisionOutcome, SshKeygen};
use crate::error::{CraneError, Result};

/// Fully resolved inputs for one onboarding run.
#[derive(Debug)]
pub struct GenerateParams {
    pub host: String,
    pub alias: String,
    pub key_name: String,
    pub passphrase: Zeroizing<String>,
}

pub fn execute(args: GenerateArgs) -> Result<()> {
    let params = resolve(args)?;
    run(&params, &ssh_dir()?, &SshKeygen, &SystemClipboard)
}

/// Run the onboarding steps against injectable collaborators.
///
/// Order matters: the key pair must exist before the config block can
/// point at it, and the config block is registered before publishing so a
/// clipboard hiccup cannot lose the alias.
fn run(
    params: &GenerateParams,
    ssh_dir: &Path,
    generator: &dyn KeyGenerator,
    clipboard: &dyn Clipboard,
) -> Result<()> {
    let outcome = keys::provision(ssh_dir, &params.key_name, &params.passphrase, generator)?;
    match &outcome {
        ProvisionOutcome::Generated(pair) => {
            output::success(&format!(
                "generated {}-{} key pair",
                KEY_TYPE.to_uppercase(),
                KEY_BITS
            ));
            output::kv("identity", pair.private_key.display());
        }
        ProvisionOutcome::Reused(pair) => {
            output::warn(&format!(
                "SSH key already exists, reusing {}",
                pair.private_key.display()
            ));
        }
    }

    let pair = outcome.key_pair();
    let config_path = ssh_dir.join(CONFIG_FILE);
    let entry = HostEntry {
        alias: params.alias.clone(),
        hostname: params.host.clone(),
        identity_file: pair.private_key.clone(),
    };
    match config::append_host(&config_path, &entry)? {
        AppendOutcome::Appended => output::success(&format!(
            "added Host {} ({}) to {}",
            entry.alias,
            entry.hostname,
            output::path(config_path.display())
        )),
        AppendOutcome::AlreadyPresent => output::warn(&format!(
            "Host {} already exists in {}",
            entry.alias,
            output::path(config_path.display())
        )),
    }

    publish(&pair.public_key, clipboard)
}

/// Hand the public key to the clipboard, falling back to stdout.
///
/// Clipboard failure is downgraded to a warning: the key pair and config
/// block are already in place, so the run still counts as a success.
fn publish(public_key: &Path, clipboard: &dyn Clipboard) -> Result<()> {
    let key_text = fs::read_to_string(public_key)?;

    match clipboard.copy(&key_text) {
        Ok(()) => {
            output::success("public key copied to clipboard");
            output::hint("paste it into your remote service to finish onboarding");
        }
        Err(e) => {
            output::warn(&format!("{e}; printing the public key instead"));
            let mut stdout = io::stdout();
            stdout.write_all(key_text.as_bytes())?;
            if !key_text.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            stdout.flush()?;
        }
    }

    Ok(())
}

/// The `~/.ssh` directory for the current user.
fn ssh_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(SSH_DIR))
        .ok_or(CraneError::HomeDirUnavailable)
}

/// Fill in whatever the flags left out, prompting field by field.
fn resolve(args: GenerateArgs) -> Result<GenerateParams> {
    let host = match args.host.filter(|v| !v.is_empty()) {
        Some(value) => value,
        None => prompt_line("SSH server host (e.g. github.com)")?,
    };
    let alias = match args.alias.filter(|v| !v.is_empty()) {
        Some(value) => value,
        None => prompt_line("Host alias for your SSH config")?,
    };
    let key_name = match args.key_name.filter(|v| !v.is_empty()) {
        Some(value) => value,
        None => prompt_line(&format!("Key file name (default: {DEFAULT_KEY_NAME})"))?,
    };
    // An explicitly empty --passphrase (or env value) means "no
    // passphrase", so only a missing flag prompts.
    let passphrase = match args.passphrase {
        Some(value) => value,
        None => prompt_passphrase("Key passphrase (empty for none)")?,
    };

    finalize(host, alias, key_name, passphrase)
}

/// Validate resolved values and apply defaults.
fn finalize(
    host: String,
    alias: String,
    key_name: String,
    passphrase: String,
) -> Result<GenerateParams> {
    if host.is_empty() {
        return Err(CraneError::MissingRequiredArgument("--host"));
    }
    if alias.is_empty() {
        return Err(CraneError::MissingRequiredArgument("--alias"));
    }

    let key_name = if key_name.is_empty() {
        DEFAULT_KEY_NAME.to_string()
    } else {
        key_name
    };

    Ok(GenerateParams {
        host,
        alias,
        key_name,
        passphrase: Zeroizing::new(passphrase),
    })
}

/// Ask for one line of input.
///
/// On a terminal this is an interactive prompt; with piped stdin the next
/// line is consumed instead, so scripted runs keep working.
fn prompt_line(label: &str) -> Result<String> {
    if io::stdin().is_terminal() {
        let value: String = Input::<String>::new()
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()?;
        Ok(value.trim().to_string())
    } else {
        read_stdin_line()
    }
}

fn prompt_passphrase(label: &str) -> Result<String> {
    if io::stdin().is_terminal() {
        Ok(Password::new()
            .with_prompt(label)
            .allow_empty_password(true)
            .interact()?)
    } else {
        read_stdin_line()
    }
}

/// One trimmed line from piped stdin; EOF reads as empty.
fn read_stdin_line() -> Result<String> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
