//! SSH client configuration file management.
//!
//! The config file is treated as an append-only sequence of text lines:
//! detection scans for an existing `Host` declaration, and new aliases are
//! added as a fixed-template block at the end. Nothing is ever rewritten,
//! reordered, or deleted, so prior content survives byte-for-byte.
//!
//! There is no file locking; two concurrent runs registering the same alias
//! can both pass the check and append duplicate blocks. Runs are expected
//! to be interactive one-at-a-time invocations.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{CraneError, Result};

/// A host block to be registered in the SSH config.
///
/// `identity_file` is the private key path the `IdentityFile` directive
/// points at. Entries are write-once: this tool never mutates or removes
/// blocks it (or anyone else) wrote earlier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEntry {
    pub alias: String,
    pub hostname: String,
    pub identity_file: PathBuf,
}

impl HostEntry {
    /// Render the config block for this entry.
    ///
    /// Fixed template: publickey-only authentication bound to a single
    /// identity file, terminated by a trailing newline.
    pub fn render(&self) -> String {
        format!(
            "Host {}\n  HostName {}\n  IdentityFile {}\n  Preferredauthentications publickey\n  IdentitiesOnly yes\n",
            self.alias,
            self.hostname,
            self.identity_file.display()
        )
    }
}

/// Outcome of an append attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    /// A new block was written.
    Appended,
    /// The alias was already declared; the file was left untouched.
    AlreadyPresent,
}

/// Whether `line` declares `alias` on a `Host` directive.
///
/// Exact token matching: the first whitespace-separated token must be
/// `Host` (keywords are case-insensitive in ssh_config) and `alias` must
/// equal one of the following pattern tokens. Substring hits like `gh`
/// inside `gh2`, or hostnames on `HostName` lines, do not count.
fn line_declares_alias(line: &str, alias: &str) -> bool {
    let mut tokens = line.split_whitespace();
    match tokens.next() {
        Some(keyword) if keyword.eq_ignore_ascii_case("host") => {
            tokens.any(|pattern| pattern == alias)
        }
        _ => false,
    }
}

/// Scan the config file for a `Host` declaration of `alias`.
///
/// Lines are read lazily and trimmed before matching. Any failure to open
/// or read the file is `ConfigUnreadable`; a missing file is the caller's
/// responsibility (the appender creates it first).
pub fn host_exists(path: &Path, alias: &str) -> Result<bool> {
    let unreadable = |source: std::io::Error| CraneError::ConfigUnreadable {
        path: path.display().to_string(),
        source,
    };

    let file = File::open(path).map_err(unreadable)?;
    debug!("scanning {} for Host {}", path.display(), alias);

    for line in BufReader::new(file).lines() {
        let line = line.map_err(unreadable)?;
        if line_declares_alias(line.trim(), alias) {
            return Ok(true);
        }
    }

    Ok(false)
}

/// Append a host block for `entry`, creating the config file if missing.
///
/// Idempotent per alias: if the alias is already declared the file is left
/// byte-for-byte untouched. A new block is separated from existing content
/// by a single newline and written in one `write_all`, so prior content is
/// always a strict prefix of the result.
pub fn append_host(path: &Path, entry: &HostEntry) -> Result<AppendOutcome> {
    ensure_exists(path)?;

    if host_exists(path, &entry.alias)? {
        debug!("Host {} already declared in {}", entry.alias, path.display());
        return Ok(AppendOutcome::AlreadyPresent);
    }

    let open_failed = |source: std::io::Error| CraneError::ConfigOpenFailed {
        path: path.display().to_string(),
        source,
    };

    let len = path.metadata().map_err(open_failed)?.len();
    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(open_failed)?;

    let mut block = entry.render();
    if len > 0 {
        // Terminates an unterminated last line, or adds the customary
        // blank line between blocks.
        block.insert(0, '\n');
    }

    file.write_all(block.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|source| CraneError::ConfigWriteFailed {
            path: path.display().to_string(),
            source,
        })?;

    info!("appended Host {} to {}", entry.alias, path.display());
    Ok(AppendOutcome::Appended)
}

/// Create the config file empty if it does not exist yet.
///
/// Never truncates: creation uses `create_new`, so an existing file cannot
/// be clobbered even if it appears between the check and the open.
fn ensure_exists(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }

    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_) => {
            debug!("created empty SSH config at {}", path.display());
            Ok(())
        }
        // Another process creating the file first is as good as creating
        // it ourselves.
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => Ok(()),
        Err(source) => Err(CraneError::ConfigCreateFailed {
            path: path.display().to_string(),
            source,
        }),
    }
}
