//! SSH key pair provisioning.
//!
//! Key material is never generated in-process. The system `ssh-keygen`
//! binary owns the cryptography; this module decides whether to invoke it
//! and where the resulting files live.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::core::constants::{KEY_BITS, KEY_TYPE};
use crate::error::{CraneError, Result};

/// Paths of a private/public key file pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    pub private_key: PathBuf,
    pub public_key: PathBuf,
}

impl KeyPair {
    /// Locate the pair named `key_name` inside `dir`.
    ///
    /// The public half follows the `ssh-keygen` convention of the private
    /// path plus a `.pub` suffix.
    pub fn in_dir(dir: &Path, key_name: &str) -> Self {
        KeyPair {
            private_key: dir.join(key_name),
            public_key: dir.join(format!("{key_name}.pub")),
        }
    }
}

/// Result of [`provision`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisionOutcome {
    /// A fresh pair was generated.
    Generated(KeyPair),
    /// The public key file was already present; nothing was touched.
    Reused(KeyPair),
}

impl ProvisionOutcome {
    pub fn key_pair(&self) -> &KeyPair {
        match self {
            ProvisionOutcome::Generated(pair) | ProvisionOutcome::Reused(pair) => pair,
        }
    }
}

/// Generates a key pair on disk.
///
/// Seam for tests; production code uses [`SshKeygen`].
pub trait KeyGenerator {
    fn generate(&self, private_key: &Path, passphrase: &str) -> Result<()>;
}

/// Runs the system `ssh-keygen` binary.
pub struct SshKeygen;

impl KeyGenerator for SshKeygen {
    fn generate(&self, private_key: &Path, passphrase: &str) -> Result<()> {
        debug!("invoking ssh-keygen for {}", private_key.display());

        let output = Command::new("ssh-keygen")
            .arg("-t")
            .arg(KEY_TYPE)
            .arg("-b")
            .arg(KEY_BITS.to_string())
            .arg("-f")
            .arg(private_key)
            .arg("-N")
            .arg(passphrase)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| CraneError::KeyGenFailed(format!("failed to run ssh-keygen: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CraneError::KeyGenFailed(format!(
                "ssh-keygen exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(())
    }
}

/// Ensure the key pair named `key_name` exists under `dir`.
///
/// The public key file is the reuse marker: when it exists the pair is
/// taken as-is, the generator never runs, and neither the key nor its
/// passphrase can be clobbered. Otherwise `dir` is created first (mode
/// 0700 on Unix, matching what `ssh` requires of its directory) and the
/// generator produces a fresh pair.
pub fn provision(
    dir: &Path,
    key_name: &str,
    passphrase: &str,
    generator: &dyn KeyGenerator,
) -> Result<ProvisionOutcome> {
    let pair = KeyPair::in_dir(dir, key_name);

    if pair.public_key.exists() {
        debug!("reusing existing key pair at {}", pair.private_key.display());
        return Ok(ProvisionOutcome::Reused(pair));
    }

    ensure_key_dir(dir)?;
    generator.generate(&pair.private_key, passphrase)?;

    info!(
        "generated {}-bit {} key at {}",
        KEY_BITS,
        KEY_TYPE,
        pair.private_key.display()
    );
    Ok(ProvisionOutcome::Generated(pair))
}

fn ensure_key_dir(dir: &Path) -> Result<()> {
    let dir_create = |source: std::io::Error| CraneError::DirCreateFailed {
        path: dir.display().to_string(),
        source,
    };

    fs::create_dir_all(dir).map_err(dir_create)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(dir, fs::Permissions::from_mode(0o700)).map_err(dir_create)?;
    }

    Ok(())
}
