//! Constants used throughout crane-ssh.
//!
//! Centralizes magic strings and the fixed key-generation parameters.

/// SSH directory name under the user's home (~/.ssh).
pub const SSH_DIR: &str = ".ssh";

/// SSH client configuration file name inside the SSH directory.
pub const CONFIG_FILE: &str = "config";

/// Key file name used when the user does not pick one.
pub const DEFAULT_KEY_NAME: &str = "id_rsa";

/// Key algorithm requested from ssh-keygen.
pub const KEY_TYPE: &str = "rsa";

/// Key length in bits requested from ssh-keygen.
pub const KEY_BITS: u32 = 4096;
