//! crane-ssh - SSH onboarding automation for developers.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── generate      # Onboarding pipeline: key, config entry, clipboard
//! │   ├── completions   # Shell completions
//! │   └── output        # Styled terminal output helpers
//! └── core/             # Core library components
//!     ├── config        # ~/.ssh/config scanning and append-only updates
//!     ├── keys          # Key provisioning via the ssh-keygen collaborator
//!     ├── clipboard     # Clipboard publishing via platform utilities
//!     └── constants     # Fixed names and key parameters
//! ```
//!
//! # Behavior
//!
//! - Reuses an existing key pair; generates an RSA-4096 pair otherwise
//! - Registers one `Host` block per alias, never touching existing lines
//! - Copies the public key to the clipboard, printing it when no clipboard
//!   utility is available
//! - Every step is idempotent, so a failed run is safe to repeat

pub mod cli;
pub mod core;
pub mod error;
