//! Shared CLI output helpers for consistent terminal output.
//!
//! Styling goes through `console`, which disables colors on pipes and
//! honors NO_COLOR. Color scheme:
//! - Green: success
//! - Red: errors (stderr)
//! - Yellow: warnings
//! - Cyan: paths, hints
//! - Dimmed/bold: key-value labels and values

use console::style;
use std::fmt::Display;

/// Print a success message with checkmark (green).
///
/// Example: `✓ generated RSA-4096 key pair`
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green(), msg);
}

/// Print an error message to stderr (red).
///
/// Example: `✗ key generation failed`
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red(), msg);
}

/// Print a warning message (yellow).
///
/// Example: `⚠ Host gh already exists in ~/.ssh/config`
pub fn warn(msg: &str) {
    println!("{} {}", style("⚠").yellow(), msg);
}

/// Print a hint message (cyan).
///
/// Example: `→ paste it into your remote service`
pub fn hint(msg: &str) {
    println!("{} {}", style("→").cyan(), style(msg).cyan());
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  identity  /home/user/.ssh/id_rsa`
pub fn kv(label: &str, value: impl Display) {
    println!("  {}  {}", style(label).dim(), style(value).bold());
}

/// Format a path for inline display (cyan).
pub fn path(p: impl Display) -> String {
    style(p).cyan().to_string()
}
