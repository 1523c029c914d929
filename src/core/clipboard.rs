//! Clipboard integration via external platform utilities.
//!
//! There is no portable clipboard syscall, so the text is piped to
//! whichever copy tool the platform ships. Failure here is never fatal to
//! the caller; the public key can always be printed instead.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;
use which::which;

use crate::error::{CraneError, Result};

/// Copy utilities probed in order. First hit on PATH wins.
const CLIPBOARD_TOOLS: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("clip", &[]),
];

/// Puts text on the system clipboard.
///
/// Seam for tests; production code uses [`SystemClipboard`].
pub trait Clipboard {
    fn copy(&self, text: &str) -> Result<()>;
}

/// Pipes text to the first known copy utility found on PATH.
pub struct SystemClipboard;

impl SystemClipboard {
    fn find_tool() -> Result<(PathBuf, &'static [&'static str])> {
        for (name, args) in CLIPBOARD_TOOLS {
            if let Ok(path) = which(name) {
                debug!("using clipboard tool {}", path.display());
                return Ok((path, args));
            }
        }
        Err(CraneError::ClipboardUnavailable(
            "no clipboard utility found on PATH".to_string(),
        ))
    }

    fn pipe_to(tool: &Path, args: &[&str], text: &str) -> Result<()> {
        let mut child = Command::new(tool)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                CraneError::ClipboardUnavailable(format!(
                    "{} failed to start: {e}",
                    tool.display()
                ))
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).map_err(|e| {
                CraneError::ClipboardUnavailable(format!(
                    "{} rejected input: {e}",
                    tool.display()
                ))
            })?;
            // Dropping stdin closes the pipe so the tool sees EOF.
        }

        let status = child.wait().map_err(|e| {
            CraneError::ClipboardUnavailable(format!("{} did not finish: {e}", tool.display()))
        })?;

        if !status.success() {
            return Err(CraneError::ClipboardUnavailable(format!(
                "{} exited with {status}",
                tool.display()
            )));
        }

        Ok(())
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        let (tool, args) = Self::find_tool()?;
        Self::pipe_to(&tool, args, text)
    }
}
