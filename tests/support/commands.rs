//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a crane-ssh command with correct environment variables.
    ///
    /// Returns a Command configured with:
    /// - HOME (and USERPROFILE, for Windows) set to the temporary home
    /// - PATH restricted to the stub bin directory
    /// - passphrase and logging env vars cleared so the host environment
    ///   cannot leak into a test
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("crane-ssh").expect("failed to find crane-ssh binary");
        cmd.env("HOME", self.home.path());
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("PATH", self.bin.path());
        cmd.env_remove("CRANE_SSH_PASSPHRASE");
        cmd.env_remove("CRANE_SSH_LOG");
        cmd.current_dir(self.home.path());
        cmd
    }

    /// Shortcut for `crane-ssh generate` with flags and no piped input.
    ///
    /// Stdin is an empty pipe, so any prompt for a missing flag reads EOF
    /// instead of hanging the test.
    pub fn generate(&self, args: &[&str]) -> Output {
        self.generate_with_stdin(args, "")
    }

    /// Shortcut for `crane-ssh generate` with flags and piped prompt input.
    pub fn generate_with_stdin(&self, args: &[&str], stdin: &str) -> Output {
        self.cmd()
            .arg("generate")
            .args(args)
            .write_stdin(stdin)
            .output()
            .expect("failed to run crane-ssh generate")
    }

    /// Shortcut for `crane-ssh completions` command.
    pub fn completions(&self, shell: &str) -> Output {
        self.cmd()
            .args(["completions", shell])
            .output()
            .expect("failed to run crane-ssh completions")
    }
}
