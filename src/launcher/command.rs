//! Shell invocation assembly for launching `claude`.
use std::{env, process::Command};

use crate::config::ProfileConfig;

/// Shell used when `SHELL` is unset or empty.
pub const DEFAULT_SHELL: &str = "/bin/zsh";
/// Snippet run inside the interactive shell. Sourcing the rc file first keeps
/// the user's aliases and PATH additions available to `claude`.
pub const LAUNCH_SNIPPET: &str = "source ~/.zshrc && claude";

/// Resolved shell invocation for one launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellPlan {
    pub shell: String,
}

impl ShellPlan {
    /// Pick the shell from the invoking environment.
    pub fn from_env() -> Self {
        Self::from_shell_var(env::var("SHELL").ok())
    }

    /// Resolve from an explicit `SHELL` value (testable helper).
    pub fn from_shell_var(shell: Option<String>) -> Self {
        let shell = shell
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SHELL.to_string());
        Self { shell }
    }

    /// Render the invocation line shown in verbose mode.
    pub fn display_line(&self) -> String {
        format!("{} -i -c \"{}\"", self.shell, LAUNCH_SNIPPET)
    }

    /// Build the child command: interactive shell, inherited environment with
    /// the profile overlaid (profile values win), inherited stdio.
    pub fn build_command(&self, profile: &ProfileConfig) -> Command {
        let mut command = Command::new(&self.shell);
        command.arg("-i").arg("-c").arg(LAUNCH_SNIPPET);
        for (key, value) in profile {
            command.env(key, value);
        }
        command
    }
}
