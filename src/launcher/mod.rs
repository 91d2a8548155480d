//! Launch `claude` through the user's interactive shell.
use std::io;

use thiserror::Error;
use tracing::{debug, info};

use crate::config::ProfileConfig;

pub mod command;
pub mod exit;

pub use command::{ShellPlan, DEFAULT_SHELL, LAUNCH_SNIPPET};
pub use exit::{classify, classify_code, ExitOutcome, BENIGN_EXIT_CODES};

/// Failures launching or running `claude`.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The shell reported exit 127 for the snippet.
    #[error("The `claude` command was not found; make sure Claude Code is installed")]
    CommandNotFound,
    /// Any non-benign failure exit.
    #[error("`claude` exited abnormally (exit={code:?})")]
    AbnormalExit { code: Option<i32> },
    /// The shell itself could not be started.
    #[error("Failed to start shell `{shell}`: {source}")]
    Spawn {
        shell: String,
        #[source]
        source: io::Error,
    },
}

/// Run the shell synchronously and classify its exit.
///
/// Stdio is inherited, so the child owns the terminal until it exits; signals
/// reach it through the shared terminal rather than through this process.
pub fn launch(
    plan: &ShellPlan,
    profile: &ProfileConfig,
    verbose: bool,
) -> Result<(), LaunchError> {
    if verbose {
        print_verbose_preamble(plan, profile);
    }

    debug!(
        target: "cce::launcher",
        shell = %plan.shell,
        overrides = profile.len(),
        "Starting interactive shell"
    );

    let status = plan
        .build_command(profile)
        .status()
        .map_err(|err| LaunchError::Spawn {
            shell: plan.shell.clone(),
            source: err,
        })?;

    let outcome = exit::classify(status);
    info!(
        target: "cce::launcher",
        exit_code = ?status.code(),
        outcome = ?outcome,
        "Child shell exited"
    );

    match outcome {
        ExitOutcome::Success | ExitOutcome::Benign(_) => Ok(()),
        ExitOutcome::CommandMissing => Err(LaunchError::CommandNotFound),
        ExitOutcome::Abnormal(code) => Err(LaunchError::AbnormalExit { code }),
    }
}

fn print_verbose_preamble(plan: &ShellPlan, profile: &ProfileConfig) {
    println!("=== Verbose Mode ===");
    println!("Executing: {}", plan.display_line());
    println!("Profile environment variables:");
    for (key, value) in profile {
        println!("  {key}={value}");
    }
    println!("====================");
}
