//! Exit-status classification policy for the launched shell.
use std::process::ExitStatus;

/// Exit code shells report when the target command was not found.
pub const COMMAND_NOT_FOUND_CODE: i32 = 127;
/// Codes treated as user-initiated termination rather than failure.
pub const BENIGN_EXIT_CODES: [i32; 3] = [1, 2, 130];

/// Outcome of one child invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    /// Clean exit.
    Success,
    /// Non-zero code interpreted as user-initiated (interrupt, normal quit).
    Benign(i32),
    /// `claude` is not installed (exit 127).
    CommandMissing,
    /// Any other failure; `None` when the child was killed by a signal.
    Abnormal(Option<i32>),
}

/// Classify a wait status.
pub fn classify(status: ExitStatus) -> ExitOutcome {
    classify_code(status.code())
}

/// Classify a raw exit code. `None` means the child was signal-terminated.
pub fn classify_code(code: Option<i32>) -> ExitOutcome {
    match code {
        Some(0) => ExitOutcome::Success,
        Some(COMMAND_NOT_FOUND_CODE) => ExitOutcome::CommandMissing,
        Some(code) if BENIGN_EXIT_CODES.contains(&code) => ExitOutcome::Benign(code),
        other => ExitOutcome::Abnormal(other),
    }
}
