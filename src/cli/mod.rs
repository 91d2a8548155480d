//! CLI entrypoint module structure.
use std::process::ExitCode;

use anyhow::Error;

use crate::config::Settings;

pub mod args;

pub use args::{CliArgs, LaunchRequest, UsageError};

/// Accepted invocation forms, shown on every usage error.
pub const USAGE: &str =
    "Usage: cce [--verbose|-v] <service-name>\n       cce <service-name> [--verbose|-v]";

/// Bundles a failure message with the process exit code.
#[derive(Debug)]
pub struct CliExit {
    message: String,
    exit_code: ExitCode,
}

impl CliExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:#}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        self.exit_code
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Enumerate known profile names for usage and lookup failures.
pub fn format_known_profiles(settings: &Settings) -> String {
    if settings.is_empty() {
        return "Available service profiles: (none configured)".to_string();
    }
    let mut out = String::from("Available service profiles:");
    for name in settings.profile_names() {
        out.push_str("\n  - ");
        out.push_str(name);
    }
    out
}
