//! CLI argument definitions and launch request validation.
use clap::Parser;
use thiserror::Error;

/// Command-line arguments.
///
/// The service name and the verbose flag may appear in either order; clap
/// handles the flag position, and `into_request` validates the positional
/// count so that "missing name" and "multiple names" stay distinct errors.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "cce",
    author,
    version,
    about = "Launch Claude Code with a named service profile's environment",
    long_about = None
)]
pub struct CliArgs {
    /// Print the assembled shell invocation and profile variables before launch.
    #[arg(short, long)]
    pub verbose: bool,
    /// Service profile name from settings.json.
    #[arg(value_name = "SERVICE_NAME")]
    pub service: Vec<String>,
}

/// Validated launch intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    pub service_name: String,
    pub verbose: bool,
}

/// Invalid command-line usage.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("A service name is required")]
    MissingServiceName,
    #[error("Only one service name may be given (got `{first}` and `{second}`)")]
    MultipleServiceNames { first: String, second: String },
}

impl CliArgs {
    /// Validate the positional count into a launch request.
    pub fn into_request(self) -> Result<LaunchRequest, UsageError> {
        let mut names = self.service.into_iter();
        let Some(service_name) = names.next() else {
            return Err(UsageError::MissingServiceName);
        };
        if let Some(second) = names.next() {
            return Err(UsageError::MultipleServiceNames {
                first: service_name,
                second,
            });
        }
        Ok(LaunchRequest {
            service_name,
            verbose: self.verbose,
        })
    }
}
