//! Entry point for cce.
use std::process::ExitCode;

use clap::{error::ErrorKind, Parser};
use claude_code_env::{
    cli::{self, CliArgs, CliExit, LaunchRequest},
    config::{self, ConfigPaths, Settings, StdinConfirmation, EXAMPLE_CONFIG},
    launcher::{self, ShellPlan},
    telemetry,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

fn run() -> Result<(), CliExit> {
    telemetry::init_tracing().map_err(CliExit::from_error)?;

    let paths = ConfigPaths::resolve().map_err(CliExit::from_error)?;
    let settings = load_or_bootstrap_settings(&paths)?;
    let request = parse_arguments(&settings)?;

    let Some(profile) = settings.profile(&request.service_name) else {
        return Err(profile_not_found(&paths, &settings, &request.service_name));
    };

    let plan = ShellPlan::from_env();
    launcher::launch(&plan, profile, request.verbose).map_err(CliExit::from_error)
}

/// Load settings, offering to bootstrap the config on failure and retrying
/// the load once after a file was created.
fn load_or_bootstrap_settings(paths: &ConfigPaths) -> Result<Settings, CliExit> {
    let load_error = match config::load_from_paths(paths) {
        Ok(settings) => return Ok(settings),
        Err(err) => err,
    };

    let mut confirmation = StdinConfirmation;
    if config::create_config_if_needed(paths, EXAMPLE_CONFIG, &mut confirmation) {
        return config::load_from_paths(paths).map_err(|err| {
            CliExit::with_message(format!(
                "Settings are still unreadable after creating the example file: {err}"
            ))
        });
    }

    Err(CliExit::with_message(format!(
        "{load_error}\nComplete the configuration at {path} first.\n{example}",
        path = paths.file.display(),
        example = config::example_config_help(),
    )))
}

/// Parse argv; every usage failure lists the accepted forms and the profiles
/// already known from the loaded settings.
fn parse_arguments(settings: &Settings) -> Result<LaunchRequest, CliExit> {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => return Err(usage_exit(settings, err.to_string())),
    };

    args.into_request()
        .map_err(|err| usage_exit(settings, err.to_string()))
}

fn usage_exit(settings: &Settings, reason: impl AsRef<str>) -> CliExit {
    CliExit::with_message(format!(
        "{reason}\n{usage}\n{profiles}",
        reason = reason.as_ref().trim_end(),
        usage = cli::USAGE,
        profiles = cli::format_known_profiles(settings),
    ))
}

fn profile_not_found(paths: &ConfigPaths, settings: &Settings, name: &str) -> CliExit {
    CliExit::with_message(format!(
        "Service profile `{name}` does not exist in the configuration\n{profiles}\n\nAdd a `{name}` entry to {path}\n{example}",
        profiles = cli::format_known_profiles(settings),
        path = paths.file.display(),
        example = config::example_config_help(),
    ))
}
