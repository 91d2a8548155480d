//! One-time interactive creation of the config directory and example file.
use std::{
    fs,
    io::{self, BufRead, Write},
};

use tracing::warn;

use super::ConfigPaths;

/// Answers yes/no prompts. Production reads the terminal; tests script answers.
pub trait ConfirmationSource {
    /// Present `prompt` and return the user's decision.
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Reads confirmations from standard input.
#[derive(Debug, Default)]
pub struct StdinConfirmation;

impl ConfirmationSource for StdinConfirmation {
    fn confirm(&mut self, prompt: &str) -> bool {
        print!("{prompt} (Y/n): ");
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            // EOF counts as a decline.
            Ok(0) | Err(_) => false,
            Ok(_) => parse_confirmation(&line),
        }
    }
}

/// Empty input defaults to yes.
pub fn parse_confirmation(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "" | "y" | "yes")
}

/// Offer to create the config directory and an example settings file.
///
/// Returns true only when a new settings file was written. Declined prompts
/// and filesystem failures abort the remaining steps and return false, as
/// does finding both the directory and the file already in place.
pub fn create_config_if_needed(
    paths: &ConfigPaths,
    example_config: &str,
    confirmation: &mut dyn ConfirmationSource,
) -> bool {
    if !paths.dir.exists() {
        let prompt = format!(
            "Config directory {} does not exist. Create it?",
            paths.dir.display()
        );
        if !confirmation.confirm(&prompt) {
            return false;
        }
        if let Err(err) = fs::create_dir_all(&paths.dir) {
            warn!(
                target: "cce::config",
                path = %paths.dir.display(),
                reason = %err,
                "Failed to create config directory"
            );
            eprintln!(
                "Failed to create config directory {}: {err}",
                paths.dir.display()
            );
            return false;
        }
        println!("Created config directory: {}", paths.dir.display());
    }

    if !paths.file.exists() {
        let prompt = format!(
            "Settings file {} does not exist. Create it with an example configuration?",
            paths.file.display()
        );
        if !confirmation.confirm(&prompt) {
            return false;
        }
        if let Err(err) = fs::write(&paths.file, example_config) {
            warn!(
                target: "cce::config",
                path = %paths.file.display(),
                reason = %err,
                "Failed to create settings file"
            );
            eprintln!(
                "Failed to create settings file {}: {err}",
                paths.file.display()
            );
            return false;
        }
        println!("Created settings file: {}", paths.file.display());
        println!("Edit it to add your own service profiles.");
        return true;
    }

    false
}
