//! Settings types, config path resolution, and the example configuration document.
use std::{
    collections::BTreeMap,
    io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod bootstrap;
pub mod loader;

pub use bootstrap::{create_config_if_needed, ConfirmationSource, StdinConfirmation};
pub use loader::{load_from_paths, load_settings};

/// Directory under the home directory holding cce configuration.
pub const CONFIG_DIR_NAME: &str = ".claude-code-env";
/// Settings file name inside the config directory.
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Example settings document, written verbatim by the bootstrapper and shown
/// whenever the user needs a reference configuration.
pub const EXAMPLE_CONFIG: &str = r#"{
    "service-name1": {
        "ANTHROPIC_BASE_URL": "https://service1",
        "ANTHROPIC_AUTH_TOKEN": "sk-1"
    },
    "service-name2": {
        "ANTHROPIC_BASE_URL": "https://service2",
        "ANTHROPIC_API_KEY": "sk-2",
        "ANTHROPIC_ANTHROPIC_MODEL": "kimi-k2"
    }
}"#;

/// Environment variable overrides applied for one service profile.
pub type ProfileConfig = BTreeMap<String, String>;

/// All named service profiles from `settings.json`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Settings {
    profiles: BTreeMap<String, ProfileConfig>,
}

impl Settings {
    /// Look up one profile by name.
    pub fn profile(&self, name: &str) -> Option<&ProfileConfig> {
        self.profiles.get(name)
    }

    /// Profile names in deterministic order.
    pub fn profile_names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }
}

/// Resolved locations of the config directory and settings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    pub dir: PathBuf,
    pub file: PathBuf,
}

impl ConfigPaths {
    /// Resolve under the user's home directory.
    pub fn resolve() -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeDirUnavailable)?;
        Ok(Self::under(&home))
    }

    /// Resolve under an explicit base directory (testable helper).
    pub fn under(home: &Path) -> Self {
        let dir = home.join(CONFIG_DIR_NAME);
        let file = dir.join(SETTINGS_FILE_NAME);
        Self { dir, file }
    }
}

/// Errors that can occur while resolving or loading the settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The home directory could not be determined.
    #[error("Could not determine the user home directory")]
    HomeDirUnavailable,
    /// The settings file does not exist yet.
    #[error("Configuration file {path} does not exist")]
    NotFound { path: PathBuf },
    /// The settings file exists but could not be read.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The settings file is not valid JSON of the expected shape.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Render the example document with a short heading for failure output.
pub fn example_config_help() -> String {
    format!("Example configuration:\n{EXAMPLE_CONFIG}")
}
