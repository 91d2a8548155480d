//! Load and parse `settings.json`.
use std::fs;

use tracing::{debug, error, info};

use super::{ConfigError, ConfigPaths, Settings};

/// Load settings from the default location under the home directory.
pub fn load_settings() -> Result<Settings, ConfigError> {
    let paths = ConfigPaths::resolve()?;
    load_from_paths(&paths)
}

/// Load settings from resolved paths.
pub fn load_from_paths(paths: &ConfigPaths) -> Result<Settings, ConfigError> {
    debug!(
        target: "cce::config",
        path = %paths.file.display(),
        "Starting configuration load"
    );

    if !paths.file.exists() {
        return Err(ConfigError::NotFound {
            path: paths.file.clone(),
        });
    }

    let data = fs::read_to_string(&paths.file).map_err(|err| {
        let error = ConfigError::FileRead {
            path: paths.file.clone(),
            source: err,
        };
        error!(
            target: "cce::config",
            path = %paths.file.display(),
            reason = %error,
            "Failed to read configuration file"
        );
        error
    })?;

    let settings: Settings = serde_json::from_str(&data).map_err(|err| {
        let error = ConfigError::Parse {
            path: paths.file.clone(),
            source: err,
        };
        error!(
            target: "cce::config",
            path = %paths.file.display(),
            reason = %error,
            "Failed to parse configuration file"
        );
        error
    })?;

    info!(
        target: "cce::config",
        path = %paths.file.display(),
        profiles = settings.len(),
        "Configuration file loaded successfully"
    );
    Ok(settings)
}
