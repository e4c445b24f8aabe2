use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::StartupError;

/// Env var that overrides the config file location.
pub const CONFIG_ENV: &str = "ENTITY_REPORTS_CONFIG";

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5001";

fn default_bind_address() -> String {
    DEFAULT_BIND_ADDRESS.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// SQLite file holding the employee/team tables. Opened read-only.
    pub database_path: PathBuf,
    /// Risk model artifact (JSON).
    pub model_path: PathBuf,
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

/// Get the config file path (`$ENTITY_REPORTS_CONFIG` or
/// `~/.entity-reports/config.json`)
pub fn config_path() -> Result<PathBuf, StartupError> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }
    let home = dirs::home_dir()
        .ok_or_else(|| StartupError::Config("Could not find home directory".to_string()))?;
    Ok(home.join(".entity-reports").join("config.json"))
}

pub fn load_config() -> Result<Config, StartupError> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(path: &Path) -> Result<Config, StartupError> {
    if !path.exists() {
        return Err(StartupError::Config(format!(
            "Config file not found at {}. Create it with: {{ \"databasePath\": \"/path/to/employee_events.db\", \"modelPath\": \"/path/to/model.json\" }}",
            path.display()
        )));
    }

    let content = fs::read_to_string(path)
        .map_err(|e| StartupError::Config(format!("Failed to read config: {}", e)))?;

    let config: Config = serde_json::from_str(&content)
        .map_err(|e| StartupError::Config(format!("Failed to parse config: {}", e)))?;

    if !config.database_path.exists() {
        return Err(StartupError::DatabaseNotFound(config.database_path));
    }

    log::info!("Loaded config from {}", path.display());
    Ok(config)
}
