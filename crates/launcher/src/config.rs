use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Errors loading launcher or client configuration files.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Read and parse a TOML configuration file.
pub fn load_toml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// How to find and start the viewer server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    /// Executable name, looked up on `PATH` and in the process table.
    pub executable: String,
    /// Presence check; the executable name is appended as last argument.
    /// A zero exit status means the server is running.
    pub presence_command: Vec<String>,
    /// Time given to a freshly spawned server to start listening.
    pub settle_delay_ms: u64,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            executable: "gepetto-gui".to_string(),
            presence_command: vec!["ps".to_string(), "-C".to_string()],
            settle_delay_ms: 500,
        }
    }
}

impl LauncherConfig {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config: Self = load_toml(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.executable.trim().is_empty() {
            return Err(ConfigError::Invalid("executable must not be empty".to_string()));
        }
        if self.presence_command.is_empty() {
            return Err(ConfigError::Invalid(
                "presence_command must name a program".to_string(),
            ));
        }
        Ok(())
    }
}
