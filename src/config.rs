//! Client configuration.

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::api::TokenStore;

/// Environment variable overriding the API base URL.
pub const API_URL_VAR: &str = "MASTERMIND_API_URL";
/// Environment variable overriding the token file location.
pub const TOKEN_PATH_VAR: &str = "MASTERMIND_TOKEN_PATH";

/// Settings of the client.
///
/// Sources, lowest priority first: built-in defaults, an optional TOML file,
/// environment variables, command-line flags.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Root of the remote API, including the `/api/v1` prefix.
    #[serde(default = "default_api_base_url")]
    api_base_url: String,

    /// Token file. `None` uses the platform data directory.
    #[serde(default)]
    token_path: Option<PathBuf>,

    /// Log file written while the terminal UI runs.
    #[serde(default = "default_log_path")]
    log_path: PathBuf,
}

fn default_api_base_url() -> String {
    "http://localhost:8000/api/v1".to_string()
}

fn default_log_path() -> PathBuf {
    PathBuf::from("mastermind_tui.log")
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            token_path: None,
            log_path: default_log_path(),
        }
    }
}

impl ClientConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(api_base_url = %config.api_base_url, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if one is given, otherwise starts from defaults, then
    /// applies the process environment.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Applies environment overrides read through `lookup`.
    #[instrument(skip(self, lookup))]
    pub fn apply_env(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        let api_url = lookup(API_URL_VAR).filter(|v| !v.trim().is_empty());
        let token_path = lookup(TOKEN_PATH_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        self.apply_overrides(api_url, token_path)
    }

    /// Applies explicit overrides, e.g. from command-line flags.
    #[instrument(skip(self))]
    pub fn apply_overrides(
        &mut self,
        api_base_url: Option<String>,
        token_path: Option<PathBuf>,
    ) -> Result<(), ConfigError> {
        if let Some(url) = api_base_url {
            debug!(url = %url, "Overriding API base URL");
            self.api_base_url = url;
        }
        if let Some(path) = token_path {
            debug!(path = %path.display(), "Overriding token path");
            self.token_path = Some(path);
        }
        self.validate()
    }

    /// Token file to use, falling back to the platform default.
    pub fn resolved_token_path(&self) -> PathBuf {
        self.token_path
            .clone()
            .unwrap_or_else(TokenStore::default_path)
    }

    /// Token store at [`Self::resolved_token_path`].
    pub fn token_store(&self) -> TokenStore {
        TokenStore::new(self.resolved_token_path())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let url = self.api_base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::new(format!(
                "API base URL must start with http:// or https://, got '{}'",
                self.api_base_url
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
