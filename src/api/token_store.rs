//! Durable storage for the bearer token.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::api::ApiError;

/// File holding the bearer token issued at login.
///
/// The token is the only durable client-side state. It is written on login,
/// read before every authenticated request and removed on logout.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Creates a store backed by the given file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the platform default token location.
    ///
    /// - Linux: `~/.local/share/mastermind/token`
    /// - macOS: `~/Library/Application Support/mastermind/token`
    /// - Windows: `%APPDATA%\mastermind\token`
    /// - Fallback: `./.mastermind/token`
    #[instrument]
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("", "", "mastermind")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("./.mastermind"))
            .join("token")
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored token, if any.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<Option<String>, ApiError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => {
                let token = content.trim();
                if token.is_empty() {
                    debug!("Token file is empty");
                    Ok(None)
                } else {
                    Ok(Some(token.to_string()))
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No token file");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Persists a freshly issued token, replacing any previous one.
    #[instrument(skip(self, token), fields(path = %self.path.display()))]
    pub fn save(&self, token: &str) -> Result<(), ApiError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, token)?;
        info!("Token stored");
        Ok(())
    }

    /// Removes the stored token. Removing a missing token succeeds.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn clear(&self) -> Result<(), ApiError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Token removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
