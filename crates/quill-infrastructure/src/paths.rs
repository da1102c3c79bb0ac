//! Unified path management for Quill configuration files.
//!
//! The token and the client configuration live side by side in the
//! platform config directory. This ensures consistency across all
//! platforms (Linux, macOS, Windows).
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/quill/             # Config directory
//! ├── config.toml              # Client configuration (base URL, timeout)
//! └── token.json               # Persisted bearer token
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for Quill.
pub struct QuillPaths;

impl QuillPaths {
    /// Returns the Quill configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/quill/`)
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("quill"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path of the persisted token file.
    pub fn token_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("token.json"))
    }

    /// Returns the path of the client configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }
}
