//! File-backed token store implementation.
//!
//! The token is kept as a small JSON document (`{"token": "..."}`) in the
//! Quill config directory. On Unix the file is created with mode 600 so the
//! token is not readable by other users.

use std::path::{Path, PathBuf};

use quill_core::error::{QuillError, Result};
use quill_core::token::TokenStore;
use serde::{Deserialize, Serialize};

use crate::paths::QuillPaths;

#[derive(Serialize, Deserialize)]
struct StoredToken {
    token: String,
}

/// [`TokenStore`] backed by `token.json` in the config directory.
#[derive(Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Creates a store at the default location (`~/.config/quill/token.json`).
    pub fn new() -> Result<Self> {
        let path = QuillPaths::token_file()
            .map_err(|err| QuillError::config(format!("failed to resolve token path: {err}")))?;
        Ok(Self { path })
    }

    /// Creates a store at an explicit path. Used by tests.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        Ok(())
    }

    #[cfg(unix)]
    async fn restrict_permissions(&self) -> Result<()> {
        use std::os::unix::fs::PermissionsExt;
        tokio::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600)).await?;
        Ok(())
    }

    #[cfg(not(unix))]
    async fn restrict_permissions(&self) -> Result<()> {
        Ok(())
    }
}

#[async_trait::async_trait]
impl TokenStore for FileTokenStore {
    async fn load(&self) -> Result<Option<String>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let stored: StoredToken = serde_json::from_str(&raw)?;
        Ok(Some(stored.token))
    }

    async fn save(&self, token: &str) -> Result<()> {
        self.ensure_parent_dir().await?;
        let body = serde_json::to_string_pretty(&StoredToken {
            token: token.to_string(),
        })?;
        tokio::fs::write(&self.path, body).await?;
        self.restrict_permissions().await?;
        tracing::debug!(path = %self.path.display(), "persisted session token");
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
