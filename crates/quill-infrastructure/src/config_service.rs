//! Client configuration loading.
//!
//! Reads `config.toml` from the Quill config directory, writing a default
//! file on first run so the user has something to edit.

use std::path::Path;

use quill_core::config::ClientConfig;
use quill_core::error::{QuillError, Result};

use crate::paths::QuillPaths;

/// Environment variable that overrides the configured base URL.
pub const BASE_URL_ENV: &str = "QUILL_BASE_URL";

/// Loads the client configuration from the default location.
///
/// Missing file: a default `config.toml` is written and the defaults are
/// returned. A present but malformed file is an error; silently falling
/// back would hide the user's typo.
pub async fn load_client_config() -> Result<ClientConfig> {
    let path = QuillPaths::config_file()
        .map_err(|err| QuillError::config(format!("failed to resolve config path: {err}")))?;
    load_client_config_from(&path).await
}

/// Loads the client configuration from an explicit path.
pub async fn load_client_config_from(path: &Path) -> Result<ClientConfig> {
    let mut config = match tokio::fs::read_to_string(path).await {
        Ok(raw) => toml::from_str(&raw)?,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            let config = ClientConfig::default();
            write_default_config(path, &config).await;
            config
        }
        Err(err) => return Err(err.into()),
    };

    if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
        tracing::debug!(%base_url, "base URL overridden from environment");
        config.base_url = base_url;
    }

    Ok(config)
}

/// Best-effort creation of the default config file. Failure to write it is
/// logged, not returned: the in-memory defaults are still usable.
async fn write_default_config(path: &Path, config: &ClientConfig) {
    let body = match toml::to_string_pretty(config) {
        Ok(body) => body,
        Err(err) => {
            tracing::warn!(error = %err, "failed to serialize default config");
            return;
        }
    };

    if let Some(parent) = path.parent() {
        if let Err(err) = tokio::fs::create_dir_all(parent).await {
            tracing::warn!(error = %err, "failed to create config directory");
            return;
        }
    }

    if let Err(err) = tokio::fs::write(path, body).await {
        tracing::warn!(error = %err, path = %path.display(), "failed to write default config");
    }
}
