//! Client configuration models.

use serde::{Deserialize, Serialize};

/// Base URL used when no config file or override is present.
pub const DEFAULT_BASE_URL: &str = "http://localhost:9000/api";
/// Per-request timeout used when the config file does not specify one.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for talking to the articles service.
///
/// Loaded from `config.toml` in the Quill config directory; missing fields
/// fall back to the defaults above.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the service, e.g. `http://localhost:9000/api`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
