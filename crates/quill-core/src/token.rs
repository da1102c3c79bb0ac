//! Token persistence service trait.
//!
//! Defines the interface for storing the opaque bearer token between runs.
//!
//! # Security Note
//!
//! Implementations should ensure that:
//! - The token file has appropriate permissions (e.g., 600 on Unix)
//! - The token itself is never logged or embedded in error messages

use crate::error::Result;

/// Persistent storage for the bearer token.
///
/// Written on login success; cleared on logout and whenever the server
/// rejects a request as unauthorized.
#[async_trait::async_trait]
pub trait TokenStore: Send + Sync {
    /// Loads the persisted token, `None` when no token is stored.
    async fn load(&self) -> Result<Option<String>>;

    /// Persists the token, replacing any previous one.
    async fn save(&self, token: &str) -> Result<()>;

    /// Removes the persisted token. Succeeds when none is stored.
    async fn clear(&self) -> Result<()>;
}
