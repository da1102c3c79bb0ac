//! Session domain models.
//!
//! A [`Session`] holds the bearer token obtained from a successful login.
//! Whether the token is still honored by the server is the server's call;
//! holding one only means a login once succeeded.

use serde::{Deserialize, Serialize};

/// Minimum username length the login form accepts (after trimming).
pub const USERNAME_MIN_LEN: usize = 3;
/// Minimum password length the login form accepts (after trimming).
pub const PASSWORD_MIN_LEN: usize = 8;

/// The client-side session: present token, or nothing.
///
/// Lifecycle: absent until a login succeeds, cleared on logout or when the
/// server rejects a request as unauthorized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// Creates a session with no token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the token returned by a successful login.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Drops the token (logout or unauthorized response).
    pub fn clear(&mut self) {
        self.token = None;
    }

    /// Returns the bearer token, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// True when a token is held. Necessary but not sufficient for
    /// authorization; token validity is decided by the server.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Login credentials, passed through to the server verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// The login form's submission gate: trimmed username and password meet
    /// the minimum lengths. The controller itself never rejects credentials.
    pub fn is_submittable(&self) -> bool {
        self.username.trim().chars().count() >= USERNAME_MIN_LEN
            && self.password.trim().chars().count() >= PASSWORD_MIN_LEN
    }
}

/// The screen the view shell should be rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Login,
    Articles,
}
