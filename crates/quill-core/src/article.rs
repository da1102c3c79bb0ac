//! Article domain models.
//!
//! An [`Article`] mirrors one server-side record; the `article_id` is
//! assigned by the server and never changes. An [`ArticleDraft`] is the
//! payload sent on create and update.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use thiserror::Error;

/// Maximum title length accepted by the create/update form.
pub const TITLE_MAX_LEN: usize = 50;
/// Maximum body length accepted by the create/update form.
pub const TEXT_MAX_LEN: usize = 200;

/// The fixed set of topics the service accepts.
///
/// Serialized exactly as the server spells them (`"JavaScript"`, `"React"`,
/// `"Node"`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
pub enum Topic {
    JavaScript,
    React,
    Node,
}

/// One article as confirmed by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Server-assigned identifier, immutable for the record's lifetime.
    pub article_id: u64,
    pub title: String,
    pub text: String,
    pub topic: Topic,
}

/// The create/update payload: every field is sent on both operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDraft {
    pub title: String,
    pub text: String,
    pub topic: Topic,
}

/// Why a draft cannot be submitted.
///
/// Checked by the view layer before invoking the controller; the controller
/// itself trusts its callers and does not re-validate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("title must be 1-{TITLE_MAX_LEN} characters")]
    InvalidTitle,
    #[error("text must be 1-{TEXT_MAX_LEN} characters")]
    InvalidText,
}

impl ArticleDraft {
    pub fn new(title: impl Into<String>, text: impl Into<String>, topic: Topic) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            topic,
        }
    }

    /// Checks the form's submission rules: title and text non-empty after
    /// trimming and within the service's length limits.
    pub fn validate(&self) -> std::result::Result<(), DraftError> {
        let title = self.title.trim();
        if title.is_empty() || title.chars().count() > TITLE_MAX_LEN {
            return Err(DraftError::InvalidTitle);
        }
        let text = self.text.trim();
        if text.is_empty() || text.chars().count() > TEXT_MAX_LEN {
            return Err(DraftError::InvalidText);
        }
        Ok(())
    }
}
