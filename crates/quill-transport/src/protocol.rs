//! Wire types for the articles service.
//!
//! Every success body carries a human-readable `message`; failure bodies
//! are `{ "message": string }`.

use quill_core::article::Article;
use serde::Deserialize;

/// Success body of POST /login.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

/// Success body of GET /articles.
#[derive(Debug, Clone, Deserialize)]
pub struct ArticlesResponse {
    pub message: String,
    pub articles: Vec<Article>,
}

/// Success body of POST /articles and PUT /articles/:article_id.
#[derive(Debug, Clone, Deserialize)]
pub struct ArticleResponse {
    pub message: String,
    pub article: Article,
}

/// Success body of DELETE /articles/:article_id.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Failure body shared by every endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}
