//! ArticleApi trait — the sole boundary between the session controller and
//! the articles service. The controller depends on this crate, never on a
//! concrete HTTP client.

pub mod http;
pub mod protocol;

use quill_core::article::ArticleDraft;
use quill_core::error::Result;
use quill_core::session::Credentials;

pub use http::HttpArticleApi;
pub use protocol::{ArticleResponse, ArticlesResponse, LoginResponse, MessageResponse};

/// The articles service, seen from the client.
///
/// `login` is the only unauthenticated call. Every other method takes the
/// bearer token explicitly per call; implementations hold no ambient
/// session state.
#[async_trait::async_trait]
pub trait ArticleApi: Send + Sync {
    /// POST /login with the credentials, verbatim.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse>;

    /// GET /articles. Server order is authoritative.
    async fn fetch_articles(&self, token: &str) -> Result<ArticlesResponse>;

    /// POST /articles with the draft; the response carries the
    /// server-assigned article.
    async fn create_article(&self, token: &str, draft: &ArticleDraft) -> Result<ArticleResponse>;

    /// PUT /articles/:article_id with the changed fields.
    async fn update_article(
        &self,
        token: &str,
        article_id: u64,
        draft: &ArticleDraft,
    ) -> Result<ArticleResponse>;

    /// DELETE /articles/:article_id.
    async fn delete_article(&self, token: &str, article_id: u64) -> Result<MessageResponse>;
}
