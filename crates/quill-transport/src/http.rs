//! HttpArticleApi - reqwest implementation of the articles service API.
//!
//! Maps every non-2xx response to a typed error: 401 to
//! [`QuillError::Unauthorized`], anything else to [`QuillError::Api`], with
//! the message taken from the `{message}` failure body when it parses and
//! the generic fallback otherwise.

use std::time::Duration;

use quill_core::article::ArticleDraft;
use quill_core::config::ClientConfig;
use quill_core::error::{FALLBACK_MESSAGE, QuillError, Result};
use quill_core::session::Credentials;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::ArticleApi;
use crate::protocol::{
    ArticleResponse, ArticlesResponse, ErrorBody, LoginResponse, MessageResponse,
};

/// HTTP implementation of [`ArticleApi`].
#[derive(Clone)]
pub struct HttpArticleApi {
    client: Client,
    base_url: String,
}

impl HttpArticleApi {
    /// Creates a client from the given configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| QuillError::config(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn login_url(&self) -> String {
        format!("{}/login", self.base_url)
    }

    fn articles_url(&self) -> String {
        format!("{}/articles", self.base_url)
    }

    fn article_url(&self, article_id: u64) -> String {
        format!("{}/articles/{}", self.base_url, article_id)
    }

    /// Sends the request and decodes the success body, or maps the failure.
    async fn execute<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T> {
        let response = request
            .send()
            .await
            .map_err(|err| QuillError::transport(format!("request failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_http_error(status, &body));
        }

        response.json::<T>().await.map_err(|err| {
            QuillError::Serialization {
                format: "JSON".to_string(),
                message: format!("failed to parse response body: {err}"),
            }
        })
    }
}

#[async_trait::async_trait]
impl ArticleApi for HttpArticleApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        tracing::debug!(username = %credentials.username, "POST /login");
        self.execute(self.client.post(self.login_url()).json(credentials))
            .await
    }

    async fn fetch_articles(&self, token: &str) -> Result<ArticlesResponse> {
        tracing::debug!("GET /articles");
        self.execute(self.client.get(self.articles_url()).bearer_auth(token))
            .await
    }

    async fn create_article(&self, token: &str, draft: &ArticleDraft) -> Result<ArticleResponse> {
        tracing::debug!(title = %draft.title, "POST /articles");
        self.execute(
            self.client
                .post(self.articles_url())
                .bearer_auth(token)
                .json(draft),
        )
        .await
    }

    async fn update_article(
        &self,
        token: &str,
        article_id: u64,
        draft: &ArticleDraft,
    ) -> Result<ArticleResponse> {
        tracing::debug!(article_id, "PUT /articles/:article_id");
        self.execute(
            self.client
                .put(self.article_url(article_id))
                .bearer_auth(token)
                .json(draft),
        )
        .await
    }

    async fn delete_article(&self, token: &str, article_id: u64) -> Result<MessageResponse> {
        tracing::debug!(article_id, "DELETE /articles/:article_id");
        self.execute(
            self.client
                .delete(self.article_url(article_id))
                .bearer_auth(token),
        )
        .await
    }
}

/// Maps a non-2xx status and raw body to the client error taxonomy.
fn map_http_error(status: StatusCode, body: &str) -> QuillError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|parsed| parsed.message)
        .unwrap_or_else(|_| FALLBACK_MESSAGE.to_string());

    if status == StatusCode::UNAUTHORIZED {
        QuillError::unauthorized(message)
    } else {
        QuillError::api(status.as_u16(), message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_message_is_passed_through() {
        let err = map_http_error(StatusCode::UNPROCESSABLE_ENTITY, r#"{"message":"title taken"}"#);
        match err {
            QuillError::Api { status, message } => {
                assert_eq!(status, 422);
                assert_eq!(message, "title taken");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_body_falls_back() {
        let err = map_http_error(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>");
        assert_eq!(err.user_message(), FALLBACK_MESSAGE);
    }

    #[test]
    fn unauthorized_status_gets_its_own_variant() {
        let err = map_http_error(StatusCode::UNAUTHORIZED, r#"{"message":"token expired"}"#);
        assert!(err.is_unauthorized());
        assert_eq!(err.user_message(), "token expired");
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let config = ClientConfig {
            base_url: "http://localhost:9000/api/".to_string(),
            ..ClientConfig::default()
        };
        let api = HttpArticleApi::new(&config).unwrap();
        assert_eq!(api.articles_url(), "http://localhost:9000/api/articles");
        assert_eq!(api.article_url(7), "http://localhost:9000/api/articles/7");
    }
}
