//! Session and article state controller.
//!
//! `SessionController` is the single source of client-side truth: it owns
//! the session token, the cached article list, the edit target, the status
//! message, the busy flag, and the screen the view should render. Every
//! transition between a user intent and confirmed server state goes through
//! one of its operations.
//!
//! The cached article list mirrors the server as of the last successful
//! response. It is never mutated ahead of server confirmation; create,
//! update, and delete apply the server's answer, not the local draft.

use std::sync::Arc;

use quill_core::article::{Article, ArticleDraft};
use quill_core::error::QuillError;
use quill_core::session::{Credentials, Screen, Session};
use quill_core::token::TokenStore;
use quill_transport::ArticleApi;

/// Status text shown after a logout. No server round trip is involved.
const FAREWELL_MESSAGE: &str = "Goodbye!";

/// Use case for the login screen, the article list, and the article form.
///
/// # Responsibilities
///
/// - Mediating every network call and folding its outcome into state
/// - Holding the cached article list in server-confirmed order
/// - Deciding create-vs-update for form submissions ([`Self::resolve_submit`])
/// - Tearing the session down when the server answers 401
///
/// # Concurrency
///
/// Operations take `&mut self`, so a second operation cannot start while
/// one is awaited. This serializes operations by construction; the busy
/// flag exists for the view (to dim inputs and show a wait indicator), not
/// as a lock.
pub struct SessionController {
    /// Transport for all service calls
    api: Arc<dyn ArticleApi>,
    /// Persistent storage for the bearer token
    token_store: Arc<dyn TokenStore>,
    session: Session,
    /// Cached articles, in server order as of the last successful response
    articles: Vec<Article>,
    /// Article currently being edited; `None` means create mode
    edit_target: Option<u64>,
    /// Outcome text of the most recently completed operation
    status: String,
    busy: bool,
    screen: Screen,
}

impl SessionController {
    /// Creates a controller with an absent session, an empty cache, and the
    /// login screen selected.
    pub fn new(api: Arc<dyn ArticleApi>, token_store: Arc<dyn TokenStore>) -> Self {
        Self {
            api,
            token_store,
            session: Session::new(),
            articles: Vec::new(),
            edit_target: None,
            status: String::new(),
            busy: false,
            screen: Screen::Login,
        }
    }

    // ========================================================================
    // View-facing state
    // ========================================================================

    /// Outcome text of the most recently completed operation.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// The cached article list, in server-confirmed order.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// True while an operation is in flight.
    pub fn busy(&self) -> bool {
        self.busy
    }

    /// The article id being edited, `None` in create mode.
    pub fn edit_target(&self) -> Option<u64> {
        self.edit_target
    }

    /// The cached article the edit target names, for prefilling the form.
    pub fn current_article(&self) -> Option<&Article> {
        let id = self.edit_target?;
        self.articles.iter().find(|article| article.article_id == id)
    }

    /// The screen the view should render.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// True when a token is held. The server remains the authority on
    /// whether that token is still honored.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Hydrates the session from the persisted token, if one exists.
    ///
    /// Called once at startup. Does not navigate; the view decides where to
    /// start. A failed read is logged and treated as "no token".
    pub async fn restore(&mut self) {
        match self.token_store.load().await {
            Ok(Some(token)) => {
                tracing::debug!("restored persisted session token");
                self.session.set_token(token);
            }
            Ok(None) => {}
            Err(err) => tracing::warn!(error = %err, "failed to read persisted token"),
        }
    }

    /// Sends the credentials to the login endpoint, verbatim.
    ///
    /// On success the returned token is stored (in the session and in the
    /// persistent store), the status shows the server's greeting, and the
    /// view is sent to the articles screen. On failure the session stays
    /// absent and no navigation happens.
    pub async fn login(&mut self, credentials: Credentials) {
        self.begin_operation();
        let outcome = self.api.login(&credentials).await;
        match outcome {
            Ok(response) => {
                self.session.set_token(response.token.clone());
                self.status = response.message;
                if let Err(err) = self.token_store.save(&response.token).await {
                    tracing::warn!(error = %err, "failed to persist session token");
                    self.status = format!("{} (session will not outlive this run)", self.status);
                }
                self.screen = Screen::Articles;
            }
            Err(err) => {
                tracing::debug!(error = %err, "login rejected");
                self.status = err.user_message();
            }
        }
        self.finish_operation();
    }

    /// Replaces the cached article list with the server's current one.
    ///
    /// Server order is authoritative; the cache is not resorted. On any
    /// failure the cache is left untouched.
    pub async fn load_articles(&mut self) {
        self.begin_operation();
        let outcome = self.api.fetch_articles(self.bearer_token()).await;
        match outcome {
            Ok(response) => {
                self.articles = response.articles;
                self.status = response.message;
            }
            Err(err) => self.handle_authorized_failure(err).await,
        }
        self.finish_operation();
    }

    /// Creates an article from the draft and appends the server-confirmed
    /// record (with its server-assigned id) to the end of the cache.
    ///
    /// The draft is trusted as-is; the form validates before submitting.
    pub async fn create_article(&mut self, draft: ArticleDraft) {
        self.begin_operation();
        let outcome = self.api.create_article(self.bearer_token(), &draft).await;
        match outcome {
            Ok(response) => {
                self.articles.push(response.article);
                self.status = response.message;
            }
            Err(err) => self.handle_authorized_failure(err).await,
        }
        self.finish_operation();
    }

    /// Updates the article with `article_id` and replaces the cached entry
    /// in place with the server-confirmed record.
    ///
    /// On success the edit target is cleared (back to create mode); on
    /// failure both the cache and the edit target are left as they were.
    pub async fn update_article(&mut self, article_id: u64, draft: ArticleDraft) {
        self.begin_operation();
        let outcome = self
            .api
            .update_article(self.bearer_token(), article_id, &draft)
            .await;
        match outcome {
            Ok(response) => {
                if let Some(slot) = self
                    .articles
                    .iter_mut()
                    .find(|article| article.article_id == article_id)
                {
                    *slot = response.article;
                }
                self.status = response.message;
                self.edit_target = None;
            }
            Err(err) => self.handle_authorized_failure(err).await,
        }
        self.finish_operation();
    }

    /// Deletes the article with `article_id` and removes it from the cache.
    ///
    /// If the edit target referenced the deleted article it is cleared, so
    /// it can never name an id that is no longer cached.
    pub async fn delete_article(&mut self, article_id: u64) {
        self.begin_operation();
        let outcome = self.api.delete_article(self.bearer_token(), article_id).await;
        match outcome {
            Ok(response) => {
                self.articles.retain(|article| article.article_id != article_id);
                if self.edit_target == Some(article_id) {
                    self.edit_target = None;
                }
                self.status = response.message;
            }
            Err(err) => self.handle_authorized_failure(err).await,
        }
        self.finish_operation();
    }

    /// Marks the cached article with `article_id` as the one being edited.
    /// No network call, no busy transition.
    ///
    /// An id not present in the cache is ignored, keeping the invariant
    /// that the edit target always names a cached article when set.
    pub fn begin_edit(&mut self, article_id: u64) {
        if self.articles.iter().any(|article| article.article_id == article_id) {
            self.edit_target = Some(article_id);
        } else {
            tracing::warn!(article_id, "begin_edit ignored: article not in cache");
        }
    }

    /// Returns the form to create mode without submitting anything.
    pub fn cancel_edit(&mut self) {
        self.edit_target = None;
    }

    /// Clears the session and the persisted token, shows the farewell
    /// status, and sends the view to the login screen. No network call.
    pub async fn logout(&mut self) {
        self.end_session().await;
        self.status = FAREWELL_MESSAGE.to_string();
    }

    /// Single entry point for the article form: updates when an edit target
    /// is set, creates otherwise. The form never needs to know the mode.
    pub async fn resolve_submit(&mut self, draft: ArticleDraft) {
        match self.edit_target {
            Some(article_id) => self.update_article(article_id, draft).await,
            None => self.create_article(draft).await,
        }
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// The token sent with authorized calls. An absent session sends an
    /// empty token; rejecting it is the server's job, not the client's.
    fn bearer_token(&self) -> &str {
        self.session.token().unwrap_or_default()
    }

    fn begin_operation(&mut self) {
        self.status.clear();
        self.busy = true;
    }

    /// Runs at the end of every operation, success or failure.
    fn finish_operation(&mut self) {
        self.busy = false;
    }

    /// Folds the failure of an authorized call into state.
    ///
    /// A 401 tears the session down and navigates to login, uniformly for
    /// every authorized operation; the cache is never touched on failure.
    async fn handle_authorized_failure(&mut self, err: QuillError) {
        if err.is_unauthorized() {
            tracing::warn!("request rejected as unauthorized, ending session");
            self.end_session().await;
        } else {
            tracing::debug!(error = %err, "operation failed");
        }
        self.status = err.user_message();
    }

    async fn end_session(&mut self) {
        self.session.clear();
        if let Err(err) = self.token_store.clear().await {
            tracing::warn!(error = %err, "failed to remove persisted token");
        }
        self.screen = Screen::Login;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::article::Topic;
    use quill_core::error::Result;
    use quill_transport::{ArticleResponse, ArticlesResponse, LoginResponse, MessageResponse};
    use std::sync::Mutex;

    /// Scripted [`ArticleApi`]: each method returns its queued response and
    /// records that it was called.
    #[derive(Default)]
    struct ScriptedApi {
        login_response: Mutex<Option<Result<LoginResponse>>>,
        fetch_response: Mutex<Option<Result<ArticlesResponse>>>,
        create_response: Mutex<Option<Result<ArticleResponse>>>,
        update_response: Mutex<Option<Result<ArticleResponse>>>,
        delete_response: Mutex<Option<Result<MessageResponse>>>,
        calls: Mutex<Vec<&'static str>>,
    }

    impl ScriptedApi {
        fn record(&self, method: &'static str) {
            self.calls.lock().unwrap().push(method);
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl ArticleApi for ScriptedApi {
        async fn login(&self, _credentials: &Credentials) -> Result<LoginResponse> {
            self.record("login");
            self.login_response.lock().unwrap().take().expect("unscripted login call")
        }

        async fn fetch_articles(&self, _token: &str) -> Result<ArticlesResponse> {
            self.record("fetch_articles");
            self.fetch_response.lock().unwrap().take().expect("unscripted fetch call")
        }

        async fn create_article(
            &self,
            _token: &str,
            _draft: &ArticleDraft,
        ) -> Result<ArticleResponse> {
            self.record("create_article");
            self.create_response.lock().unwrap().take().expect("unscripted create call")
        }

        async fn update_article(
            &self,
            _token: &str,
            _article_id: u64,
            _draft: &ArticleDraft,
        ) -> Result<ArticleResponse> {
            self.record("update_article");
            self.update_response.lock().unwrap().take().expect("unscripted update call")
        }

        async fn delete_article(&self, _token: &str, _article_id: u64) -> Result<MessageResponse> {
            self.record("delete_article");
            self.delete_response.lock().unwrap().take().expect("unscripted delete call")
        }
    }

    /// In-memory [`TokenStore`] for tests.
    #[derive(Default)]
    struct MemoryTokenStore {
        token: Mutex<Option<String>>,
    }

    impl MemoryTokenStore {
        fn stored(&self) -> Option<String> {
            self.token.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl TokenStore for MemoryTokenStore {
        async fn load(&self) -> Result<Option<String>> {
            Ok(self.token.lock().unwrap().clone())
        }

        async fn save(&self, token: &str) -> Result<()> {
            *self.token.lock().unwrap() = Some(token.to_string());
            Ok(())
        }

        async fn clear(&self) -> Result<()> {
            *self.token.lock().unwrap() = None;
            Ok(())
        }
    }

    fn article(id: u64, title: &str) -> Article {
        Article {
            article_id: id,
            title: title.to_string(),
            text: format!("{title} text"),
            topic: Topic::React,
        }
    }

    fn draft(title: &str) -> ArticleDraft {
        ArticleDraft::new(title, format!("{title} text"), Topic::React)
    }

    fn controller(api: Arc<ScriptedApi>, store: Arc<MemoryTokenStore>) -> SessionController {
        SessionController::new(api, store)
    }

    fn credentials() -> Credentials {
        Credentials::new("gabe", "password1")
    }

    #[tokio::test]
    async fn login_success_stores_token_and_navigates() {
        let api = Arc::new(ScriptedApi::default());
        *api.login_response.lock().unwrap() = Some(Ok(LoginResponse {
            message: "welcome".to_string(),
            token: "abc".to_string(),
        }));
        let store = Arc::new(MemoryTokenStore::default());
        let mut controller = controller(api, store.clone());

        controller.login(credentials()).await;

        assert!(controller.is_authenticated());
        assert_eq!(store.stored(), Some("abc".to_string()));
        assert_eq!(controller.status(), "welcome");
        assert_eq!(controller.screen(), Screen::Articles);
        assert!(!controller.busy());
    }

    #[tokio::test]
    async fn login_failure_leaves_session_absent() {
        let api = Arc::new(ScriptedApi::default());
        *api.login_response.lock().unwrap() =
            Some(Err(QuillError::unauthorized("bad credentials")));
        let store = Arc::new(MemoryTokenStore::default());
        let mut controller = controller(api, store.clone());

        controller.login(credentials()).await;

        assert!(!controller.is_authenticated());
        assert_eq!(store.stored(), None);
        assert_eq!(controller.status(), "bad credentials");
        assert_eq!(controller.screen(), Screen::Login);
        assert!(!controller.busy());
    }

    #[tokio::test]
    async fn load_articles_replaces_cache_in_server_order() {
        let api = Arc::new(ScriptedApi::default());
        *api.fetch_response.lock().unwrap() = Some(Ok(ArticlesResponse {
            message: "here are your articles".to_string(),
            articles: vec![article(2, "second"), article(1, "first")],
        }));
        let mut controller = controller(api, Arc::new(MemoryTokenStore::default()));

        controller.load_articles().await;

        let ids: Vec<u64> = controller.articles().iter().map(|a| a.article_id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(controller.status(), "here are your articles");
    }

    #[tokio::test]
    async fn load_articles_unauthorized_forces_logout_and_keeps_cache() {
        let api = Arc::new(ScriptedApi::default());
        *api.fetch_response.lock().unwrap() = Some(Ok(ArticlesResponse {
            message: "here are your articles".to_string(),
            articles: vec![article(1, "first")],
        }));
        let store = Arc::new(MemoryTokenStore::default());
        store.save("stale").await.unwrap();
        let mut controller = controller(api.clone(), store.clone());
        controller.restore().await;
        controller.load_articles().await;
        assert_eq!(controller.articles().len(), 1);

        *api.fetch_response.lock().unwrap() =
            Some(Err(QuillError::unauthorized("token expired")));
        controller.load_articles().await;

        assert!(!controller.is_authenticated());
        assert_eq!(store.stored(), None);
        assert_eq!(controller.screen(), Screen::Login);
        // The cache reflects the last confirmed state, untouched by failure.
        assert_eq!(controller.articles().len(), 1);
        assert_eq!(controller.status(), "token expired");
    }

    #[tokio::test]
    async fn other_load_failure_keeps_cache_and_session() {
        let api = Arc::new(ScriptedApi::default());
        *api.fetch_response.lock().unwrap() = Some(Err(QuillError::api(500, "server on fire")));
        let store = Arc::new(MemoryTokenStore::default());
        store.save("abc").await.unwrap();
        let mut controller = controller(api, store.clone());
        controller.restore().await;

        controller.load_articles().await;

        assert!(controller.is_authenticated());
        assert_eq!(store.stored(), Some("abc".to_string()));
        assert_eq!(controller.status(), "server on fire");
    }

    #[tokio::test]
    async fn create_appends_the_server_record() {
        let api = Arc::new(ScriptedApi::default());
        *api.fetch_response.lock().unwrap() = Some(Ok(ArticlesResponse {
            message: "ok".to_string(),
            articles: vec![article(1, "first")],
        }));
        *api.create_response.lock().unwrap() = Some(Ok(ArticleResponse {
            message: "article created".to_string(),
            article: article(9, "fresh"),
        }));
        let mut controller = controller(api, Arc::new(MemoryTokenStore::default()));
        controller.load_articles().await;

        controller.create_article(draft("fresh")).await;

        assert_eq!(controller.articles().len(), 2);
        assert_eq!(controller.articles().last().unwrap().article_id, 9);
        assert_eq!(controller.status(), "article created");
    }

    #[tokio::test]
    async fn create_failure_leaves_cache_unchanged() {
        let api = Arc::new(ScriptedApi::default());
        *api.create_response.lock().unwrap() = Some(Err(QuillError::api(422, "title taken")));
        let mut controller = controller(api, Arc::new(MemoryTokenStore::default()));

        controller.create_article(draft("dup")).await;

        assert!(controller.articles().is_empty());
        assert_eq!(controller.status(), "title taken");
    }

    #[tokio::test]
    async fn update_replaces_in_place_and_clears_edit_target() {
        let api = Arc::new(ScriptedApi::default());
        *api.fetch_response.lock().unwrap() = Some(Ok(ArticlesResponse {
            message: "ok".to_string(),
            articles: vec![article(1, "first"), article(2, "second")],
        }));
        *api.update_response.lock().unwrap() = Some(Ok(ArticleResponse {
            message: "article updated".to_string(),
            article: article(1, "revised"),
        }));
        let mut controller = controller(api, Arc::new(MemoryTokenStore::default()));
        controller.load_articles().await;
        controller.begin_edit(1);

        controller.update_article(1, draft("revised")).await;

        assert_eq!(controller.articles()[0].title, "revised");
        assert_eq!(controller.articles()[0].article_id, 1);
        assert_eq!(controller.articles()[1], article(2, "second"));
        assert_eq!(controller.edit_target(), None);
        assert_eq!(controller.status(), "article updated");
    }

    #[tokio::test]
    async fn update_failure_keeps_cache_and_edit_target() {
        let api = Arc::new(ScriptedApi::default());
        *api.fetch_response.lock().unwrap() = Some(Ok(ArticlesResponse {
            message: "ok".to_string(),
            articles: vec![article(1, "first")],
        }));
        *api.update_response.lock().unwrap() = Some(Err(QuillError::api(400, "bad topic")));
        let mut controller = controller(api, Arc::new(MemoryTokenStore::default()));
        controller.load_articles().await;
        controller.begin_edit(1);

        controller.update_article(1, draft("revised")).await;

        assert_eq!(controller.articles()[0].title, "first");
        assert_eq!(controller.edit_target(), Some(1));
        assert_eq!(controller.status(), "bad topic");
    }

    #[tokio::test]
    async fn delete_removes_the_matching_entry() {
        let api = Arc::new(ScriptedApi::default());
        *api.fetch_response.lock().unwrap() = Some(Ok(ArticlesResponse {
            message: "ok".to_string(),
            articles: vec![article(1, "first"), article(2, "second")],
        }));
        *api.delete_response.lock().unwrap() = Some(Ok(MessageResponse {
            message: "article deleted".to_string(),
        }));
        let mut controller = controller(api, Arc::new(MemoryTokenStore::default()));
        controller.load_articles().await;

        controller.delete_article(1).await;

        assert_eq!(controller.articles().len(), 1);
        assert!(controller.articles().iter().all(|a| a.article_id != 1));
        assert_eq!(controller.status(), "article deleted");
    }

    #[tokio::test]
    async fn delete_clears_edit_target_when_it_named_the_deleted_article() {
        let api = Arc::new(ScriptedApi::default());
        *api.fetch_response.lock().unwrap() = Some(Ok(ArticlesResponse {
            message: "ok".to_string(),
            articles: vec![article(1, "first"), article(2, "second")],
        }));
        *api.delete_response.lock().unwrap() = Some(Ok(MessageResponse {
            message: "article deleted".to_string(),
        }));
        let mut controller = controller(api, Arc::new(MemoryTokenStore::default()));
        controller.load_articles().await;
        controller.begin_edit(1);

        controller.delete_article(1).await;

        assert_eq!(controller.edit_target(), None);
    }

    #[tokio::test]
    async fn delete_keeps_edit_target_for_other_articles() {
        let api = Arc::new(ScriptedApi::default());
        *api.fetch_response.lock().unwrap() = Some(Ok(ArticlesResponse {
            message: "ok".to_string(),
            articles: vec![article(1, "first"), article(2, "second")],
        }));
        *api.delete_response.lock().unwrap() = Some(Ok(MessageResponse {
            message: "article deleted".to_string(),
        }));
        let mut controller = controller(api, Arc::new(MemoryTokenStore::default()));
        controller.load_articles().await;
        controller.begin_edit(2);

        controller.delete_article(1).await;

        assert_eq!(controller.edit_target(), Some(2));
    }

    #[tokio::test]
    async fn unauthorized_create_forces_logout_uniformly() {
        let api = Arc::new(ScriptedApi::default());
        *api.create_response.lock().unwrap() =
            Some(Err(QuillError::unauthorized("token expired")));
        let store = Arc::new(MemoryTokenStore::default());
        store.save("abc").await.unwrap();
        let mut controller = controller(api, store.clone());
        controller.restore().await;

        controller.create_article(draft("fresh")).await;

        assert!(!controller.is_authenticated());
        assert_eq!(store.stored(), None);
        assert_eq!(controller.screen(), Screen::Login);
    }

    #[tokio::test]
    async fn resolve_submit_updates_iff_edit_target_is_set() {
        let api = Arc::new(ScriptedApi::default());
        *api.fetch_response.lock().unwrap() = Some(Ok(ArticlesResponse {
            message: "ok".to_string(),
            articles: vec![article(1, "first")],
        }));
        *api.update_response.lock().unwrap() = Some(Ok(ArticleResponse {
            message: "article updated".to_string(),
            article: article(1, "revised"),
        }));
        *api.create_response.lock().unwrap() = Some(Ok(ArticleResponse {
            message: "article created".to_string(),
            article: article(2, "fresh"),
        }));
        let mut controller = controller(api.clone(), Arc::new(MemoryTokenStore::default()));
        controller.load_articles().await;

        controller.begin_edit(1);
        controller.resolve_submit(draft("revised")).await;
        // Edit target was cleared by the successful update, so the next
        // submit must create.
        controller.resolve_submit(draft("fresh")).await;

        assert_eq!(
            api.calls(),
            vec!["fetch_articles", "update_article", "create_article"]
        );
    }

    #[tokio::test]
    async fn begin_edit_ignores_unknown_ids() {
        let api = Arc::new(ScriptedApi::default());
        let mut controller = controller(api, Arc::new(MemoryTokenStore::default()));

        controller.begin_edit(42);

        assert_eq!(controller.edit_target(), None);
        assert!(!controller.busy());
    }

    #[tokio::test]
    async fn logout_clears_everything_session_related() {
        let api = Arc::new(ScriptedApi::default());
        *api.login_response.lock().unwrap() = Some(Ok(LoginResponse {
            message: "welcome".to_string(),
            token: "abc".to_string(),
        }));
        let store = Arc::new(MemoryTokenStore::default());
        let mut controller = controller(api, store.clone());
        controller.login(credentials()).await;

        controller.logout().await;

        assert!(!controller.is_authenticated());
        assert_eq!(store.stored(), None);
        assert_eq!(controller.status(), "Goodbye!");
        assert_eq!(controller.screen(), Screen::Login);
    }

    #[tokio::test]
    async fn restore_hydrates_the_session_without_navigating() {
        let store = Arc::new(MemoryTokenStore::default());
        store.save("persisted").await.unwrap();
        let mut controller = controller(Arc::new(ScriptedApi::default()), store);

        controller.restore().await;

        assert!(controller.is_authenticated());
        assert_eq!(controller.screen(), Screen::Login);
    }

    #[tokio::test]
    async fn login_then_load_end_to_end() {
        let api = Arc::new(ScriptedApi::default());
        *api.login_response.lock().unwrap() = Some(Ok(LoginResponse {
            message: "welcome".to_string(),
            token: "abc".to_string(),
        }));
        *api.fetch_response.lock().unwrap() = Some(Ok(ArticlesResponse {
            message: "here are your articles".to_string(),
            articles: vec![Article {
                article_id: 1,
                title: "t".to_string(),
                text: "x".to_string(),
                topic: Topic::React,
            }],
        }));
        let mut controller = controller(api, Arc::new(MemoryTokenStore::default()));

        controller.login(credentials()).await;
        assert_eq!(controller.screen(), Screen::Articles);

        controller.load_articles().await;
        assert_eq!(controller.articles().len(), 1);
        assert_eq!(controller.articles()[0].article_id, 1);
    }

    #[tokio::test]
    async fn deleting_the_only_article_empties_the_cache() {
        let api = Arc::new(ScriptedApi::default());
        *api.fetch_response.lock().unwrap() = Some(Ok(ArticlesResponse {
            message: "ok".to_string(),
            articles: vec![article(1, "only")],
        }));
        *api.delete_response.lock().unwrap() = Some(Ok(MessageResponse {
            message: "article deleted".to_string(),
        }));
        let mut controller = controller(api, Arc::new(MemoryTokenStore::default()));
        controller.load_articles().await;

        controller.delete_article(1).await;

        assert!(controller.articles().is_empty());
        assert_eq!(controller.status(), "article deleted");
    }
}
