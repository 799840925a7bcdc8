//! Main client implementation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::api::{
    AuthApi, CommentsApi, FollowersApi, LearningPlansApi, LikesApi, NotificationsApi, PostsApi,
    ProgressApi, SkillsApi, UsersApi,
};
use crate::csrf::{with_csrf_retry, LogRedirect, LoginRedirect, CSRF_HEADER, LOGIN_PATH};
use crate::error::{Error, ErrorResponse, Result};
use crate::request::ApiRequest;
use crate::session::{InMemorySessionStore, SessionStore};
use crate::types::CsrfTokenResponse;

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default backend address, matching the backend's dev profile.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Skill Hub API client.
///
/// Every request carries `Authorization: Bearer <jwt>` when the session holds
/// a token and `X-XSRF-TOKEN` when a CSRF token is cached or can be fetched.
/// A 401/403 is recovered at most once; see [`crate::csrf`].
///
/// # Example
///
/// ```no_run
/// use skillhub_client::SkillHubClient;
///
/// # async fn example() -> skillhub_client::Result<()> {
/// let client = SkillHubClient::builder()
///     .base_url("http://localhost:8080")
///     .bearer_token("eyJhbGciOi...")
///     .build()?;
///
/// let skills = client.skills().list().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct SkillHubClient {
    /// Inner shared state.
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
pub(crate) struct ClientInner {
    /// HTTP client (with cookie store).
    pub(crate) http: reqwest::Client,
    /// Server root; API paths are resolved under `api/`.
    pub(crate) base_url: Url,
    /// Request timeout.
    pub(crate) timeout: Duration,
    /// Credential storage.
    pub(crate) session: Arc<dyn SessionStore>,
    /// Fired when authentication cannot be recovered.
    pub(crate) redirect: Arc<dyn LoginRedirect>,
    /// Serializes CSRF bootstrap so concurrent first requests fetch once.
    pub(crate) csrf_bootstrap: tokio::sync::Mutex<()>,
    /// Bumped on every failed bootstrap; waiters that saw it move skip their own fetch.
    pub(crate) csrf_bootstrap_failures: AtomicU64,
}

impl std::fmt::Debug for SkillHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkillHubClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("timeout", &self.inner.timeout)
            .finish_non_exhaustive()
    }
}

impl SkillHubClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client with default settings pointing to localhost.
    pub fn localhost() -> Result<Self> {
        Self::builder().base_url(DEFAULT_BASE_URL).build()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// The session store this client reads credentials from.
    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.inner.session
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the auth API.
    pub fn auth(&self) -> AuthApi {
        AuthApi::new(self.clone())
    }

    /// Access the posts API.
    pub fn posts(&self) -> PostsApi {
        PostsApi::new(self.clone())
    }

    /// Access the comments API.
    pub fn comments(&self) -> CommentsApi {
        CommentsApi::new(self.clone())
    }

    /// Access the likes API.
    pub fn likes(&self) -> LikesApi {
        LikesApi::new(self.clone())
    }

    /// Access the notifications API.
    pub fn notifications(&self) -> NotificationsApi {
        NotificationsApi::new(self.clone())
    }

    /// Access the progress API.
    pub fn progress(&self) -> ProgressApi {
        ProgressApi::new(self.clone())
    }

    /// Access the learning plans API.
    pub fn learning_plans(&self) -> LearningPlansApi {
        LearningPlansApi::new(self.clone())
    }

    /// Access the skills API.
    pub fn skills(&self) -> SkillsApi {
        SkillsApi::new(self.clone())
    }

    /// Access the followers API.
    pub fn followers(&self) -> FollowersApi {
        FollowersApi::new(self.clone())
    }

    /// Access the users API.
    pub fn users(&self) -> UsersApi {
        UsersApi::new(self.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Request pipeline
    // ─────────────────────────────────────────────────────────────────────────

    /// Send a request through the CSRF retry policy and decode the JSON body.
    pub async fn request<T: serde::de::DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let response = with_csrf_retry(self, &request).await?;
        Self::parse_body(&request.path, response).await
    }

    /// Send a request through the CSRF retry policy, discarding the body.
    pub async fn request_unit(&self, request: ApiRequest) -> Result<()> {
        with_csrf_retry(self, &request).await?;
        Ok(())
    }

    /// Make a GET request.
    pub(crate) async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(ApiRequest::get(path)).await
    }

    /// Make a POST request with a JSON body.
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        self.request(ApiRequest::post(path).json(body)?).await
    }

    /// Make a PUT request with a JSON body.
    pub(crate) async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        self.request(ApiRequest::put(path).json(body)?).await
    }

    /// Make a DELETE request.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        self.request_unit(ApiRequest::delete(path)).await
    }

    /// Build a URL for an API path.
    pub(crate) fn url(&self, path: &str) -> Result<Url> {
        let path = path.trim_start_matches('/');
        self.inner
            .base_url
            .join(&format!("api/{}", path))
            .map_err(Error::from)
    }

    /// Send one attempt of `request` with the given CSRF token.
    pub(crate) async fn dispatch(
        &self,
        request: &ApiRequest,
        csrf: Option<&str>,
    ) -> Result<reqwest::Response> {
        let url = self.url(&request.path)?;
        let mut builder = self
            .inner
            .http
            .request(request.method.clone(), url)
            .timeout(self.inner.timeout);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = self.inner.session.bearer_token() {
            builder = builder.bearer_auth(token);
        }
        if let Some(csrf) = csrf {
            builder = builder.header(CSRF_HEADER, csrf);
        }
        let builder = request.apply_body(builder)?;

        tracing::debug!(method = %request.method, path = %request.path, "sending request");
        Ok(builder.send().await?)
    }

    /// Return the cached CSRF token, fetching one if none is cached.
    ///
    /// A failed fetch is logged and yields `None`: the request then goes out
    /// without the header. Requests queued behind that failed fetch do not
    /// retry it.
    pub(crate) async fn ensure_csrf_token(&self) -> Option<String> {
        if let Some(token) = self.inner.session.csrf_token() {
            return Some(token);
        }

        let failures_seen = self.inner.csrf_bootstrap_failures.load(Ordering::Acquire);
        let _guard = self.inner.csrf_bootstrap.lock().await;
        if let Some(token) = self.inner.session.csrf_token() {
            return Some(token);
        }
        if self.inner.csrf_bootstrap_failures.load(Ordering::Acquire) != failures_seen {
            tracing::debug!("CSRF bootstrap failed while waiting, sending without it");
            return None;
        }

        match self.fetch_csrf_token().await {
            Ok(token) => Some(token),
            Err(e) => {
                self.inner
                    .csrf_bootstrap_failures
                    .fetch_add(1, Ordering::AcqRel);
                tracing::warn!(error = %e, "failed to fetch CSRF token, sending without it");
                None
            }
        }
    }

    /// Fetch a fresh CSRF token and cache it in the session.
    ///
    /// This call bypasses the pipeline: no bearer token, no retry.
    pub async fn fetch_csrf_token(&self) -> Result<String> {
        let path = "csrf-token";
        let response = self
            .inner
            .http
            .get(self.url(path)?)
            .timeout(self.inner.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(self.extract_error(response).await);
        }

        let body: CsrfTokenResponse = Self::parse_body(path, response).await?;
        self.inner.session.set_csrf_token(Some(body.token.clone()))?;
        tracing::debug!("CSRF token cached");
        Ok(body.token)
    }

    pub(crate) fn redirect_to_login(&self) {
        self.inner.redirect.redirect(LOGIN_PATH);
    }

    /// Decode a successful response against the endpoint's schema.
    pub(crate) async fn parse_body<T: serde::de::DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> Result<T> {
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|source| Error::Parse {
            path: path.to_string(),
            source,
        })
    }

    /// Extract an error from a failed response.
    pub(crate) async fn extract_error(&self, response: reqwest::Response) -> Error {
        let status = response.status().as_u16();
        let body = response.bytes().await.unwrap_or_default();
        let message = ErrorResponse::message_from(&body, status);

        if status == 404 {
            Error::NotFound(message)
        } else {
            Error::Api { status, message }
        }
    }
}

/// Builder for creating a SkillHubClient.
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: Option<String>,
    session: Option<Arc<dyn SessionStore>>,
    redirect: Option<Arc<dyn LoginRedirect>>,
    bearer_token: Option<String>,
    timeout: Duration,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            base_url: None,
            session: None,
            redirect: None,
            bearer_token: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Set the base URL for the server (without the `/api` suffix).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Use an existing session store.
    pub fn session(mut self, session: Arc<dyn SessionStore>) -> Self {
        self.session = Some(session);
        self
    }

    /// Seed a fresh in-memory session with a bearer token.
    ///
    /// Ignored when [`ClientBuilder::session`] is also set.
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Set the hook fired when authentication cannot be recovered.
    pub fn login_redirect(mut self, redirect: Arc<dyn LoginRedirect>) -> Self {
        self.redirect = Some(redirect);
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<SkillHubClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::Config("base_url is required".to_string()))?;

        // Parse and normalize base URL
        let mut base_url = Url::parse(&base_url)?;
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        let session: Arc<dyn SessionStore> = match (self.session, self.bearer_token) {
            (Some(session), _) => session,
            (None, Some(token)) => Arc::new(InMemorySessionStore::with_bearer_token(token)),
            (None, None) => Arc::new(InMemorySessionStore::new()),
        };

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("skillhub-client/{}", env!("CARGO_PKG_VERSION")));

        let http = reqwest::Client::builder()
            .cookie_store(true)
            .user_agent(user_agent)
            .build()?;

        Ok(SkillHubClient {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                timeout: self.timeout,
                session,
                redirect: self.redirect.unwrap_or_else(|| Arc::new(LogRedirect)),
                csrf_bootstrap: tokio::sync::Mutex::new(()),
                csrf_bootstrap_failures: AtomicU64::new(0),
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_base_url() {
        let result = ClientBuilder::new().build();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_builder_with_base_url() {
        let client = ClientBuilder::new()
            .base_url("http://localhost:8080")
            .build()
            .unwrap();

        assert_eq!(client.base_url().as_str(), "http://localhost:8080/");
    }

    #[test]
    fn test_builder_keeps_path_prefix() {
        let client = ClientBuilder::new()
            .base_url("https://skillhub.example.com/backend")
            .build()
            .unwrap();

        let url = client.url("skills").unwrap();
        assert_eq!(url.as_str(), "https://skillhub.example.com/backend/api/skills");
    }

    #[test]
    fn test_url_building() {
        let client = ClientBuilder::new()
            .base_url("http://localhost:8080/")
            .build()
            .unwrap();

        let url = client.url("csrf-token").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/csrf-token");

        let url = client.url("/posts/user/3").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/posts/user/3");
    }

    #[test]
    fn test_bearer_token_seeds_session() {
        let client = ClientBuilder::new()
            .base_url("http://localhost:8080")
            .bearer_token("jwt-1")
            .build()
            .unwrap();

        assert_eq!(client.session().bearer_token().as_deref(), Some("jwt-1"));
        assert!(client.session().csrf_token().is_none());
    }

    #[test]
    fn test_explicit_session_wins_over_bearer_token() {
        let session = Arc::new(InMemorySessionStore::new());
        let client = ClientBuilder::new()
            .base_url("http://localhost:8080")
            .session(session)
            .bearer_token("ignored")
            .build()
            .unwrap();

        assert!(client.session().bearer_token().is_none());
    }
}
