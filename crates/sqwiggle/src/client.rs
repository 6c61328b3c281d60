//! Main client implementation.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::api::{
    AttachmentsApi, ConversationsApi, InfoApi, InvitesApi, MessagesApi, OrganizationsApi,
    StreamsApi, UsersApi,
};
use crate::config::ClientConfig;
use crate::error::{ApiError, Error, Result};

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://api.sqwiggle.com/";

/// Password sent with every request. The service only reads the username.
const BASIC_AUTH_PASSWORD: &str = "X";

/// Sqwiggle API client.
///
/// Cheap to clone; clones share one connection pool.
///
/// # Example
///
/// ```no_run
/// use sqwiggle::SqwiggleClient;
///
/// # async fn example() -> sqwiggle::Result<()> {
/// let client = SqwiggleClient::new("cli_8d0f670196e5c63db53168a3d39bf2ce")?;
///
/// for message in client.messages().list(0, 50).await? {
///     println!("{}: {}", message.author.name, message.text);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct SqwiggleClient {
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
struct ClientInner {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl std::fmt::Debug for SqwiggleClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqwiggleClient")
            .field("base_url", &self.inner.base_url.as_str())
            .finish_non_exhaustive()
    }
}

/// Query parameters shared by every list endpoint. Zero means "not sent".
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct PageQuery {
    #[serde(skip_serializing_if = "is_zero")]
    pub page: u32,
    #[serde(skip_serializing_if = "is_zero")]
    pub limit: u32,
}

fn is_zero(n: &u32) -> bool {
    *n == 0
}

impl SqwiggleClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client for the production API with default settings.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// Create a client from `SQWIGGLE_API_KEY` and `SQWIGGLE_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        let config = ClientConfig::from_env();
        ClientBuilder::from_config(&config).build()
    }

    /// Create a client from a TOML config file, with environment overrides.
    pub fn from_config_file(path: &Path) -> Result<Self> {
        let mut config = ClientConfig::load(path)?;
        config.apply_env();
        ClientBuilder::from_config(&config).build()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the messages API.
    pub fn messages(&self) -> MessagesApi {
        MessagesApi::new(self.clone())
    }

    /// Access the streams API.
    pub fn streams(&self) -> StreamsApi {
        StreamsApi::new(self.clone())
    }

    /// Access the users API.
    pub fn users(&self) -> UsersApi {
        UsersApi::new(self.clone())
    }

    /// Access the organizations API.
    pub fn organizations(&self) -> OrganizationsApi {
        OrganizationsApi::new(self.clone())
    }

    /// Access the conversations API.
    pub fn conversations(&self) -> ConversationsApi {
        ConversationsApi::new(self.clone())
    }

    /// Access the invites API.
    pub fn invites(&self) -> InvitesApi {
        InvitesApi::new(self.clone())
    }

    /// Access the attachments API.
    pub fn attachments(&self) -> AttachmentsApi {
        AttachmentsApi::new(self.clone())
    }

    /// Access the info endpoint.
    pub fn info(&self) -> InfoApi {
        InfoApi::new(self.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal HTTP methods
    // ─────────────────────────────────────────────────────────────────────────

    /// Build a URL for an API path.
    pub(crate) fn url(&self, path: &str) -> Result<Url> {
        let path = path.trim_start_matches('/');
        self.inner.base_url.join(path).map_err(Error::from)
    }

    fn request(&self, method: Method, path: &str) -> Result<reqwest::RequestBuilder> {
        let url = self.url(path)?;
        tracing::debug!(method = method.as_str(), path, "Sending request");
        Ok(self
            .inner
            .http
            .request(method, url)
            .basic_auth(&self.inner.api_key, Some(BASIC_AUTH_PASSWORD)))
    }

    /// GET a list endpoint with pagination.
    pub(crate) async fn list<T: DeserializeOwned>(
        &self,
        path: &str,
        page: u32,
        limit: u32,
    ) -> Result<Vec<T>> {
        let query = PageQuery { page, limit };
        let response = self.request(Method::GET, path)?.query(&query).send().await?;
        self.handle_response(response, StatusCode::OK).await
    }

    /// GET a single resource.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.request(Method::GET, path)?.send().await?;
        self.handle_response(response, StatusCode::OK).await
    }

    /// GET a resource and return the body without decoding it.
    pub(crate) async fn get_raw(&self, path: &str) -> Result<Vec<u8>> {
        let response = self.request(Method::GET, path)?.send().await?;
        let body = self.read_body(response, StatusCode::OK).await?;
        Ok(body)
    }

    /// POST a form, expecting 201 Created.
    pub(crate) async fn post<T, B>(&self, path: &str, form: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.request(Method::POST, path)?.form(form).send().await?;
        self.handle_response(response, StatusCode::CREATED).await
    }

    /// PUT a form, expecting 200 OK.
    pub(crate) async fn put<T, B>(&self, path: &str, form: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.request(Method::PUT, path)?.form(form).send().await?;
        self.handle_response(response, StatusCode::OK).await
    }

    /// DELETE a resource, expecting 204 No Content.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let response = self.request(Method::DELETE, path)?.send().await?;
        self.read_body(response, StatusCode::NO_CONTENT).await?;
        Ok(())
    }

    /// Decode the body of a response that must carry `expected`.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
        expected: StatusCode,
    ) -> Result<T> {
        let status = response.status();
        let body = self.read_body(response, expected).await?;
        serde_json::from_slice(&body).map_err(|source| {
            tracing::warn!(status = status.as_u16(), error = %source, "Failed to decode response body");
            Error::Decode {
                status: status.as_u16(),
                source,
            }
        })
    }

    /// Read the full body, turning any status other than `expected` into an error.
    async fn read_body(&self, response: reqwest::Response, expected: StatusCode) -> Result<Vec<u8>> {
        let status = response.status();
        let body = response.bytes().await?;
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "Received response");

        if status == expected {
            Ok(body.to_vec())
        } else {
            Err(Self::extract_error(status, &body))
        }
    }

    /// Decode the error body of a failed response.
    fn extract_error(status: StatusCode, body: &[u8]) -> Error {
        let status = status.as_u16();
        match serde_json::from_slice::<ApiError>(body) {
            Ok(error) => {
                tracing::warn!(status, kind = %error.kind, message = %error.message, "Request rejected");
                Error::Api { status, error }
            }
            Err(source) => {
                tracing::warn!(status, error = %source, "Failed to decode error body");
                Error::Decode { status, source }
            }
        }
    }
}

/// Builder for creating a [`SqwiggleClient`].
#[derive(Debug)]
pub struct ClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    http: Option<reqwest::Client>,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: None,
            timeout: None,
            user_agent: None,
            http: None,
        }
    }

    /// Create a builder pre-filled from a [`ClientConfig`].
    pub fn from_config(config: &ClientConfig) -> Self {
        let mut builder = Self::new();
        builder.api_key = config.api_key.clone();
        builder.base_url = config.base_url.clone();
        builder.timeout = config.timeout_secs.map(Duration::from_secs);
        builder.user_agent = config.user_agent.clone();
        builder
    }

    /// Set the API key, sent as the basic auth username.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the API host, e.g. to point at a test server.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a transport level timeout. No timeout is applied by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Use an existing HTTP client. Timeout and user agent settings are
    /// ignored in that case.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<SqwiggleClient> {
        let api_key = self
            .api_key
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::Config("api_key is required".to_string()))?;

        // Parse and normalize base URL
        let base_url = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        let http = match self.http {
            Some(http) => http,
            None => {
                let user_agent = self
                    .user_agent
                    .unwrap_or_else(|| format!("sqwiggle-rs/{}", env!("CARGO_PKG_VERSION")));
                let mut builder = reqwest::Client::builder().user_agent(user_agent);
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build()?
            }
        };

        Ok(SqwiggleClient {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                api_key,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
