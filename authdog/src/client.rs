//! HTTP client for the Authdog userinfo endpoint.

use crate::config::{ClientConfig, normalize_base_url};
use crate::error::{ApiError, AuthdogError, Result};
use crate::response::{
    classify_body_error, classify_error_status, classify_response, classify_transport_error,
};
use crate::session::Credentials;
use crate::types::UserInfoResponse;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, Method, Request};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// `User-Agent` sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("authdog-rust-sdk/", env!("CARGO_PKG_VERSION"));

const USERINFO_PATH: &str = "/v1/userinfo";
const APPLICATION_USERINFO_PATH: &str = "/api/v1/oauth2/application/userinfo";

/// Client for the Authdog API.
///
/// Holds only immutable configuration and a connection pool, so it is cheap
/// to clone and safe to share between tasks.
///
/// # Example
///
/// ```rust,ignore
/// use authdog::{AuthdogClient, ClientConfig};
///
/// let client = AuthdogClient::new(ClientConfig::new("https://api.authdog.com"))?;
/// let info = client.fetch_user_info("access-token").await?;
/// println!("{}", info.user.display_name);
/// ```
#[derive(Debug, Clone)]
pub struct AuthdogClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
    user_agent: String,
}

impl AuthdogClient {
    /// Create a client from a [`ClientConfig`].
    ///
    /// # Arguments
    ///
    /// * `config` - Base URL, optional API key and per-request timeout
    ///
    /// # Errors
    ///
    /// Returns [`AuthdogError::Config`] when the base URL is empty or not
    /// `http(s)`, or when the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::builder(config.base_url.clone()).config(config).build()
    }

    /// Start a builder for a client talking to `base_url`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use authdog::AuthdogClient;
    /// use std::time::Duration;
    ///
    /// let client = AuthdogClient::builder("https://api.authdog.com/")
    ///     .api_key("my-api-key")
    ///     .timeout(Duration::from_secs(5))
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(client.userinfo_url(), "https://api.authdog.com/v1/userinfo");
    /// assert_eq!(client.timeout(), Duration::from_secs(5));
    /// ```
    pub fn builder(base_url: impl Into<String>) -> AuthdogClientBuilder {
        AuthdogClientBuilder::new(base_url)
    }

    /// Base URL with trailing slashes removed.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Timeout applied to every request, body read included.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Full URL of the userinfo endpoint.
    pub fn userinfo_url(&self) -> String {
        format!("{}{USERINFO_PATH}", self.base_url)
    }

    /// Build the userinfo request without sending it.
    ///
    /// The per-call token always goes into `Authorization`. The configured API
    /// key is used only when `access_token` is empty.
    pub fn build_userinfo_request(&self, access_token: &str) -> Result<Request> {
        let bearer = if access_token.is_empty() {
            self.api_key.as_deref().unwrap_or_default()
        } else {
            access_token
        };

        self.http
            .request(Method::GET, self.userinfo_url())
            .timeout(self.timeout)
            .headers(self.default_headers()?)
            .header(AUTHORIZATION, header_value(&format!("Bearer {bearer}"))?)
            .build()
            .map_err(|e| {
                ApiError::new(format!("Failed to build request: {e}")).with_source(e).into()
            })
    }

    /// Fetch the profile of the subject behind `access_token`.
    ///
    /// A 401 becomes [`AuthdogError::Authentication`]; every other failure
    /// becomes [`AuthdogError::Api`]. Nothing is retried.
    #[instrument(skip_all, fields(url = %self.userinfo_url()))]
    pub async fn fetch_user_info(&self, access_token: &str) -> Result<UserInfoResponse> {
        let request = self.build_userinfo_request(access_token)?;

        debug!("sending userinfo request");
        let (status, body) = self.send(request).await?;
        debug!(status, "userinfo response received");

        classify_response(status, &body)
            .inspect_err(|e| warn!(status, error = %e, "userinfo request failed"))
    }

    /// Fetch the user bound to an application session.
    ///
    /// Returns `Ok(None)` without calling the service when the session token
    /// is empty, and `Ok(None)` when the response has no `user` member.
    #[instrument(skip_all, fields(application_uuid = %credentials.application_uuid))]
    pub async fn fetch_application_user(&self, credentials: &Credentials) -> Result<Option<Value>> {
        if credentials.authorization.is_empty() {
            warn!("cannot fetch application user without an authorization token");
            return Ok(None);
        }

        let url = format!(
            "{}{APPLICATION_USERINFO_PATH}/{}",
            self.base_url,
            urlencoding::encode(&credentials.application_uuid)
        );
        let request = self
            .http
            .request(Method::POST, url)
            .timeout(self.timeout)
            .headers(self.default_headers()?)
            .header(AUTHORIZATION, header_value(&credentials.authorization)?)
            .build()
            .map_err(|e| ApiError::new(format!("Failed to build request: {e}")).with_source(e))?;

        let (status, body) = self.send(request).await?;
        debug!(status, "application userinfo response received");

        if !(200..300).contains(&status) {
            let err = classify_error_status(status, &body);
            warn!(status, error = %err, "application userinfo request failed");
            return Err(err);
        }

        let mut json: Value = serde_json::from_str(&body).map_err(|e| {
            ApiError::new(format!("Failed to parse response: {e}"))
                .with_status(status)
                .with_source(e)
        })?;
        Ok(json.get_mut("user").map(Value::take).filter(|u| !u.is_null()))
    }

    async fn send(&self, request: Request) -> Result<(u16, String)> {
        let response = self.http.execute(request).await.map_err(classify_transport_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| classify_body_error(e, status))?;
        Ok((status, body))
    }

    fn default_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, header_value(&self.user_agent)?);
        Ok(headers)
    }
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| ApiError::new(format!("Invalid header value: {e}")).with_source(e).into())
}

/// Builder for [`AuthdogClient`].
pub struct AuthdogClientBuilder {
    config: ClientConfig,
    user_agent: String,
    http: Option<Client>,
}

impl AuthdogClientBuilder {
    /// Builder with default timeout, no API key and the SDK user agent.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            config: ClientConfig::new(base_url),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            http: None,
        }
    }

    /// Replace every configured value with `config`.
    #[must_use]
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Static credential sent when a call carries no access token.
    #[must_use]
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = Some(api_key.into());
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Override the `User-Agent` header.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Use an existing `reqwest::Client` instead of building one.
    ///
    /// The configured timeout is still applied to each request.
    #[must_use]
    pub fn http_client(mut self, client: Client) -> Self {
        self.http = Some(client);
        self
    }

    /// Validate the configuration and create the client.
    ///
    /// # Errors
    ///
    /// Returns [`AuthdogError::Config`] for an invalid base URL or when the
    /// HTTP client cannot be created.
    pub fn build(self) -> Result<AuthdogClient> {
        let base_url = normalize_base_url(&self.config.base_url)?;
        let api_key = self.config.effective_api_key().map(str::to_string);

        let http = match self.http {
            Some(client) => client,
            None => Client::builder()
                .timeout(self.config.timeout)
                .build()
                .map_err(|e| AuthdogError::Config(format!("Failed to create HTTP client: {e}")))?,
        };

        Ok(AuthdogClient {
            http,
            base_url,
            api_key,
            timeout: self.config.timeout,
            user_agent: self.user_agent,
        })
    }
}
