//! Error types for the Authdog client.
//!
//! [`AuthdogError`] is the single catch point returned by every fallible
//! operation. It specialises into [`AuthenticationError`] (the token was
//! rejected) and [`ApiError`] (everything else that can go wrong on a call),
//! plus a configuration variant raised only while constructing a client.

use std::fmt;

/// Boxed underlying cause attached to an [`ApiError`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Message used for every HTTP 401 response.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized - invalid or expired token";

/// The access token was rejected by the service (HTTP 401).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationError {
    message: String,
}

impl AuthenticationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    /// The error produced for any 401 response.
    pub fn unauthorized() -> Self {
        Self::new(UNAUTHORIZED_MESSAGE)
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for AuthenticationError {}

/// Any non-authentication failure of an API call.
///
/// Covers malformed responses, recognised server errors, unexpected status
/// codes, transport failures and timeouts. The HTTP status is kept when the
/// server answered at all.
#[derive(Debug)]
pub struct ApiError {
    message: String,
    status: Option<u16>,
    source: Option<BoxError>,
}

impl ApiError {
    /// Error with `message` as its full display text.
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), status: None, source: None }
    }

    /// Attach the HTTP status of the response that failed.
    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Attach the underlying cause, exposed through `Error::source`.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<BoxError>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status of the response that produced this error, if any.
    pub fn status(&self) -> Option<u16> {
        self.status
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_deref().map(|e| e as &(dyn std::error::Error + 'static))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthdogError {
    #[error(transparent)]
    Authentication(#[from] AuthenticationError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AuthdogError {
    pub fn is_authentication_error(&self) -> bool {
        matches!(self, AuthdogError::Authentication(_))
    }

    pub fn is_api_error(&self) -> bool {
        matches!(self, AuthdogError::Api(_))
    }

    /// HTTP status behind the error, when the server responded.
    pub fn status(&self) -> Option<u16> {
        match self {
            AuthdogError::Authentication(_) => Some(401),
            AuthdogError::Api(e) => e.status(),
            AuthdogError::Config(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthdogError>;
