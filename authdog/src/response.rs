//! Status and body classification for userinfo responses.

use crate::error::{ApiError, AuthdogError, AuthenticationError, Result};
use crate::types::{ErrorResponse, UserInfoResponse};

const GRAPHQL_QUERY_FAILED: &str = "GraphQL query failed";
const FAILED_TO_FETCH_USER_INFO: &str = "Failed to fetch user info";

/// A 500 body, either decoded into the `{error}` shape or kept as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorBody<'a> {
    Parsed(ErrorResponse),
    Unparsed(&'a str),
}

impl<'a> ErrorBody<'a> {
    pub fn parse(body: &'a str) -> Self {
        match serde_json::from_str::<ErrorResponse>(body) {
            Ok(parsed) => ErrorBody::Parsed(parsed),
            Err(_) => ErrorBody::Unparsed(body),
        }
    }
}

/// Map an HTTP status and body to the userinfo result.
///
/// ```rust
/// use authdog::classify_response;
///
/// let err = classify_response(400, "Bad Request").unwrap_err();
/// assert_eq!(err.to_string(), "HTTP error 400: Bad Request");
/// ```
pub fn classify_response(status: u16, body: &str) -> Result<UserInfoResponse> {
    match status {
        200 => serde_json::from_str::<UserInfoResponse>(body).map_err(|e| {
            ApiError::new(format!("Failed to parse response: {e}"))
                .with_status(status)
                .with_source(e)
                .into()
        }),
        401 => Err(AuthenticationError::unauthorized().into()),
        _ => Err(classify_error_status(status, body)),
    }
}

/// Error for any non-success status.
///
/// Also maps 401 to [`AuthenticationError`] because the application user
/// lookup calls it directly for every non-2xx status.
pub(crate) fn classify_error_status(status: u16, body: &str) -> AuthdogError {
    if status == 401 {
        return AuthenticationError::unauthorized().into();
    }

    if status == 500 {
        if let ErrorBody::Parsed(ErrorResponse { error }) = ErrorBody::parse(body) {
            if error == GRAPHQL_QUERY_FAILED || error == FAILED_TO_FETCH_USER_INFO {
                return ApiError::new(error).with_status(status).into();
            }
        }
    }

    ApiError::new(format!("HTTP error {status}: {body}")).with_status(status).into()
}

/// Error for a failed send, split into timeouts and everything else.
pub(crate) fn classify_transport_error(err: reqwest::Error) -> AuthdogError {
    let message = if err.is_timeout() {
        format!("Request timeout: {err}")
    } else {
        format!("Request failed: {err}")
    };
    ApiError::new(message).with_source(err).into()
}

/// Error for a failed body read. The request timeout also covers the body,
/// so a stall after the headers is still reported as a timeout.
pub(crate) fn classify_body_error(err: reqwest::Error, status: u16) -> AuthdogError {
    let message = if err.is_timeout() {
        format!("Request timeout: {err}")
    } else {
        format!("Failed to read response body: {err}")
    };
    ApiError::new(message).with_status(status).with_source(err).into()
}
