//! Error types for API calls.
//!
//! Every failure a call can produce reaches the caller as an [`ApiError`]:
//!
//! - [`ApiError::Endpoint`] / [`ApiError::InvalidRequest`]: the call was
//!   malformed before anything was sent
//! - [`ApiError::Authentication`]: no credential is configured
//! - [`ApiError::Network`]: connect, DNS, TLS or timeout failure
//! - [`ApiError::Cancelled`]: the caller cancelled the call
//! - [`ApiError::Http`]: the API answered with a non-2xx status
//! - [`ApiError::Decode`]: a 2xx body did not match the expected shape
//!
//! # Example
//!
//! ```rust,ignore
//! use mailchimp_api::{ApiError, FailureKind};
//!
//! match client.get::<serde_json::Value>(&descriptor, None).await {
//!     Ok(list) => println!("{list}"),
//!     Err(ApiError::Http(e)) if e.code == 404 => println!("not found: {}", e.body),
//!     Err(e) if e.kind() == FailureKind::Network => println!("network: {e}"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::auth::AuthError;
use crate::clients::http_request::HttpMethod;
use crate::rest::EndpointError;

/// Result of an API call.
pub type ApiResult<T> = Result<T, ApiError>;

/// Error returned when the API responds with a non-2xx status.
///
/// The raw body is kept unchanged; the API describes the failure in a
/// problem-detail document that [`HttpResponseError::problem`] parses on
/// demand.
///
/// # Example
///
/// ```rust
/// use mailchimp_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     body: r#"{"title":"Resource Not Found","detail":"The requested resource could not be found."}"#.to_string(),
///     request_id: None,
///     retry_after: None,
/// };
///
/// assert_eq!(error.problem().unwrap().title.as_deref(), Some("Resource Not Found"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("API responded with status {code}: {body}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub body: String,
    /// The `X-Request-Id` header, if the response carried one.
    pub request_id: Option<String>,
    /// The `Retry-After` delay, if the response carried one in seconds.
    pub retry_after: Option<Duration>,
}

impl HttpResponseError {
    /// Parses the body as a problem-detail document.
    ///
    /// Returns `None` if the body is not a JSON object.
    #[must_use]
    pub fn problem(&self) -> Option<ProblemDetail> {
        serde_json::from_str(&self.body).ok()
    }

    /// Returns `true` for 429 and 5xx statuses.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        self.code == 429 || self.code >= 500
    }
}

/// The API's problem-detail error document.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProblemDetail {
    /// A URL identifying the problem type.
    #[serde(rename = "type")]
    pub problem_type: Option<String>,
    /// Short summary of the problem.
    pub title: Option<String>,
    /// The HTTP status the API reported.
    pub status: Option<u16>,
    /// Human-readable explanation.
    pub detail: Option<String>,
    /// Identifier of this occurrence.
    pub instance: Option<String>,
    /// Per-field validation errors.
    pub errors: Vec<FieldError>,
}

/// A single field-level validation error.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FieldError {
    /// The offending field, empty for request-level errors.
    pub field: String,
    /// What was wrong with it.
    pub message: String,
}

/// Error returned when a request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A GET or DELETE request carried a body.
    #[error("Cannot send a body with {method}.")]
    UnexpectedBody {
        /// The HTTP method that does not take a body.
        method: String,
    },

    /// A per-request timeout of zero was set.
    #[error("Request timeout must be greater than zero.")]
    ZeroTimeout,

    /// The body could not be serialized to JSON.
    #[error("Could not serialize request body: {reason}")]
    UnserializableBody {
        /// The serializer's message.
        reason: String,
    },
}

/// Distinguishes the failure categories callers branch on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Malformed endpoint or request. Not retryable.
    Configuration,
    /// Missing credential. Not retryable.
    Authentication,
    /// Transport failure, including timeouts.
    Network,
    /// Cancelled by the caller.
    Cancelled,
    /// Non-2xx response.
    Http,
    /// Unexpected response body.
    Decode,
}

/// Unified error type for API calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The endpoint descriptor was malformed.
    #[error(transparent)]
    Endpoint(#[from] EndpointError),

    /// The request failed validation.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// No credential is configured.
    #[error(transparent)]
    Authentication(#[from] AuthError),

    /// The request could not be completed at the transport level.
    #[error("Network error (timeout: {timeout}): {source}")]
    Network {
        /// `true` if the call exceeded its timeout.
        timeout: bool,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The call was cancelled before it completed.
    #[error("Request was cancelled.")]
    Cancelled,

    /// The API responded with a non-2xx status.
    #[error(transparent)]
    Http(#[from] HttpResponseError),

    /// A 2xx body could not be decoded into the expected type.
    #[error("Could not decode response with status {code}: {source}")]
    Decode {
        /// The HTTP status code of the response.
        code: u16,
        /// The raw response body.
        body: String,
        /// The deserializer error.
        #[source]
        source: serde_json::Error,
    },
}

impl From<reqwest::Error> for ApiError {
    fn from(source: reqwest::Error) -> Self {
        Self::Network {
            timeout: source.is_timeout(),
            source,
        }
    }
}

impl ApiError {
    /// Returns the failure category.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::Endpoint(_) | Self::InvalidRequest(_) => FailureKind::Configuration,
            Self::Authentication(_) => FailureKind::Authentication,
            Self::Network { .. } => FailureKind::Network,
            Self::Cancelled => FailureKind::Cancelled,
            Self::Http(_) => FailureKind::Http,
            Self::Decode { .. } => FailureKind::Decode,
        }
    }

    /// Returns the HTTP status code, if a response was received.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http(e) => Some(e.code),
            Self::Decode { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Returns the raw response body, if a response was received.
    #[must_use]
    pub fn raw_body(&self) -> Option<&str> {
        match self {
            Self::Http(e) => Some(&e.body),
            Self::Decode { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Returns `true` if the call exceeded its timeout.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Network { timeout: true, .. })
    }

    /// Reports whether a caller may safely retry the call.
    ///
    /// 429 and 5xx responses are retryable for any method. Transport
    /// failures are retryable only for idempotent methods, since a POST may
    /// have reached the server before the connection failed. This client
    /// never retries on its own.
    #[must_use]
    pub const fn is_retryable(&self, method: HttpMethod) -> bool {
        match self {
            Self::Http(e) => e.is_retryable(),
            Self::Network { .. } => method.is_idempotent(),
            _ => false,
        }
    }
}
