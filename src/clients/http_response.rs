//! HTTP response type for the Mailchimp API client.
//!
//! This module provides the [`HttpResponse`] type, which keeps the raw body
//! so that it can be decoded into whatever type the caller expects.

use std::collections::HashMap;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::clients::errors::{ApiError, ApiResult};

/// An HTTP response from the Mailchimp API.
///
/// # Example
///
/// ```rust
/// use mailchimp_api::clients::HttpResponse;
/// use std::collections::HashMap;
///
/// let response = HttpResponse::new(200, HashMap::new(), r#"{"id":"abc"}"#.to_string());
/// let value: serde_json::Value = response.decode().unwrap();
/// assert_eq!(value["id"], "abc");
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    ///
    /// Include this ID when reporting a failed call to Mailchimp support.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the `Retry-After` delay, if the header holds a number of seconds.
    #[must_use]
    pub fn retry_after(&self) -> Option<Duration> {
        self.header("retry-after")
            .and_then(|value| value.trim().parse::<f64>().ok())
            .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
    }

    /// Returns `true` if the body is empty or whitespace.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }

    /// Decodes the body as JSON into `T`.
    ///
    /// An empty body decodes as JSON `null`, so
    /// [`NoContent`](crate::rest::NoContent) and `Option<_>` accept it while
    /// structured types fail.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if the body does not match `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> ApiResult<T> {
        let json = if self.is_empty() { "null" } else { self.body.as_str() };
        serde_json::from_str(json).map_err(|source| ApiError::Decode {
            code: self.code,
            body: self.body.clone(),
            source,
        })
    }
}
