//! HTTP client for Mailchimp API communication.
//!
//! This module provides the [`HttpClient`] type, which executes one
//! authenticated request per call over a shared connection pool.

use std::collections::HashMap;

use reqwest::header::HeaderMap;
use tokio_util::sync::CancellationToken;

use crate::auth::{AuthError, Authenticator};
use crate::clients::errors::{ApiError, ApiResult, HttpResponseError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::{HostUrl, MailchimpConfig};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Mailchimp API.
///
/// The client handles:
/// - A pooled `reqwest` transport with the configured timeouts
/// - Default headers including User-Agent and Accept
/// - Credential injection through the [`Authenticator`]
/// - Mapping of every failure to a typed [`ApiError`]
///
/// It never retries. A non-2xx response is returned as [`ApiError::Http`]
/// with the raw body for the caller to inspect.
///
/// # Thread Safety
///
/// `HttpClient` is `Clone + Send + Sync`. Clones share the connection pool
/// and the credential, so one client can serve any number of concurrent
/// tasks without locking.
///
/// # Example
///
/// ```rust,ignore
/// use mailchimp_api::{MailchimpConfig, ApiKey};
/// use mailchimp_api::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let config = MailchimpConfig::builder()
///     .api_key(ApiKey::new("abcd1234-us6").unwrap())
///     .build()
///     .unwrap();
/// let client = HttpClient::new(&config)?;
///
/// let url = format!("{}/3.0/ping", client.base_uri()?);
/// let request = HttpRequest::builder(HttpMethod::Get, url).build()?;
/// let response = client.request(request).await?;
/// ```
#[derive(Clone, Debug)]
pub struct HttpClient {
    /// The pooled reqwest client.
    client: reqwest::Client,
    /// Attaches the credential to each request.
    authenticator: Authenticator,
    /// Scheme + host override.
    api_host: Option<HostUrl>,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the configuration.
    ///
    /// A missing API key does not fail here; requests fail with
    /// [`AuthError::MissingCredential`] instead.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the TLS backend cannot be initialized,
    /// or [`ApiError::Authentication`] if the API key cannot be encoded as a
    /// header.
    pub fn new(config: &MailchimpConfig) -> ApiResult<Self> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Mailchimp API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()?;

        Ok(Self {
            client,
            authenticator: Authenticator::from_config(config)?,
            api_host: config.api_host().cloned(),
            default_headers,
        })
    }

    /// Returns the authenticator used by this client.
    #[must_use]
    pub const fn authenticator(&self) -> &Authenticator {
        &self.authenticator
    }

    /// Returns the scheme + host that endpoints are built against.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingCredential`] if no key is configured.
    pub fn base_uri(&self) -> Result<String, AuthError> {
        self.authenticator.base_uri(self.api_host.as_ref())
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the Mailchimp API.
    ///
    /// The connection leased for the call returns to the pool once the body
    /// has been read, or is closed if the future is dropped first.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - No credential is configured (`Authentication`); nothing is sent
    /// - The transport fails or times out (`Network`)
    /// - A non-2xx response is received (`Http`)
    pub async fn request(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        request.verify()?;

        let mut req_builder = self
            .client
            .request(request.http_method.as_reqwest(), &request.url);
        req_builder = self.authenticator.authenticate(req_builder)?;

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                req_builder = req_builder.header(key, value);
            }
        }
        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }
        if let Some(body) = &request.body {
            req_builder = req_builder.json(body);
        }
        if let Some(timeout) = request.timeout {
            req_builder = req_builder.timeout(timeout);
        }

        tracing::debug!(method = %request.http_method, url = %request.url, "Sending request");

        let res = req_builder.send().await.map_err(|e| {
            tracing::debug!(url = %request.url, timeout = e.is_timeout(), "Request failed: {e}");
            ApiError::from(e)
        })?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;
        let response = HttpResponse::new(code, res_headers, body);

        if response.is_ok() {
            tracing::debug!(method = %request.http_method, url = %request.url, status = code, "Request completed");
            return Ok(response);
        }

        tracing::warn!(
            method = %request.http_method,
            url = %request.url,
            status = code,
            request_id = response.request_id().unwrap_or_default(),
            "Mailchimp API returned an error response"
        );

        Err(HttpResponseError {
            code,
            request_id: response.request_id().map(String::from),
            retry_after: response.retry_after(),
            body: response.body,
        }
        .into())
    }

    /// Sends a request that can be cancelled through `token`.
    ///
    /// Cancelling drops the in-flight request, which closes its connection,
    /// and returns [`ApiError::Cancelled`]. A token that is already cancelled
    /// prevents the request from being sent.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Cancelled`] on cancellation, otherwise the errors
    /// of [`HttpClient::request`].
    pub async fn request_with_cancel(
        &self,
        request: HttpRequest,
        token: &CancellationToken,
    ) -> ApiResult<HttpResponse> {
        let url = request.url.clone();
        tokio::select! {
            biased;
            () = token.cancelled() => {
                tracing::debug!(url = %url, "Request cancelled");
                Err(ApiError::Cancelled)
            }
            result = self.request(request) => result,
        }
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(headers: &HeaderMap) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
