//! REST client implementation for the Mailchimp Marketing API.
//!
//! This module provides the [`RestClient`] type, which turns an
//! [`EndpointDescriptor`] plus a verb into one authenticated call and decodes
//! the result.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::clients::{
    ApiResult, HttpClient, HttpMethod, HttpRequest, HttpResponse, InvalidHttpRequestError,
};
use crate::config::{ApiVersion, MailchimpConfig};
use crate::rest::{build_endpoint, EndpointDescriptor, NoContent};

/// REST API client for the Mailchimp Marketing API.
///
/// Provides `get`, `post`, `patch`, `put` and `delete` keyed by an
/// [`EndpointDescriptor`], decoding the response into the caller's type.
/// Resource-specific operations are reached through accessors such as
/// [`RestClient::lists`].
///
/// # Thread Safety
///
/// `RestClient` is `Clone + Send + Sync`. Clones share one connection pool
/// and one immutable credential.
///
/// # Example
///
/// ```rust,ignore
/// use mailchimp_api::{MailchimpConfig, ApiKey, RestClient};
/// use mailchimp_api::rest::{EndpointDescriptor, ResourceType};
///
/// let config = MailchimpConfig::builder()
///     .api_key(ApiKey::new("abcd1234-us6").unwrap())
///     .build()
///     .unwrap();
/// let client = RestClient::new(&config)?;
///
/// let list: serde_json::Value = client
///     .get(&EndpointDescriptor::item(ResourceType::Lists, "abc")?, None)
///     .await?;
/// ```
#[derive(Clone, Debug)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
    /// The API version used in endpoint paths.
    api_version: ApiVersion,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client using the configured API version.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`](crate::ApiError::Network) if the
    /// transport cannot be initialized.
    pub fn new(config: &MailchimpConfig) -> ApiResult<Self> {
        Self::create_client(config, config.api_version().clone())
    }

    /// Creates a new REST client with a specific API version override.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`](crate::ApiError::Network) if the
    /// transport cannot be initialized.
    pub fn with_version(config: &MailchimpConfig, version: ApiVersion) -> ApiResult<Self> {
        let config_version = config.api_version();
        if &version == config_version {
            tracing::debug!(
                "Rest client has a redundant API version override to the default {}",
                config_version
            );
        } else {
            tracing::debug!(
                "Rest client overriding default API version {} with {}",
                config_version,
                version
            );
        }

        Self::create_client(config, version)
    }

    fn create_client(config: &MailchimpConfig, api_version: ApiVersion) -> ApiResult<Self> {
        if !api_version.is_known() {
            tracing::warn!("Using unrecognized Mailchimp API version {}", api_version);
        }

        Ok(Self {
            http_client: HttpClient::new(config)?,
            api_version,
        })
    }

    /// Returns the API version being used by this client.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Builds the full URL for a descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Authentication`](crate::ApiError::Authentication)
    /// if no credential is configured, since the host depends on it.
    pub fn endpoint(&self, descriptor: &EndpointDescriptor) -> ApiResult<String> {
        let base_uri = self.http_client.base_uri()?;
        Ok(build_endpoint(&base_uri, &self.api_version, descriptor))
    }

    /// Sends a GET request and decodes the body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) on any failure, including
    /// [`ApiError::Decode`](crate::ApiError::Decode) if the body does not
    /// match `T`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut query = HashMap::new();
    /// query.insert("count".to_string(), "50".to_string());
    /// let lists: serde_json::Value = client
    ///     .get(&EndpointDescriptor::collection(ResourceType::Lists), Some(query))
    ///     .await?;
    /// ```
    pub async fn get<T: DeserializeOwned>(
        &self,
        descriptor: &EndpointDescriptor,
        query: Option<HashMap<String, String>>,
    ) -> ApiResult<T> {
        self.execute(HttpMethod::Get, descriptor, None, query)
            .await?
            .decode()
    }

    /// Sends a POST request with an optional JSON body and decodes the result.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) on any failure.
    pub async fn post<B, T>(&self, descriptor: &EndpointDescriptor, body: Option<&B>) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = body.map(to_json).transpose()?;
        self.execute(HttpMethod::Post, descriptor, body, None)
            .await?
            .decode()
    }

    /// Sends a body-less POST to an action endpoint such as
    /// `/campaigns/{id}/actions/send`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) on any failure.
    pub async fn post_action(&self, descriptor: &EndpointDescriptor) -> ApiResult<NoContent> {
        self.execute(HttpMethod::Post, descriptor, None, None)
            .await?
            .decode()
    }

    /// Sends a PATCH request and decodes the result.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) on any failure.
    pub async fn patch<B, T>(&self, descriptor: &EndpointDescriptor, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = to_json(body)?;
        self.execute(HttpMethod::Patch, descriptor, Some(body), None)
            .await?
            .decode()
    }

    /// Sends a PUT request and decodes the result.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) on any failure.
    pub async fn put<B, T>(&self, descriptor: &EndpointDescriptor, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = to_json(body)?;
        self.execute(HttpMethod::Put, descriptor, Some(body), None)
            .await?
            .decode()
    }

    /// Sends a DELETE request.
    ///
    /// An empty 2xx body is success, not a decode failure.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) on any failure.
    pub async fn delete(&self, descriptor: &EndpointDescriptor) -> ApiResult<NoContent> {
        self.execute(HttpMethod::Delete, descriptor, None, None)
            .await?
            .decode()
    }

    /// Sends a request and returns the undecoded response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) on any failure. Non-2xx
    /// responses are returned as [`ApiError::Http`](crate::ApiError::Http).
    pub async fn execute(
        &self,
        method: HttpMethod,
        descriptor: &EndpointDescriptor,
        body: Option<serde_json::Value>,
        query: Option<HashMap<String, String>>,
    ) -> ApiResult<HttpResponse> {
        let request = self.build_request(method, descriptor, body, query)?;
        self.http_client.request(request).await
    }

    /// Like [`RestClient::execute`], but can be cancelled through `token`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Cancelled`](crate::ApiError::Cancelled) if the
    /// token fires first.
    pub async fn execute_with_cancel(
        &self,
        method: HttpMethod,
        descriptor: &EndpointDescriptor,
        body: Option<serde_json::Value>,
        query: Option<HashMap<String, String>>,
        token: &CancellationToken,
    ) -> ApiResult<HttpResponse> {
        let request = self.build_request(method, descriptor, body, query)?;
        self.http_client.request_with_cancel(request, token).await
    }

    /// Cancellable GET.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Cancelled`](crate::ApiError::Cancelled) if the
    /// token fires first, otherwise the errors of [`RestClient::get`].
    pub async fn get_with_cancel<T: DeserializeOwned>(
        &self,
        descriptor: &EndpointDescriptor,
        query: Option<HashMap<String, String>>,
        token: &CancellationToken,
    ) -> ApiResult<T> {
        self.execute_with_cancel(HttpMethod::Get, descriptor, None, query, token)
            .await?
            .decode()
    }

    fn build_request(
        &self,
        method: HttpMethod,
        descriptor: &EndpointDescriptor,
        body: Option<serde_json::Value>,
        query: Option<HashMap<String, String>>,
    ) -> ApiResult<HttpRequest> {
        let url = self.endpoint(descriptor)?;
        let mut builder = HttpRequest::builder(method, url);

        if let Some(body) = body {
            builder = builder.body(body);
        }
        if let Some(query) = query {
            builder = builder.query(query);
        }

        Ok(builder.build()?)
    }
}

fn to_json<B: Serialize + ?Sized>(body: &B) -> Result<serde_json::Value, InvalidHttpRequestError> {
    serde_json::to_value(body).map_err(|e| InvalidHttpRequestError::UnserializableBody {
        reason: e.to_string(),
    })
}
