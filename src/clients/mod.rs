//! HTTP client types for Mailchimp API communication.
//!
//! This module provides the request executor: the layer that sends one
//! authenticated request and turns the outcome into a typed result.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client over a shared connection pool
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A response with its raw body, decodable on demand
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PATCH, PUT, DELETE)
//! - [`ApiError`] and [`FailureKind`]: The failure taxonomy
//! - [`rest::RestClient`]: Higher-level client keyed by endpoint descriptors
//!
//! # Example
//!
//! ```rust,ignore
//! use mailchimp_api::clients::{HttpClient, HttpRequest, HttpMethod};
//!
//! let client = HttpClient::new(&config)?;
//! let url = format!("{}/3.0/lists", client.base_uri()?);
//! let request = HttpRequest::builder(HttpMethod::Get, url)
//!     .query_param("count", "100")
//!     .build()?;
//!
//! let response = client.request(request).await?;
//! let lists: serde_json::Value = response.decode()?;
//! ```
//!
//! # Timeouts and Cancellation
//!
//! Every call is bounded by the configured timeout, which surfaces as
//! [`ApiError::Network`] with `timeout: true`. Calls made through
//! [`HttpClient::request_with_cancel`] also stop when their
//! `CancellationToken` fires and return [`ApiError::Cancelled`].

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{
    ApiError, ApiResult, FailureKind, FieldError, HttpResponseError, InvalidHttpRequestError,
    ProblemDetail,
};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

pub use rest::RestClient;
