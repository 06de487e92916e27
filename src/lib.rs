//! # Mailchimp Marketing API Rust Client
//!
//! An async client for the Mailchimp Marketing API (v3), providing type-safe
//! configuration, API-key authentication and a request executor over a
//! shared connection pool.
//!
//! ## Overview
//!
//! A call passes through three stages:
//!
//! 1. **Endpoint building**: an [`EndpointDescriptor`] names the resource,
//!    sub-resources and identifiers, and renders the versioned path
//! 2. **Authentication**: the [`auth::Authenticator`] resolves the
//!    data-center host from the API key and attaches HTTP Basic credentials
//! 3. **Execution**: the [`HttpClient`] sends the request, classifies the
//!    outcome and hands back the body for decoding
//!
//! [`RestClient`] wires the three together and exposes one service per
//! resource group (see [`rest::resources`]).
//!
//! ## Quick Start
//!
//! ```rust
//! use mailchimp_api::{MailchimpConfig, ApiKey, ApiVersion, RestClient};
//!
//! let config = MailchimpConfig::builder()
//!     .api_key(ApiKey::new("abcd1234-us6").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//!
//! let client = RestClient::new(&config).unwrap();
//! assert_eq!(
//!     client.http_client().base_uri().unwrap(),
//!     "https://us6.api.mailchimp.com"
//! );
//! ```
//!
//! ## Making Calls
//!
//! ```rust,ignore
//! use mailchimp_api::subscriber_hash;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct List {
//!     id: String,
//!     name: String,
//! }
//!
//! let list: List = client.lists().get("57afe96172").await?;
//! client
//!     .lists()
//!     .delete_member("57afe96172", &subscriber_hash("a@example.com"))
//!     .await?;
//! ```
//!
//! ## Failure Classification
//!
//! Every failure is an [`ApiError`] whose [`kind`](ApiError::kind) is one of
//! [`FailureKind`]: configuration, authentication, network (with a timeout
//! flag), cancelled, HTTP (with status and raw body) or decode.
//!
//! ```rust,ignore
//! use mailchimp_api::{ApiError, FailureKind};
//!
//! match client.campaigns().send("42694e9e57").await {
//!     Ok(_) => {}
//!     Err(e) if e.kind() == FailureKind::Http => {
//!         eprintln!("{}: {}", e.status_code().unwrap_or_default(), e.raw_body().unwrap_or_default());
//!     }
//!     Err(e) => return Err(e),
//! }
//! ```
//!
//! ## Cancellation
//!
//! Calls can be abandoned with a [`CancellationToken`](tokio_util::sync::CancellationToken):
//!
//! ```rust,ignore
//! use tokio_util::sync::CancellationToken;
//!
//! let token = CancellationToken::new();
//! let lists: serde_json::Value = client
//!     .get_with_cancel(&EndpointDescriptor::collection(ResourceType::Lists), None, &token)
//!     .await?;
//! ```
//!
//! ## Design Principles
//!
//! - **Fail-fast validation**: Newtypes and descriptors validate on construction
//! - **No I/O without credentials**: a missing API key fails before any request is sent
//! - **Thread-safe**: Clients are `Send + Sync` and cheap to clone
//! - **Async-first**: Designed for use with the Tokio runtime

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::subscriber_hash;
pub use config::{ApiKey, ApiVersion, DataCenter, HostUrl, MailchimpConfig, MailchimpConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiError, ApiResult, FailureKind, HttpClient, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, HttpResponseError, InvalidHttpRequestError, RestClient,
};

// Re-export endpoint types
pub use rest::{EndpointDescriptor, EndpointError, NoContent, Payload, ResourceType, SubResourceType};
