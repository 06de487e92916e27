//! REST API client for the Mailchimp Marketing API.
//!
//! This module provides a higher-level client built on top of the
//! [`HttpClient`](crate::clients::HttpClient) that addresses the API through
//! typed [`EndpointDescriptor`](crate::rest::EndpointDescriptor)s instead of
//! raw paths.
//!
//! # Overview
//!
//! - [`RestClient`]: `get()`, `post()`, `patch()`, `put()`, `delete()` and
//!   `execute()`, plus accessors for each resource group
//!
//! # Example
//!
//! ```rust,ignore
//! use mailchimp_api::{MailchimpConfig, ApiKey, RestClient};
//! use mailchimp_api::rest::{EndpointDescriptor, ResourceType, NoContent};
//!
//! let config = MailchimpConfig::builder()
//!     .api_key(ApiKey::new("abcd1234-us6").unwrap())
//!     .build()
//!     .unwrap();
//! let client = RestClient::new(&config)?;
//!
//! let removed: NoContent = client
//!     .delete(&EndpointDescriptor::item(ResourceType::Campaigns, "c1")?)
//!     .await?;
//! ```
//!
//! # Retry Behavior
//!
//! Requests are attempted exactly once. Use
//! [`ApiError::is_retryable`](crate::ApiError::is_retryable) to decide
//! whether replaying a failed call is safe.

mod client;

pub use client::RestClient;
