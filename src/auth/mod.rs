//! Authentication for Mailchimp API requests.
//!
//! This module provides the [`Authenticator`], which holds the account's
//! credential for the lifetime of a client and attaches it to every outgoing
//! request, and [`subscriber_hash`] for member-level identifiers.
//!
//! # Overview
//!
//! - [`Authenticator`]: Injects the `Authorization` header and resolves the
//!   data-center host from the API key
//! - [`AuthError`]: Raised when a request is attempted without a credential
//! - [`subscriber_hash`]: MD5 identifier of a normalized email address
//!
//! # Example
//!
//! ```rust
//! use mailchimp_api::auth::Authenticator;
//! use mailchimp_api::ApiKey;
//!
//! let auth = Authenticator::new(Some(ApiKey::new("abcd1234-us6").unwrap())).unwrap();
//! assert_eq!(auth.base_uri(None).unwrap(), "https://us6.api.mailchimp.com");
//! ```

mod authenticator;
mod subscriber;

pub use authenticator::{AuthError, Authenticator, AUTH_USERNAME};
pub use subscriber::subscriber_hash;
