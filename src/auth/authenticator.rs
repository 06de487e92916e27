//! Credential holder and request authenticator.

use std::fmt;
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use thiserror::Error;

use crate::config::{ApiKey, DataCenter, HostUrl, MailchimpConfig};

/// Username sent alongside the API key in the basic auth header.
///
/// The API ignores the username; only the password (the key) is checked.
pub const AUTH_USERNAME: &str = "apikey";

/// Errors raised while authenticating a request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No API key was configured when a request was attempted.
    #[error("No API key configured. Provide an API key in the client configuration before making requests.")]
    MissingCredential,

    /// The API key could not be encoded as an `Authorization` header value.
    #[error("API key cannot be sent as a header: {reason}")]
    InvalidCredential {
        /// Why the header value was rejected.
        reason: String,
    },
}

/// The cached credential: the key plus its pre-encoded header value.
struct Credential {
    api_key: ApiKey,
    header: HeaderValue,
}

/// Holds the account credential and attaches it to outgoing requests.
///
/// The credential is encoded once at construction and shared immutably
/// between clones, so an `Authenticator` can be cloned into every task that
/// issues requests without locking.
///
/// # Example
///
/// ```rust
/// use mailchimp_api::auth::{AuthError, Authenticator};
///
/// let auth = Authenticator::new(None).unwrap();
/// assert_eq!(auth.data_center(), Err(AuthError::MissingCredential));
/// ```
#[derive(Clone)]
pub struct Authenticator {
    credential: Option<Arc<Credential>>,
}

impl Authenticator {
    /// Creates an authenticator for the given key.
    ///
    /// `None` yields an authenticator that rejects every request with
    /// [`AuthError::MissingCredential`].
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredential`] if the encoded key is not a
    /// valid header value.
    pub fn new(api_key: Option<ApiKey>) -> Result<Self, AuthError> {
        let credential = api_key
            .map(|api_key| {
                let header = basic_auth_header(&api_key)?;
                Ok::<_, AuthError>(Arc::new(Credential { api_key, header }))
            })
            .transpose()?;
        Ok(Self { credential })
    }

    /// Creates an authenticator from the configured key.
    ///
    /// # Errors
    ///
    /// See [`Authenticator::new`].
    pub fn from_config(config: &MailchimpConfig) -> Result<Self, AuthError> {
        Self::new(config.api_key().cloned())
    }

    /// Returns `true` if a credential is configured.
    #[must_use]
    pub const fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    fn credential(&self) -> Result<&Credential, AuthError> {
        self.credential
            .as_deref()
            .ok_or(AuthError::MissingCredential)
    }

    /// Returns the configured API key.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingCredential`] if no key is configured.
    pub fn api_key(&self) -> Result<&ApiKey, AuthError> {
        self.credential().map(|c| &c.api_key)
    }

    /// Returns the data center encoded in the API key.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingCredential`] if no key is configured.
    pub fn data_center(&self) -> Result<&DataCenter, AuthError> {
        self.api_key().map(ApiKey::data_center)
    }

    /// Returns the `Authorization` header value for this credential.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingCredential`] if no key is configured.
    pub fn authorization_header(&self) -> Result<&HeaderValue, AuthError> {
        self.credential().map(|c| &c.header)
    }

    /// Resolves the scheme + host that endpoints are built against.
    ///
    /// An explicit `api_host` wins; otherwise the host comes from the key's
    /// data center.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingCredential`] if no key is configured. The
    /// check applies even with an `api_host` override, since a request built
    /// against it could not be authenticated anyway.
    pub fn base_uri(&self, api_host: Option<&HostUrl>) -> Result<String, AuthError> {
        let data_center = self.data_center()?;
        Ok(api_host.map_or_else(|| data_center.api_host(), |host| host.base_uri().to_string()))
    }

    /// Attaches the credential to a request.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingCredential`] if no key is configured.
    pub fn authenticate(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder, AuthError> {
        let header = self.authorization_header()?;
        Ok(request.header(AUTHORIZATION, header.clone()))
    }
}

/// Encodes `apikey:{key}` as a sensitive basic auth header value.
fn basic_auth_header(api_key: &ApiKey) -> Result<HeaderValue, AuthError> {
    let encoded = STANDARD.encode(format!("{AUTH_USERNAME}:{}", api_key.as_ref()));
    let mut header = HeaderValue::from_str(&format!("Basic {encoded}")).map_err(|e| {
        AuthError::InvalidCredential {
            reason: e.to_string(),
        }
    })?;
    header.set_sensitive(true);
    Ok(header)
}

impl fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authenticator")
            .field("api_key", &self.credential.as_ref().map(|c| &c.api_key))
            .finish()
    }
}

// Verify Authenticator is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Authenticator>();
};
