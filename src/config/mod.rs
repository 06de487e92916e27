//! Configuration types for the Mailchimp API client.
//!
//! This module provides the configuration used to construct a
//! [`RestClient`](crate::clients::RestClient).
//!
//! # Overview
//!
//! - [`MailchimpConfig`]: The immutable configuration held by a client
//! - [`MailchimpConfigBuilder`]: A builder for constructing [`MailchimpConfig`] instances
//! - [`ApiKey`]: A validated API key that carries its data center
//! - [`DataCenter`]: The account's data center (`us6`)
//! - [`HostUrl`]: An optional scheme + host override
//! - [`ApiVersion`]: The API version used in endpoint paths
//!
//! # Example
//!
//! ```rust
//! use mailchimp_api::{MailchimpConfig, ApiKey, ApiVersion};
//! use std::time::Duration;
//!
//! let config = MailchimpConfig::builder()
//!     .api_key(ApiKey::new("abcd1234-us6").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .timeout(Duration::from_secs(15))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.timeout(), Duration::from_secs(15));
//! ```

mod newtypes;
mod version;

pub use newtypes::{ApiKey, DataCenter, HostUrl};
pub use version::ApiVersion;

use std::time::Duration;

use crate::error::ConfigError;

/// Default overall timeout for a single call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default timeout for establishing a connection (TCP + TLS).
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Environment variable read by [`MailchimpConfigBuilder::from_env`] for the API key.
pub const API_KEY_ENV: &str = "MAILCHIMP_API_KEY";

/// Environment variable read by [`MailchimpConfigBuilder::from_env`] for the host override.
pub const API_HOST_ENV: &str = "MAILCHIMP_API_HOST";

/// Configuration for the Mailchimp API client.
///
/// The configuration is built once and never mutated. A client reads the
/// credential from it at construction; rotating a key means building a new
/// configuration and a new client.
///
/// The API key is optional here so that a client can be constructed before a
/// credential is available. Requests made without one fail with
/// [`AuthError::MissingCredential`](crate::auth::AuthError::MissingCredential)
/// before any network I/O.
///
/// # Thread Safety
///
/// `MailchimpConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct MailchimpConfig {
    api_key: Option<ApiKey>,
    api_version: ApiVersion,
    api_host: Option<HostUrl>,
    timeout: Duration,
    connect_timeout: Duration,
    user_agent_prefix: Option<String>,
}

impl MailchimpConfig {
    /// Creates a new builder for constructing a `MailchimpConfig`.
    #[must_use]
    pub fn builder() -> MailchimpConfigBuilder {
        MailchimpConfigBuilder::new()
    }

    /// Returns the API key, if configured.
    #[must_use]
    pub const fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the host override, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the overall per-call timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the connect timeout.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify MailchimpConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MailchimpConfig>();
};

/// Builder for constructing [`MailchimpConfig`] instances.
///
/// # Defaults
///
/// - `api_key`: `None`
/// - `api_version`: [`ApiVersion::latest`]
/// - `api_host`: `None` (derived from the key's data center)
/// - `timeout`: 30 seconds
/// - `connect_timeout`: 10 seconds
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct MailchimpConfigBuilder {
    api_key: Option<ApiKey>,
    api_version: Option<ApiVersion>,
    api_host: Option<HostUrl>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl MailchimpConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder seeded from `MAILCHIMP_API_KEY` and `MAILCHIMP_API_HOST`.
    ///
    /// Unset variables leave the corresponding setting at its default.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a variable is set but holds an invalid
    /// value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| match std::env::var(name) {
            Ok(value) => Ok(Some(value)),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(std::env::VarError::NotUnicode(_)) => Err(name),
        })
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Result<Option<String>, &'static str>,
    {
        let read = |name| lookup(name).map_err(|name| ConfigError::InvalidEnvVar { name });

        let mut builder = Self::new();
        if let Some(key) = read(API_KEY_ENV)?.filter(|v| !v.trim().is_empty()) {
            builder = builder.api_key(ApiKey::new(key)?);
        }
        if let Some(host) = read(API_HOST_ENV)?.filter(|v| !v.trim().is_empty()) {
            builder = builder.api_host(HostUrl::new(host)?);
        }
        Ok(builder)
    }

    /// Sets the API key.
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Overrides the scheme + host that would otherwise be derived from the
    /// key's data center.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the overall per-call timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connect timeout.
    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`MailchimpConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTimeout`] if either timeout is zero.
    pub fn build(self) -> Result<MailchimpConfig, ConfigError> {
        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout { field: "timeout" });
        }
        let connect_timeout = self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT);
        if connect_timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout {
                field: "connect_timeout",
            });
        }

        Ok(MailchimpConfig {
            api_key: self.api_key,
            api_version: self.api_version.unwrap_or_default(),
            api_host: self.api_host,
            timeout,
            connect_timeout,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(
        vars: &[(&'static str, &str)],
    ) -> impl Fn(&'static str) -> Result<Option<String>, &'static str> {
        let vars: HashMap<&'static str, String> =
            vars.iter().map(|(k, v)| (*k, (*v).to_string())).collect();
        move |name| Ok(vars.get(name).cloned())
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = MailchimpConfig::builder().build().unwrap();

        assert!(config.api_key().is_none());
        assert_eq!(config.api_version(), &ApiVersion::V3_0);
        assert!(config.api_host().is_none());
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
        assert_eq!(config.connect_timeout(), DEFAULT_CONNECT_TIMEOUT);
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_with_all_fields() {
        let config = MailchimpConfig::builder()
            .api_key(ApiKey::new("abcd1234-us6").unwrap())
            .api_version("3.1".parse().unwrap())
            .api_host(HostUrl::new("http://localhost:9000").unwrap())
            .timeout(Duration::from_secs(5))
            .connect_timeout(Duration::from_secs(2))
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        assert_eq!(config.api_key().unwrap().data_center().as_ref(), "us6");
        assert_eq!(config.api_version().to_string(), "3.1");
        assert_eq!(config.api_host().unwrap().host_name(), "localhost");
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.connect_timeout(), Duration::from_secs(2));
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_builder_rejects_zero_timeouts() {
        let result = MailchimpConfig::builder().timeout(Duration::ZERO).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidTimeout { field: "timeout" })
        ));

        let result = MailchimpConfig::builder()
            .connect_timeout(Duration::ZERO)
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidTimeout {
                field: "connect_timeout"
            })
        ));
    }

    #[test]
    fn test_from_lookup_reads_key_and_host() {
        let builder = MailchimpConfigBuilder::from_lookup(lookup_from(&[
            (API_KEY_ENV, "abcd1234-us19"),
            (API_HOST_ENV, "https://proxy.example.com"),
        ]))
        .unwrap();
        let config = builder.build().unwrap();

        assert_eq!(config.api_key().unwrap().data_center().as_ref(), "us19");
        assert_eq!(config.api_host().unwrap().host_name(), "proxy.example.com");
    }

    #[test]
    fn test_from_lookup_leaves_unset_values_empty() {
        let config = MailchimpConfigBuilder::from_lookup(lookup_from(&[(API_KEY_ENV, "  ")]))
            .unwrap()
            .build()
            .unwrap();

        assert!(config.api_key().is_none());
        assert!(config.api_host().is_none());
    }

    #[test]
    fn test_from_lookup_rejects_invalid_key() {
        let result = MailchimpConfigBuilder::from_lookup(lookup_from(&[(API_KEY_ENV, "nodash")]));
        assert!(matches!(result, Err(ConfigError::InvalidApiKey { .. })));
    }

    #[test]
    fn test_from_lookup_reports_non_unicode_variable() {
        let result = MailchimpConfigBuilder::from_lookup(|name| Err(name));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvVar { name: API_KEY_ENV })
        ));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MailchimpConfig>();
    }

    #[test]
    fn test_config_debug_does_not_leak_key() {
        let config = MailchimpConfig::builder()
            .api_key(ApiKey::new("topsecrettoken-us6").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("MailchimpConfig"));
        assert!(!debug_str.contains("topsecrettoken"));
    }
}
