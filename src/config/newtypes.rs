//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// An account's data center, such as `us6`.
///
/// The data center selects the API host: `https://{dc}.api.mailchimp.com`.
///
/// # Example
///
/// ```rust
/// use mailchimp_api::DataCenter;
///
/// let dc = DataCenter::new("US6").unwrap();
/// assert_eq!(dc.as_ref(), "us6");
/// assert_eq!(dc.api_host(), "https://us6.api.mailchimp.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DataCenter(String);

impl DataCenter {
    const API_DOMAIN: &'static str = "api.mailchimp.com";

    /// Creates a new validated data center.
    ///
    /// The value is trimmed and lowercased.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDataCenter`] if the value is empty or
    /// contains anything other than ASCII letters and digits.
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigError> {
        let value: String = value.into();
        let value = value.trim().to_lowercase();
        if value.is_empty() || !value.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::InvalidDataCenter { value });
        }
        Ok(Self(value))
    }

    /// Returns the scheme and host for this data center.
    #[must_use]
    pub fn api_host(&self) -> String {
        format!("https://{}.{}", self.0, Self::API_DOMAIN)
    }
}

impl AsRef<str> for DataCenter {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DataCenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated Mailchimp API key.
///
/// Keys have the form `{token}-{datacenter}`; the suffix after the last `-`
/// names the account's data center and is parsed on construction.
///
/// # Security
///
/// The `Debug` implementation masks the token, displaying only the data
/// center: `ApiKey(*****-us6)`.
///
/// # Example
///
/// ```rust
/// use mailchimp_api::ApiKey;
///
/// let key = ApiKey::new("abcd1234-us6").unwrap();
/// assert_eq!(key.data_center().as_ref(), "us6");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****-us6)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey {
    key: String,
    data_center: DataCenter,
}

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty, or
    /// [`ConfigError::InvalidApiKey`] if it lacks a token or a valid data
    /// center suffix.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key: String = key.into();
        let key = key.trim().to_string();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }

        let (token, dc) = key.rsplit_once('-').ok_or_else(|| ConfigError::InvalidApiKey {
            reason: "missing data center suffix".to_string(),
        })?;

        if token.is_empty() {
            return Err(ConfigError::InvalidApiKey {
                reason: "missing token before the data center".to_string(),
            });
        }
        if !token.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::InvalidApiKey {
                reason: "token must be alphanumeric".to_string(),
            });
        }

        let data_center = DataCenter::new(dc).map_err(|_| ConfigError::InvalidApiKey {
            reason: format!("'{dc}' is not a valid data center"),
        })?;

        Ok(Self { key, data_center })
    }

    /// Returns the data center encoded in the key.
    #[must_use]
    pub const fn data_center(&self) -> &DataCenter {
        &self.data_center
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.key
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey(*****-{})", self.data_center)
    }
}

/// A validated scheme + host used instead of the data-center host.
///
/// Useful for routing through a proxy or pointing the client at a local
/// test server. Trailing slashes are dropped by [`HostUrl::base_uri`].
///
/// # Example
///
/// ```rust
/// use mailchimp_api::HostUrl;
///
/// let url = HostUrl::new("http://localhost:8080/").unwrap();
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.host_name(), "localhost");
/// assert_eq!(url.base_uri(), "http://localhost:8080");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl HostUrl {
    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL has no alphabetic
    /// scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url: String = url.into();
        let url = url.trim().to_string();
        let invalid = || ConfigError::InvalidHostUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let host_end = url[host_start..]
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);
        if host_end == host_start {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }

    /// Returns the URL without trailing slashes, ready for path joining.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_rejects_empty_string() {
        assert!(matches!(ApiKey::new(""), Err(ConfigError::EmptyApiKey)));
        assert!(matches!(ApiKey::new("   "), Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_api_key_parses_data_center_suffix() {
        let key = ApiKey::new("0123456789abcdef0123456789abcdef-us6").unwrap();
        assert_eq!(key.data_center().as_ref(), "us6");
        assert_eq!(key.as_ref(), "0123456789abcdef0123456789abcdef-us6");
    }

    #[test]
    fn test_api_key_trims_whitespace() {
        let key = ApiKey::new("  abcd1234-us20\n").unwrap();
        assert_eq!(key.as_ref(), "abcd1234-us20");
    }

    #[test]
    fn test_api_key_rejects_missing_data_center() {
        assert!(matches!(
            ApiKey::new("abcd1234"),
            Err(ConfigError::InvalidApiKey { .. })
        ));
        assert!(matches!(
            ApiKey::new("abcd1234-"),
            Err(ConfigError::InvalidApiKey { .. })
        ));
        assert!(matches!(
            ApiKey::new("-us6"),
            Err(ConfigError::InvalidApiKey { .. })
        ));
    }

    #[test]
    fn test_api_key_rejects_non_alphanumeric_parts() {
        assert!(ApiKey::new("abcd 1234-us6").is_err());
        assert!(ApiKey::new("abcd1234-us.6").is_err());
        assert!(ApiKey::new("ab-cd-us6").is_err());
    }

    #[test]
    fn test_api_key_masks_token_in_debug() {
        let key = ApiKey::new("supersecrettoken-us6").unwrap();
        let debug_output = format!("{key:?}");
        assert_eq!(debug_output, "ApiKey(*****-us6)");
        assert!(!debug_output.contains("supersecrettoken"));
    }

    #[test]
    fn test_data_center_normalizes_case() {
        let dc = DataCenter::new(" US19 ").unwrap();
        assert_eq!(dc.as_ref(), "us19");
        assert_eq!(dc.to_string(), "us19");
    }

    #[test]
    fn test_data_center_rejects_invalid() {
        assert!(DataCenter::new("").is_err());
        assert!(DataCenter::new("us-6").is_err());
        assert!(DataCenter::new("us6.evil.com/").is_err());
    }

    #[test]
    fn test_host_url_validates_format() {
        let url = HostUrl::new("https://proxy.example.com").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_name(), "proxy.example.com");

        let url = HostUrl::new("http://127.0.0.1:3000").unwrap();
        assert_eq!(url.host_name(), "127.0.0.1");
        assert_eq!(url.base_uri(), "http://127.0.0.1:3000");
    }

    #[test]
    fn test_host_url_rejects_invalid() {
        assert!(HostUrl::new("proxy.example.com").is_err());
        assert!(HostUrl::new("https://").is_err());
        assert!(HostUrl::new("://example.com").is_err());
        assert!(HostUrl::new("https://:8080").is_err());
    }
}
