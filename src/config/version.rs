//! Mailchimp Marketing API version definitions.
//!
//! This module provides the [`ApiVersion`] enum, rendered as the first path
//! segment of every endpoint (`/3.0/lists`).

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Marketing API version.
///
/// The API has been on `3.0` for its whole public life; `Custom` leaves room
/// for a future `MAJOR.MINOR` without a crate release.
///
/// # Example
///
/// ```rust
/// use mailchimp_api::ApiVersion;
///
/// let version: ApiVersion = "3.0".parse().unwrap();
/// assert_eq!(version, ApiVersion::V3_0);
/// assert_eq!(ApiVersion::latest().to_string(), "3.0");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 3.0.
    V3_0,
    /// Custom `MAJOR.MINOR` version string.
    Custom(String),
}

impl ApiVersion {
    /// Returns the latest known API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V3_0
    }

    /// Returns `true` if this is a version known to this crate.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }

    fn is_valid_version_format(s: &str) -> bool {
        let Some((major, minor)) = s.split_once('.') else {
            return false;
        };
        !major.is_empty()
            && !minor.is_empty()
            && major.chars().all(|c| c.is_ascii_digit())
            && minor.chars().all(|c| c.is_ascii_digit())
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V3_0 => f.write_str("3.0"),
            Self::Custom(s) => f.write_str(s),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "3.0" => Ok(Self::V3_0),
            _ if Self::is_valid_version_format(s) => Ok(Self::Custom(s.to_string())),
            _ => Err(ConfigError::InvalidApiVersion {
                version: s.to_string(),
            }),
        }
    }
}
