//! Configuration error types for the Mailchimp API client.
//!
//! All configuration constructors return `Result<T, ConfigError>` so invalid
//! values are rejected when they are created, not when the first request is
//! sent.
//!
//! # Example
//!
//! ```rust
//! use mailchimp_api::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while building client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid Mailchimp API key.")]
    EmptyApiKey,

    /// API key does not have the `{token}-{datacenter}` shape.
    #[error("Invalid API key: {reason}. Expected format: '{{token}}-{{datacenter}}' (e.g., 'abcd1234-us6').")]
    InvalidApiKey {
        /// Why the key was rejected.
        reason: String,
    },

    /// Data center segment is invalid.
    #[error("Invalid data center '{value}'. Expected a lowercase alphanumeric segment such as 'us6'.")]
    InvalidDataCenter {
        /// The invalid data center that was provided.
        value: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'MAJOR.MINOR' (e.g., '3.0').")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://proxy.example.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A timeout was set to zero.
    #[error("Invalid {field}: timeouts must be greater than zero.")]
    InvalidTimeout {
        /// The name of the timeout setting.
        field: &'static str,
    },

    /// An environment variable held a value that could not be read.
    #[error("Environment variable '{name}' is not valid unicode.")]
    InvalidEnvVar {
        /// The name of the variable.
        name: &'static str,
    },
}
