//! Result shapes for resource operations.
//!
//! Reads decode straight into the caller's type. Two shapes need special
//! handling:
//!
//! - [`NoContent`]: the result of calls that return no body (deletes and
//!   most actions). It accepts an empty body, `null`, or any JSON value.
//! - [`Payload<T>`]: the result of create and update calls whose response
//!   shape varies. It holds `T` when the body matches and the raw JSON
//!   otherwise.
//!
//! # Example
//!
//! ```rust
//! use mailchimp_api::rest::Payload;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Member {
//!     id: String,
//! }
//!
//! let typed: Payload<Member> = serde_json::from_str(r#"{"id":"abc"}"#).unwrap();
//! assert_eq!(typed.typed().map(|m| m.id.as_str()), Some("abc"));
//!
//! let opaque: Payload<Member> = serde_json::from_str(r#"{"status":"queued"}"#).unwrap();
//! assert!(opaque.typed().is_none());
//! assert_eq!(opaque.opaque().unwrap()["status"], "queued");
//! ```

use std::fmt;

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The successful result of a call that returns no body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NoContent;

impl<'de> Deserialize<'de> for NoContent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        IgnoredAny::deserialize(deserializer)?;
        Ok(Self)
    }
}

impl fmt::Display for NoContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("no content")
    }
}

/// A response body that is either a structured `T` or an opaque JSON value.
///
/// Invalid JSON still fails to decode; only a well-formed body of an
/// unexpected shape falls back to [`Payload::Opaque`].
#[derive(Clone, Debug, PartialEq)]
pub enum Payload<T> {
    /// The body matched `T`.
    Typed(T),
    /// The body is valid JSON of some other shape.
    Opaque(Value),
}

impl<T> Payload<T> {
    /// Returns `true` if the body matched `T`.
    #[must_use]
    pub const fn is_typed(&self) -> bool {
        matches!(self, Self::Typed(_))
    }

    /// Returns the structured value, if the body matched `T`.
    #[must_use]
    pub const fn typed(&self) -> Option<&T> {
        match self {
            Self::Typed(value) => Some(value),
            Self::Opaque(_) => None,
        }
    }

    /// Consumes the payload, returning the structured value if present.
    #[must_use]
    pub fn into_typed(self) -> Option<T> {
        match self {
            Self::Typed(value) => Some(value),
            Self::Opaque(_) => None,
        }
    }

    /// Returns the raw JSON, if the body did not match `T`.
    #[must_use]
    pub const fn opaque(&self) -> Option<&Value> {
        match self {
            Self::Typed(_) => None,
            Self::Opaque(value) => Some(value),
        }
    }

    /// Maps the structured value, leaving an opaque body unchanged.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Payload<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Typed(value) => Payload::Typed(f(value)),
            Self::Opaque(value) => Payload::Opaque(value),
        }
    }
}

impl<T: Serialize> Payload<T> {
    /// Returns the body as a JSON value regardless of variant.
    ///
    /// # Errors
    ///
    /// Returns an error if `T` fails to serialize.
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        match self {
            Self::Typed(value) => serde_json::to_value(value),
            Self::Opaque(value) => Ok(value.clone()),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Payload<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(T::deserialize(&value).map_or(Self::Opaque(value), Self::Typed))
    }
}
