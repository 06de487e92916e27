//! Subscriber hashes for member-level endpoints.

use md5::{Digest, Md5};
use std::fmt::Write;

/// Computes the subscriber hash for an email address.
///
/// Member endpoints (`/lists/{list_id}/members/{subscriber_hash}`) identify a
/// contact by the lowercase hex MD5 of the trimmed, lowercased address.
///
/// # Example
///
/// ```rust
/// use mailchimp_api::auth::subscriber_hash;
///
/// assert_eq!(
///     subscriber_hash(" Someone@Example.com "),
///     subscriber_hash("someone@example.com"),
/// );
/// assert_eq!(subscriber_hash("someone@example.com").len(), 32);
/// ```
#[must_use]
pub fn subscriber_hash(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    let digest = Md5::digest(normalized.as_bytes());
    digest.iter().fold(String::with_capacity(32), |mut hex, byte| {
        let _ = write!(hex, "{byte:02x}");
        hex
    })
}
