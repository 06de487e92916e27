//! Endpoint construction errors.
//!
//! A malformed endpoint descriptor is a programmer error: it is reported
//! before any request is built and is never retryable.

use thiserror::Error;

use crate::rest::endpoint::{ResourceType, SubResourceType};

/// Error returned when an endpoint descriptor cannot be built.
///
/// # Example
///
/// ```rust
/// use mailchimp_api::rest::{EndpointDescriptor, EndpointError, ResourceType, SubResourceType};
///
/// let result = EndpointDescriptor::new(
///     ResourceType::Lists,
///     SubResourceType::NotApplicable,
///     SubResourceType::NotApplicable,
///     ["list-1", "extra"],
/// );
/// assert!(matches!(result, Err(EndpointError::TooManyIdentifiers { supplied: 2, slots: 1, .. })));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EndpointError {
    /// The resource name is not one of the known resources.
    #[error("Unknown resource type '{name}'.")]
    UnknownResource {
        /// The name that failed to parse.
        name: String,
    },

    /// The sub-resource name is not one of the known sub-resources.
    #[error("Unknown sub-resource type '{name}'.")]
    UnknownSubResource {
        /// The name that failed to parse.
        name: String,
    },

    /// More identifiers were supplied than the descriptor can place.
    #[error("Too many identifiers for {resource}: {supplied} supplied but only {slots} slot(s) available.")]
    TooManyIdentifiers {
        /// The primary resource of the descriptor.
        resource: ResourceType,
        /// Number of identifiers supplied.
        supplied: usize,
        /// Number of identifier slots the descriptor has.
        slots: usize,
    },

    /// An identifier was the empty string.
    #[error("Identifier at position {position} is empty.")]
    EmptyIdentifier {
        /// Zero-based position of the empty identifier.
        position: usize,
    },

    /// A sub-resource was requested without the parent resource's identifier.
    #[error("Sub-resource '{sub_resource}' of {resource} requires the parent {resource} identifier.")]
    MissingParentIdentifier {
        /// The primary resource of the descriptor.
        resource: ResourceType,
        /// The sub-resource that needs a parent.
        sub_resource: SubResourceType,
    },

    /// A nested sub-resource was requested without the identifier of the
    /// sub-resource item it lives under.
    #[error("Nested sub-resource '{nested}' requires a '{sub_resource}' identifier.")]
    MissingSubResourceIdentifier {
        /// The sub-resource whose identifier is missing.
        sub_resource: SubResourceType,
        /// The nested sub-resource that needs it.
        nested: SubResourceType,
    },

    /// A nested sub-resource was requested without a sub-resource.
    #[error("Nested sub-resource '{nested}' requires a sub-resource.")]
    NestedWithoutSubResource {
        /// The orphaned nested sub-resource.
        nested: SubResourceType,
    },
}
