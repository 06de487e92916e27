//! Endpoint building and resource operations for the Mailchimp Marketing API.
//!
//! This module provides:
//!
//! - **[`EndpointDescriptor`]**: A validated description of one endpoint
//!   (resource, optional sub-resource, optional nested sub-resource, identifiers)
//! - **[`build_endpoint`]**: Joins a base URI, version and descriptor into a URL
//! - **[`ResourceType`] and [`SubResourceType`]**: The closed path vocabulary
//! - **[`NoContent`] and [`Payload<T>`]**: Result shapes for empty and loosely typed responses
//! - **[`resources`]**: Thin services per resource group
//!
//! # Path Layout
//!
//! Identifiers fill slots in order: the resource id, then the sub-resource
//! id, then the nested id.
//!
//! ```text
//! /{version}/{resource}[/{id}[/{sub}[/{sub_id}[/{nested}[/{nested_id}]]]]]
//! ```
//!
//! # Example
//!
//! ```rust
//! use mailchimp_api::rest::{EndpointDescriptor, ResourceType, SubResourceType};
//! use mailchimp_api::ApiVersion;
//!
//! let members = EndpointDescriptor::sub(
//!     ResourceType::Lists,
//!     SubResourceType::Members,
//!     ["57afe96172"],
//! )
//! .unwrap();
//!
//! assert_eq!(members.path(&ApiVersion::V3_0), "/3.0/lists/57afe96172/members");
//! ```

mod endpoint;
mod errors;
mod response;
pub mod resources;

pub use endpoint::{build_endpoint, EndpointDescriptor, ResourceType, SubResourceType};
pub use errors::EndpointError;
pub use response::{NoContent, Payload};
