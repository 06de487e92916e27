//! Resource operations for the Mailchimp Marketing API.
//!
//! Each resource group is a thin service borrowed from a
//! [`RestClient`](crate::RestClient). Every method maps one remote
//! capability onto an [`EndpointDescriptor`](crate::rest::EndpointDescriptor)
//! and a verb.
//!
//! # Result Types
//!
//! Domain schemas are not modeled. Reads are generic over the result type,
//! so callers pick their own structs or use `serde_json::Value`. Create and
//! update calls return [`Payload<T>`](crate::rest::Payload), and deletes and
//! actions return [`NoContent`](crate::rest::NoContent).
//!
//! # Available Resources
//!
//! | Accessor | Service | Path |
//! |----------|---------|------|
//! | [`RestClient::lists`](crate::RestClient::lists) | [`Lists`] | `/lists` |
//! | [`RestClient::campaigns`](crate::RestClient::campaigns) | [`Campaigns`] | `/campaigns` |
//! | [`RestClient::campaign_folders`](crate::RestClient::campaign_folders) | [`CampaignFolders`] | `/campaign-folders` |
//! | [`RestClient::automations`](crate::RestClient::automations) | [`Automations`] | `/automations` |
//! | [`RestClient::reports`](crate::RestClient::reports) | [`Reports`] | `/reports` |
//! | [`RestClient::conversations`](crate::RestClient::conversations) | [`Conversations`] | `/conversations` |
//! | [`RestClient::batches`](crate::RestClient::batches) | [`Batches`] | `/batches` |
//!
//! # Example
//!
//! ```rust,ignore
//! use mailchimp_api::rest::resources::Pagination;
//! use serde_json::Value;
//!
//! let lists: Value = client.lists().all(Pagination::new(0, 100)).await?;
//! let report: Value = client.reports().campaign("42694e9e57").await?;
//! client.campaigns().send("42694e9e57").await?;
//! ```

mod automations;
mod batches;
mod campaigns;
mod conversations;
mod lists;
mod reports;

use std::collections::HashMap;

pub use automations::Automations;
pub use batches::{BatchOperation, BatchRequest, BatchStatus, Batches};
pub use campaigns::{CampaignFolders, Campaigns};
pub use conversations::Conversations;
pub use lists::{InterestCategoryRequest, InterestCategoryType, InterestRequest, Lists};
pub use reports::Reports;

use crate::clients::RestClient;

/// Default page size used by the API.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Offset-based paging for collection reads.
///
/// # Example
///
/// ```rust
/// use mailchimp_api::rest::resources::Pagination;
///
/// let page = Pagination::default();
/// assert_eq!((page.offset, page.count), (0, 10));
///
/// let next = page.next();
/// assert_eq!(next.offset, 10);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pagination {
    /// Number of records to skip.
    pub offset: u32,
    /// Number of records to return.
    pub count: u32,
}

impl Pagination {
    /// Creates a page starting at `offset` with `count` records.
    #[must_use]
    pub const fn new(offset: u32, count: u32) -> Self {
        Self { offset, count }
    }

    /// Returns the following page of the same size.
    #[must_use]
    pub const fn next(&self) -> Self {
        Self {
            offset: self.offset.saturating_add(self.count),
            count: self.count,
        }
    }

    pub(crate) fn to_query(self) -> HashMap<String, String> {
        HashMap::from([
            ("offset".to_string(), self.offset.to_string()),
            ("count".to_string(), self.count.to_string()),
        ])
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

impl RestClient {
    /// Lists, members, merge fields, segments and interests.
    #[must_use]
    pub const fn lists(&self) -> Lists<'_> {
        Lists::new(self)
    }

    /// Campaigns, their content, actions and feedback.
    #[must_use]
    pub const fn campaigns(&self) -> Campaigns<'_> {
        Campaigns::new(self)
    }

    /// Campaign folders.
    #[must_use]
    pub const fn campaign_folders(&self) -> CampaignFolders<'_> {
        CampaignFolders::new(self)
    }

    /// Automation workflows, their emails and queues.
    #[must_use]
    pub const fn automations(&self) -> Automations<'_> {
        Automations::new(self)
    }

    /// Campaign reports.
    #[must_use]
    pub const fn reports(&self) -> Reports<'_> {
        Reports::new(self)
    }

    /// Conversations and their messages.
    #[must_use]
    pub const fn conversations(&self) -> Conversations<'_> {
        Conversations::new(self)
    }

    /// Batch operations.
    #[must_use]
    pub const fn batches(&self) -> Batches<'_> {
        Batches::new(self)
    }
}
