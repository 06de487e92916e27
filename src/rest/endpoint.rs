//! Endpoint descriptors and URL construction.
//!
//! Every operation addresses the API through an [`EndpointDescriptor`]: a
//! primary [`ResourceType`], an optional [`SubResourceType`], an optional
//! nested sub-resource, and an ordered list of identifiers. Identifiers are
//! consumed left-to-right, first by the resource, then the sub-resource, then
//! the nested sub-resource:
//!
//! ```text
//! /{version}/{resource}[/{id0}][/{sub}[/{id1}][/{nested}[/{id2}]]]
//! ```

use std::fmt;
use std::str::FromStr;

use crate::config::ApiVersion;
use crate::rest::errors::EndpointError;

/// A top-level API resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceType {
    /// `lists`
    Lists,
    /// `campaigns`
    Campaigns,
    /// `campaign-folders`
    CampaignFolders,
    /// `automations`
    Automations,
    /// `reports`
    Reports,
    /// `conversations`
    Conversations,
    /// `batches`
    Batches,
}

impl ResourceType {
    /// All known resources.
    pub const ALL: [Self; 7] = [
        Self::Lists,
        Self::Campaigns,
        Self::CampaignFolders,
        Self::Automations,
        Self::Reports,
        Self::Conversations,
        Self::Batches,
    ];

    /// Returns the path segment for this resource.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lists => "lists",
            Self::Campaigns => "campaigns",
            Self::CampaignFolders => "campaign-folders",
            Self::Automations => "automations",
            Self::Reports => "reports",
            Self::Conversations => "conversations",
            Self::Batches => "batches",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = EndpointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|resource| resource.as_str() == s)
            .ok_or_else(|| EndpointError::UnknownResource {
                name: s.to_string(),
            })
    }
}

/// A collection scoped under a resource instance, or
/// [`SubResourceType::NotApplicable`] for none.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SubResourceType {
    /// No sub-resource.
    #[default]
    NotApplicable,
    AbuseReports,
    Activity,
    Clients,
    GrowthHistory,
    Members,
    MergeFields,
    Segments,
    InterestCategories,
    Interests,
    Content,
    Feedback,
    SendChecklist,
    /// `actions`, the parent of campaign actions such as `send`.
    Actions,
    Send,
    CancelSend,
    Schedule,
    Emails,
    Queue,
    RemovedSubscribers,
    Messages,
    Advice,
    ClickDetails,
    DomainPerformance,
    Eepurl,
    EmailActivity,
    Locations,
    SentTo,
    SubReports,
    Unsubscribed,
}

impl SubResourceType {
    const NAMED: [Self; 29] = [
        Self::AbuseReports,
        Self::Activity,
        Self::Clients,
        Self::GrowthHistory,
        Self::Members,
        Self::MergeFields,
        Self::Segments,
        Self::InterestCategories,
        Self::Interests,
        Self::Content,
        Self::Feedback,
        Self::SendChecklist,
        Self::Actions,
        Self::Send,
        Self::CancelSend,
        Self::Schedule,
        Self::Emails,
        Self::Queue,
        Self::RemovedSubscribers,
        Self::Messages,
        Self::Advice,
        Self::ClickDetails,
        Self::DomainPerformance,
        Self::Eepurl,
        Self::EmailActivity,
        Self::Locations,
        Self::SentTo,
        Self::SubReports,
        Self::Unsubscribed,
    ];

    /// Returns the path segment, or `""` for [`SubResourceType::NotApplicable`].
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotApplicable => "",
            Self::AbuseReports => "abuse-reports",
            Self::Activity => "activity",
            Self::Clients => "clients",
            Self::GrowthHistory => "growth-history",
            Self::Members => "members",
            Self::MergeFields => "merge-fields",
            Self::Segments => "segments",
            Self::InterestCategories => "interest-categories",
            Self::Interests => "interests",
            Self::Content => "content",
            Self::Feedback => "feedback",
            Self::SendChecklist => "send-checklist",
            Self::Actions => "actions",
            Self::Send => "send",
            Self::CancelSend => "cancel-send",
            Self::Schedule => "schedule",
            Self::Emails => "emails",
            Self::Queue => "queue",
            Self::RemovedSubscribers => "removed-subscribers",
            Self::Messages => "messages",
            Self::Advice => "advice",
            Self::ClickDetails => "click-details",
            Self::DomainPerformance => "domain-performance",
            Self::Eepurl => "eepurl",
            Self::EmailActivity => "email-activity",
            Self::Locations => "locations",
            Self::SentTo => "sent-to",
            Self::SubReports => "sub-reports",
            Self::Unsubscribed => "unsubscribed",
        }
    }

    /// Returns `false` for the [`SubResourceType::NotApplicable`] sentinel.
    #[must_use]
    pub const fn is_applicable(&self) -> bool {
        !matches!(self, Self::NotApplicable)
    }

    /// Returns `true` if the segment is followed by an item identifier.
    ///
    /// `actions` and the actions under it (`send`, `cancel-send`,
    /// `schedule`) are bare segments.
    #[must_use]
    pub const fn takes_identifier(&self) -> bool {
        !matches!(
            self,
            Self::NotApplicable | Self::Actions | Self::Send | Self::CancelSend | Self::Schedule
        )
    }
}

impl fmt::Display for SubResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubResourceType {
    type Err = EndpointError;

    /// Parses a path segment. The empty string parses as
    /// [`SubResourceType::NotApplicable`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::NotApplicable);
        }
        Self::NAMED
            .into_iter()
            .find(|sub| sub.as_str() == s)
            .ok_or_else(|| EndpointError::UnknownSubResource {
                name: s.to_string(),
            })
    }
}

/// A validated description of one API endpoint.
///
/// Construction checks the identifier count against the available slots, so
/// a descriptor always renders to a well-formed path.
///
/// # Example
///
/// ```rust
/// use mailchimp_api::rest::{EndpointDescriptor, ResourceType, SubResourceType};
/// use mailchimp_api::ApiVersion;
///
/// let descriptor = EndpointDescriptor::new(
///     ResourceType::Lists,
///     SubResourceType::Segments,
///     SubResourceType::NotApplicable,
///     ["list-1", "seg-9"],
/// )
/// .unwrap();
///
/// assert_eq!(descriptor.path(&ApiVersion::V3_0), "/3.0/lists/list-1/segments/seg-9");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointDescriptor {
    resource: ResourceType,
    sub_resource: SubResourceType,
    nested: SubResourceType,
    identifiers: Vec<String>,
}

impl EndpointDescriptor {
    /// Creates a descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`EndpointError`] if:
    /// - more identifiers are supplied than the descriptor has slots
    /// - an identifier is the empty string
    /// - `nested` is set without `sub_resource`
    /// - `sub_resource` is set without the parent resource identifier
    /// - `nested` is set without the sub-resource item's identifier
    ///   (except under `actions`, which has none)
    pub fn new<I, S>(
        resource: ResourceType,
        sub_resource: SubResourceType,
        nested: SubResourceType,
        identifiers: I,
    ) -> Result<Self, EndpointError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let identifiers: Vec<String> = identifiers.into_iter().map(Into::into).collect();

        if nested.is_applicable() && !sub_resource.is_applicable() {
            return Err(EndpointError::NestedWithoutSubResource { nested });
        }

        let slots =
            1 + usize::from(sub_resource.takes_identifier()) + usize::from(nested.takes_identifier());
        if identifiers.len() > slots {
            return Err(EndpointError::TooManyIdentifiers {
                resource,
                supplied: identifiers.len(),
                slots,
            });
        }

        if let Some(position) = identifiers.iter().position(String::is_empty) {
            return Err(EndpointError::EmptyIdentifier { position });
        }

        if sub_resource.is_applicable() && identifiers.is_empty() {
            return Err(EndpointError::MissingParentIdentifier {
                resource,
                sub_resource,
            });
        }

        if nested.is_applicable() && sub_resource.takes_identifier() && identifiers.len() < 2 {
            return Err(EndpointError::MissingSubResourceIdentifier {
                sub_resource,
                nested,
            });
        }

        Ok(Self {
            resource,
            sub_resource,
            nested,
            identifiers,
        })
    }

    /// The collection endpoint of a resource, e.g. `/lists`.
    #[must_use]
    pub const fn collection(resource: ResourceType) -> Self {
        Self {
            resource,
            sub_resource: SubResourceType::NotApplicable,
            nested: SubResourceType::NotApplicable,
            identifiers: Vec::new(),
        }
    }

    /// A single resource instance, e.g. `/lists/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`EndpointError::EmptyIdentifier`] if `id` is empty.
    pub fn item(resource: ResourceType, id: impl Into<String>) -> Result<Self, EndpointError> {
        Self::new(
            resource,
            SubResourceType::NotApplicable,
            SubResourceType::NotApplicable,
            [id],
        )
    }

    /// A sub-resource of one resource instance, with an optional trailing
    /// identifier set by passing it in `identifiers`.
    ///
    /// # Errors
    ///
    /// See [`EndpointDescriptor::new`].
    pub fn sub<I, S>(
        resource: ResourceType,
        sub_resource: SubResourceType,
        identifiers: I,
    ) -> Result<Self, EndpointError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            resource,
            sub_resource,
            SubResourceType::NotApplicable,
            identifiers,
        )
    }

    /// Returns the primary resource.
    #[must_use]
    pub const fn resource(&self) -> ResourceType {
        self.resource
    }

    /// Returns the sub-resource.
    #[must_use]
    pub const fn sub_resource(&self) -> SubResourceType {
        self.sub_resource
    }

    /// Returns the nested sub-resource.
    #[must_use]
    pub const fn nested(&self) -> SubResourceType {
        self.nested
    }

    /// Returns the identifiers in the order supplied.
    #[must_use]
    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    /// Renders the path without the version prefix, e.g. `/lists/abc`.
    ///
    /// Batch operations use this form.
    #[must_use]
    pub fn resource_path(&self) -> String {
        let mut ids = self.identifiers.iter();
        let mut path = String::new();

        let mut push = |segment: &str| {
            path.push('/');
            path.push_str(segment);
        };

        push(self.resource.as_str());
        if let Some(id) = ids.next() {
            push(&urlencoding::encode(id));
        }
        for sub in [self.sub_resource, self.nested] {
            if !sub.is_applicable() {
                break;
            }
            push(sub.as_str());
            if !sub.takes_identifier() {
                continue;
            }
            if let Some(id) = ids.next() {
                push(&urlencoding::encode(id));
            }
        }

        path
    }

    /// Renders the versioned path, e.g. `/3.0/lists/abc`.
    #[must_use]
    pub fn path(&self, version: &ApiVersion) -> String {
        format!("/{version}{}", self.resource_path())
    }
}

/// Joins a base URI (scheme + host) with a descriptor's versioned path.
///
/// # Example
///
/// ```rust
/// use mailchimp_api::rest::{build_endpoint, EndpointDescriptor, ResourceType};
/// use mailchimp_api::ApiVersion;
///
/// let url = build_endpoint(
///     "https://us6.api.mailchimp.com",
///     &ApiVersion::V3_0,
///     &EndpointDescriptor::collection(ResourceType::Lists),
/// );
/// assert_eq!(url, "https://us6.api.mailchimp.com/3.0/lists");
/// ```
#[must_use]
pub fn build_endpoint(base_uri: &str, version: &ApiVersion, descriptor: &EndpointDescriptor) -> String {
    format!("{}{}", base_uri.trim_end_matches('/'), descriptor.path(version))
}
