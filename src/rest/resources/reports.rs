//! Campaign reports.

use serde::de::DeserializeOwned;

use crate::clients::{ApiResult, RestClient};
use crate::rest::resources::Pagination;
use crate::rest::{EndpointDescriptor, ResourceType, SubResourceType};

const REPORTS: ResourceType = ResourceType::Reports;
const NA: SubResourceType = SubResourceType::NotApplicable;

/// Operations under `/reports`. All are read-only and keyed by campaign id.
#[derive(Clone, Copy, Debug)]
pub struct Reports<'a> {
    client: &'a RestClient,
}

impl<'a> Reports<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Gets a page of campaign reports.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn all<T: DeserializeOwned>(&self, page: Pagination) -> ApiResult<T> {
        self.client
            .get(&EndpointDescriptor::collection(REPORTS), Some(page.to_query()))
            .await
    }

    /// Gets the report for one campaign.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn campaign<T: DeserializeOwned>(&self, campaign_id: &str) -> ApiResult<T> {
        self.read(NA, NA, &[campaign_id]).await
    }

    /// Gets feedback on the campaign's performance.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn advice<T: DeserializeOwned>(&self, campaign_id: &str) -> ApiResult<T> {
        self.read(SubResourceType::Advice, NA, &[campaign_id]).await
    }

    /// Gets click details for every link in the campaign.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn click_details<T: DeserializeOwned>(&self, campaign_id: &str) -> ApiResult<T> {
        self.read(SubResourceType::ClickDetails, NA, &[campaign_id])
            .await
    }

    /// Gets click details for one link.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn click_detail<T: DeserializeOwned>(
        &self,
        campaign_id: &str,
        link_id: &str,
    ) -> ApiResult<T> {
        self.read(SubResourceType::ClickDetails, NA, &[campaign_id, link_id])
            .await
    }

    /// Gets the subscribers who clicked a link.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn click_detail_members<T: DeserializeOwned>(
        &self,
        campaign_id: &str,
        link_id: &str,
    ) -> ApiResult<T> {
        self.read(
            SubResourceType::ClickDetails,
            SubResourceType::Members,
            &[campaign_id, link_id],
        )
        .await
    }

    /// Gets one subscriber who clicked a link.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn click_detail_member<T: DeserializeOwned>(
        &self,
        campaign_id: &str,
        link_id: &str,
        subscriber_hash: &str,
    ) -> ApiResult<T> {
        self.read(
            SubResourceType::ClickDetails,
            SubResourceType::Members,
            &[campaign_id, link_id, subscriber_hash],
        )
        .await
    }

    /// Gets statistics for the top-performing email domains.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn domain_performance<T: DeserializeOwned>(&self, campaign_id: &str) -> ApiResult<T> {
        self.read(SubResourceType::DomainPerformance, NA, &[campaign_id])
            .await
    }

    /// Gets social activity for the campaign's eepurl.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn eepurl<T: DeserializeOwned>(&self, campaign_id: &str) -> ApiResult<T> {
        self.read(SubResourceType::Eepurl, NA, &[campaign_id]).await
    }

    /// Gets email activity for every recipient.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn email_activity<T: DeserializeOwned>(&self, campaign_id: &str) -> ApiResult<T> {
        self.read(SubResourceType::EmailActivity, NA, &[campaign_id])
            .await
    }

    /// Gets email activity for one recipient.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn subscriber_email_activity<T: DeserializeOwned>(
        &self,
        campaign_id: &str,
        subscriber_hash: &str,
    ) -> ApiResult<T> {
        self.read(
            SubResourceType::EmailActivity,
            NA,
            &[campaign_id, subscriber_hash],
        )
        .await
    }

    /// Gets the top open locations.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn locations<T: DeserializeOwned>(&self, campaign_id: &str) -> ApiResult<T> {
        self.read(SubResourceType::Locations, NA, &[campaign_id])
            .await
    }

    /// Gets the campaign's recipients.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn sent_to<T: DeserializeOwned>(&self, campaign_id: &str) -> ApiResult<T> {
        self.read(SubResourceType::SentTo, NA, &[campaign_id]).await
    }

    /// Gets one recipient.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn sent_to_member<T: DeserializeOwned>(
        &self,
        campaign_id: &str,
        subscriber_hash: &str,
    ) -> ApiResult<T> {
        self.read(SubResourceType::SentTo, NA, &[campaign_id, subscriber_hash])
            .await
    }

    /// Gets reports for child campaigns (A/B tests, RSS, automations).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn sub_reports<T: DeserializeOwned>(&self, campaign_id: &str) -> ApiResult<T> {
        self.read(SubResourceType::SubReports, NA, &[campaign_id])
            .await
    }

    /// Gets the members who unsubscribed from the campaign.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn unsubscribed<T: DeserializeOwned>(&self, campaign_id: &str) -> ApiResult<T> {
        self.read(SubResourceType::Unsubscribed, NA, &[campaign_id])
            .await
    }

    /// Gets one unsubscribed member.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn unsubscribed_member<T: DeserializeOwned>(
        &self,
        campaign_id: &str,
        subscriber_hash: &str,
    ) -> ApiResult<T> {
        self.read(
            SubResourceType::Unsubscribed,
            NA,
            &[campaign_id, subscriber_hash],
        )
        .await
    }

    async fn read<T: DeserializeOwned>(
        &self,
        sub: SubResourceType,
        nested: SubResourceType,
        ids: &[&str],
    ) -> ApiResult<T> {
        let descriptor = EndpointDescriptor::new(REPORTS, sub, nested, ids.iter().copied())?;
        self.client.get(&descriptor, None).await
    }
}
