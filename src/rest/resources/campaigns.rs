//! Campaigns and campaign folders.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::{ApiResult, RestClient};
use crate::rest::resources::Pagination;
use crate::rest::{EndpointDescriptor, NoContent, Payload, ResourceType, SubResourceType};

const CAMPAIGNS: ResourceType = ResourceType::Campaigns;
const FOLDERS: ResourceType = ResourceType::CampaignFolders;

#[derive(Serialize)]
struct ScheduleBody {
    schedule_time: DateTime<Utc>,
}

#[derive(Serialize)]
struct FolderBody<'a> {
    name: &'a str,
}

/// Operations under `/campaigns`.
#[derive(Clone, Copy, Debug)]
pub struct Campaigns<'a> {
    client: &'a RestClient,
}

impl<'a> Campaigns<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Gets a page of campaigns.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn all<T: DeserializeOwned>(&self, page: Pagination) -> ApiResult<T> {
        self.client
            .get(&EndpointDescriptor::collection(CAMPAIGNS), Some(page.to_query()))
            .await
    }

    /// Gets one campaign.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn get<T: DeserializeOwned>(&self, campaign_id: &str) -> ApiResult<T> {
        self.client
            .get(&EndpointDescriptor::item(CAMPAIGNS, campaign_id)?, None)
            .await
    }

    /// Creates a campaign.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn create<B, T>(&self, campaign: &B) -> ApiResult<Payload<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.client
            .post(&EndpointDescriptor::collection(CAMPAIGNS), Some(campaign))
            .await
    }

    /// Deletes a campaign.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn delete(&self, campaign_id: &str) -> ApiResult<NoContent> {
        self.client
            .delete(&EndpointDescriptor::item(CAMPAIGNS, campaign_id)?)
            .await
    }

    /// Sends a campaign immediately.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails. The API
    /// rejects campaigns that fail their send checklist with a 400.
    pub async fn send(&self, campaign_id: &str) -> ApiResult<NoContent> {
        self.action(campaign_id, SubResourceType::Send).await
    }

    /// Cancels a campaign that is being sent.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn cancel_send(&self, campaign_id: &str) -> ApiResult<NoContent> {
        self.action(campaign_id, SubResourceType::CancelSend).await
    }

    /// Schedules a campaign for delivery at `schedule_time`.
    ///
    /// The API only accepts times on the quarter hour.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn schedule(
        &self,
        campaign_id: &str,
        schedule_time: DateTime<Utc>,
    ) -> ApiResult<NoContent> {
        let descriptor = actions(campaign_id, SubResourceType::Schedule)?;
        self.client
            .post(&descriptor, Some(&ScheduleBody { schedule_time }))
            .await
    }

    /// Gets the campaign's content.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn content<T: DeserializeOwned>(&self, campaign_id: &str) -> ApiResult<T> {
        let descriptor = EndpointDescriptor::sub(CAMPAIGNS, SubResourceType::Content, [campaign_id])?;
        self.client.get(&descriptor, None).await
    }

    /// Replaces the campaign's content (HTML, plain text or template).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn set_content<B, T>(&self, campaign_id: &str, content: &B) -> ApiResult<Payload<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let descriptor = EndpointDescriptor::sub(CAMPAIGNS, SubResourceType::Content, [campaign_id])?;
        self.client.put(&descriptor, content).await
    }

    /// Gets all feedback on a campaign.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn feedback<T: DeserializeOwned>(&self, campaign_id: &str) -> ApiResult<T> {
        let descriptor = EndpointDescriptor::sub(CAMPAIGNS, SubResourceType::Feedback, [campaign_id])?;
        self.client.get(&descriptor, None).await
    }

    /// Gets one feedback message.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn feedback_message<T: DeserializeOwned>(
        &self,
        campaign_id: &str,
        feedback_id: &str,
    ) -> ApiResult<T> {
        let descriptor = EndpointDescriptor::sub(
            CAMPAIGNS,
            SubResourceType::Feedback,
            [campaign_id, feedback_id],
        )?;
        self.client.get(&descriptor, None).await
    }

    /// Deletes a feedback message.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn delete_feedback(&self, campaign_id: &str, feedback_id: &str) -> ApiResult<NoContent> {
        let descriptor = EndpointDescriptor::sub(
            CAMPAIGNS,
            SubResourceType::Feedback,
            [campaign_id, feedback_id],
        )?;
        self.client.delete(&descriptor).await
    }

    /// Reviews the send checklist before sending.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn send_checklist<T: DeserializeOwned>(&self, campaign_id: &str) -> ApiResult<T> {
        let descriptor =
            EndpointDescriptor::sub(CAMPAIGNS, SubResourceType::SendChecklist, [campaign_id])?;
        self.client.get(&descriptor, None).await
    }

    async fn action(&self, campaign_id: &str, action: SubResourceType) -> ApiResult<NoContent> {
        self.client
            .post_action(&actions(campaign_id, action)?)
            .await
    }
}

fn actions(
    campaign_id: &str,
    action: SubResourceType,
) -> Result<EndpointDescriptor, crate::rest::EndpointError> {
    EndpointDescriptor::new(CAMPAIGNS, SubResourceType::Actions, action, [campaign_id])
}

/// Operations under `/campaign-folders`.
#[derive(Clone, Copy, Debug)]
pub struct CampaignFolders<'a> {
    client: &'a RestClient,
}

impl<'a> CampaignFolders<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Gets a page of campaign folders.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn all<T: DeserializeOwned>(&self, page: Pagination) -> ApiResult<T> {
        self.client
            .get(&EndpointDescriptor::collection(FOLDERS), Some(page.to_query()))
            .await
    }

    /// Gets one folder.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn get<T: DeserializeOwned>(&self, folder_id: &str) -> ApiResult<T> {
        self.client
            .get(&EndpointDescriptor::item(FOLDERS, folder_id)?, None)
            .await
    }

    /// Creates a folder.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn add<T: DeserializeOwned>(&self, name: &str) -> ApiResult<Payload<T>> {
        self.client
            .post(&EndpointDescriptor::collection(FOLDERS), Some(&FolderBody { name }))
            .await
    }

    /// Renames a folder.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn update<T: DeserializeOwned>(
        &self,
        folder_id: &str,
        name: &str,
    ) -> ApiResult<Payload<T>> {
        self.client
            .patch(&EndpointDescriptor::item(FOLDERS, folder_id)?, &FolderBody { name })
            .await
    }

    /// Deletes a folder. Its campaigns are kept.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn delete(&self, folder_id: &str) -> ApiResult<NoContent> {
        self.client
            .delete(&EndpointDescriptor::item(FOLDERS, folder_id)?)
            .await
    }
}
