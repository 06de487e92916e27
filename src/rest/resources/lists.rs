//! Lists (audiences) and their members, merge fields, segments and interests.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::auth::subscriber_hash;
use crate::clients::{ApiResult, RestClient};
use crate::rest::resources::Pagination;
use crate::rest::{EndpointDescriptor, NoContent, Payload, ResourceType, SubResourceType};

const LISTS: ResourceType = ResourceType::Lists;

/// How an interest category is presented on signup forms.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum InterestCategoryType {
    #[default]
    Checkboxes,
    Dropdown,
    Radio,
    Hidden,
}

/// Body for creating or updating an interest category.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InterestCategoryRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_order: Option<u32>,
    #[serde(rename = "type")]
    pub category_type: InterestCategoryType,
}

/// Body for creating or updating an interest.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InterestRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_order: Option<u32>,
}

/// Operations under `/lists`.
///
/// Member endpoints are keyed by subscriber hash; see
/// [`subscriber_hash`](crate::auth::subscriber_hash).
#[derive(Clone, Copy, Debug)]
pub struct Lists<'a> {
    client: &'a RestClient,
}

impl<'a> Lists<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    // ---- lists ----

    /// Gets a page of lists.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn all<T: DeserializeOwned>(&self, page: Pagination) -> ApiResult<T> {
        self.client
            .get(&EndpointDescriptor::collection(LISTS), Some(page.to_query()))
            .await
    }

    /// Gets one list.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn get<T: DeserializeOwned>(&self, list_id: &str) -> ApiResult<T> {
        self.client
            .get(&EndpointDescriptor::item(LISTS, list_id)?, None)
            .await
    }

    /// Creates a list.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn create<B, T>(&self, list: &B) -> ApiResult<Payload<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.client
            .post(&EndpointDescriptor::collection(LISTS), Some(list))
            .await
    }

    /// Updates a list's settings.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn update<B, T>(&self, list_id: &str, list: &B) -> ApiResult<Payload<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.client
            .patch(&EndpointDescriptor::item(LISTS, list_id)?, list)
            .await
    }

    /// Deletes a list.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn delete(&self, list_id: &str) -> ApiResult<NoContent> {
        self.client
            .delete(&EndpointDescriptor::item(LISTS, list_id)?)
            .await
    }

    // ---- reports on a list ----

    /// Gets abuse reports for a list.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn abuse_reports<T: DeserializeOwned>(&self, list_id: &str) -> ApiResult<T> {
        self.read(SubResourceType::AbuseReports, &[list_id]).await
    }

    /// Gets one abuse report.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn abuse_report<T: DeserializeOwned>(
        &self,
        list_id: &str,
        report_id: &str,
    ) -> ApiResult<T> {
        self.read(SubResourceType::AbuseReports, &[list_id, report_id])
            .await
    }

    /// Gets up to the previous 180 days of daily activity.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn activity<T: DeserializeOwned>(&self, list_id: &str) -> ApiResult<T> {
        self.read(SubResourceType::Activity, &[list_id]).await
    }

    /// Gets the top email clients used by list subscribers.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn clients<T: DeserializeOwned>(&self, list_id: &str) -> ApiResult<T> {
        self.read(SubResourceType::Clients, &[list_id]).await
    }

    /// Gets month-by-month growth history.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn growth_history<T: DeserializeOwned>(&self, list_id: &str) -> ApiResult<T> {
        self.read(SubResourceType::GrowthHistory, &[list_id]).await
    }

    /// Gets growth history for one month (`YYYY-MM`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn growth_history_month<T: DeserializeOwned>(
        &self,
        list_id: &str,
        month: &str,
    ) -> ApiResult<T> {
        self.read(SubResourceType::GrowthHistory, &[list_id, month])
            .await
    }

    // ---- members ----

    /// Gets a page of list members.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn members<T: DeserializeOwned>(
        &self,
        list_id: &str,
        page: Pagination,
    ) -> ApiResult<T> {
        let descriptor = EndpointDescriptor::sub(LISTS, SubResourceType::Members, [list_id])?;
        self.client.get(&descriptor, Some(page.to_query())).await
    }

    /// Gets one member by subscriber hash.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn member<T: DeserializeOwned>(
        &self,
        list_id: &str,
        subscriber_hash: &str,
    ) -> ApiResult<T> {
        self.read(SubResourceType::Members, &[list_id, subscriber_hash])
            .await
    }

    /// Adds a new member.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails. Adding an
    /// address that is already on the list is an
    /// [`ApiError::Http`](crate::ApiError::Http) with status 400.
    pub async fn add_member<B, T>(&self, list_id: &str, member: &B) -> ApiResult<Payload<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let descriptor = EndpointDescriptor::sub(LISTS, SubResourceType::Members, [list_id])?;
        self.client.post(&descriptor, Some(member)).await
    }

    /// Updates fields of an existing member.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn update_member<B, T>(
        &self,
        list_id: &str,
        subscriber_hash: &str,
        member: &B,
    ) -> ApiResult<Payload<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let descriptor = EndpointDescriptor::sub(
            LISTS,
            SubResourceType::Members,
            [list_id, subscriber_hash],
        )?;
        self.client.patch(&descriptor, member).await
    }

    /// Adds a member, or updates it if the address is already on the list.
    ///
    /// The subscriber hash is computed from `email_address`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn add_or_update_member<B, T>(
        &self,
        list_id: &str,
        email_address: &str,
        member: &B,
    ) -> ApiResult<Payload<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let hash = subscriber_hash(email_address);
        let descriptor =
            EndpointDescriptor::sub(LISTS, SubResourceType::Members, [list_id, hash.as_str()])?;
        self.client.put(&descriptor, member).await
    }

    /// Removes a member from the list.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn delete_member(&self, list_id: &str, subscriber_hash: &str) -> ApiResult<NoContent> {
        self.remove(SubResourceType::Members, &[list_id, subscriber_hash])
            .await
    }

    // ---- merge fields ----

    /// Gets all merge fields of a list.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn merge_fields<T: DeserializeOwned>(&self, list_id: &str) -> ApiResult<T> {
        self.read(SubResourceType::MergeFields, &[list_id]).await
    }

    /// Gets one merge field.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn merge_field<T: DeserializeOwned>(
        &self,
        list_id: &str,
        merge_id: &str,
    ) -> ApiResult<T> {
        self.read(SubResourceType::MergeFields, &[list_id, merge_id])
            .await
    }

    /// Adds a merge field.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn add_merge_field<B, T>(&self, list_id: &str, field: &B) -> ApiResult<Payload<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let descriptor = EndpointDescriptor::sub(LISTS, SubResourceType::MergeFields, [list_id])?;
        self.client.post(&descriptor, Some(field)).await
    }

    /// Updates a merge field.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn update_merge_field<B, T>(
        &self,
        list_id: &str,
        merge_id: &str,
        field: &B,
    ) -> ApiResult<Payload<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let descriptor =
            EndpointDescriptor::sub(LISTS, SubResourceType::MergeFields, [list_id, merge_id])?;
        self.client.patch(&descriptor, field).await
    }

    /// Deletes a merge field.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn delete_merge_field(&self, list_id: &str, merge_id: &str) -> ApiResult<NoContent> {
        self.remove(SubResourceType::MergeFields, &[list_id, merge_id])
            .await
    }

    // ---- segments ----

    /// Gets all segments of a list.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn segments<T: DeserializeOwned>(&self, list_id: &str) -> ApiResult<T> {
        self.read(SubResourceType::Segments, &[list_id]).await
    }

    /// Gets one segment.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn segment<T: DeserializeOwned>(
        &self,
        list_id: &str,
        segment_id: &str,
    ) -> ApiResult<T> {
        self.read(SubResourceType::Segments, &[list_id, segment_id])
            .await
    }

    /// Deletes a segment.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn delete_segment(&self, list_id: &str, segment_id: &str) -> ApiResult<NoContent> {
        self.remove(SubResourceType::Segments, &[list_id, segment_id])
            .await
    }

    // ---- interest categories ----

    /// Gets all interest categories of a list.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn interest_categories<T: DeserializeOwned>(&self, list_id: &str) -> ApiResult<T> {
        self.read(SubResourceType::InterestCategories, &[list_id])
            .await
    }

    /// Gets one interest category.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn interest_category<T: DeserializeOwned>(
        &self,
        list_id: &str,
        category_id: &str,
    ) -> ApiResult<T> {
        self.read(SubResourceType::InterestCategories, &[list_id, category_id])
            .await
    }

    /// Creates an interest category.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn create_interest_category<T: DeserializeOwned>(
        &self,
        list_id: &str,
        category: &InterestCategoryRequest,
    ) -> ApiResult<Payload<T>> {
        let descriptor =
            EndpointDescriptor::sub(LISTS, SubResourceType::InterestCategories, [list_id])?;
        self.client.post(&descriptor, Some(category)).await
    }

    /// Updates an interest category.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn update_interest_category<T: DeserializeOwned>(
        &self,
        list_id: &str,
        category_id: &str,
        category: &InterestCategoryRequest,
    ) -> ApiResult<Payload<T>> {
        let descriptor = EndpointDescriptor::sub(
            LISTS,
            SubResourceType::InterestCategories,
            [list_id, category_id],
        )?;
        self.client.patch(&descriptor, category).await
    }

    /// Deletes an interest category and its interests.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn delete_interest_category(
        &self,
        list_id: &str,
        category_id: &str,
    ) -> ApiResult<NoContent> {
        self.remove(SubResourceType::InterestCategories, &[list_id, category_id])
            .await
    }

    // ---- interests ----

    /// Gets all interests in a category.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn interests<T: DeserializeOwned>(
        &self,
        list_id: &str,
        category_id: &str,
    ) -> ApiResult<T> {
        self.client
            .get(&interests(&[list_id, category_id])?, None)
            .await
    }

    /// Gets one interest.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn interest<T: DeserializeOwned>(
        &self,
        list_id: &str,
        category_id: &str,
        interest_id: &str,
    ) -> ApiResult<T> {
        self.client
            .get(&interests(&[list_id, category_id, interest_id])?, None)
            .await
    }

    /// Creates an interest in a category.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn create_interest<T: DeserializeOwned>(
        &self,
        list_id: &str,
        category_id: &str,
        interest: &InterestRequest,
    ) -> ApiResult<Payload<T>> {
        self.client
            .post(&interests(&[list_id, category_id])?, Some(interest))
            .await
    }

    /// Updates an interest.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn update_interest<T: DeserializeOwned>(
        &self,
        list_id: &str,
        category_id: &str,
        interest_id: &str,
        interest: &InterestRequest,
    ) -> ApiResult<Payload<T>> {
        self.client
            .patch(&interests(&[list_id, category_id, interest_id])?, interest)
            .await
    }

    /// Deletes an interest.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn delete_interest(
        &self,
        list_id: &str,
        category_id: &str,
        interest_id: &str,
    ) -> ApiResult<NoContent> {
        self.client
            .delete(&interests(&[list_id, category_id, interest_id])?)
            .await
    }

    async fn read<T: DeserializeOwned>(&self, sub: SubResourceType, ids: &[&str]) -> ApiResult<T> {
        let descriptor = EndpointDescriptor::sub(LISTS, sub, ids.iter().copied())?;
        self.client.get(&descriptor, None).await
    }

    async fn remove(&self, sub: SubResourceType, ids: &[&str]) -> ApiResult<NoContent> {
        let descriptor = EndpointDescriptor::sub(LISTS, sub, ids.iter().copied())?;
        self.client.delete(&descriptor).await
    }
}

fn interests(ids: &[&str]) -> Result<EndpointDescriptor, crate::rest::EndpointError> {
    EndpointDescriptor::new(
        LISTS,
        SubResourceType::InterestCategories,
        SubResourceType::Interests,
        ids.iter().copied(),
    )
}
