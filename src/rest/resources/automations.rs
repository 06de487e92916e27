//! Classic automation workflows.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::clients::{ApiResult, RestClient};
use crate::rest::{EndpointDescriptor, ResourceType, SubResourceType};

const AUTOMATIONS: ResourceType = ResourceType::Automations;

/// Operations under `/automations`. All are read-only.
#[derive(Clone, Copy, Debug)]
pub struct Automations<'a> {
    client: &'a RestClient,
}

impl<'a> Automations<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Gets up to `count` automation workflows.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn all<T: DeserializeOwned>(&self, count: u32) -> ApiResult<T> {
        let query = HashMap::from([("count".to_string(), count.to_string())]);
        self.client
            .get(&EndpointDescriptor::collection(AUTOMATIONS), Some(query))
            .await
    }

    /// Gets one workflow.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn get<T: DeserializeOwned>(&self, workflow_id: &str) -> ApiResult<T> {
        self.client
            .get(&EndpointDescriptor::item(AUTOMATIONS, workflow_id)?, None)
            .await
    }

    /// Gets the emails of a workflow.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn emails<T: DeserializeOwned>(&self, workflow_id: &str) -> ApiResult<T> {
        self.read(SubResourceType::Emails, SubResourceType::NotApplicable, &[workflow_id])
            .await
    }

    /// Gets one workflow email.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn email<T: DeserializeOwned>(
        &self,
        workflow_id: &str,
        workflow_email_id: &str,
    ) -> ApiResult<T> {
        self.read(
            SubResourceType::Emails,
            SubResourceType::NotApplicable,
            &[workflow_id, workflow_email_id],
        )
        .await
    }

    /// Gets the subscribers queued for a workflow email.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn queue<T: DeserializeOwned>(
        &self,
        workflow_id: &str,
        workflow_email_id: &str,
    ) -> ApiResult<T> {
        self.read(
            SubResourceType::Emails,
            SubResourceType::Queue,
            &[workflow_id, workflow_email_id],
        )
        .await
    }

    /// Gets one queued subscriber.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn queued_subscriber<T: DeserializeOwned>(
        &self,
        workflow_id: &str,
        workflow_email_id: &str,
        subscriber_hash: &str,
    ) -> ApiResult<T> {
        self.read(
            SubResourceType::Emails,
            SubResourceType::Queue,
            &[workflow_id, workflow_email_id, subscriber_hash],
        )
        .await
    }

    /// Gets the subscribers removed from a workflow.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn removed_subscribers<T: DeserializeOwned>(&self, workflow_id: &str) -> ApiResult<T> {
        self.read(
            SubResourceType::RemovedSubscribers,
            SubResourceType::NotApplicable,
            &[workflow_id],
        )
        .await
    }

    async fn read<T: DeserializeOwned>(
        &self,
        sub: SubResourceType,
        nested: SubResourceType,
        ids: &[&str],
    ) -> ApiResult<T> {
        let descriptor = EndpointDescriptor::new(AUTOMATIONS, sub, nested, ids.iter().copied())?;
        self.client.get(&descriptor, None).await
    }
}
