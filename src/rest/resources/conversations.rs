//! Conversation tracking.

use serde::de::DeserializeOwned;

use crate::clients::{ApiResult, RestClient};
use crate::rest::{EndpointDescriptor, ResourceType, SubResourceType};

const CONVERSATIONS: ResourceType = ResourceType::Conversations;

/// Operations under `/conversations`.
#[derive(Clone, Copy, Debug)]
pub struct Conversations<'a> {
    client: &'a RestClient,
}

impl<'a> Conversations<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Gets all conversations.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn all<T: DeserializeOwned>(&self) -> ApiResult<T> {
        self.client
            .get(&EndpointDescriptor::collection(CONVERSATIONS), None)
            .await
    }

    /// Gets one conversation.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn get<T: DeserializeOwned>(&self, conversation_id: &str) -> ApiResult<T> {
        self.client
            .get(&EndpointDescriptor::item(CONVERSATIONS, conversation_id)?, None)
            .await
    }

    /// Gets the messages of a conversation.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn messages<T: DeserializeOwned>(&self, conversation_id: &str) -> ApiResult<T> {
        let descriptor =
            EndpointDescriptor::sub(CONVERSATIONS, SubResourceType::Messages, [conversation_id])?;
        self.client.get(&descriptor, None).await
    }

    /// Gets one message.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn message<T: DeserializeOwned>(
        &self,
        conversation_id: &str,
        message_id: &str,
    ) -> ApiResult<T> {
        let descriptor = EndpointDescriptor::sub(
            CONVERSATIONS,
            SubResourceType::Messages,
            [conversation_id, message_id],
        )?;
        self.client.get(&descriptor, None).await
    }
}
