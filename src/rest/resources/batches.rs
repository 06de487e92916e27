//! Batch operations.
//!
//! A batch bundles many operations into one asynchronous job. Each operation
//! carries a path relative to the API root (no version prefix) and, for
//! writes, a body encoded as a JSON string.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::clients::{ApiResult, HttpMethod, InvalidHttpRequestError, RestClient};
use crate::rest::resources::Pagination;
use crate::rest::{EndpointDescriptor, NoContent, Payload, ResourceType};

const BATCHES: ResourceType = ResourceType::Batches;

/// One operation inside a [`BatchRequest`].
///
/// # Example
///
/// ```rust
/// use mailchimp_api::clients::HttpMethod;
/// use mailchimp_api::rest::resources::BatchOperation;
/// use mailchimp_api::rest::{EndpointDescriptor, ResourceType, SubResourceType};
/// use serde_json::json;
///
/// let members = EndpointDescriptor::sub(ResourceType::Lists, SubResourceType::Members, ["57afe96172"]).unwrap();
/// let op = BatchOperation::new(HttpMethod::Post, &members)
///     .with_body(&json!({"email_address": "a@example.com", "status": "subscribed"}))
///     .unwrap()
///     .with_operation_id("member-1");
///
/// assert_eq!(op.path(), "/lists/57afe96172/members");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BatchOperation {
    method: HttpMethod,
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    operation_id: Option<String>,
}

impl BatchOperation {
    /// Creates an operation against `descriptor`.
    #[must_use]
    pub fn new(method: HttpMethod, descriptor: &EndpointDescriptor) -> Self {
        Self {
            method,
            path: descriptor.resource_path(),
            params: None,
            body: None,
            operation_id: None,
        }
    }

    /// Attaches a body, encoded as a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::UnexpectedBody`] for GET and
    /// DELETE, or [`InvalidHttpRequestError::UnserializableBody`] if the
    /// body cannot be serialized.
    pub fn with_body<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, InvalidHttpRequestError> {
        if self.method.forbids_body() {
            return Err(InvalidHttpRequestError::UnexpectedBody {
                method: self.method.to_string(),
            });
        }
        let encoded = serde_json::to_string(body).map_err(|e| {
            InvalidHttpRequestError::UnserializableBody {
                reason: e.to_string(),
            }
        })?;
        self.body = Some(encoded);
        Ok(self)
    }

    /// Adds a query parameter.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets an id that is echoed back in the batch results.
    #[must_use]
    pub fn with_operation_id(mut self, operation_id: impl Into<String>) -> Self {
        self.operation_id = Some(operation_id.into());
        self
    }

    /// Returns the method.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// Returns the path relative to the API root.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the encoded body, if any.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}

/// The body of a batch submission.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BatchRequest {
    /// Operations in submission order.
    pub operations: Vec<BatchOperation>,
}

impl BatchRequest {
    /// Creates an empty batch.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            operations: Vec::new(),
        }
    }

    /// Appends an operation.
    #[must_use]
    pub fn push(mut self, operation: BatchOperation) -> Self {
        self.operations.push(operation);
        self
    }

    /// Returns the number of operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Returns `true` if the batch has no operations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

impl FromIterator<BatchOperation> for BatchRequest {
    fn from_iter<I: IntoIterator<Item = BatchOperation>>(iter: I) -> Self {
        Self {
            operations: iter.into_iter().collect(),
        }
    }
}

/// Progress of a submitted batch.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BatchStatus {
    /// Batch id.
    pub id: String,
    /// `pending`, `preprocessing`, `started`, `finalizing` or `finished`.
    pub status: String,
    /// Number of operations in the batch.
    pub total_operations: u32,
    /// Operations completed so far, successful or not.
    pub finished_operations: u32,
    /// Operations that returned an error.
    pub errored_operations: u32,
    /// When the batch was submitted.
    pub submitted_at: Option<DateTime<Utc>>,
    /// When the batch finished.
    pub completed_at: Option<DateTime<Utc>>,
    /// Archive of per-operation responses, once finished.
    pub response_body_url: Option<String>,
}

impl BatchStatus {
    /// Returns `true` once every operation has run.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status == "finished"
    }
}

/// Operations under `/batches`.
#[derive(Clone, Copy, Debug)]
pub struct Batches<'a> {
    client: &'a RestClient,
}

impl<'a> Batches<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Submits a batch.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn start<T: DeserializeOwned>(&self, request: &BatchRequest) -> ApiResult<Payload<T>> {
        self.client
            .post(&EndpointDescriptor::collection(BATCHES), Some(request))
            .await
    }

    /// Gets the status of a batch.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn status<T: DeserializeOwned>(&self, batch_id: &str) -> ApiResult<T> {
        self.client
            .get(&EndpointDescriptor::item(BATCHES, batch_id)?, None)
            .await
    }

    /// Gets a page of batches.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn all<T: DeserializeOwned>(&self, page: Pagination) -> ApiResult<T> {
        self.client
            .get(&EndpointDescriptor::collection(BATCHES), Some(page.to_query()))
            .await
    }

    /// Stops a batch. Finished operations are not rolled back.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::ApiError) if the call fails.
    pub async fn delete(&self, batch_id: &str) -> ApiResult<NoContent> {
        self.client
            .delete(&EndpointDescriptor::item(BATCHES, batch_id)?)
            .await
    }
}
