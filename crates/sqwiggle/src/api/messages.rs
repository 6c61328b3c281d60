//! Messages API.

use crate::client::SqwiggleClient;
use crate::error::Result;
use crate::types::{CreateMessageRequest, Message, UpdateMessageRequest};

/// Messages API client.
pub struct MessagesApi {
    client: SqwiggleClient,
}

impl MessagesApi {
    pub(crate) fn new(client: SqwiggleClient) -> Self {
        Self { client }
    }

    /// List messages across all streams of the organization, newest first.
    ///
    /// A `page` or `limit` of 0 leaves the server default in place.
    pub async fn list(&self, page: u32, limit: u32) -> Result<Vec<Message>> {
        self.client.list("messages", page, limit).await
    }

    /// Get a message and its attachments.
    pub async fn get(&self, id: u64) -> Result<Message> {
        self.client.get(&format!("messages/{}", id)).await
    }

    /// Post a message to a stream.
    ///
    /// Links in the text are expanded into attachments by the server when
    /// parsing is enabled, and users can be mentioned with
    /// `@(user_name)[user:user_id]`.
    pub async fn create(&self, request: CreateMessageRequest) -> Result<Message> {
        self.client.post("messages", &request).await
    }

    /// Post a plain text message.
    pub async fn post(&self, stream_id: u64, text: impl Into<String>) -> Result<Message> {
        self.create(CreateMessageRequest::new(stream_id, text)).await
    }

    /// Edit a message.
    pub async fn update(&self, id: u64, request: UpdateMessageRequest) -> Result<Message> {
        self.client.put(&format!("messages/{}", id), &request).await
    }

    /// Delete a message.
    pub async fn delete(&self, id: u64) -> Result<()> {
        self.client.delete(&format!("messages/{}", id)).await
    }
}
