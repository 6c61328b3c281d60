//! Attachments API.

use crate::client::SqwiggleClient;
use crate::error::Result;
use crate::types::{Attachment, UpdateAttachmentRequest};

/// Attachments API client.
///
/// Attachments are created by the server when messages are posted.
pub struct AttachmentsApi {
    client: SqwiggleClient,
}

impl AttachmentsApi {
    pub(crate) fn new(client: SqwiggleClient) -> Self {
        Self { client }
    }

    /// List attachments, newest first.
    pub async fn list(&self, page: u32, limit: u32) -> Result<Vec<Attachment>> {
        self.client.list("attachments", page, limit).await
    }

    /// Get an attachment by ID.
    pub async fn get(&self, id: u64) -> Result<Attachment> {
        self.client.get(&format!("attachments/{}", id)).await
    }

    /// Update an attachment's title or description.
    pub async fn update(&self, id: u64, request: UpdateAttachmentRequest) -> Result<Attachment> {
        self.client
            .put(&format!("attachments/{}", id), &request)
            .await
    }

    /// Delete an attachment.
    pub async fn delete(&self, id: u64) -> Result<()> {
        self.client.delete(&format!("attachments/{}", id)).await
    }
}
