//! Conversations API.

use crate::client::SqwiggleClient;
use crate::error::Result;
use crate::types::Conversation;

/// Conversations API client. Conversations are read-only.
pub struct ConversationsApi {
    client: SqwiggleClient,
}

impl ConversationsApi {
    pub(crate) fn new(client: SqwiggleClient) -> Self {
        Self { client }
    }

    /// List conversations, newest first.
    pub async fn list(&self, page: u32, limit: u32) -> Result<Vec<Conversation>> {
        self.client.list("conversations", page, limit).await
    }

    /// Get a conversation by ID.
    pub async fn get(&self, id: u64) -> Result<Conversation> {
        self.client.get(&format!("conversations/{}", id)).await
    }
}
