//! Streams API.

use crate::client::SqwiggleClient;
use crate::error::Result;
use crate::types::{CreateStreamRequest, Stream, UpdateStreamRequest};

/// Streams API client.
pub struct StreamsApi {
    client: SqwiggleClient,
}

impl StreamsApi {
    pub(crate) fn new(client: SqwiggleClient) -> Self {
        Self { client }
    }

    /// List streams, alphabetically.
    pub async fn list(&self, page: u32, limit: u32) -> Result<Vec<Stream>> {
        self.client.list("streams", page, limit).await
    }

    /// Get a stream by ID.
    pub async fn get(&self, id: u64) -> Result<Stream> {
        self.client.get(&format!("streams/{}", id)).await
    }

    /// Create a new stream.
    pub async fn create(&self, request: CreateStreamRequest) -> Result<Stream> {
        self.client.post("streams", &request).await
    }

    /// Update a stream.
    pub async fn update(&self, id: u64, request: UpdateStreamRequest) -> Result<Stream> {
        self.client.put(&format!("streams/{}", id), &request).await
    }

    /// Delete a stream.
    pub async fn delete(&self, id: u64) -> Result<()> {
        self.client.delete(&format!("streams/{}", id)).await
    }
}
