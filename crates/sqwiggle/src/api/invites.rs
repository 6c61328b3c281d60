//! Invites API.

use crate::client::SqwiggleClient;
use crate::error::Result;
use crate::types::{CreateInviteRequest, Invite};

/// Invites API client.
pub struct InvitesApi {
    client: SqwiggleClient,
}

impl InvitesApi {
    pub(crate) fn new(client: SqwiggleClient) -> Self {
        Self { client }
    }

    /// List outstanding invites.
    pub async fn list(&self, page: u32, limit: u32) -> Result<Vec<Invite>> {
        self.client.list("invites", page, limit).await
    }

    /// Get an invite by ID.
    pub async fn get(&self, id: u64) -> Result<Invite> {
        self.client.get(&format!("invites/{}", id)).await
    }

    /// Invite someone by email.
    pub async fn create(&self, request: CreateInviteRequest) -> Result<Invite> {
        self.client.post("invites", &request).await
    }

    /// Revoke an invite.
    pub async fn delete(&self, id: u64) -> Result<()> {
        self.client.delete(&format!("invites/{}", id)).await
    }
}
