//! Organizations API.

use crate::client::SqwiggleClient;
use crate::error::Result;
use crate::types::{Organization, UpdateOrganizationRequest};

/// Organizations API client.
pub struct OrganizationsApi {
    client: SqwiggleClient,
}

impl OrganizationsApi {
    pub(crate) fn new(client: SqwiggleClient) -> Self {
        Self { client }
    }

    /// List organizations visible to the API key.
    pub async fn list(&self, page: u32, limit: u32) -> Result<Vec<Organization>> {
        self.client.list("organizations", page, limit).await
    }

    /// Get an organization by ID.
    pub async fn get(&self, id: u64) -> Result<Organization> {
        self.client.get(&format!("organizations/{}", id)).await
    }

    /// Update an organization.
    pub async fn update(
        &self,
        id: u64,
        request: UpdateOrganizationRequest,
    ) -> Result<Organization> {
        self.client
            .put(&format!("organizations/{}", id), &request)
            .await
    }
}
