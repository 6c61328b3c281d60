//! Users API.

use crate::client::SqwiggleClient;
use crate::error::Result;
use crate::types::{UpdateUserRequest, User};

/// Users API client.
///
/// Users join through invites, so there is no create call.
pub struct UsersApi {
    client: SqwiggleClient,
}

impl UsersApi {
    pub(crate) fn new(client: SqwiggleClient) -> Self {
        Self { client }
    }

    /// List users in the organization.
    pub async fn list(&self, page: u32, limit: u32) -> Result<Vec<User>> {
        self.client.list("users", page, limit).await
    }

    /// Get a user by ID.
    pub async fn get(&self, id: u64) -> Result<User> {
        self.client.get(&format!("users/{}", id)).await
    }

    /// Update a user.
    pub async fn update(&self, id: u64, request: UpdateUserRequest) -> Result<User> {
        self.client.put(&format!("users/{}", id), &request).await
    }

    /// Remove a user from the organization.
    pub async fn delete(&self, id: u64) -> Result<()> {
        self.client.delete(&format!("users/{}", id)).await
    }
}
