//! Info API.

use crate::client::SqwiggleClient;
use crate::error::Result;

/// Info API client.
///
/// `/info` has no documented schema, so the body is handed back untouched.
pub struct InfoApi {
    client: SqwiggleClient,
}

impl InfoApi {
    pub(crate) fn new(client: SqwiggleClient) -> Self {
        Self { client }
    }

    /// Fetch the raw `/info` body.
    pub async fn get(&self) -> Result<Vec<u8>> {
        self.client.get_raw("info").await
    }

    /// Fetch `/info` and parse it as untyped JSON.
    pub async fn get_json(&self) -> Result<serde_json::Value> {
        let body = self.get().await?;
        serde_json::from_slice(&body).map_err(|source| crate::Error::Decode {
            status: 200,
            source,
        })
    }
}
