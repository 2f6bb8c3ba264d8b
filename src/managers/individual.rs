//! Individual profile access.

use std::collections::HashMap;

use crate::clients::ApiProvider;
use crate::models::Individual;
use crate::serializer::Serializer;

use super::ManagerError;

/// Manager for the `/api/individuals` endpoints.
#[derive(Debug)]
pub struct IndividualManager {
    provider: ApiProvider,
    serializer: Serializer,
}

impl IndividualManager {
    /// Creates a manager issuing requests through the given provider.
    #[must_use]
    pub fn new(provider: ApiProvider) -> Self {
        Self {
            provider,
            serializer: Serializer::default(),
        }
    }

    /// Fetches an individual by slug. Returns `Ok(None)` when unknown.
    ///
    /// # Errors
    ///
    /// Returns [`ManagerError`] for transport or payload failures.
    pub async fn get(&self, slug: &str) -> Result<Option<Individual>, ManagerError> {
        let path = format!("/api/individuals/{}", urlencoding::encode(slug));
        let response = self.provider.get(&path, None).await?;

        match response.code {
            200 => Ok(Some(self.serializer.deserialize(response.body)?)),
            404 => Ok(None),
            code => {
                tracing::error!(code, slug, "unexpected response fetching individual");
                Ok(None)
            }
        }
    }

    /// Lists individuals, optionally filtered by query parameters.
    ///
    /// Unexpected status codes yield an empty list after being logged.
    ///
    /// # Errors
    ///
    /// Returns [`ManagerError`] for transport or payload failures.
    pub async fn list(
        &self,
        query: Option<HashMap<String, String>>,
    ) -> Result<Vec<Individual>, ManagerError> {
        let response = self.provider.get("/api/individuals", query).await?;

        match response.code {
            200 => Ok(self.serializer.deserialize_all(response.body)?),
            code => {
                tracing::error!(code, "unexpected response listing individuals");
                Ok(Vec::new())
            }
        }
    }
}
