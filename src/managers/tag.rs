//! Tag catalog access.

use std::collections::HashMap;

use crate::clients::ApiProvider;
use crate::models::Tag;
use crate::serializer::Serializer;

use super::ManagerError;

/// Manager for the `/api/tags` endpoints.
#[derive(Debug)]
pub struct TagManager {
    provider: ApiProvider,
    serializer: Serializer,
}

impl TagManager {
    /// Creates a manager issuing requests through the given provider.
    #[must_use]
    pub fn new(provider: ApiProvider) -> Self {
        Self {
            provider,
            serializer: Serializer::default(),
        }
    }

    /// Fetches a tag by slug. Returns `Ok(None)` when the slug is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`ManagerError`] for transport or payload failures.
    pub async fn get(&self, slug: &str) -> Result<Option<Tag>, ManagerError> {
        let path = format!("/api/tags/{}", urlencoding::encode(slug));
        let response = self.provider.get(&path, None).await?;

        match response.code {
            200 => Ok(Some(self.serializer.deserialize(response.body)?)),
            404 => Ok(None),
            code => {
                tracing::error!(code, slug, "unexpected response fetching tag");
                Ok(None)
            }
        }
    }

    /// Lists tags, optionally filtered by query parameters.
    ///
    /// Unexpected status codes yield an empty list after being logged.
    ///
    /// # Errors
    ///
    /// Returns [`ManagerError`] for transport or payload failures.
    pub async fn list(
        &self,
        query: Option<HashMap<String, String>>,
    ) -> Result<Vec<Tag>, ManagerError> {
        let response = self.provider.get("/api/tags", query).await?;

        match response.code {
            200 => Ok(self.serializer.deserialize_all(response.body)?),
            code => {
                tracing::error!(code, "unexpected response listing tags");
                Ok(Vec::new())
            }
        }
    }
}
