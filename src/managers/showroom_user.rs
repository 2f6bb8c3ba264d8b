//! Showroom account management.

use std::collections::HashMap;

use crate::clients::ApiProvider;
use crate::models::ShowroomUser;
use crate::serializer::{NormalizeContext, Serializer};

use super::ManagerError;

/// Manager for the `/api/showroom/users` endpoints.
///
/// Status codes map onto domain outcomes: 404 on lookup means the account
/// does not exist (`Ok(None)`), 409 on registration means the email is
/// already taken (`Ok(None)` after a warning), and 403 is the one condition
/// surfaced as an error ([`ManagerError::AccessDenied`]). Unexpected codes
/// are logged and treated as absence so a degraded API never panics a
/// caller.
#[derive(Debug)]
pub struct ShowroomUserManager {
    provider: ApiProvider,
    serializer: Serializer,
}

impl ShowroomUserManager {
    /// Creates a manager issuing requests through the given provider.
    #[must_use]
    pub fn new(provider: ApiProvider) -> Self {
        Self {
            provider,
            serializer: Serializer::default(),
        }
    }

    /// Fetches a showroom account by email address.
    ///
    /// Returns `Ok(None)` when no account exists for the address.
    ///
    /// # Errors
    ///
    /// Returns [`ManagerError`] for transport or payload failures.
    pub async fn get(&self, email: &str) -> Result<Option<ShowroomUser>, ManagerError> {
        let path = format!("/api/showroom/users/{}", urlencoding::encode(email));
        let response = self.provider.get(&path, None).await?;

        match response.code {
            200 => Ok(Some(self.serializer.deserialize(response.body)?)),
            404 => Ok(None),
            code => {
                tracing::error!(code, email, "unexpected response fetching showroom user");
                Ok(None)
            }
        }
    }

    /// Registers a new showroom account.
    ///
    /// The payload is normalized for writing first: null attributes and the
    /// server-owned timestamps are stripped. Returns `Ok(None)` when the
    /// email is already registered (HTTP 409).
    ///
    /// # Errors
    ///
    /// Returns [`ManagerError::AccessDenied`] when the API rejects the
    /// credentials (HTTP 403), plus transport and payload failures.
    pub async fn create(&self, user: &ShowroomUser) -> Result<Option<ShowroomUser>, ManagerError> {
        let payload = self
            .serializer
            .serialize(user, &NormalizeContext::write())?;
        let response = self
            .provider
            .post("/api/showroom/users/register", payload, None)
            .await?;

        match response.code {
            201 => Ok(Some(self.serializer.deserialize(response.body)?)),
            403 => Err(ManagerError::AccessDenied),
            409 => {
                tracing::warn!(
                    email = user.email.as_deref(),
                    "showroom user already registered"
                );
                Ok(None)
            }
            code => {
                tracing::error!(code, "unexpected response registering showroom user");
                Ok(None)
            }
        }
    }

    /// Finds a showroom account by an arbitrary property.
    ///
    /// Returns `Ok(None)` when no account matches.
    ///
    /// # Errors
    ///
    /// Returns [`ManagerError`] for transport or payload failures.
    pub async fn find_by(
        &self,
        key: &str,
        value: &str,
    ) -> Result<Option<ShowroomUser>, ManagerError> {
        let query = HashMap::from([
            ("key".to_string(), key.to_string()),
            ("value".to_string(), value.to_string()),
        ]);
        let response = self
            .provider
            .get("/api/showroom/users/find", Some(query))
            .await?;

        match response.code {
            200 => Ok(Some(self.serializer.deserialize(response.body)?)),
            404 => Ok(None),
            code => {
                tracing::error!(code, key, "unexpected response finding showroom user");
                Ok(None)
            }
        }
    }

    /// Applies a partial update to the account identified by email.
    ///
    /// `data` carries only the attributes to change.
    ///
    /// # Errors
    ///
    /// Returns [`ManagerError`] for transport or payload failures.
    pub async fn patch(
        &self,
        email: &str,
        data: serde_json::Value,
    ) -> Result<Option<ShowroomUser>, ManagerError> {
        let query = HashMap::from([("email".to_string(), email.to_string())]);
        let response = self
            .provider
            .patch("/api/showroom/users", data, Some(query))
            .await?;

        match response.code {
            200 => Ok(Some(self.serializer.deserialize(response.body)?)),
            code => {
                tracing::error!(code, email, "unexpected response patching showroom user");
                Ok(None)
            }
        }
    }
}
