//! Account lookup for authentication layers.

use crate::clients::{ApiProvider, HttpError};
use crate::models::User;
use crate::serializer::{NormalizerError, Serializer};

/// Error returned by [`UserProvider`] lookups.
///
/// Unlike the managers, the provider backs an authentication decision, so
/// every failure is surfaced as a distinct error rather than folded into
/// absence.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// No account exists for the email address (HTTP 404).
    #[error("No user found for email {email}")]
    UserNotFound {
        /// The email address that was looked up.
        email: String,
    },
    /// The API could not be reached.
    #[error("User service unavailable")]
    ServiceUnavailable(#[source] HttpError),
    /// The API answered with a status code the provider does not handle.
    #[error("Unexpected status code {code} from the user service")]
    UnexpectedStatus {
        /// The HTTP status code received.
        code: u16,
    },
    /// The account to refresh carries no email address.
    #[error("Account has no email address to refresh by")]
    Unsupported,
    /// The account payload could not be deserialized.
    #[error(transparent)]
    Serialization(#[from] NormalizerError),
}

/// Loads and refreshes [`User`] accounts from the `/api/users` endpoints.
///
/// Intended as the backing store for an authentication layer: look an
/// account up by email at login time, and re-fetch it with
/// [`refresh_user`](Self::refresh_user) on subsequent requests so stale
/// roles or status changes take effect.
#[derive(Debug)]
pub struct UserProvider {
    provider: ApiProvider,
    serializer: Serializer,
}

impl UserProvider {
    /// Creates a provider issuing requests through the given API provider.
    #[must_use]
    pub fn new(provider: ApiProvider) -> Self {
        Self {
            provider,
            serializer: Serializer::default(),
        }
    }

    /// Loads the account registered under the given email address.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::UserNotFound`] for unknown addresses,
    /// [`ProviderError::ServiceUnavailable`] when the API cannot be reached,
    /// and [`ProviderError::UnexpectedStatus`] for any other non-success
    /// answer.
    pub async fn load_user_by_email(&self, email: &str) -> Result<User, ProviderError> {
        let path = format!("/api/users/{}", urlencoding::encode(email));
        let response = self
            .provider
            .get(&path, None)
            .await
            .map_err(ProviderError::ServiceUnavailable)?;

        match response.code {
            200 => Ok(self.serializer.deserialize(response.body)?),
            404 => Err(ProviderError::UserNotFound {
                email: email.to_string(),
            }),
            code => Err(ProviderError::UnexpectedStatus { code }),
        }
    }

    /// Re-fetches an account so role and status changes take effect.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Unsupported`] when the account carries no
    /// email address, plus every error of
    /// [`load_user_by_email`](Self::load_user_by_email).
    pub async fn refresh_user(&self, user: &User) -> Result<User, ProviderError> {
        let email = user.username().ok_or(ProviderError::Unsupported)?;
        self.load_user_by_email(email).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let error = ProviderError::UserNotFound {
            email: "user@example.com".to_string(),
        };
        assert_eq!(error.to_string(), "No user found for email user@example.com");
        assert_eq!(
            ProviderError::UnexpectedStatus { code: 500 }.to_string(),
            "Unexpected status code 500 from the user service"
        );
    }
}
