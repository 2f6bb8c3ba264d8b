//! Errors surfaced by the resource managers.

use crate::clients::HttpError;
use crate::serializer::NormalizerError;

/// Error returned by manager operations.
///
/// Managers translate HTTP status codes into domain outcomes: expected
/// conditions such as "not found" or "already exists" come back as `Ok(None)`
/// rather than errors, so this enum only carries the cases a caller must
/// handle explicitly.
#[derive(Debug, thiserror::Error)]
pub enum ManagerError {
    /// The API rejected the credentials for this operation (HTTP 403).
    #[error("Access denied by the API")]
    AccessDenied,
    /// The request could not be sent or the transport failed.
    #[error(transparent)]
    Http(#[from] HttpError),
    /// A payload could not be serialized or deserialized.
    #[error(transparent)]
    Serialization(#[from] NormalizerError),
}
