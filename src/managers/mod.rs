//! Per-resource managers.
//!
//! Each manager owns an [`ApiProvider`](crate::clients::ApiProvider) clone
//! and a [`Serializer`](crate::serializer::Serializer), and translates HTTP
//! status codes into domain outcomes. Expected absence (404, 409) comes back
//! as `Ok(None)`; only access denial and transport or payload failures are
//! errors.

mod errors;
mod individual;
mod showroom_user;
mod tag;

pub use errors::ManagerError;
pub use individual::IndividualManager;
pub use showroom_user::ShowroomUserManager;
pub use tag::TagManager;
