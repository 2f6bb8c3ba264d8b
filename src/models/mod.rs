//! Typed document records returned by the API.
//!
//! Every model derives `Serialize`/`Deserialize` and implements the
//! [`Document`](crate::serializer::Document) trait so it can flow through the
//! [`Serializer`](crate::serializer::Serializer) pipeline. Wire attributes are
//! all optional; [`User::validate`] and [`ShowroomUser::validate`] check the
//! fields required for registration before a payload leaves the client.

mod constants;
mod file;
mod individual;
mod showroom_user;
mod tag;
mod user;
mod validation;

pub use constants::{DisplayMode, Language, Status, UnknownConstantError};
pub use file::File;
pub use individual::{Agency, Individual};
pub use showroom_user::ShowroomUser;
pub use tag::Tag;
pub use user::{User, ROLE_USER};
pub use validation::ValidationError;
