//! Standard user account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::constants::Status;
use super::validation::{ValidationError, Violations};
use crate::serializer::{Document, DocumentKind};

/// The role every authenticated account carries.
pub const ROLE_USER: &str = "ROLE_USER";

/// A user account as exposed by the `/api/users` endpoints.
///
/// Every attribute is optional on the wire; [`validate`](Self::validate)
/// enforces the fields required for account creation. The email address acts
/// as the account identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fashion_industry: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub newsletter: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub survey: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vip: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(
        default,
        with = "crate::serializer::timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "crate::serializer::timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Creates an account with the base user role.
    #[must_use]
    pub fn new() -> Self {
        Self {
            roles: vec![ROLE_USER.to_string()],
            ..Self::default()
        }
    }

    /// The identifier used to authenticate, which is the email address.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Concatenated first and last name, when either is set.
    #[must_use]
    pub fn full_name(&self) -> Option<String> {
        match (self.firstname.as_deref(), self.lastname.as_deref()) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            (Some(single), None) | (None, Some(single)) => Some(single.to_string()),
            (None, None) => None,
        }
    }

    /// The roles granted to the account, always including [`ROLE_USER`].
    #[must_use]
    pub fn granted_roles(&self) -> Vec<String> {
        let mut roles = self.roles.clone();
        if !roles.iter().any(|role| role == ROLE_USER) {
            roles.push(ROLE_USER.to_string());
        }
        roles
    }

    /// Whether another account refers to the same identity.
    #[must_use]
    pub fn same_identity(&self, other: &Self) -> bool {
        self.email.is_some() && self.email == other.email
    }

    /// Clears sensitive credential material after authentication.
    pub fn erase_credentials(&mut self) {
        self.password = None;
        self.salt = None;
    }

    /// Checks the fields required to register the account.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing every violation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Violations::new();
        violations.require_non_blank("email", self.email.as_deref());
        violations.require_email_shape("email", self.email.as_deref());
        violations.require_non_blank("firstname", self.firstname.as_deref());
        violations.require_non_blank("lastname", self.lastname.as_deref());
        violations.finish()
    }
}

impl Document for User {
    const KIND: DocumentKind = DocumentKind::Document;
    const NAME: &'static str = "User";

    fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}
