//! Editorial tag attached to documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::constants::Status;
use crate::serializer::{Document, DocumentKind};

/// A tag as exposed by the `/api/tags` endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
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

impl Tag {
    /// Whether the tag is visible to consumers.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.status == Some(Status::Enabled)
    }
}

impl Document for Tag {
    const KIND: DocumentKind = DocumentKind::Tag;
    const NAME: &'static str = "Tag";

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
