//! Media file attached to documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::constants::{DisplayMode, Status};
use crate::serializer::{Document, DocumentKind};

/// A media file as embedded in document payloads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct File {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mimetype: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_mode: Option<DisplayMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
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

impl File {
    /// Whether the file holds image content, judged by its mimetype.
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.mimetype
            .as_deref()
            .is_some_and(|mimetype| mimetype.starts_with("image/"))
    }
}

impl Document for File {
    const KIND: DocumentKind = DocumentKind::File;
    const NAME: &'static str = "File";

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_image() {
        let mut file = File {
            mimetype: Some("image/jpeg".to_string()),
            ..File::default()
        };
        assert!(file.is_image());
        file.mimetype = Some("video/mp4".to_string());
        assert!(!file.is_image());
        file.mimetype = None;
        assert!(!file.is_image());
    }

    #[test]
    fn test_display_mode_on_wire() {
        let file: File = serde_json::from_value(serde_json::json!({
            "path": "/media/looks/1.jpg",
            "display_mode": "crop",
        }))
        .unwrap();
        assert_eq!(file.display_mode, Some(DisplayMode::Crop));
    }
}
