//! Individual profiles (models, photographers, designers).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::constants::Status;
use super::file::File;
use crate::serializer::{Document, DocumentKind};

/// A talent agency representing an individual.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Agency {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// An individual profile as exposed by the `/api/individuals` endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Individual {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<File>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default)]
    pub model: bool,
    #[serde(default = "default_gender")]
    pub gender: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub agencies: Vec<Agency>,
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

fn default_gender() -> String {
    "woman".to_string()
}

impl Individual {
    /// Whether the individual is represented by the named agency.
    #[must_use]
    pub fn represented_by(&self, agency_slug: &str) -> bool {
        self.agencies
            .iter()
            .any(|agency| agency.slug.as_deref() == Some(agency_slug))
    }
}

impl Document for Individual {
    const KIND: DocumentKind = DocumentKind::Document;
    const NAME: &'static str = "Individual";

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
    fn test_gender_defaults_to_woman() {
        let individual: Individual =
            serde_json::from_value(serde_json::json!({"slug": "jane-doe"})).unwrap();
        assert_eq!(individual.gender, "woman");
        assert!(!individual.model);
    }

    #[test]
    fn test_represented_by() {
        let individual: Individual = serde_json::from_value(serde_json::json!({
            "slug": "jane-doe",
            "model": true,
            "agencies": [{"slug": "agency-one", "name": "Agency One"}],
        }))
        .unwrap();
        assert!(individual.represented_by("agency-one"));
        assert!(!individual.represented_by("agency-two"));
    }

    #[test]
    fn test_cover_is_embedded_file() {
        let individual: Individual = serde_json::from_value(serde_json::json!({
            "slug": "jane-doe",
            "cover": {"path": "/media/covers/jane.jpg", "mimetype": "image/jpeg"},
        }))
        .unwrap();
        assert!(individual.cover.is_some_and(|cover| cover.is_image()));
    }
}
