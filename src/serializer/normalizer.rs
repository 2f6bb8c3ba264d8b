//! Normalizers converting documents to and from wire JSON.
//!
//! A [`Normalizer`] transforms the JSON representation of a document between
//! its typed form and what the API expects on the wire:
//!
//! - **normalize** (outbound): prune `null` attributes and, in a write
//!   context, strip the server-owned `created_at` / `updated_at` fields.
//! - **denormalize** (inbound): rewrite the timestamp fields to the
//!   canonical ISO-8601 form, rejecting unparseable values, before typed
//!   deserialization.
//!
//! [`DocumentNormalizer`] carries the base rules for every document;
//! [`FileNormalizer`] and [`TagNormalizer`] claim their specific kinds and
//! delegate to the base rules, giving the registry a dispatch point to
//! attach kind-specific behavior.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::serializer::document::DocumentKind;
use crate::serializer::timestamp;

/// The server-owned timestamp fields rewritten by the pipeline.
const TIMESTAMP_FIELDS: [&str; 2] = ["created_at", "updated_at"];

/// Errors produced by the normalization pipeline.
#[derive(Debug, Error)]
pub enum NormalizerError {
    /// No registered normalizer supports the document kind.
    #[error("No normalizer registered for document kind '{kind}'")]
    UnsupportedKind {
        /// The kind that could not be dispatched.
        kind: DocumentKind,
    },

    /// A timestamp field held an unparseable value.
    #[error("Invalid timestamp in field '{field}': '{value}'")]
    InvalidTimestamp {
        /// The offending field name.
        field: &'static str,
        /// The raw wire value.
        value: String,
    },

    /// The payload was expected to be a JSON object.
    #[error("Expected a JSON object payload")]
    NotAnObject,

    /// The payload was expected to be a JSON array.
    #[error("Expected a JSON array payload")]
    NotAnArray,

    /// A serde (de)serialization failure.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Context for a normalization pass.
///
/// Write contexts are used for request bodies: attributes the server owns
/// (the timestamps) are stripped in addition to the usual null pruning.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NormalizeContext {
    /// Whether the output is a write payload (request body).
    pub write: bool,
}

impl NormalizeContext {
    /// Context for read-side normalization (timestamps kept).
    #[must_use]
    pub const fn read() -> Self {
        Self { write: false }
    }

    /// Context for write payloads (server-owned fields stripped).
    #[must_use]
    pub const fn write() -> Self {
        Self { write: true }
    }
}

/// Converts document JSON between typed and wire representations.
///
/// Implementations claim document kinds through [`supports`](Self::supports);
/// the [`Serializer`](crate::serializer::Serializer) registry dispatches to
/// the first normalizer that accepts a kind.
pub trait Normalizer: Send + Sync {
    /// Returns `true` if this normalizer handles the given kind.
    fn supports(&self, kind: DocumentKind) -> bool;

    /// Normalizes a serialized document into a wire payload.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizerError::NotAnObject`] for non-object payloads.
    fn normalize(&self, value: Value, ctx: &NormalizeContext) -> Result<Value, NormalizerError>;

    /// Denormalizes a wire payload ahead of typed deserialization.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizerError::NotAnObject`] for non-object payloads and
    /// [`NormalizerError::InvalidTimestamp`] for unparseable timestamps.
    fn denormalize(&self, value: Value) -> Result<Value, NormalizerError>;
}

/// Base normalizer applied to every document kind.
///
/// Carries the shared rules: null-attribute pruning, write-context
/// timestamp stripping, and inbound timestamp rewriting.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentNormalizer;

impl DocumentNormalizer {
    /// Creates the base document normalizer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn normalize_object(
        mut object: Map<String, Value>,
        ctx: &NormalizeContext,
    ) -> Map<String, Value> {
        if ctx.write {
            for field in TIMESTAMP_FIELDS {
                object.remove(field);
            }
        }
        prune_nulls(object)
    }
}

impl Normalizer for DocumentNormalizer {
    fn supports(&self, _kind: DocumentKind) -> bool {
        true
    }

    fn normalize(&self, value: Value, ctx: &NormalizeContext) -> Result<Value, NormalizerError> {
        let Value::Object(object) = value else {
            return Err(NormalizerError::NotAnObject);
        };
        Ok(Value::Object(Self::normalize_object(object, ctx)))
    }

    fn denormalize(&self, value: Value) -> Result<Value, NormalizerError> {
        let Value::Object(mut object) = value else {
            return Err(NormalizerError::NotAnObject);
        };

        for field in TIMESTAMP_FIELDS {
            let Some(raw) = object.get(field) else {
                continue;
            };
            if raw.is_null() {
                continue;
            }
            let Some(text) = raw.as_str() else {
                return Err(NormalizerError::InvalidTimestamp {
                    field,
                    value: raw.to_string(),
                });
            };
            let parsed =
                timestamp::parse(text).map_err(|_| NormalizerError::InvalidTimestamp {
                    field,
                    value: text.to_string(),
                })?;
            object.insert(field.to_string(), Value::String(timestamp::format(parsed)));
        }

        Ok(Value::Object(object))
    }
}

/// Normalizer for file documents.
///
/// Claims [`DocumentKind::File`] in the registry and applies the base
/// document rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct FileNormalizer {
    inner: DocumentNormalizer,
}

impl FileNormalizer {
    /// Creates the file normalizer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: DocumentNormalizer::new(),
        }
    }
}

impl Normalizer for FileNormalizer {
    fn supports(&self, kind: DocumentKind) -> bool {
        kind == DocumentKind::File
    }

    fn normalize(&self, value: Value, ctx: &NormalizeContext) -> Result<Value, NormalizerError> {
        self.inner.normalize(value, ctx)
    }

    fn denormalize(&self, value: Value) -> Result<Value, NormalizerError> {
        self.inner.denormalize(value)
    }
}

/// Normalizer for tag documents.
///
/// Claims [`DocumentKind::Tag`] in the registry and applies the base
/// document rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct TagNormalizer {
    inner: DocumentNormalizer,
}

impl TagNormalizer {
    /// Creates the tag normalizer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: DocumentNormalizer::new(),
        }
    }
}

impl Normalizer for TagNormalizer {
    fn supports(&self, kind: DocumentKind) -> bool {
        kind == DocumentKind::Tag
    }

    fn normalize(&self, value: Value, ctx: &NormalizeContext) -> Result<Value, NormalizerError> {
        self.inner.normalize(value, ctx)
    }

    fn denormalize(&self, value: Value) -> Result<Value, NormalizerError> {
        self.inner.denormalize(value)
    }
}

/// Recursively removes null attributes from an object.
fn prune_nulls(object: Map<String, Value>) -> Map<String, Value> {
    object
        .into_iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| (key, prune_value(value)))
        .collect()
}

fn prune_value(value: Value) -> Value {
    match value {
        Value::Object(object) => Value::Object(prune_nulls(object)),
        Value::Array(items) => Value::Array(items.into_iter().map(prune_value).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_prunes_null_attributes() {
        let normalizer = DocumentNormalizer::new();
        let value = json!({
            "slug": "lou-schoof",
            "nationality": null,
            "agencies": [{"slug": "elite", "name": null}],
        });

        let normalized = normalizer
            .normalize(value, &NormalizeContext::read())
            .unwrap();

        assert_eq!(
            normalized,
            json!({"slug": "lou-schoof", "agencies": [{"slug": "elite"}]})
        );
    }

    #[test]
    fn test_normalize_keeps_timestamps_on_read() {
        let normalizer = DocumentNormalizer::new();
        let value = json!({
            "slug": "chanel",
            "created_at": "2019-04-03T10:15:30+0000",
        });

        let normalized = normalizer
            .normalize(value, &NormalizeContext::read())
            .unwrap();

        assert_eq!(
            normalized.get("created_at"),
            Some(&json!("2019-04-03T10:15:30+0000"))
        );
    }

    #[test]
    fn test_normalize_strips_timestamps_on_write() {
        let normalizer = DocumentNormalizer::new();
        let value = json!({
            "slug": "chanel",
            "created_at": "2019-04-03T10:15:30+0000",
            "updated_at": "2019-05-01T08:00:00+0000",
        });

        let normalized = normalizer
            .normalize(value, &NormalizeContext::write())
            .unwrap();

        assert_eq!(normalized, json!({"slug": "chanel"}));
    }

    #[test]
    fn test_normalize_rejects_non_object() {
        let normalizer = DocumentNormalizer::new();
        let result = normalizer.normalize(json!([1, 2, 3]), &NormalizeContext::read());
        assert!(matches!(result, Err(NormalizerError::NotAnObject)));
    }

    #[test]
    fn test_denormalize_rewrites_rfc3339_timestamps() {
        let normalizer = DocumentNormalizer::new();
        let value = json!({
            "slug": "chanel",
            "created_at": "2019-04-03T10:15:30Z",
            "updated_at": "2019-05-01T10:00:00+02:00",
        });

        let denormalized = normalizer.denormalize(value).unwrap();

        assert_eq!(
            denormalized.get("created_at"),
            Some(&json!("2019-04-03T10:15:30+0000"))
        );
        assert_eq!(
            denormalized.get("updated_at"),
            Some(&json!("2019-05-01T08:00:00+0000"))
        );
    }

    #[test]
    fn test_denormalize_leaves_missing_timestamps_alone() {
        let normalizer = DocumentNormalizer::new();
        let value = json!({"slug": "chanel", "created_at": null});

        let denormalized = normalizer.denormalize(value).unwrap();

        assert_eq!(denormalized, json!({"slug": "chanel", "created_at": null}));
    }

    #[test]
    fn test_denormalize_rejects_invalid_timestamp() {
        let normalizer = DocumentNormalizer::new();
        let value = json!({"slug": "chanel", "created_at": "yesterday"});

        let result = normalizer.denormalize(value);
        assert!(matches!(
            result,
            Err(NormalizerError::InvalidTimestamp { field: "created_at", .. })
        ));
    }

    #[test]
    fn test_denormalize_rejects_non_string_timestamp() {
        let normalizer = DocumentNormalizer::new();
        let value = json!({"slug": "chanel", "updated_at": 1554286530});

        let result = normalizer.denormalize(value);
        assert!(matches!(
            result,
            Err(NormalizerError::InvalidTimestamp { field: "updated_at", .. })
        ));
    }

    #[test]
    fn test_file_normalizer_supports_only_files() {
        let normalizer = FileNormalizer::new();
        assert!(normalizer.supports(DocumentKind::File));
        assert!(!normalizer.supports(DocumentKind::Tag));
        assert!(!normalizer.supports(DocumentKind::Document));
    }

    #[test]
    fn test_tag_normalizer_supports_only_tags() {
        let normalizer = TagNormalizer::new();
        assert!(normalizer.supports(DocumentKind::Tag));
        assert!(!normalizer.supports(DocumentKind::File));
        assert!(!normalizer.supports(DocumentKind::Document));
    }

    #[test]
    fn test_document_normalizer_supports_everything() {
        let normalizer = DocumentNormalizer::new();
        assert!(normalizer.supports(DocumentKind::Document));
        assert!(normalizer.supports(DocumentKind::File));
        assert!(normalizer.supports(DocumentKind::Tag));
    }
}
