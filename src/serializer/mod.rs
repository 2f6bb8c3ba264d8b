//! Document serialization pipeline.
//!
//! This module is the core of the SDK: a generic normalization and
//! denormalization pipeline mapping wire JSON to typed document records and
//! back. It handles:
//!
//! - **Timestamp conversion**: `created_at` / `updated_at` are ISO-8601
//!   strings on the wire ([`timestamp`]) and `DateTime<Utc>` in the models
//! - **Attribute filtering**: null attributes are pruned from payloads, and
//!   write payloads drop the server-owned timestamp fields
//! - **Type-specific dispatch**: the [`Serializer`] registry walks its
//!   [`Normalizer`] chain and picks the first one that supports the
//!   document's [`DocumentKind`]
//!
//! # Example
//!
//! ```rust
//! use tagwalk_api::models::Tag;
//! use tagwalk_api::serializer::{NormalizeContext, Serializer};
//!
//! let serializer = Serializer::default();
//!
//! let tag: Tag = serializer
//!     .deserialize(serde_json::json!({
//!         "slug": "flowers",
//!         "name": "Flowers",
//!         "created_at": "2019-04-03T10:15:30Z",
//!     }))
//!     .unwrap();
//! assert_eq!(tag.slug.as_deref(), Some("flowers"));
//!
//! // Write payloads drop the server-owned timestamps
//! let payload = serializer
//!     .serialize(&tag, &NormalizeContext::write())
//!     .unwrap();
//! assert!(payload.get("created_at").is_none());
//! ```

mod document;
mod normalizer;
pub mod timestamp;

pub use document::{Document, DocumentKind};
pub use normalizer::{
    DocumentNormalizer, FileNormalizer, NormalizeContext, Normalizer, NormalizerError,
    TagNormalizer,
};

use serde_json::Value;

/// Registry of normalizers with first-supporting-wins dispatch.
///
/// The default registry holds the file and tag normalizers ahead of the
/// generic document normalizer, so specific kinds are claimed before the
/// catch-all. Custom normalizers can be pushed in front via
/// [`with_normalizer`](Self::with_normalizer).
pub struct Serializer {
    normalizers: Vec<Box<dyn Normalizer>>,
}

impl Default for Serializer {
    fn default() -> Self {
        Self {
            normalizers: vec![
                Box::new(FileNormalizer::new()),
                Box::new(TagNormalizer::new()),
                Box::new(DocumentNormalizer::new()),
            ],
        }
    }
}

impl std::fmt::Debug for Serializer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Serializer")
            .field("normalizers", &self.normalizers.len())
            .finish()
    }
}

impl Serializer {
    /// Creates an empty registry with no normalizers.
    ///
    /// Most callers want [`Serializer::default`]; an empty registry fails
    /// every dispatch until normalizers are added.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            normalizers: Vec::new(),
        }
    }

    /// Adds a normalizer to the front of the dispatch chain.
    #[must_use]
    pub fn with_normalizer(mut self, normalizer: Box<dyn Normalizer>) -> Self {
        self.normalizers.insert(0, normalizer);
        self
    }

    /// Returns the first normalizer supporting the given kind.
    fn normalizer_for(&self, kind: DocumentKind) -> Result<&dyn Normalizer, NormalizerError> {
        self.normalizers
            .iter()
            .map(AsRef::as_ref)
            .find(|normalizer| normalizer.supports(kind))
            .ok_or(NormalizerError::UnsupportedKind { kind })
    }

    /// Serializes a document into a wire payload.
    ///
    /// The document is converted to JSON and run through the normalizer for
    /// its kind: null attributes are pruned and, in a write context, the
    /// server-owned timestamps are stripped.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizerError`] if no normalizer supports the document
    /// kind or the document does not serialize to a JSON object.
    pub fn serialize<T: Document>(
        &self,
        document: &T,
        ctx: &NormalizeContext,
    ) -> Result<Value, NormalizerError> {
        let value = serde_json::to_value(document)?;
        self.normalizer_for(T::KIND)?.normalize(value, ctx)
    }

    /// Deserializes a wire payload into a typed document.
    ///
    /// The payload is run through the normalizer for the target kind
    /// (rewriting timestamps into the canonical form) before typed
    /// deserialization.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizerError`] for unsupported kinds, non-object
    /// payloads, invalid timestamps, or serde failures.
    pub fn deserialize<T: Document>(&self, payload: Value) -> Result<T, NormalizerError> {
        let value = self.normalizer_for(T::KIND)?.denormalize(payload)?;
        Ok(serde_json::from_value(value)?)
    }

    /// Deserializes a wire array into a list of typed documents.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizerError::NotAnArray`] for non-array payloads, plus
    /// any per-item error from [`deserialize`](Self::deserialize).
    pub fn deserialize_all<T: Document>(&self, payload: Value) -> Result<Vec<T>, NormalizerError> {
        let Value::Array(items) = payload else {
            return Err(NormalizerError::NotAnArray);
        };
        items
            .into_iter()
            .map(|item| self.deserialize(item))
            .collect()
    }
}
