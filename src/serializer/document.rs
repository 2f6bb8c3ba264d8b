//! The document trait implemented by every API record type.
//!
//! Tagwalk resources are "documents": flat records carrying a slug, a
//! display name, a status flag and server-owned creation/update timestamps.
//! The [`Document`] trait gives the serializer a typed dispatch key
//! ([`DocumentKind`]) plus uniform access to the timestamp fields it
//! rewrites on the wire.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};

/// The family a document belongs to, used for normalizer dispatch.
///
/// The serializer walks its normalizer registry and picks the first one
/// whose `supports()` accepts the kind, so specific kinds (files, tags)
/// can be handled ahead of the generic document rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// A generic document (users, individuals, and other flat records).
    Document,
    /// A media file attached to a document.
    File,
    /// A descriptive tag applied to documents.
    Tag,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Document => write!(f, "document"),
            Self::File => write!(f, "file"),
            Self::Tag => write!(f, "tag"),
        }
    }
}

/// A record type that can round-trip through the serializer pipeline.
///
/// Implementors declare their [`DocumentKind`] for normalizer dispatch and
/// expose the server-owned timestamps so write-context normalization can
/// strip them.
///
/// # Required Bounds
///
/// Documents must be serializable, deserializable, cloneable, and thread-safe.
pub trait Document: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// The normalizer family this document dispatches to.
    const KIND: DocumentKind;

    /// The singular type name (e.g., "Tag"), used in error messages and logs.
    const NAME: &'static str;

    /// Returns the document slug, if the record has been persisted.
    fn slug(&self) -> Option<&str>;

    /// Returns the server-assigned creation timestamp.
    fn created_at(&self) -> Option<DateTime<Utc>>;

    /// Returns the server-assigned last-update timestamp.
    fn updated_at(&self) -> Option<DateTime<Utc>>;
}
