//! Event tags.

use serde::Deserialize;

/// A tag attached to events.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tag {
    /// Opaque identifier.
    pub id: String,
    /// URL-safe form.
    pub slug: String,
    /// Human-readable title.
    pub title: String,
    /// Related tags, only filled by the `Tags` query.
    #[serde(default)]
    pub related: Vec<Tag>,
}
