use serde::{Deserialize, Serialize};

/// Post entity - one published blog entry.
///
/// The public shape is exactly these four fields. Backing stores may hold
/// more; adapters drop anything beyond this allow-list before a post
/// crosses the contract boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Store-assigned identifier, doubling as the URL slug.
    pub id: String,
    pub title: String,
    /// Publication date in a lexically sortable form (ISO 8601).
    /// Compared as a string, never parsed.
    pub date: String,
    /// Pre-rendered body. Opaque to this layer.
    pub content_html: String,
}

/// Path parameters for one post page, shaped for static path generation.
///
/// Serializes as `{"params":{"id":"..."}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPath {
    pub params: PathParams,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathParams {
    pub id: String,
}

impl PostPath {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            params: PathParams { id: id.into() },
        }
    }
}
