//! Wire types for the Firestore REST `documents` resource.

use std::collections::HashMap;

use serde::Deserialize;

use folio_core::domain::Post;
use folio_core::error::StoreError;

/// Response body of `GET .../documents/{collection}`.
///
/// Firestore omits the `documents` key entirely for an empty collection.
#[derive(Debug, Deserialize)]
pub(crate) struct ListDocumentsResponse {
    #[serde(default)]
    pub documents: Vec<Document>,
}

/// One Firestore document. Keys we do not model (`createTime`,
/// `updateTime`, ...) are ignored on decode.
#[derive(Debug, Deserialize)]
pub(crate) struct Document {
    /// Full resource name; the document id is the last path segment.
    pub name: String,
    #[serde(default)]
    pub fields: HashMap<String, FieldValue>,
}

/// A Firestore field value.
///
/// Post fields are strings on the wire (`{"stringValue": ...}`); any other
/// value kind counts as absent.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct FieldValue {
    #[serde(rename = "stringValue")]
    string_value: Option<String>,
}

impl FieldValue {
    fn as_str(&self) -> Option<&str> {
        self.string_value.as_deref()
    }
}

impl Document {
    /// Document id - the last segment of the resource name.
    pub(crate) fn id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    /// Project the document onto the public post shape.
    ///
    /// Only the allow-listed fields cross this boundary; anything else
    /// stored on the document is dropped. A missing or non-string required
    /// field is a validation error, not a silent default.
    pub(crate) fn into_post(self) -> Result<Post, StoreError> {
        let id = self.id().to_string();

        let title = self.string_field("title", &id)?;
        let date = self.string_field("date", &id)?;
        let content_html = self.string_field("contentHtml", &id)?;

        Ok(Post {
            id,
            title,
            date,
            content_html,
        })
    }

    fn string_field(&self, field: &'static str, id: &str) -> Result<String, StoreError> {
        self.fields
            .get(field)
            .and_then(FieldValue::as_str)
            .map(str::to_owned)
            .ok_or_else(|| StoreError::MissingField {
                id: id.to_string(),
                field,
            })
    }
}
