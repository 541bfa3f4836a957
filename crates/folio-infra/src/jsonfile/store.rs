use std::path::PathBuf;

use async_trait::async_trait;

use folio_core::domain::{Post, PostPath};
use folio_core::error::StoreError;
use folio_core::ports::PostStore;

/// Conventional location of the posts file, relative to the working
/// directory.
pub const DEFAULT_POSTS_PATH: &str = "data/posts.json";

/// Post store backed by a single JSON file holding an array of posts.
///
/// The file is re-read on every call; no handle or contents are cached, so
/// results always reflect the file's current state. `list_all` sorts
/// descending by date (newest first); posts sharing a date keep their file
/// order. A missing or malformed file is fatal on every operation.
pub struct JsonFilePostStore {
    path: PathBuf,
}

impl JsonFilePostStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store reading from the conventional `data/posts.json` location.
    pub fn at_default_path() -> Self {
        Self::new(DEFAULT_POSTS_PATH)
    }

    /// Read and decode the whole posts file.
    ///
    /// Decoding straight into [`Post`] is the field allow-list: extra keys
    /// in a record are dropped, a record missing a required key fails the
    /// whole read.
    async fn read_posts(&self) -> Result<Vec<Post>, StoreError> {
        tracing::debug!(path = %self.path.display(), "Reading posts file");

        let contents = tokio::fs::read(&self.path)
            .await
            .map_err(|e| StoreError::Unavailable(format!("{}: {}", self.path.display(), e)))?;

        serde_json::from_slice(&contents)
            .map_err(|e| StoreError::Malformed(format!("{}: {}", self.path.display(), e)))
    }
}

#[async_trait]
impl PostStore for JsonFilePostStore {
    async fn list_all(&self) -> Result<Vec<Post>, StoreError> {
        let mut posts = self.read_posts().await?;

        // Stable sort: same-date posts keep their file order.
        posts.sort_by(|a, b| b.date.cmp(&a.date));

        Ok(posts)
    }

    async fn list_ids(&self) -> Result<Vec<PostPath>, StoreError> {
        let posts = self.read_posts().await?;

        Ok(posts
            .iter()
            .map(|post| PostPath::new(post.id.as_str()))
            .collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Post>, StoreError> {
        let posts = self.read_posts().await?;

        Ok(posts.into_iter().find(|post| post.id == id))
    }
}
