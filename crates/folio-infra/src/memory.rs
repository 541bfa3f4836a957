//! In-memory post store - the test substitute for the real backing stores.

use async_trait::async_trait;
use tokio::sync::RwLock;

use folio_core::domain::{Post, PostPath};
use folio_core::error::StoreError;
use folio_core::ports::PostStore;

/// In-memory post store.
///
/// Posts live in process memory and come back in insertion order. Intended
/// for tests and local development; `with_posts` and `push` are setup
/// helpers, not part of the read contract.
pub struct InMemoryPostStore {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }

    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }

    /// Seed one post.
    pub async fn push(&self, post: Post) {
        let mut posts = self.posts.write().await;
        posts.push(post);
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn list_all(&self) -> Result<Vec<Post>, StoreError> {
        let posts = self.posts.read().await;
        Ok(posts.clone())
    }

    async fn list_ids(&self) -> Result<Vec<PostPath>, StoreError> {
        let posts = self.posts.read().await;
        Ok(posts
            .iter()
            .map(|post| PostPath::new(post.id.as_str()))
            .collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Post>, StoreError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|post| post.id == id).cloned())
    }
}
