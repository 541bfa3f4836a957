use async_trait::async_trait;

use crate::domain::{Post, PostPath};
use crate::error::StoreError;

/// Post store trait - the read contract every backing store implements.
///
/// All three operations are pure reads: one fetch of the backing store per
/// call, no caching, no retries, no writes. The ordering of `list_all` is
/// an adapter-specific contract; each implementation documents its own.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Return the full collection, sorted per the implementation's
    /// documented order. An empty collection is an empty vector.
    async fn list_all(&self) -> Result<Vec<Post>, StoreError>;

    /// Return every post id wrapped in the path-parameter shape consumed
    /// by static path generation, in the backing store's enumeration
    /// order. No sort is guaranteed.
    async fn list_ids(&self) -> Result<Vec<PostPath>, StoreError>;

    /// Look up one post by id.
    ///
    /// An id with no matching record is `Ok(None)` - not-found is a valid
    /// result, distinct from a store failure.
    async fn get_by_id(&self, id: &str) -> Result<Option<Post>, StoreError>;
}
