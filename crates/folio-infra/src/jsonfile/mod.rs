//! JSON-file-backed post store.

mod store;

pub use store::{DEFAULT_POSTS_PATH, JsonFilePostStore};
