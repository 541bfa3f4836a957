//! Firestore-backed post store.
//!
//! Talks to the Firestore REST API with a single shared HTTP client;
//! document ids double as post ids.

mod client;
mod document;
mod store;

pub use client::{FirestoreClient, FirestoreConfig};
pub use store::FirestorePostStore;
