//! # Folio Infrastructure
//!
//! Concrete implementations of the ports defined in `folio-core`.
//! This crate contains the Firestore, JSON-file, and in-memory post stores.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All backing stores enabled
//! - `minimal` - No external services, in-memory only
//! - `firestore` - Firestore document store over REST
//! - `jsonfile` - Local JSON file store

pub mod memory;

#[cfg(feature = "firestore")]
pub mod firestore;

#[cfg(feature = "jsonfile")]
pub mod jsonfile;

// Re-exports - In-Memory
pub use memory::InMemoryPostStore;

// Re-exports - Firestore
#[cfg(feature = "firestore")]
pub use firestore::{FirestoreClient, FirestoreConfig, FirestorePostStore};

// Re-exports - JSON file
#[cfg(feature = "jsonfile")]
pub use jsonfile::JsonFilePostStore;
