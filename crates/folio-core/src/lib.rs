//! # Folio Core
//!
//! The domain layer of the folio content-retrieval library.
//! This crate contains the post model and the read contract with zero
//! infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::StoreError;
