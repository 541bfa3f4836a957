//! Storage-level error types.

use thiserror::Error;

/// Storage errors - failures of a backing store, not of a lookup.
///
/// A lookup that finds nothing is `Ok(None)` on the port, never an error;
/// this enum only covers the store itself misbehaving. Nothing here is
/// retried or downgraded inside this layer.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Missing configuration: {0}")]
    Config(String),

    #[error("Backing store unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed store data: {0}")]
    Malformed(String),

    #[error("Record {id} is missing required field `{field}`")]
    MissingField { id: String, field: &'static str },
}
