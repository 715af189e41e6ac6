//! Store error types.

use thiserror::Error;

/// Errors that can occur when reading from a store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Fixture data could not be parsed.
    #[error("Failed to parse store data: {0}")]
    Parse(String),

    /// A table was not shaped as a list of records.
    #[error("Invalid table {table}: {reason}")]
    InvalidTable { table: String, reason: String },

    /// Failed to deserialize a row.
    #[error("Deserialization error: {0}")]
    Deserialize(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Deserialize(e.to_string())
    }
}
