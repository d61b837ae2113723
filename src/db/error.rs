use std::time::Duration;

use mongodb::bson::{oid, Bson};
use thiserror::Error;

/// Failures raised by a [`JobStore`](super::JobStore) implementation
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("operation timed out after {0:?}")]
    Timeout(Duration),

    #[error("inserted id {0} is not an ObjectId")]
    UnexpectedInsertedId(Bson),
}

/// Failures surfaced by the read operations of [`Database`](super::Database)
#[derive(Debug, Error)]
pub enum DbError {
    #[error("invalid ID format: {0}")]
    InvalidIdentifier(#[source] oid::Error),

    #[error("job listing not found")]
    NotFound,

    #[error(transparent)]
    Storage(#[from] StoreError),
}
