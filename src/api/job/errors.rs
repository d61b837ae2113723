use async_graphql::ErrorExtensions;
use thiserror::Error;

use crate::db::DbError;

/// Caller-visible failures of the read resolvers
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("failed to fetch job listings: {0}")]
    Jobs(#[source] DbError),

    #[error("failed to fetch job listing with id {id}: {source}")]
    Job {
        id: String,
        #[source]
        source: DbError,
    },
}

impl QueryError {
    fn cause(&self) -> &DbError {
        match self {
            QueryError::Jobs(source) => source,
            QueryError::Job { source, .. } => source,
        }
    }

    /// Machine-readable class of the underlying failure
    pub fn code(&self) -> &'static str {
        match self.cause() {
            DbError::InvalidIdentifier(_) => "INVALID_IDENTIFIER",
            DbError::NotFound => "NOT_FOUND",
            DbError::Storage(_) => "STORAGE_ERROR",
        }
    }
}

impl ErrorExtensions for QueryError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string())
            .extend_with(|_, e| e.set("code", self.code().to_string()))
    }
}
