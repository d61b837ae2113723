pub mod connection;
pub mod database;
pub mod error;
pub mod job_repository;
#[cfg(test)]
pub mod memory;
pub mod models;
pub mod store;

pub use database::Database;
pub use error::DbError;

/// Database holding the job board collections
pub const DATABASE_NAME: &str = "graphql-job-board";

/// Collection storing job listing documents
pub const JOBS_COLLECTION: &str = "jobs";
