pub mod errors;
pub mod handlers;
pub mod models;
pub mod resolvers;
pub mod schema;

// Re-export commonly used types
pub use schema::{build_schema, JobBoardSchema};
