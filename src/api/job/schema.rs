use async_graphql::{EmptySubscription, Schema};

use crate::db::Database;
use super::resolvers::{MutationRoot, QueryRoot};

/// The complete GraphQL schema
pub type JobBoardSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Create the GraphQL schema with the storage accessor injected
pub fn build_schema(database: Database) -> JobBoardSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(database)
        .finish()
}

/// SDL of the schema; needs no database
pub fn schema_sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}
