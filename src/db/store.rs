use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson};

use super::{
    error::StoreError,
    models::{JobDocument, JobPatch},
};

/// Raw persistence calls against the jobs collection
///
/// Each method is a single round trip. Id translation, timeouts and the
/// error policy live in [`Database`](super::Database).
#[async_trait]
pub trait JobStore: Send + Sync {
    async fn ping(&self) -> Result<(), StoreError>;

    async fn find_one(&self, id: ObjectId) -> Result<Option<JobDocument>, StoreError>;

    /// Drains the whole collection in storage order
    async fn find_all(&self) -> Result<Vec<JobDocument>, StoreError>;

    /// Returns the id the engine assigned to the new document
    async fn insert_one(&self, job: &JobDocument) -> Result<Bson, StoreError>;

    /// Applies `patch` and returns the document as it was before the write
    async fn find_one_and_set(
        &self,
        id: ObjectId,
        patch: &JobPatch,
    ) -> Result<Option<JobDocument>, StoreError>;

    /// Returns the number of deleted documents
    async fn delete_one(&self, id: ObjectId) -> Result<u64, StoreError>;
}
