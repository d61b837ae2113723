use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Bson},
    Client, Collection,
};
use tracing::debug;

use super::{
    error::StoreError,
    models::{JobDocument, JobPatch},
    store::JobStore,
    DATABASE_NAME, JOBS_COLLECTION,
};

/// MongoDB-backed repository for job listing documents
#[derive(Clone)]
pub struct MongoJobRepository {
    database: mongodb::Database,
    jobs: Collection<JobDocument>,
}

impl MongoJobRepository {
    pub fn new(client: &Client) -> Self {
        let database = client.database(DATABASE_NAME);
        let jobs = database.collection::<JobDocument>(JOBS_COLLECTION);
        Self { database, jobs }
    }
}

#[async_trait]
impl JobStore for MongoJobRepository {
    async fn ping(&self) -> Result<(), StoreError> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    async fn find_one(&self, id: ObjectId) -> Result<Option<JobDocument>, StoreError> {
        debug!("Finding job: id={}", id);
        Ok(self.jobs.find_one(doc! { "_id": id }).await?)
    }

    async fn find_all(&self) -> Result<Vec<JobDocument>, StoreError> {
        debug!("Finding all jobs");
        let cursor = self.jobs.find(doc! {}).await?;
        let jobs: Vec<JobDocument> = cursor.try_collect().await?;
        debug!("Fetched {} jobs", jobs.len());
        Ok(jobs)
    }

    async fn insert_one(&self, job: &JobDocument) -> Result<Bson, StoreError> {
        debug!("Creating job: title={}, company={}", job.title, job.company);
        let result = self.jobs.insert_one(job).await?;
        debug!("Job created with id={}", result.inserted_id);
        Ok(result.inserted_id)
    }

    async fn find_one_and_set(
        &self,
        id: ObjectId,
        patch: &JobPatch,
    ) -> Result<Option<JobDocument>, StoreError> {
        let filter = doc! { "_id": id };

        // `$set` with no fields is rejected by the server
        if patch.is_empty() {
            debug!("Empty update for job id={}, reading current state", id);
            return Ok(self.jobs.find_one(filter).await?);
        }

        debug!("Updating job: id={}, patch={:?}", id, patch);
        // The driver returns the pre-update document unless told otherwise
        Ok(self
            .jobs
            .find_one_and_update(filter, patch.to_update_document())
            .await?)
    }

    async fn delete_one(&self, id: ObjectId) -> Result<u64, StoreError> {
        debug!("Deleting job: id={}", id);
        let result = self.jobs.delete_one(doc! { "_id": id }).await?;
        debug!("Deleted {} job(s) for id={}", result.deleted_count, id);
        Ok(result.deleted_count)
    }
}
