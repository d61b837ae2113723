use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use mongodb::bson::oid::ObjectId;
use tracing::{error, info, warn};

use crate::api::job::models::{
    CreateJobListingInput, DeleteJobResponse, JobListing, UpdateJobListingInput,
};
use super::{
    error::{DbError, StoreError},
    models::{JobDocument, JobPatch},
    store::JobStore,
};

/// Upper bound applied to every storage operation
pub const OPERATION_TIMEOUT: Duration = Duration::from_secs(30);

/// Storage accessor for job listings
///
/// Cloning is cheap; every clone shares the same underlying store, which is
/// expected to be safe for concurrent use.
#[derive(Clone)]
pub struct Database {
    store: Arc<dyn JobStore>,
    operation_timeout: Duration,
}

fn parse_id(id: &str) -> Result<ObjectId, DbError> {
    ObjectId::parse_str(id).map_err(DbError::InvalidIdentifier)
}

impl Database {
    pub fn new(store: Arc<dyn JobStore>) -> Self {
        Self {
            store,
            operation_timeout: OPERATION_TIMEOUT,
        }
    }

    #[cfg(test)]
    pub fn with_operation_timeout(mut self, timeout: Duration) -> Self {
        self.operation_timeout = timeout;
        self
    }

    /// Runs one store call under a fresh timeout
    async fn bounded<T, F>(&self, operation: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, StoreError>>,
    {
        tokio::time::timeout(self.operation_timeout, operation)
            .await
            .map_err(|_| StoreError::Timeout(self.operation_timeout))?
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        self.bounded(self.store.ping()).await
    }

    pub async fn get_job(&self, id: &str) -> Result<JobListing, DbError> {
        let object_id = parse_id(id)?;

        self.bounded(self.store.find_one(object_id))
            .await?
            .map(JobListing::from)
            .ok_or(DbError::NotFound)
    }

    /// Order is whatever the storage engine returns
    pub async fn get_jobs(&self) -> Result<Vec<JobListing>, DbError> {
        let jobs = self.bounded(self.store.find_all()).await?;
        Ok(jobs.into_iter().map(JobListing::from).collect())
    }

    /// Returns `None` when the insert fails; the cause is only logged
    pub async fn create_job_listing(&self, input: CreateJobListingInput) -> Option<JobListing> {
        let job = JobDocument::from(input);

        let inserted_id = match self.bounded(self.store.insert_one(&job)).await {
            Ok(id) => id,
            Err(e) => {
                error!("Error creating job listing: {}", e);
                return None;
            }
        };

        let Some(id) = inserted_id.as_object_id() else {
            error!("Error creating job listing: {}", StoreError::UnexpectedInsertedId(inserted_id));
            return None;
        };

        info!("Job listing created with id={}", id);
        Some(JobListing::from(JobDocument { id: Some(id), ..job }))
    }

    /// Applies the present fields and returns the listing as it was before
    /// the update, or `None` on an invalid id, missing record or store error
    pub async fn update_job_listing(
        &self,
        id: &str,
        input: UpdateJobListingInput,
    ) -> Option<JobListing> {
        let object_id = match parse_id(id) {
            Ok(object_id) => object_id,
            Err(e) => {
                warn!("Invalid job ID {:?}: {}", id, e);
                return None;
            }
        };

        let patch = JobPatch::from(input);
        match self.bounded(self.store.find_one_and_set(object_id, &patch)).await {
            Ok(Some(previous)) => {
                info!("Job listing updated: id={}", id);
                Some(JobListing::from(previous))
            }
            Ok(None) => {
                error!("Error updating job listing: no job listing with id={}", id);
                None
            }
            Err(e) => {
                error!("Error updating job listing {}: {}", id, e);
                None
            }
        }
    }

    /// Always acknowledges `id`, whether or not anything was deleted
    pub async fn delete_job_listing(&self, id: &str) -> DeleteJobResponse {
        match parse_id(id) {
            Ok(object_id) => match self.bounded(self.store.delete_one(object_id)).await {
                Ok(deleted) => info!("Deleted {} job listing(s) for id={}", deleted, id),
                Err(e) => error!("Error deleting job listing {}: {}", id, e),
            },
            Err(e) => warn!("Invalid job ID {:?}: {}", id, e),
        }

        DeleteJobResponse {
            deleted_job_id: id.to_string(),
        }
    }
}
