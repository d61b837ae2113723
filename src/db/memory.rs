use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson};
use tokio::sync::RwLock;

use super::{
    error::StoreError,
    models::{JobDocument, JobPatch},
    store::JobStore,
};

/// In-process stand-in for the jobs collection
#[derive(Default)]
pub struct MemoryJobStore {
    jobs: RwLock<Vec<JobDocument>>,
    latency: Option<Duration>,
    failure: Option<fn() -> StoreError>,
    inserted_id: Option<Bson>,
    calls: AtomicUsize,
}

impl MemoryJobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call sleeps for `latency` before touching the data
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency: Some(latency),
            ..Self::default()
        }
    }

    /// Every call fails with the error built by `failure`
    pub fn with_failure(failure: fn() -> StoreError) -> Self {
        Self {
            failure: Some(failure),
            ..Self::default()
        }
    }

    /// Inserts report `id` instead of the generated ObjectId
    pub fn with_inserted_id(id: Bson) -> Self {
        Self {
            inserted_id: Some(id),
            ..Self::default()
        }
    }

    /// Number of store calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn len(&self) -> usize {
        self.jobs.read().await.len()
    }

    async fn enter(&self) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        match self.failure {
            Some(failure) => Err(failure()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl JobStore for MemoryJobStore {
    async fn ping(&self) -> Result<(), StoreError> {
        self.enter().await?;
        Ok(())
    }

    async fn find_one(&self, id: ObjectId) -> Result<Option<JobDocument>, StoreError> {
        self.enter().await?;
        let jobs = self.jobs.read().await;
        Ok(jobs.iter().find(|job| job.id == Some(id)).cloned())
    }

    async fn find_all(&self) -> Result<Vec<JobDocument>, StoreError> {
        self.enter().await?;
        Ok(self.jobs.read().await.clone())
    }

    async fn insert_one(&self, job: &JobDocument) -> Result<Bson, StoreError> {
        self.enter().await?;
        let id = job.id.unwrap_or_else(ObjectId::new);
        let mut stored = job.clone();
        stored.id = Some(id);
        self.jobs.write().await.push(stored);
        Ok(self.inserted_id.clone().unwrap_or(Bson::ObjectId(id)))
    }

    async fn find_one_and_set(
        &self,
        id: ObjectId,
        patch: &JobPatch,
    ) -> Result<Option<JobDocument>, StoreError> {
        self.enter().await?;
        let mut jobs = self.jobs.write().await;
        Ok(jobs.iter_mut().find(|job| job.id == Some(id)).map(|job| {
            let before = job.clone();
            patch.apply_to(job);
            before
        }))
    }

    async fn delete_one(&self, id: ObjectId) -> Result<u64, StoreError> {
        self.enter().await?;
        let mut jobs = self.jobs.write().await;
        let before = jobs.len();
        jobs.retain(|job| job.id != Some(id));
        Ok((before - jobs.len()) as u64)
    }
}
