use async_graphql::{Context, ErrorExtensions, Object, Result};
use tracing::warn;

use crate::db::Database;
use super::errors::QueryError;
use super::models::{
    CreateJobListingInput, DeleteJobResponse, JobListing, UpdateJobListingInput,
};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn jobs(&self, ctx: &Context<'_>) -> Result<Vec<JobListing>> {
        let db = ctx.data::<Database>()?;
        db.get_jobs().await.map_err(|e| {
            let err = QueryError::Jobs(e);
            warn!("{}", err);
            err.extend()
        })
    }

    async fn job(&self, ctx: &Context<'_>, id: String) -> Result<JobListing> {
        let db = ctx.data::<Database>()?;
        db.get_job(&id).await.map_err(|source| {
            let err = QueryError::Job { id, source };
            warn!("{}", err);
            err.extend()
        })
    }
}

pub struct MutationRoot;

// Write failures are only logged by the storage layer; callers get an
// empty listing back.
#[Object]
impl MutationRoot {
    async fn create_job_listing(
        &self,
        ctx: &Context<'_>,
        input: CreateJobListingInput,
    ) -> Result<JobListing> {
        let db = ctx.data::<Database>()?;
        Ok(db.create_job_listing(input).await.unwrap_or_default())
    }

    async fn update_job_listing(
        &self,
        ctx: &Context<'_>,
        id: String,
        input: UpdateJobListingInput,
    ) -> Result<JobListing> {
        let db = ctx.data::<Database>()?;
        Ok(db.update_job_listing(&id, input).await.unwrap_or_default())
    }

    async fn delete_job_listing(&self, ctx: &Context<'_>, id: String) -> Result<DeleteJobResponse> {
        let db = ctx.data::<Database>()?;
        Ok(db.delete_job_listing(&id).await)
    }
}
