use async_graphql::{InputObject, SimpleObject};

use crate::db::models::{JobDocument, JobPatch};

/// A job listing as seen by API consumers
#[derive(Debug, Clone, Default, PartialEq, SimpleObject)]
pub struct JobListing {
    /// Hex rendering of the storage-assigned ObjectId
    pub id: String,
    pub title: String,
    pub description: String,
    pub company: String,
    pub url: String,
}

impl From<JobDocument> for JobListing {
    fn from(job: JobDocument) -> Self {
        Self {
            id: job.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: job.title,
            description: job.description,
            company: job.company,
            url: job.url,
        }
    }
}

#[derive(Debug, Clone, InputObject)]
pub struct CreateJobListingInput {
    pub title: String,
    pub description: String,
    pub company: String,
    pub url: String,
}

impl From<CreateJobListingInput> for JobDocument {
    fn from(input: CreateJobListingInput) -> Self {
        Self {
            id: None,
            title: input.title,
            description: input.description,
            company: input.company,
            url: input.url,
        }
    }
}

/// Fields left out are not modified
#[derive(Debug, Clone, Default, InputObject)]
pub struct UpdateJobListingInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub company: Option<String>,
    pub url: Option<String>,
}

impl From<UpdateJobListingInput> for JobPatch {
    fn from(input: UpdateJobListingInput) -> Self {
        Self {
            title: input.title,
            description: input.description,
            company: input.company,
            url: input.url,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, SimpleObject)]
pub struct DeleteJobResponse {
    pub deleted_job_id: String,
}
