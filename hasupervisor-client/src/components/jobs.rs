use uuid::Uuid;

use crate::client::ApiClient;
use crate::models::jobs::{Job, JobsInfo, JobsOptions};
use crate::{CallOptions, SupervisorError};

/// Supervisor jobs (`jobs/`).
#[derive(Clone, Copy, Debug)]
pub struct JobsClient<'a> {
    api: &'a ApiClient,
}

impl<'a> JobsClient<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn info(&self) -> Result<JobsInfo, SupervisorError> {
        self.api.get("jobs/info", CallOptions::new()).await?.decode()
    }

    pub async fn set_options(&self, options: &JobsOptions) -> Result<(), SupervisorError> {
        self.api
            .post("jobs/options", CallOptions::new().json(options)?)
            .await?;
        Ok(())
    }

    /// Reset job options to their defaults.
    pub async fn reset(&self) -> Result<(), SupervisorError> {
        self.api.post("jobs/reset", CallOptions::new()).await?;
        Ok(())
    }

    pub async fn get_job(&self, job: Uuid) -> Result<Job, SupervisorError> {
        self.api
            .get(&format!("jobs/{}", job.simple()), CallOptions::new())
            .await?
            .decode()
    }

    /// Remove a finished job from the job list.
    pub async fn delete_job(&self, job: Uuid) -> Result<(), SupervisorError> {
        self.api
            .delete(&format!("jobs/{}", job.simple()), CallOptions::new())
            .await?;
        Ok(())
    }
}
