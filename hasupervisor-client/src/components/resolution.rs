use hasupervisor_core::Lenient;
use uuid::Uuid;

use crate::client::ApiClient;
use crate::components::options_body;
use crate::models::resolution::{CheckOptions, CheckType, ResolutionInfo, Suggestion, SuggestionsList};
use crate::{CallOptions, SupervisorError};

/// Resolution center (`resolution/`).
#[derive(Clone, Copy, Debug)]
pub struct ResolutionClient<'a> {
    api: &'a ApiClient,
}

impl<'a> ResolutionClient<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn info(&self) -> Result<ResolutionInfo, SupervisorError> {
        self.api
            .get("resolution/info", CallOptions::new())
            .await?
            .decode()
    }

    /// Enable or disable a check. Unknown check slugs pass through as given.
    pub async fn check_options(
        &self,
        check: impl Into<Lenient<CheckType>>,
        options: &CheckOptions,
    ) -> Result<(), SupervisorError> {
        let check = check.into();
        self.api
            .post(
                &format!("resolution/check/{check}/options"),
                options_body(options)?,
            )
            .await?;
        Ok(())
    }

    pub async fn run_check(&self, check: impl Into<Lenient<CheckType>>) -> Result<(), SupervisorError> {
        let check = check.into();
        self.api
            .post(&format!("resolution/check/{check}/run"), CallOptions::new())
            .await?;
        Ok(())
    }

    pub async fn apply_suggestion(&self, suggestion: Uuid) -> Result<(), SupervisorError> {
        self.api
            .post(
                &format!("resolution/suggestion/{}", suggestion.simple()),
                CallOptions::new(),
            )
            .await?;
        Ok(())
    }

    pub async fn dismiss_suggestion(&self, suggestion: Uuid) -> Result<(), SupervisorError> {
        self.api
            .delete(
                &format!("resolution/suggestion/{}", suggestion.simple()),
                CallOptions::new(),
            )
            .await?;
        Ok(())
    }

    pub async fn dismiss_issue(&self, issue: Uuid) -> Result<(), SupervisorError> {
        self.api
            .delete(
                &format!("resolution/issue/{}", issue.simple()),
                CallOptions::new(),
            )
            .await?;
        Ok(())
    }

    pub async fn suggestions_for_issue(&self, issue: Uuid) -> Result<Vec<Suggestion>, SupervisorError> {
        let list: SuggestionsList = self
            .api
            .get(
                &format!("resolution/issue/{}/suggestions", issue.simple()),
                CallOptions::new(),
            )
            .await?
            .decode()?;
        Ok(list.suggestions)
    }

    /// Run every enabled check now.
    pub async fn healthcheck(&self) -> Result<(), SupervisorError> {
        self.api
            .post("resolution/healthcheck", CallOptions::new())
            .await?;
        Ok(())
    }
}
