//! Progress API.

use crate::client::SkillHubClient;
use crate::error::Result;
use crate::types::{ProgressDraft, ProgressEntry};

/// Progress API client.
pub struct ProgressApi {
    client: SkillHubClient,
}

impl ProgressApi {
    pub(crate) fn new(client: SkillHubClient) -> Self {
        Self { client }
    }

    /// Record progress against a learning plan.
    pub async fn create(&self, plan_id: i64, draft: &ProgressDraft) -> Result<ProgressEntry> {
        self.client
            .post(&format!("progress/{}", plan_id), draft)
            .await
    }

    /// Entries for one plan.
    pub async fn for_plan(&self, plan_id: i64) -> Result<Vec<ProgressEntry>> {
        self.client.get(&format!("progress/plan/{}", plan_id)).await
    }

    /// The authenticated user's entries.
    pub async fn mine(&self) -> Result<Vec<ProgressEntry>> {
        self.client.get("progress/me").await
    }

    /// Every public entry.
    pub async fn all(&self) -> Result<Vec<ProgressEntry>> {
        self.client.get("progress/all").await
    }

    /// Edit an entry.
    pub async fn update(&self, id: i64, draft: &ProgressDraft) -> Result<ProgressEntry> {
        self.client.put(&format!("progress/{}", id), draft).await
    }

    /// Delete an entry.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("progress/{}", id)).await
    }
}
