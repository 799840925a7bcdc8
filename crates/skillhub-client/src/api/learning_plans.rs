//! Learning plans API.

use crate::client::SkillHubClient;
use crate::error::Result;
use crate::request::ApiRequest;
use crate::types::{LearningItem, LearningPlan, LearningPlanDraft};

/// Learning plans API client.
pub struct LearningPlansApi {
    client: SkillHubClient,
}

impl LearningPlansApi {
    pub(crate) fn new(client: SkillHubClient) -> Self {
        Self { client }
    }

    /// Create a plan (with its initial items).
    pub async fn create(&self, draft: &LearningPlanDraft) -> Result<LearningPlan> {
        self.client.post("learning-plans", draft).await
    }

    /// The authenticated user's plans.
    pub async fn list(&self) -> Result<Vec<LearningPlan>> {
        self.client.get("learning-plans").await
    }

    /// Get a plan by ID.
    pub async fn get(&self, plan_id: i64) -> Result<LearningPlan> {
        self.client
            .get(&format!("learning-plans/{}", plan_id))
            .await
    }

    /// Replace a plan's fields and items.
    pub async fn update(&self, plan_id: i64, draft: &LearningPlanDraft) -> Result<LearningPlan> {
        self.client
            .put(&format!("learning-plans/{}", plan_id), draft)
            .await
    }

    /// Delete a plan.
    pub async fn delete(&self, plan_id: i64) -> Result<()> {
        self.client
            .delete(&format!("learning-plans/{}", plan_id))
            .await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Items
    // ─────────────────────────────────────────────────────────────────────────

    /// Append an item to a plan.
    pub async fn add_item(&self, plan_id: i64, item: &LearningItem) -> Result<LearningItem> {
        self.client
            .post(&format!("learning-plans/{}/items", plan_id), item)
            .await
    }

    /// Items of a plan.
    pub async fn items(&self, plan_id: i64) -> Result<Vec<LearningItem>> {
        self.client
            .get(&format!("learning-plans/{}/items", plan_id))
            .await
    }

    /// Mark an item completed.
    pub async fn complete_item(&self, item_id: i64) -> Result<LearningItem> {
        self.client
            .request(ApiRequest::put(format!(
                "learning-plans/items/{}/complete",
                item_id
            )))
            .await
    }

    /// Edit an item.
    pub async fn update_item(&self, item_id: i64, item: &LearningItem) -> Result<LearningItem> {
        self.client
            .put(&format!("learning-plans/items/{}", item_id), item)
            .await
    }

    /// Delete an item.
    pub async fn delete_item(&self, item_id: i64) -> Result<()> {
        self.client
            .delete(&format!("learning-plans/items/{}", item_id))
            .await
    }
}
