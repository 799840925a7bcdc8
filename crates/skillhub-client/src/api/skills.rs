//! Skills API.

use crate::client::SkillHubClient;
use crate::error::Result;
use crate::types::{Skill, SkillRequest};

/// Skills API client.
pub struct SkillsApi {
    client: SkillHubClient,
}

impl SkillsApi {
    pub(crate) fn new(client: SkillHubClient) -> Self {
        Self { client }
    }

    /// List all skills.
    pub async fn list(&self) -> Result<Vec<Skill>> {
        self.client.get("skills").await
    }

    /// Get a skill by ID.
    pub async fn get(&self, skill_id: i64) -> Result<Skill> {
        self.client.get(&format!("skills/{}", skill_id)).await
    }

    /// Create a skill.
    pub async fn create(&self, request: &SkillRequest) -> Result<Skill> {
        self.client.post("skills", request).await
    }

    /// Update a skill.
    pub async fn update(&self, skill_id: i64, request: &SkillRequest) -> Result<Skill> {
        self.client
            .put(&format!("skills/{}", skill_id), request)
            .await
    }

    /// Delete a skill.
    pub async fn delete(&self, skill_id: i64) -> Result<()> {
        self.client.delete(&format!("skills/{}", skill_id)).await
    }
}
