//! Users API: profiles and per-user skill preferences.

use crate::client::SkillHubClient;
use crate::error::Result;
use crate::request::ApiRequest;
use crate::types::{Skill, UserProfile};

/// Users API client.
pub struct UsersApi {
    client: SkillHubClient,
}

impl UsersApi {
    pub(crate) fn new(client: SkillHubClient) -> Self {
        Self { client }
    }

    /// Account details for a user.
    pub async fn profile(&self, user_id: i64) -> Result<UserProfile> {
        self.client
            .get(&format!("users/profile/{}", user_id))
            .await
    }

    /// Skills the user has picked.
    pub async fn skills(&self, user_id: i64) -> Result<Vec<Skill>> {
        self.client.get(&format!("users/skills/{}", user_id)).await
    }

    /// Add skills to the user's preferences. Skills already present are kept.
    pub async fn set_skill_preferences(&self, user_id: i64, skill_ids: &[i64]) -> Result<()> {
        let request =
            ApiRequest::post(format!("user-skills/users/{}/batch", user_id)).json(skill_ids)?;
        self.client.request_unit(request).await
    }

    /// Drop one skill from the user's preferences.
    pub async fn remove_skill(&self, user_id: i64, skill_id: i64) -> Result<()> {
        self.client
            .delete(&format!("user-skills/users/{}/skills/{}", user_id, skill_id))
            .await
    }
}
