//! Likes API.

use crate::client::SkillHubClient;
use crate::error::Result;
use crate::request::ApiRequest;

/// Likes API client.
pub struct LikesApi {
    client: SkillHubClient,
}

impl LikesApi {
    pub(crate) fn new(client: SkillHubClient) -> Self {
        Self { client }
    }

    /// Like a post.
    pub async fn like(&self, post_id: i64, user_id: i64) -> Result<()> {
        let request = ApiRequest::post("likes")
            .query("postId", post_id)
            .query("userId", user_id);
        self.client.request_unit(request).await
    }

    /// Remove a like.
    pub async fn unlike(&self, post_id: i64, user_id: i64) -> Result<()> {
        let request = ApiRequest::delete("likes")
            .query("postId", post_id)
            .query("userId", user_id);
        self.client.request_unit(request).await
    }

    /// Number of likes on a post.
    pub async fn count(&self, post_id: i64) -> Result<u64> {
        self.client.get(&format!("likes/count/{}", post_id)).await
    }

    /// Whether `user_id` liked the post. Any failure reads as "not liked".
    pub async fn has_liked(&self, post_id: i64, user_id: i64) -> bool {
        let request = ApiRequest::get("likes/check")
            .query("postId", post_id)
            .query("userId", user_id);
        match self.client.request::<bool>(request).await {
            Ok(liked) => liked,
            Err(e) => {
                tracing::debug!(post_id, user_id, error = %e, "like check failed");
                false
            }
        }
    }
}
