//! Comments API.

use crate::client::SkillHubClient;
use crate::error::Result;
use crate::request::ApiRequest;
use crate::types::Comment;

/// Comments API client.
///
/// Comment text is sent as a raw string body, not JSON.
pub struct CommentsApi {
    client: SkillHubClient,
}

impl CommentsApi {
    pub(crate) fn new(client: SkillHubClient) -> Self {
        Self { client }
    }

    /// Comment on a post as `user_id`.
    pub async fn add(&self, post_id: i64, user_id: i64, text: &str) -> Result<Comment> {
        let request = ApiRequest::post("comments")
            .query("postId", post_id)
            .query("userId", user_id)
            .text(text);
        self.client.request(request).await
    }

    /// List comments on a post.
    pub async fn list_for_post(&self, post_id: i64) -> Result<Vec<Comment>> {
        self.client.get(&format!("comments/post/{}", post_id)).await
    }

    /// Edit a comment; the server checks `user_id` owns it.
    pub async fn update(&self, comment_id: i64, user_id: i64, text: &str) -> Result<Comment> {
        let request = ApiRequest::put(format!("comments/{}", comment_id))
            .query("userId", user_id)
            .text(text);
        self.client.request(request).await
    }

    /// Delete a comment owned by `user_id`.
    pub async fn delete(&self, user_id: i64, comment_id: i64) -> Result<()> {
        self.client
            .delete(&format!("comments/user/{}/comment/{}", user_id, comment_id))
            .await
    }
}
