//! Followers API.
//!
//! `user_id` is the account being followed; `follower_user_id` is the
//! account doing the following.

use crate::client::SkillHubClient;
use crate::error::Result;
use crate::request::ApiRequest;
use crate::types::Follower;

/// Followers API client.
pub struct FollowersApi {
    client: SkillHubClient,
}

impl FollowersApi {
    pub(crate) fn new(client: SkillHubClient) -> Self {
        Self { client }
    }

    fn pair(request: ApiRequest, user_id: i64, follower_user_id: i64) -> ApiRequest {
        request
            .query("userId", user_id)
            .query("followerUserId", follower_user_id)
    }

    /// Follow `user_id` as `follower_user_id`.
    pub async fn follow(&self, user_id: i64, follower_user_id: i64) -> Result<()> {
        let request = Self::pair(ApiRequest::post("followers/follow"), user_id, follower_user_id);
        self.client.request_unit(request).await
    }

    /// Stop following.
    pub async fn unfollow(&self, user_id: i64, follower_user_id: i64) -> Result<()> {
        let request = Self::pair(
            ApiRequest::delete("followers/unfollow"),
            user_id,
            follower_user_id,
        );
        self.client.request_unit(request).await
    }

    /// Whether `follower_user_id` follows `user_id`.
    pub async fn is_following(&self, user_id: i64, follower_user_id: i64) -> Result<bool> {
        let request = Self::pair(ApiRequest::get("followers/check"), user_id, follower_user_id);
        self.client.request(request).await
    }

    /// Number of followers.
    pub async fn follower_count(&self, user_id: i64) -> Result<u64> {
        self.client
            .get(&format!("followers/count/{}", user_id))
            .await
    }

    /// Number of accounts this user follows.
    pub async fn following_count(&self, user_id: i64) -> Result<u64> {
        self.client
            .get(&format!("followers/following/count/{}", user_id))
            .await
    }

    /// Accounts following this user.
    pub async fn followers(&self, user_id: i64) -> Result<Vec<Follower>> {
        self.client
            .get(&format!("followers/{}/list", user_id))
            .await
    }

    /// Accounts this user follows.
    pub async fn following(&self, user_id: i64) -> Result<Vec<Follower>> {
        self.client
            .get(&format!("followers/{}/following", user_id))
            .await
    }
}
