//! Notifications API.

use crate::client::SkillHubClient;
use crate::error::Result;
use crate::request::ApiRequest;
use crate::types::{Notification, NotificationType, Page};

/// Page size used when the caller does not pick one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Notifications API client.
pub struct NotificationsApi {
    client: SkillHubClient,
}

impl NotificationsApi {
    pub(crate) fn new(client: SkillHubClient) -> Self {
        Self { client }
    }

    /// One page of a user's notifications, newest first.
    pub async fn list(&self, user_id: i64, page: u32, size: u32) -> Result<Page<Notification>> {
        let request = ApiRequest::get(format!("notifications/{}", user_id))
            .query("page", page)
            .query("size", size);
        self.client.request(request).await
    }

    /// Unread notifications.
    pub async fn unread(&self, user_id: i64) -> Result<Vec<Notification>> {
        self.client
            .get(&format!("notifications/{}/unread", user_id))
            .await
    }

    /// Number of unread notifications.
    pub async fn unread_count(&self, user_id: i64) -> Result<u64> {
        self.client
            .get(&format!("notifications/{}/count", user_id))
            .await
    }

    /// Mark one notification as read.
    pub async fn mark_read(&self, notification_id: i64) -> Result<()> {
        self.client
            .request_unit(ApiRequest::put(format!(
                "notifications/{}/read",
                notification_id
            )))
            .await
    }

    /// Mark all of a user's notifications as read.
    pub async fn mark_all_read(&self, user_id: i64) -> Result<()> {
        self.client
            .request_unit(ApiRequest::put(format!(
                "notifications/{}/read-all",
                user_id
            )))
            .await
    }

    /// Notifications of one type.
    pub async fn by_type(
        &self,
        user_id: i64,
        kind: NotificationType,
    ) -> Result<Vec<Notification>> {
        self.client
            .get(&format!("notifications/{}/type/{}", user_id, kind.as_str()))
            .await
    }
}
