//! Posts API.

use crate::client::SkillHubClient;
use crate::error::Result;
use crate::request::{ApiRequest, MultipartField};
use crate::types::{MediaUpload, Post, PostDraft};

/// Posts API client.
pub struct PostsApi {
    client: SkillHubClient,
}

impl PostsApi {
    pub(crate) fn new(client: SkillHubClient) -> Self {
        Self { client }
    }

    /// Create a post with optional image/video uploads.
    ///
    /// The draft travels as a JSON string in the `postData` part.
    pub async fn create(&self, draft: &PostDraft, media: Vec<MediaUpload>) -> Result<Post> {
        let mut fields = vec![MultipartField::text(
            "postData",
            serde_json::to_string(draft)?,
        )];
        fields.extend(media.into_iter().map(|upload| {
            MultipartField::file(
                upload.kind.field_name(),
                upload.file_name,
                upload.mime_type,
                upload.bytes,
            )
        }));

        self.client
            .request(ApiRequest::post("posts/addPost").multipart(fields))
            .await
    }

    /// List a user's posts.
    pub async fn list_by_user(&self, user_id: i64) -> Result<Vec<Post>> {
        self.client.get(&format!("posts/user/{}", user_id)).await
    }

    /// Get a post by ID.
    pub async fn get(&self, post_id: i64) -> Result<Post> {
        self.client.get(&format!("posts/{}", post_id)).await
    }

    /// Update a post's description, skill or visibility.
    pub async fn update(&self, post_id: i64, draft: &PostDraft) -> Result<Post> {
        self.client
            .put(&format!("posts/update/{}", post_id), draft)
            .await
    }

    /// Delete a post.
    pub async fn delete(&self, post_id: i64) -> Result<()> {
        self.client.delete(&format!("posts/{}", post_id)).await
    }
}
