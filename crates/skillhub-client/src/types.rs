//! Request and response types for the Skill Hub API.
//!
//! These types mirror the backend's JSON contract (camelCase fields, naive
//! `LocalDate` / `LocalDateTime` timestamps).

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// CSRF
// ─────────────────────────────────────────────────────────────────────────────

/// Body of `GET /api/csrf-token`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsrfTokenResponse {
    /// Token value to echo in `X-XSRF-TOKEN`.
    pub token: String,
    /// Header name the server expects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_name: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Auth
// ─────────────────────────────────────────────────────────────────────────────

/// Credentials for `POST /api/auth/public/signin`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful sign-in response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub username: String,
    #[serde(default)]
    pub roles: Vec<String>,
    pub jwt_token: String,
}

/// Registration payload for `POST /api/auth/public/signup`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    /// Requested roles; the backend honours only the first (`"admin"` or anything else for user).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub role: Vec<String>,
}

/// Generic `{message}` acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Current user as returned by `GET /api/auth/user`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub account_non_locked: bool,
    #[serde(default)]
    pub account_non_expired: bool,
    #[serde(default)]
    pub credentials_non_expired: bool,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub credentials_expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub account_expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_two_factor_enabled: bool,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl UserInfo {
    /// Whether any role names an admin (covers `ROLE_ADMIN` and prefixed variants).
    pub fn is_admin(&self) -> bool {
        self.roles
            .iter()
            .any(|role| role.to_lowercase().contains("admin"))
    }
}

/// Role attached to a user profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    #[serde(default)]
    pub role_id: Option<i64>,
    pub role_name: String,
}

/// Account details from `GET /api/users/profile/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub user_id: Option<i64>,
    pub user_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub account_non_locked: bool,
    #[serde(default)]
    pub account_non_expired: bool,
    #[serde(default)]
    pub credentials_non_expired: bool,
    #[serde(default)]
    pub credentials_expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub account_expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_two_factor_enabled: bool,
    #[serde(default)]
    pub premium: bool,
    #[serde(default)]
    pub last_payment_date_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub created_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_date: Option<NaiveDateTime>,
}

impl UserProfile {
    /// Role name, if the account has one.
    pub fn role_name(&self) -> Option<&str> {
        self.role.as_ref().map(|r| r.role_name.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Skills
// ─────────────────────────────────────────────────────────────────────────────

/// A skill users can attach posts and plans to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub skill_id: i64,
    pub skill_name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Payload for creating or updating a skill.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRequest {
    pub skill_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Posts
// ─────────────────────────────────────────────────────────────────────────────

/// Media attached to a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMedia {
    /// `IMAGE` or `VIDEO`.
    pub media_type: String,
    pub media_url: String,
}

/// A post as rendered on a wall.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub post_id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub skill_name: Option<String>,
    #[serde(default)]
    pub is_public: Option<bool>,
    #[serde(default)]
    pub media: Vec<PostMedia>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

/// Post fields sent on create (as the `postData` part) and update (as JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    pub user_id: i64,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_id: Option<i64>,
    pub is_public: bool,
}

/// Kind of file uploaded with a new post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Multipart field name the backend reads this kind from.
    pub fn field_name(self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

/// A file to upload with a new post.
#[derive(Debug, Clone)]
pub struct MediaUpload {
    pub kind: MediaKind,
    pub file_name: String,
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Comments
// ─────────────────────────────────────────────────────────────────────────────

/// A comment on a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub comment_id: i64,
    pub post_id: i64,
    pub user_id: i64,
    pub comment_text: String,
    #[serde(default)]
    pub commented_user_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Notifications
// ─────────────────────────────────────────────────────────────────────────────

/// What triggered a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationType {
    Like,
    Comment,
    Post,
    Follow,
    SkillUpdate,
    #[serde(other)]
    Other,
}

impl NotificationType {
    /// Wire name used in paths such as `/notifications/{user}/type/{type}`.
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationType::Like => "LIKE",
            NotificationType::Comment => "COMMENT",
            NotificationType::Post => "POST",
            NotificationType::Follow => "FOLLOW",
            NotificationType::SkillUpdate => "SKILL_UPDATE",
            NotificationType::Other => "OTHER",
        }
    }
}

impl std::str::FromStr for NotificationType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().replace('-', "_").as_str() {
            "LIKE" => Ok(NotificationType::Like),
            "COMMENT" => Ok(NotificationType::Comment),
            "POST" => Ok(NotificationType::Post),
            "FOLLOW" => Ok(NotificationType::Follow),
            "SKILL_UPDATE" => Ok(NotificationType::SkillUpdate),
            other => Err(format!("unknown notification type '{}'", other)),
        }
    }
}

/// A notification delivered to a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub notification_id: i64,
    pub user_id: i64,
    pub notification_type: NotificationType,
    #[serde(default)]
    pub sender_user_id: Option<i64>,
    #[serde(default)]
    pub sender_user_name: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// A Spring Data page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    /// Zero-based page index.
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub first: bool,
    #[serde(default)]
    pub last: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Progress
// ─────────────────────────────────────────────────────────────────────────────

/// Template a progress entry was written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProgressTemplateType {
    Certificate,
    CodeDemo,
    DailyLog,
    Milestone,
    Project,
    Skill,
    Workshop,
}

impl ProgressTemplateType {
    /// Wire name, e.g. `DAILY_LOG`.
    pub fn as_str(self) -> &'static str {
        match self {
            ProgressTemplateType::Certificate => "CERTIFICATE",
            ProgressTemplateType::CodeDemo => "CODE_DEMO",
            ProgressTemplateType::DailyLog => "DAILY_LOG",
            ProgressTemplateType::Milestone => "MILESTONE",
            ProgressTemplateType::Project => "PROJECT",
            ProgressTemplateType::Skill => "SKILL",
            ProgressTemplateType::Workshop => "WORKSHOP",
        }
    }
}

impl std::str::FromStr for ProgressTemplateType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().replace('-', "_").as_str() {
            "CERTIFICATE" => Ok(ProgressTemplateType::Certificate),
            "CODE_DEMO" => Ok(ProgressTemplateType::CodeDemo),
            "DAILY_LOG" => Ok(ProgressTemplateType::DailyLog),
            "MILESTONE" => Ok(ProgressTemplateType::Milestone),
            "PROJECT" => Ok(ProgressTemplateType::Project),
            "SKILL" => Ok(ProgressTemplateType::Skill),
            "WORKSHOP" => Ok(ProgressTemplateType::Workshop),
            other => Err(format!("unknown template type '{}'", other)),
        }
    }
}

/// A progress update against a learning plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEntry {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub date: NaiveDate,
    pub template_type: ProgressTemplateType,
    #[serde(default)]
    pub plan_id: Option<i64>,
    #[serde(default)]
    pub user_id: Option<i64>,
}

/// Fields sent when creating or editing a progress entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressDraft {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: NaiveDate,
    pub template_type: ProgressTemplateType,
}

// ─────────────────────────────────────────────────────────────────────────────
// Learning plans
// ─────────────────────────────────────────────────────────────────────────────

/// One topic inside a learning plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub topic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,
    #[serde(default)]
    pub completed: bool,
}

/// A learning plan with its items.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPlan {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub expected_start_date: Option<NaiveDate>,
    #[serde(default)]
    pub expected_end_date: Option<NaiveDate>,
    #[serde(default)]
    pub expected_duration_days: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub completion_percentage: Option<f64>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub post_id: Option<i64>,
    #[serde(default)]
    pub skill_id: Option<i64>,
    #[serde(default)]
    pub items: Vec<LearningItem>,
}

/// Fields sent when creating or editing a learning plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPlanDraft {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_end_date: Option<NaiveDate>,
    pub expected_duration_days: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub post_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_id: Option<i64>,
    #[serde(default)]
    pub items: Vec<LearningItem>,
}

impl LearningPlanDraft {
    /// Set the expected window and recompute the duration.
    ///
    /// The duration is the whole number of days between the two dates, or zero
    /// when either is missing or the end precedes the start.
    pub fn with_dates(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.expected_start_date = start;
        self.expected_end_date = end;
        self.expected_duration_days = match (start, end) {
            (Some(start), Some(end)) => (end - start).num_days().max(0),
            _ => 0,
        };
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Followers
// ─────────────────────────────────────────────────────────────────────────────

/// A follow relationship.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Follower {
    pub follower_id: i64,
    pub user_id: i64,
    pub follower_user_id: i64,
    #[serde(default)]
    pub follower_user_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}
