//! API endpoint implementations.

mod auth;
mod comments;
mod followers;
mod learning_plans;
mod likes;
mod notifications;
mod posts;
mod progress;
mod skills;
mod users;

pub use auth::{AuthApi, LoginOutcome};
pub use comments::CommentsApi;
pub use followers::FollowersApi;
pub use learning_plans::LearningPlansApi;
pub use likes::LikesApi;
pub use notifications::{NotificationsApi, DEFAULT_PAGE_SIZE};
pub use posts::PostsApi;
pub use progress::ProgressApi;
pub use skills::SkillsApi;
pub use users::UsersApi;
