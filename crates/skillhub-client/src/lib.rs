//! Authenticated HTTP client SDK for the Skill Hub learning platform.
//!
//! Wraps the backend's REST API with the request pipeline its web frontend
//! relies on: bearer-token attachment, lazy CSRF bootstrap, and a single
//! CSRF refresh-and-retry on 401/403.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use skillhub_client::{InMemorySessionStore, LoginOutcome, Result, SkillHubClient};
//!
//! # async fn example() -> Result<()> {
//! let client = SkillHubClient::builder()
//!     .base_url("http://localhost:8080")
//!     .session(Arc::new(InMemorySessionStore::new()))
//!     .build()?;
//!
//! if let LoginOutcome::LoggedIn(login) = client.auth().login("ana", "secret").await? {
//!     println!("Signed in as {}", login.username);
//! }
//!
//! let user = client.auth().refresh_current_user().await?;
//! for post in client.posts().list_by_user(user.id).await? {
//!     println!("{}: {}", post.post_id, post.description.unwrap_or_default());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - **Auth**: Sign in/up, 2FA verification, current user, session helpers
//! - **Posts**: Multipart create, list by user, get, update, delete
//! - **Comments**: Add, list, edit, delete
//! - **Likes**: Like, unlike, count, check
//! - **Notifications**: Paged list, unread, mark read
//! - **Progress**: Entries per plan and per user
//! - **Learning plans**: Plans and their items
//! - **Skills**: Skill catalogue CRUD
//! - **Followers**: Follow graph and counts

pub mod api;
pub mod client;
pub mod csrf;
pub mod error;
pub mod jwt;
pub mod request;
pub mod session;
pub mod types;

pub use api::LoginOutcome;
pub use client::{ClientBuilder, SkillHubClient, DEFAULT_BASE_URL};
pub use csrf::{with_csrf_retry, Attempt, LogRedirect, LoginRedirect, CSRF_HEADER, LOGIN_PATH};
pub use error::{AuthError, Error, Result};
pub use jwt::{decode_claims, JwtClaims};
pub use request::{ApiRequest, MultipartField, RequestBody};
pub use session::{FileSessionStore, InMemorySessionStore, SessionData, SessionStore};
pub use types::*;
