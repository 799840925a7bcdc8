//! Feature client tests: request shapes and response decoding.

use std::sync::Arc;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{body_json, body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use skillhub_client::{
    InMemorySessionStore, LoginOutcome, MediaKind, MediaUpload, NotificationType, PostDraft,
    SessionData, SessionStore, SkillHubClient,
};

async fn setup() -> (MockServer, Arc<InMemorySessionStore>, SkillHubClient) {
    let server = MockServer::start().await;
    let session = Arc::new(InMemorySessionStore::with_data(SessionData {
        jwt_token: Some("jwt-1".to_string()),
        csrf_token: Some("csrf-1".to_string()),
        ..Default::default()
    }));
    let client = SkillHubClient::builder()
        .base_url(server.uri())
        .session(session.clone())
        .build()
        .unwrap();
    (server, session, client)
}

fn jwt(claims: serde_json::Value) -> String {
    format!(
        "eyJhbGciOiJIUzI1NiJ9.{}.sig",
        URL_SAFE_NO_PAD.encode(claims.to_string())
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Auth
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_login_stores_bearer_token() {
    let server = MockServer::start().await;
    let session = Arc::new(InMemorySessionStore::new());
    let client = SkillHubClient::builder()
        .base_url(server.uri())
        .session(session.clone())
        .build()
        .unwrap();

    let token = jwt(json!({"sub": "ana", "roles": "ROLE_USER", "is2faEnabled": false}));

    Mock::given(method("GET"))
        .and(path("/api/csrf-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "csrf-login"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/public/signin"))
        .and(header("X-XSRF-TOKEN", "csrf-login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "username": "ana",
            "roles": ["ROLE_USER"],
            "jwtToken": token
        })))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = client.auth().login("ana", "pw").await.unwrap();
    assert!(matches!(outcome, LoginOutcome::LoggedIn(ref r) if r.username == "ana"));
    assert_eq!(session.bearer_token(), Some(token));

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[1].body).unwrap();
    assert_eq!(body, json!({"username": "ana", "password": "pw"}));
}

#[tokio::test]
async fn test_login_with_two_factor_defers_storage() {
    let (server, session, client) = setup().await;
    session.set_bearer_token(None).unwrap();

    let token = jwt(json!({"sub": "bo", "is2faEnabled": true}));

    Mock::given(method("GET"))
        .and(path("/api/csrf-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "csrf-2"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/public/signin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "username": "bo",
            "roles": [],
            "jwtToken": token
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/public/verify-2fa-login"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string(format!("code=123456&jwtToken={}", token)))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = client.auth().login("bo", "pw").await.unwrap();
    let pending = match outcome {
        LoginOutcome::TwoFactorRequired {
            username,
            jwt_token,
        } => {
            assert_eq!(username, "bo");
            jwt_token
        }
        other => panic!("expected 2FA, got {other:?}"),
    };
    assert!(session.bearer_token().is_none());

    client
        .auth()
        .complete_two_factor("123456", &pending)
        .await
        .unwrap();
    assert_eq!(session.bearer_token(), Some(token));
}

#[tokio::test]
async fn test_refresh_current_user_caches_admin_flag() {
    let (server, session, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/user"))
        .and(header("Authorization", "Bearer jwt-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "username": "root",
            "email": "root@example.com",
            "enabled": true,
            "accountExpiryDate": "2026-05-01",
            "roles": ["ROLE_ROLE_ADMIN"]
        })))
        .mount(&server)
        .await;

    let user = client.auth().refresh_current_user().await.unwrap();
    assert_eq!(user.id, 7);
    assert!(session.is_admin());
    assert_eq!(session.user(), Some(user));

    client.auth().logout().unwrap();
    assert_eq!(session.snapshot(), SessionData::default());
}

// ─────────────────────────────────────────────────────────────────────────────
// Posts, comments, likes
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_post_sends_multipart() {
    let (server, _session, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/posts/addPost"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "postId": 31,
            "userId": 3,
            "description": "Borrow checker notes",
            "media": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let draft = PostDraft {
        user_id: 3,
        description: "Borrow checker notes".into(),
        skill_id: Some(1),
        is_public: true,
    };
    let media = vec![MediaUpload {
        kind: MediaKind::Image,
        file_name: "diagram.png".into(),
        mime_type: Some("image/png".into()),
        bytes: vec![0x89, b'P', b'N', b'G'],
    }];

    let post = client.posts().create(&draft, media).await.unwrap();
    assert_eq!(post.post_id, 31);

    let requests = server.received_requests().await.unwrap();
    let content_type = requests[0]
        .headers
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("multipart/form-data"));

    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"postData\""));
    assert!(body.contains(r#""skillId":1"#));
    assert!(body.contains("name=\"image\"; filename=\"diagram.png\""));
}

#[tokio::test]
async fn test_comment_text_is_raw_body() {
    let (server, _session, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/comments"))
        .and(query_param("postId", "12"))
        .and(query_param("userId", "3"))
        .and(body_string("Nice write-up!"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "commentId": 5,
            "postId": 12,
            "userId": 3,
            "commentText": "Nice write-up!",
            "commentedUserName": "ana",
            "createdAt": "2025-05-01T09:30:00"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let comment = client.comments().add(12, 3, "Nice write-up!").await.unwrap();
    assert_eq!(comment.comment_id, 5);
    assert_eq!(comment.commented_user_name.as_deref(), Some("ana"));
}

#[tokio::test]
async fn test_like_check_swallows_errors() {
    let (server, _session, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/likes/check"))
        .and(query_param("postId", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(true))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/likes/check"))
        .and(query_param("postId", "2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/likes/count/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(42))
        .mount(&server)
        .await;

    assert!(client.likes().has_liked(1, 3).await);
    assert!(!client.likes().has_liked(2, 3).await);
    assert_eq!(client.likes().count(1).await.unwrap(), 42);
}

// ─────────────────────────────────────────────────────────────────────────────
// Notifications, plans, progress, followers
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_notifications_page() {
    let (server, _session, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/notifications/3"))
        .and(query_param("page", "1"))
        .and(query_param("size", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [{
                "notificationId": 90,
                "userId": 3,
                "notificationType": "FOLLOW",
                "senderUserId": 8,
                "senderUserName": "kai",
                "message": "kai started following you",
                "isRead": false,
                "createdAt": "2025-05-03T12:00:00"
            }],
            "totalElements": 11,
            "totalPages": 2,
            "number": 1,
            "size": 10,
            "first": false,
            "last": true
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/notifications/3/type/SKILL_UPDATE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let page = client.notifications().list(3, 1, 10).await.unwrap();
    assert_eq!(page.total_elements, 11);
    assert!(page.last);
    assert_eq!(page.content[0].notification_type, NotificationType::Follow);

    let updates = client
        .notifications()
        .by_type(3, NotificationType::SkillUpdate)
        .await
        .unwrap();
    assert!(updates.is_empty());
}

#[tokio::test]
async fn test_learning_plan_items() {
    let (server, _session, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/learning-plans/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 4,
            "title": "Async Rust",
            "expectedStartDate": "2025-06-01",
            "expectedEndDate": "2025-06-30",
            "expectedDurationDays": 29,
            "status": "IN_PROGRESS",
            "completionPercentage": 50.0,
            "items": [
                {"id": 1, "topic": "Futures", "completed": true},
                {"id": 2, "topic": "Pinning", "resource": "https://example.com/pin", "targetDate": "2025-06-15", "completed": false}
            ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/learning-plans/items/2/complete"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 2, "topic": "Pinning", "completed": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let plan = client.learning_plans().get(4).await.unwrap();
    assert_eq!(plan.items.len(), 2);
    assert_eq!(
        plan.items[1].target_date,
        NaiveDate::from_ymd_opt(2025, 6, 15)
    );

    let item = client.learning_plans().complete_item(2).await.unwrap();
    assert!(item.completed);
}

#[tokio::test]
async fn test_followers_and_counts() {
    let (server, _session, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/followers/check"))
        .and(query_param("userId", "3"))
        .and(query_param("followerUserId", "8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(true))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/followers/following/count/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(4))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/followers/follow"))
        .and(query_param("userId", "3"))
        .and(query_param("followerUserId", "8"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    assert!(client.followers().is_following(3, 8).await.unwrap());
    assert_eq!(client.followers().following_count(3).await.unwrap(), 4);
    client.followers().follow(3, 8).await.unwrap();
}

// ─────────────────────────────────────────────────────────────────────────────
// Users
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_user_profile_and_skills() {
    let (server, _session, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/users/profile/7"))
        .and(header("Authorization", "Bearer jwt-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "userId": 7,
            "userName": "ana",
            "email": "ana@example.com",
            "role": {"roleId": 1, "roleName": "ROLE_USER"},
            "enabled": true,
            "accountNonLocked": true,
            "premium": false,
            "createdDate": "2025-03-01T10:15:00"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/users/skills/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"skillId": 2, "skillName": "Rust"},
            {"skillId": 5, "skillName": "Baking", "description": "Bread"}
        ])))
        .mount(&server)
        .await;

    let users = client.users();
    let profile = users.profile(7).await.unwrap();
    assert_eq!(profile.user_name, "ana");
    assert_eq!(profile.role_name(), Some("ROLE_USER"));
    assert!(profile.enabled);
    assert!(!profile.account_non_expired);
    assert!(profile.created_date.is_some());

    let skills = users.skills(7).await.unwrap();
    let ids: Vec<i64> = skills.iter().map(|s| s.skill_id).collect();
    assert_eq!(ids, vec![2, 5]);
}

#[tokio::test]
async fn test_user_skill_preferences_are_mutations() {
    let (server, _session, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/user-skills/users/7/batch"))
        .and(header("X-XSRF-TOKEN", "csrf-1"))
        .and(body_json(json!([2, 5])))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/user-skills/users/7/skills/5"))
        .and(header("X-XSRF-TOKEN", "csrf-1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let users = client.users();
    users.set_skill_preferences(7, &[2, 5]).await.unwrap();
    users.remove_skill(7, 5).await.unwrap();
}
