//! CLI integration tests for the skillhub command-line interface.
//!
//! These tests verify:
//! - Help text is displayed correctly
//! - Argument parsing works as expected
//! - Context management and offline session inspection
//!
//! Note: These tests do not require a running backend. Each test that
//! touches config gets its own directory via `SKILLHUB_CONFIG_DIR`.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command for the skillhub binary with an isolated config dir.
fn skillhub(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("skillhub").unwrap();
    cmd.env("SKILLHUB_CONFIG_DIR", config_dir.path())
        .env_remove("SKILLHUB_API_URL");
    cmd
}

fn config_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Help and Version Tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_help_displays() {
    let dir = config_dir();
    skillhub(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Skill Hub"));
}

#[test]
fn test_version_displays() {
    let dir = config_dir();
    skillhub(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("skillhub"));
}

#[test]
fn test_help_lists_subcommands() {
    let dir = config_dir();
    skillhub(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("auth"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("skills"))
        .stdout(predicate::str::contains("posts"))
        .stdout(predicate::str::contains("comments"))
        .stdout(predicate::str::contains("likes"))
        .stdout(predicate::str::contains("notifications"))
        .stdout(predicate::str::contains("plans"))
        .stdout(predicate::str::contains("progress"))
        .stdout(predicate::str::contains("followers"))
        .stdout(predicate::str::contains("users"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Global Flag Tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_global_flags_accepted() {
    let dir = config_dir();
    skillhub(&dir)
        .args(["--verbose", "--json", "--server", "http://localhost:9999", "--help"])
        .assert()
        .success();
}

#[test]
fn test_server_flag_overrides_default() {
    let dir = config_dir();
    skillhub(&dir)
        .args(["--server", "http://127.0.0.1:9999", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://127.0.0.1:9999"))
        .stdout(predicate::str::contains("--server"));
}

#[test]
fn test_env_var_overrides_default() {
    let dir = config_dir();
    skillhub(&dir)
        .env("SKILLHUB_API_URL", "http://10.0.0.5:8080")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://10.0.0.5:8080"));
}

#[test]
fn test_invalid_server_rejected() {
    let dir = config_dir();
    skillhub(&dir)
        .args(["--server", "ftp://example.com", "config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ftp://example.com"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Subcommand Help Tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_auth_help() {
    let dir = config_dir();
    skillhub(&dir)
        .args(["auth", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("logout"));
}

#[test]
fn test_posts_create_help_mentions_media() {
    let dir = config_dir();
    skillhub(&dir)
        .args(["posts", "create", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--image"))
        .stdout(predicate::str::contains("--video"));
}

#[test]
fn test_plans_help() {
    let dir = config_dir();
    skillhub(&dir)
        .args(["plans", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("add-item"))
        .stdout(predicate::str::contains("complete"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Invalid Input Tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_unknown_subcommand_fails() {
    let dir = config_dir();
    skillhub(&dir).arg("bogus").assert().failure();
}

#[test]
fn test_non_numeric_id_rejected() {
    let dir = config_dir();
    skillhub(&dir)
        .args(["skills", "show", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid"));
}

#[test]
fn test_bad_progress_type_rejected() {
    let dir = config_dir();
    skillhub(&dir)
        .args(["progress", "add", "1", "Title", "--type", "nap"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown template type"));
}

#[test]
fn test_add_skills_requires_ids() {
    let dir = config_dir();
    skillhub(&dir)
        .args(["users", "add-skills"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("<SKILLS>"));
}

#[test]
fn test_bad_date_rejected() {
    let dir = config_dir();
    skillhub(&dir)
        .args(["plans", "create", "Rust", "--start", "next-week"])
        .assert()
        .failure();
}

// ─────────────────────────────────────────────────────────────────────────────
// Context Management
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_no_contexts_initially() {
    let dir = config_dir();
    skillhub(&dir)
        .args(["config", "get-contexts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No contexts configured"));
}

#[test]
fn test_first_context_becomes_current() {
    let dir = config_dir();
    skillhub(&dir)
        .args(["config", "set-context", "staging", "--server", "https://staging.example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("created"));

    skillhub(&dir)
        .args(["config", "current-context"])
        .assert()
        .success()
        .stdout(predicate::str::contains("staging"));

    skillhub(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://staging.example.com"))
        .stdout(predicate::str::contains("context \"staging\""));

    assert!(dir.path().join("client.yaml").exists());
}

#[test]
fn test_set_context_requires_server() {
    let dir = config_dir();
    skillhub(&dir)
        .args(["config", "set-context", "nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--server is required"));
}

#[test]
fn test_set_context_rejects_bad_url() {
    let dir = config_dir();
    skillhub(&dir)
        .args(["config", "set-context", "bad", "--server", "not a url"])
        .assert()
        .failure();
    assert!(!dir.path().join("client.yaml").exists());
}

#[test]
fn test_use_unknown_context_fails() {
    let dir = config_dir();
    skillhub(&dir)
        .args(["config", "use-context", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ghost"));
}

#[test]
fn test_delete_context() {
    let dir = config_dir();
    skillhub(&dir)
        .args(["config", "set-context", "local", "--server", "http://localhost:8080"])
        .assert()
        .success();
    skillhub(&dir)
        .args(["config", "delete-context", "local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("deleted"));
    skillhub(&dir)
        .args(["config", "get-contexts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No contexts configured"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Offline Session Inspection
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_status_when_signed_out() {
    let dir = config_dir();
    skillhub(&dir)
        .args(["auth", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not signed in"));
}

#[test]
fn test_status_reads_stored_token() {
    let dir = config_dir();
    // {"sub":"ana","roles":"ROLE_USER"}
    let token = "eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiJhbmEiLCJyb2xlcyI6IlJPTEVfVVNFUiJ9.sig";
    std::fs::write(
        dir.path().join("session.json"),
        format!(r#"{{"jwt_token":"{}","is_admin":false}}"#, token),
    )
    .unwrap();

    skillhub(&dir)
        .args(["--json", "auth", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""authenticated": true"#))
        .stdout(predicate::str::contains(r#""username": "ana""#));
}

#[test]
fn test_logout_removes_session_file() {
    let dir = config_dir();
    let session = dir.path().join("session.json");
    std::fs::write(&session, r#"{"jwt_token":"abc"}"#).unwrap();

    skillhub(&dir)
        .args(["auth", "logout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed out"));
    assert!(!session.exists());
}
