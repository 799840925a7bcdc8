//! CLI command handlers.

pub mod auth;
pub mod comments;
pub mod config;
pub mod followers;
pub mod likes;
pub mod notifications;
pub mod plans;
pub mod posts;
pub mod progress;
pub mod skills;
pub mod users;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context as _, Result};
use console::Style;
use serde::Serialize;
use skillhub_client::{FileSessionStore, LoginRedirect, SkillHubClient};

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// `--server` / `SKILLHUB_API_URL`, if given.
    pub server_override: Option<String>,
    /// Output as JSON for scripting.
    pub json_output: bool,
    /// Verbose output enabled.
    pub verbose: bool,
}

impl Context {
    /// Resolve which backend to talk to.
    pub fn connection(&self) -> Result<skillhub_config::Connection> {
        let config = skillhub_config::load_client_config()?;
        Ok(config.resolve(self.server_override.as_deref())?)
    }

    /// Build an API client.
    ///
    /// A context with its own bearer token gets a throwaway in-memory session;
    /// otherwise the session persists under the config directory.
    pub fn client(&self) -> Result<SkillHubClient> {
        let conn = self.connection()?;
        if self.verbose {
            let dim = Style::new().dim();
            eprintln!("{}", dim.apply_to(format!("Server: {}", conn.server)));
        }

        let mut builder = SkillHubClient::builder()
            .base_url(&conn.server)
            .timeout(Duration::from_secs(conn.timeout))
            .login_redirect(Arc::new(CliRedirect));

        builder = match conn.bearer_token {
            Some(token) => builder.bearer_token(token),
            None => builder.session(Arc::new(self.session_store()?)),
        };

        Ok(builder.build()?)
    }

    /// Open the persistent session file.
    pub fn session_store(&self) -> Result<FileSessionStore> {
        let dir = skillhub_config::xdg_config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        FileSessionStore::open(&dir).context("Failed to open session file")
    }

    /// The signed-in user's id, fetching it once if not cached.
    pub async fn current_user_id(&self, client: &SkillHubClient) -> Result<i64> {
        if let Some(user) = client.session().user() {
            return Ok(user.id);
        }
        let user = client
            .auth()
            .refresh_current_user()
            .await
            .context("Not signed in. Run 'skillhub auth login' first.")?;
        Ok(user.id)
    }
}

/// Login redirect for a terminal: tell the user how to sign in again.
#[derive(Debug)]
struct CliRedirect;

impl LoginRedirect for CliRedirect {
    fn redirect(&self, _path: &str) {
        let yellow = Style::new().yellow();
        eprintln!(
            "{} Session expired or rejected. Run 'skillhub auth login' to sign in again.",
            yellow.apply_to("!")
        );
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Output helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Print a value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a section header.
pub fn print_header(title: &str) {
    let dim = Style::new().dim();
    println!("{}", console::style(title).bold());
    println!("{}", dim.apply_to("─".repeat(50)));
}

/// Print a success line.
pub fn print_ok(message: impl std::fmt::Display) {
    let green = Style::new().green();
    println!("{} {}", green.apply_to("✓"), message);
}

/// Collapse newlines and cut to `max_len` characters.
pub fn truncate(s: &str, max_len: usize) -> String {
    let s = s.replace('\n', " ");
    if s.chars().count() <= max_len {
        s
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("line one\nline two", 100), "line one line two");
        assert_eq!(truncate("abcdefghijkl", 8), "abcde...");
        assert_eq!(truncate("ééééééééé", 5), "éé...");
    }
}
