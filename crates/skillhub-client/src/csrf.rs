//! CSRF single-retry policy.
//!
//! Per request:
//!
//! ```text
//! INIT -> [no cached token: FETCH_CSRF] -> SENT
//! SENT -> 2xx                                   -> DONE
//! SENT -> 401/403                               -> REFRESH_CSRF -> RESENT
//! SENT -> any other failure                     -> error to caller
//! RESENT -> 2xx                                 -> DONE
//! RESENT -> any failure (or REFRESH_CSRF fails) -> redirect to /login, AuthError
//! ```

use std::fmt::Debug;

use reqwest::StatusCode;

use crate::client::SkillHubClient;
use crate::error::{AuthError, Error, ErrorResponse, Result};
use crate::request::ApiRequest;

/// Header carrying the CSRF token.
pub const CSRF_HEADER: &str = "X-XSRF-TOKEN";

/// Where the user is sent once authentication cannot be recovered.
pub const LOGIN_PATH: &str = "/login";

/// Hook fired when a request cannot be recovered by a CSRF refresh.
pub trait LoginRedirect: Send + Sync + Debug {
    /// Navigate to `path` (always [`LOGIN_PATH`]).
    fn redirect(&self, path: &str);
}

/// Redirect hook that only logs.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogRedirect;

impl LoginRedirect for LogRedirect {
    fn redirect(&self, path: &str) {
        tracing::warn!(to = path, "authentication could not be recovered, redirecting");
    }
}

/// Which send of a request is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attempt {
    /// First send, with the cached (or freshly bootstrapped) token.
    Initial,
    /// Replay after one CSRF refresh.
    Retry,
}

impl Attempt {
    /// The attempt after this one, if the policy allows another.
    pub fn next(self) -> Option<Attempt> {
        match self {
            Attempt::Initial => Some(Attempt::Retry),
            Attempt::Retry => None,
        }
    }
}

/// Whether a status triggers the CSRF refresh.
pub fn is_auth_rejection(status: StatusCode) -> bool {
    status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN
}

/// Send `request`, recovering once from a 401/403 by refreshing the CSRF token.
///
/// Returns the successful response. Non-auth failures on the first attempt are
/// returned as-is; any failure after the refresh fires the login redirect and
/// returns [`Error::Auth`].
pub async fn with_csrf_retry(
    client: &SkillHubClient,
    request: &ApiRequest,
) -> Result<reqwest::Response> {
    let mut attempt = Attempt::Initial;
    let mut csrf = client.ensure_csrf_token().await;

    loop {
        let result = client.dispatch(request, csrf.as_deref()).await;

        let response = match (attempt, result) {
            (_, Ok(response)) if response.status().is_success() => return Ok(response),
            (Attempt::Initial, Err(e)) => return Err(e),
            (Attempt::Retry, Err(e)) => {
                client.redirect_to_login();
                return Err(AuthError::RetryRejected {
                    status: e.status(),
                    message: e.to_string(),
                }
                .into());
            }
            (_, Ok(response)) => response,
        };

        let status = response.status();
        match attempt.next() {
            Some(next) if is_auth_rejection(status) => {
                tracing::info!(
                    path = %request.path,
                    status = status.as_u16(),
                    "request rejected, refreshing CSRF token"
                );
                match client.fetch_csrf_token().await {
                    Ok(token) => csrf = Some(token),
                    Err(e) => {
                        tracing::error!(error = %e, "CSRF token refresh failed");
                        client.redirect_to_login();
                        return Err(AuthError::RefreshFailed(e.to_string()).into());
                    }
                }
                attempt = next;
            }
            Some(_) => return Err(client.extract_error(response).await),
            None => {
                let body = response.bytes().await.unwrap_or_default();
                let message = ErrorResponse::message_from(&body, status.as_u16());
                tracing::warn!(
                    path = %request.path,
                    status = status.as_u16(),
                    "request still rejected after CSRF refresh"
                );
                client.redirect_to_login();
                return Err(Error::Auth(AuthError::RetryRejected {
                    status: Some(status.as_u16()),
                    message,
                }));
            }
        }
    }
}
