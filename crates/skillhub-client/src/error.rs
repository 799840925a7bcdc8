//! Client error types.

use thiserror::Error;

/// Client error type.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Request body serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A response body did not match the endpoint's schema.
    #[error("Failed to parse response from {path}: {source}")]
    Parse {
        /// Request path the body came from.
        path: String,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// Server returned an error response.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from server.
        message: String,
    },

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Authentication could not be recovered; the login redirect has fired.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Session store could not be read or written.
    #[error("Session error: {0}")]
    Session(String),
}

/// Terminal authentication failures from the CSRF retry path.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Fetching a fresh CSRF token after a 401/403 failed.
    #[error("CSRF token refresh failed: {0}")]
    RefreshFailed(String),

    /// The replayed request was rejected again.
    #[error("Request rejected after CSRF refresh ({}): {message}", status_label(.status))]
    RetryRejected {
        /// Status of the replayed request, if one was received.
        status: Option<u16>,
        /// Error message from the server or transport.
        message: String,
    },
}

fn status_label(status: &Option<u16>) -> String {
    match status {
        Some(code) => code.to_string(),
        None => "transport".to_string(),
    }
}

impl Error {
    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_)) || matches!(self, Error::Api { status: 404, .. })
    }

    /// Check if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Auth(_)) || matches!(self, Error::Api { status: 401 | 403, .. })
    }

    /// Check if this is a response decoding error.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }

    /// Check if this is a server error.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Api { status, .. } if *status >= 500)
    }

    /// HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::NotFound(_) => Some(404),
            Error::Auth(AuthError::RetryRejected { status, .. }) => *status,
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error body returned by the backend.
///
/// Spring emits `{status, error, message, path}` for unhandled errors and
/// `{message}` for controller-level rejections.
#[derive(Debug, Default, serde::Deserialize)]
pub(crate) struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorResponse {
    /// Best human-readable message from a raw error body.
    pub(crate) fn message_from(body: &[u8], status: u16) -> String {
        if let Ok(parsed) = serde_json::from_slice::<ErrorResponse>(body) {
            if let Some(message) = parsed.message.or(parsed.error) {
                if !message.is_empty() {
                    return message;
                }
            }
        }

        let text = String::from_utf8_lossy(body);
        let text = text.trim();
        if text.is_empty() {
            format!("HTTP {}", status)
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_from_spring_error() {
        let body = br#"{"status":500,"error":"Internal Server Error","path":"/api/posts"}"#;
        assert_eq!(ErrorResponse::message_from(body, 500), "Internal Server Error");

        let body = br#"{"message":"Bad credentials","status":false}"#;
        assert_eq!(ErrorResponse::message_from(body, 404), "Bad credentials");
    }

    #[test]
    fn test_message_from_plain_text_and_empty() {
        assert_eq!(
            ErrorResponse::message_from(b"Error: Username is already taken!", 400),
            "Error: Username is already taken!"
        );
        assert_eq!(ErrorResponse::message_from(b"", 502), "HTTP 502");
    }

    #[test]
    fn test_classification() {
        let err = Error::Api {
            status: 403,
            message: "Forbidden".into(),
        };
        assert!(err.is_auth_error());
        assert_eq!(err.status(), Some(403));

        let err = Error::Auth(AuthError::RefreshFailed("offline".into()));
        assert!(err.is_auth_error());
        assert!(!err.is_server_error());

        assert!(Error::NotFound("post 7".into()).is_not_found());
        assert!(Error::Api {
            status: 503,
            message: String::new()
        }
        .is_server_error());
    }

    #[test]
    fn test_retry_rejected_display() {
        let err = AuthError::RetryRejected {
            status: Some(401),
            message: "Unauthorized".into(),
        };
        assert_eq!(
            err.to_string(),
            "Request rejected after CSRF refresh (401): Unauthorized"
        );

        let err = Error::Auth(AuthError::RetryRejected {
            status: None,
            message: "connection refused".into(),
        });
        assert_eq!(
            err.to_string(),
            "Request rejected after CSRF refresh (transport): connection refused"
        );
    }
}
