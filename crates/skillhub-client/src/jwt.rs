//! Unverified JWT payload decoding.
//!
//! The backend signs tokens; the client only reads the claims it needs to
//! drive the login flow. Signatures are never checked here.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Claims the backend puts in its access tokens.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JwtClaims {
    /// Username.
    pub sub: String,
    /// Comma-separated role list.
    #[serde(default)]
    pub roles: Option<String>,
    #[serde(default, rename = "is2faEnabled")]
    pub is_2fa_enabled: bool,
    /// Expiry (seconds since epoch).
    #[serde(default)]
    pub exp: Option<i64>,
}

impl JwtClaims {
    /// Roles split on commas, empty entries dropped.
    pub fn role_list(&self) -> Vec<String> {
        self.roles
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Decode the payload segment of `token`.
pub fn decode_claims(token: &str) -> Result<JwtClaims> {
    let payload = token
        .split('.')
        .nth(1)
        .ok_or_else(|| Error::Config("malformed JWT: missing payload".to_string()))?;

    // Some issuers pad; URL_SAFE_NO_PAD rejects '='.
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| Error::Config(format!("malformed JWT payload: {}", e)))?;

    serde_json::from_slice(&bytes).map_err(|source| Error::Parse {
        path: "jwt".to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with(payload: &str) -> String {
        format!(
            "eyJhbGciOiJIUzI1NiJ9.{}.signature",
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    #[test]
    fn test_decode_claims() {
        let token = token_with(r#"{"sub":"ana","roles":"ROLE_USER,ROLE_ADMIN","is2faEnabled":true,"exp":1767225600}"#);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.sub, "ana");
        assert!(claims.is_2fa_enabled);
        assert_eq!(claims.role_list(), vec!["ROLE_USER", "ROLE_ADMIN"]);
    }

    #[test]
    fn test_missing_roles_and_flag_default() {
        let claims = decode_claims(&token_with(r#"{"sub":"bo"}"#)).unwrap();
        assert!(!claims.is_2fa_enabled);
        assert!(claims.role_list().is_empty());
    }

    #[test]
    fn test_malformed_tokens() {
        assert!(decode_claims("no-dots-here").is_err());
        assert!(decode_claims("a.!!!.c").is_err());
        assert!(matches!(
            decode_claims(&token_with("[]")),
            Err(Error::Parse { .. })
        ));
    }
}
