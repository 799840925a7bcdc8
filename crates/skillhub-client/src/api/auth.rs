//! Auth API and session helpers.

use crate::client::SkillHubClient;
use crate::error::Result;
use crate::jwt::decode_claims;
use crate::request::ApiRequest;
use crate::types::{LoginRequest, LoginResponse, MessageResponse, SignupRequest, UserInfo};

/// Result of a password login.
#[derive(Debug, Clone)]
pub enum LoginOutcome {
    /// Bearer token stored; the session is authenticated.
    LoggedIn(LoginResponse),
    /// The account has 2FA enabled. Nothing was stored; finish with
    /// [`AuthApi::complete_two_factor`] using this token.
    TwoFactorRequired {
        username: String,
        jwt_token: String,
    },
}

/// Auth API client.
///
/// The `public/` endpoints accept anonymous calls; the session helpers are the
/// only place the client writes the bearer token.
pub struct AuthApi {
    client: SkillHubClient,
}

impl AuthApi {
    pub(crate) fn new(client: SkillHubClient) -> Self {
        Self { client }
    }

    /// Exchange credentials for a JWT.
    pub async fn sign_in(&self, request: &LoginRequest) -> Result<LoginResponse> {
        self.client.post("auth/public/signin", request).await
    }

    /// Register a new account.
    pub async fn sign_up(&self, request: &SignupRequest) -> Result<MessageResponse> {
        self.client.post("auth/public/signup", request).await
    }

    /// Confirm a TOTP code for a token issued by [`AuthApi::sign_in`].
    pub async fn verify_two_factor(&self, code: &str, jwt_token: &str) -> Result<()> {
        let request = ApiRequest::post("auth/public/verify-2fa-login").form(vec![
            ("code".to_string(), code.to_string()),
            ("jwtToken".to_string(), jwt_token.to_string()),
        ]);
        self.client.request_unit(request).await
    }

    /// Fetch the authenticated user.
    pub async fn current_user(&self) -> Result<UserInfo> {
        self.client.get("auth/user").await
    }

    /// Sign in and, unless 2FA is required, store the bearer token.
    pub async fn login(
        &self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<LoginOutcome> {
        // Sign-in is state-changing, so start from a fresh CSRF token.
        if let Err(e) = self.client.fetch_csrf_token().await {
            tracing::warn!(error = %e, "CSRF pre-fetch before sign-in failed");
        }

        let response = self
            .sign_in(&LoginRequest {
                username: username.into(),
                password: password.into(),
            })
            .await?;

        let claims = decode_claims(&response.jwt_token)?;
        if claims.is_2fa_enabled {
            tracing::info!(username = %claims.sub, "two-factor verification required");
            return Ok(LoginOutcome::TwoFactorRequired {
                username: claims.sub,
                jwt_token: response.jwt_token,
            });
        }

        self.client
            .session()
            .set_bearer_token(Some(response.jwt_token.clone()))?;
        tracing::info!(username = %response.username, "logged in");
        Ok(LoginOutcome::LoggedIn(response))
    }

    /// Verify the 2FA code and store the pending token.
    pub async fn complete_two_factor(&self, code: &str, jwt_token: &str) -> Result<()> {
        self.verify_two_factor(code, jwt_token).await?;
        self.client
            .session()
            .set_bearer_token(Some(jwt_token.to_string()))?;
        Ok(())
    }

    /// Fetch the current user and cache it along with the admin flag.
    pub async fn refresh_current_user(&self) -> Result<UserInfo> {
        let user = self.current_user().await?;
        let session = self.client.session();
        session.set_admin(user.is_admin())?;
        session.set_user(Some(user.clone()))?;
        Ok(user)
    }

    /// Forget every stored credential.
    pub fn logout(&self) -> Result<()> {
        self.client.session().clear()
    }
}
