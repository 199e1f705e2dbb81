//! Auth Endpoints
//!
//! Password sign-in and sign-out against the hosted auth service. Credential
//! verification happens entirely on the backend; this app never checks
//! passwords itself.

use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{auth_url, bearer, check, ApiError};
use crate::config;
use crate::models::Session;

/// Token grant response from `POST /auth/v1/token`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Lifetime in seconds from issuance.
    pub expires_in: i64,
    pub user: AuthUser,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthUser {
    pub id: String,
}

impl TokenResponse {
    pub fn into_session(self, now_secs: i64) -> Session {
        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at: now_secs + self.expires_in,
            user_id: self.user.id,
        }
    }
}

/// Exchange credentials for a backend-issued session.
pub async fn sign_in(email: &str, password: &str) -> Result<TokenResponse, ApiError> {
    #[derive(Serialize)]
    struct Credentials<'a> {
        email: &'a str,
        password: &'a str,
    }

    let resp = Client::new()
        .post(auth_url("token"))
        .query(&[("grant_type", "password")])
        .header("apikey", config::BACKEND_ANON_KEY)
        .json(&Credentials { email, password })
        .send()
        .await?;
    Ok(check(resp).await?.json().await?)
}

/// Revoke the session on the backend.
pub async fn sign_out(access_token: &str) -> Result<(), ApiError> {
    let resp = Client::new()
        .post(auth_url("logout"))
        .header("apikey", config::BACKEND_ANON_KEY)
        .header(AUTHORIZATION, bearer(Some(access_token)))
        .send()
        .await?;
    check(resp).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_response_into_session() {
        let tokens = TokenResponse {
            access_token: "at".into(),
            refresh_token: "rt".into(),
            expires_in: 3600,
            user: AuthUser { id: "u-1".into() },
        };
        let session = tokens.into_session(1_000);
        assert_eq!(session.expires_at, 4_600);
        assert_eq!(session.user_id, "u-1");
        assert!(!session.is_expired(4_599));
        assert!(session.is_expired(4_600));
    }
}
