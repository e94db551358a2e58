// File: crates/energy-api/src/auth.rs
// Summary: Authentication endpoints (session-cookie based).

use crate::client::ApiClient;
use crate::error::Result;
use crate::types::{Ack, AuthStatus, Credentials, Registration, UserInfo};

impl ApiClient {
    /// Log in; on success the session cookie is stored on this client.
    pub async fn login(&self, username: &str, password: &str) -> Result<Ack<UserInfo>> {
        self.post("/auth/login", &Credentials { username, password })
            .await
    }

    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<Ack<UserInfo>> {
        self.post(
            "/auth/register",
            &Registration {
                username,
                email,
                password,
            },
        )
        .await
    }

    pub async fn logout(&self) -> Result<Ack> {
        self.post_empty("/auth/logout").await
    }

    /// Probe whether the stored session is still valid.
    pub async fn check_auth(&self) -> Result<AuthStatus> {
        self.get("/auth/check").await
    }

    pub async fn current_user(&self) -> Result<Ack<UserInfo>> {
        self.get("/auth/user").await
    }
}
