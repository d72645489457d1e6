//! The authentication backend seam

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// Identity providers the backend can sign a user in through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provider {
    /// Email/password account held by the backend itself
    Password,
    /// Third-party Google identity
    Google,
}

/// A signed-in user session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Backend-assigned user id
    pub user_id: String,

    /// Account email, when the provider discloses one
    pub email: Option<String>,

    /// The provider this session was established through
    pub provider: Provider,
}

/// A hosted authentication service
///
/// Implementations wrap the actual backend SDK. The popup and redirect
/// provider flows are distinct operations because they fail differently:
/// the popup flow is rejected outright for unauthorized origins and
/// environments without popup support, which is what the client's
/// fallback keys on.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Create an email/password account and sign it in
    async fn create_user(&self, email: &str, password: &str) -> Result<Session>;

    /// Sign in with an email/password credential
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session>;

    /// Sign in through an identity provider using the popup flow
    async fn sign_in_popup(&self, provider: Provider) -> Result<Session>;

    /// Sign in through an identity provider using the redirect flow
    async fn sign_in_redirect(&self, provider: Provider) -> Result<Session>;

    /// End the current session
    async fn sign_out(&self) -> Result<()>;

    /// The current session, if one is established
    async fn current_session(&self) -> Option<Session>;

    /// Dispatch a password-reset email
    async fn send_password_reset(&self, email: &str) -> Result<()>;
}
