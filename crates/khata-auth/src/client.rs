//! The authentication facade

use tracing::{info, warn};

use crate::backend::{AuthBackend, Provider, Session};
use crate::errors::{AuthError, Result};

/// Minimum password length accepted before hitting the backend
const MIN_PASSWORD_LEN: usize = 6;

/// Thin, validated wrappers over an [`AuthBackend`]
pub struct AuthClient<B: AuthBackend> {
    backend: B,
}

impl<B: AuthBackend> AuthClient<B> {
    /// Wrap a backend
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Create an email/password account and sign it in
    ///
    /// # Errors
    ///
    /// * `WeakPassword` - password shorter than six characters (checked
    ///   before the backend is contacted)
    /// * `InvalidCredentials` - malformed email
    /// * any backend error, unchanged
    pub async fn register(&self, email: &str, password: &str) -> Result<Session> {
        validate_email(email)?;
        if password.len() < MIN_PASSWORD_LEN {
            return Err(AuthError::WeakPassword {
                reason: format!("password must be at least {MIN_PASSWORD_LEN} characters"),
            });
        }
        let session = self.backend.create_user(email, password).await?;
        info!(user_id = %session.user_id, "account created");
        Ok(session)
    }

    /// Sign in with an email/password credential
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        validate_email(email)?;
        self.backend.sign_in(email, password).await
    }

    /// Sign in through an identity provider
    ///
    /// Tries the popup flow first. Exactly when the popup fails because
    /// the provider is unauthorized for the current origin or the popup is
    /// unsupported in the current environment, falls back to the redirect
    /// flow; every other error surfaces unchanged.
    pub async fn sign_in_with_provider(&self, provider: Provider) -> Result<Session> {
        match self.backend.sign_in_popup(provider).await {
            Ok(session) => Ok(session),
            Err(err) if err.wants_redirect_fallback() => {
                warn!(code = err.code(), %err, "popup sign-in unusable, falling back to redirect");
                self.backend.sign_in_redirect(provider).await
            }
            Err(err) => Err(err),
        }
    }

    /// End the current session
    pub async fn sign_out(&self) -> Result<()> {
        self.backend.sign_out().await
    }

    /// The current session, if one is established
    pub async fn current_session(&self) -> Option<Session> {
        self.backend.current_session().await
    }

    /// Dispatch a password-reset email
    pub async fn send_password_reset(&self, email: &str) -> Result<()> {
        validate_email(email)?;
        self.backend.send_password_reset(email).await
    }
}

/// Reject obviously malformed emails before a round trip
fn validate_email(email: &str) -> Result<()> {
    let trimmed = email.trim();
    if trimmed.is_empty() || !trimmed.contains('@') {
        return Err(AuthError::InvalidCredentials);
    }
    Ok(())
}
