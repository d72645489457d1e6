use thiserror::Error;

/// Result type alias using AuthError
pub type Result<T> = std::result::Result<T, AuthError>;

/// Error taxonomy for authentication operations
///
/// Failures surface as structured errors, never as a bare failure flag.
/// Two kinds are special: `UnauthorizedDomain` and `OperationNotSupported`
/// trigger the popup-to-redirect fallback in the client instead of
/// failing the sign-in outright.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Wrong email/password combination or unknown account
    #[error("invalid credentials")]
    InvalidCredentials,

    /// An account with this email already exists
    #[error("email already in use: {email}")]
    EmailAlreadyInUse { email: String },

    /// Password rejected by backend policy
    #[error("weak password: {reason}")]
    WeakPassword { reason: String },

    /// The identity provider is not authorized for the current origin
    #[error("provider not authorized for origin: {origin}")]
    UnauthorizedDomain { origin: String },

    /// The sign-in flow is unsupported in the current environment
    #[error("operation not supported: {reason}")]
    OperationNotSupported { reason: String },

    /// The backend call failed at the transport level
    #[error("network failure: {message}")]
    Network { message: String },

    /// Any other backend-reported failure
    #[error("auth backend error [{code}]: {message}")]
    Backend { code: String, message: String },
}

impl AuthError {
    /// Stable error code for programmatic handling
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "ERR_INVALID_CREDENTIALS",
            AuthError::EmailAlreadyInUse { .. } => "ERR_EMAIL_IN_USE",
            AuthError::WeakPassword { .. } => "ERR_WEAK_PASSWORD",
            AuthError::UnauthorizedDomain { .. } => "ERR_UNAUTHORIZED_DOMAIN",
            AuthError::OperationNotSupported { .. } => "ERR_OPERATION_NOT_SUPPORTED",
            AuthError::Network { .. } => "ERR_NETWORK",
            AuthError::Backend { .. } => "ERR_BACKEND",
        }
    }

    /// True for the kinds that trigger the redirect-flow fallback
    pub fn wants_redirect_fallback(&self) -> bool {
        matches!(
            self,
            AuthError::UnauthorizedDomain { .. } | AuthError::OperationNotSupported { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_kinds() {
        assert!(AuthError::UnauthorizedDomain {
            origin: "http://localhost".to_string()
        }
        .wants_redirect_fallback());
        assert!(AuthError::OperationNotSupported {
            reason: "popups blocked".to_string()
        }
        .wants_redirect_fallback());
        assert!(!AuthError::InvalidCredentials.wants_redirect_fallback());
        assert!(!AuthError::Network {
            message: "timeout".to_string()
        }
        .wants_redirect_fallback());
    }

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(AuthError::InvalidCredentials.code(), "ERR_INVALID_CREDENTIALS");
        assert_eq!(
            AuthError::EmailAlreadyInUse {
                email: "a@b.c".to_string()
            }
            .code(),
            "ERR_EMAIL_IN_USE"
        );
    }
}
