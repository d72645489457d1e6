//! khata auth - thin wrappers over a hosted authentication backend
//!
//! Provides the `AuthBackend` seam (email/password, OAuth popup and
//! redirect flows, sign-out, session observation, password-reset
//! dispatch), a typed `AuthError` taxonomy, and the `AuthClient` facade
//! whose provider sign-in falls back from the popup flow to the redirect
//! flow when the popup is unusable for the current origin or environment.

pub mod backend;
pub mod client;
pub mod errors;

pub use backend::{AuthBackend, Provider, Session};
pub use client::AuthClient;
pub use errors::{AuthError, Result};
