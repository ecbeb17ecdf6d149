//! Boundary trait for the external authentication collaborator.

use async_trait::async_trait;

use crate::domain::entities::{AuthSession, Credentials};
use crate::error::AuthError;

/// Verifies credentials submitted by the form.
///
/// The form controller calls [`Authenticator::authenticate`] once per accepted
/// submission and does not inspect the error beyond success/failure. Timeouts,
/// if any, are the implementation's concern.
///
/// # Implementations
///
/// - [`crate::infrastructure::auth::SimulatedAuthenticator`] - accepts anything after a delay
/// - [`crate::infrastructure::auth::StaticAuthenticator`] - fixed in-memory user table
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Checks `credentials` against the backend.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] when authentication did not succeed, for any reason.
    async fn authenticate(&self, credentials: Credentials) -> Result<AuthSession, AuthError>;
}
