//! Authenticator that accepts any credentials after a fixed delay.

use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;
use tracing::{debug, info};

use super::token::generate_token;
use crate::domain::Authenticator;
use crate::domain::entities::{AuthSession, Credentials};
use crate::error::AuthError;

/// Default latency of the simulated backend.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

/// Stand-in backend for development and demos.
///
/// Waits for `delay`, logs the submitted email, and always succeeds.
pub struct SimulatedAuthenticator {
    delay: Duration,
}

impl SimulatedAuthenticator {
    pub fn new(delay: Duration) -> Self {
        debug!(delay_ms = delay.as_millis() as u64, "Using simulated authenticator");
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedAuthenticator {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

#[async_trait]
impl Authenticator for SimulatedAuthenticator {
    async fn authenticate(&self, credentials: Credentials) -> Result<AuthSession, AuthError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        info!(email = %credentials.email, "Form data submitted");

        Ok(AuthSession::new(
            credentials.email,
            generate_token()?,
            Utc::now(),
        ))
    }
}
