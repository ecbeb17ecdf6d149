//! Credentials handed to the authentication collaborator and its success payload.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Email and password captured from the form at submission time.
///
/// `Debug` redacts the password so credentials can be traced safely.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Successful authentication result.
///
/// Establishing a session from it and navigating away is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthSession {
    pub email: String,
    pub token: String,
    pub issued_at: DateTime<Utc>,
}

impl AuthSession {
    pub fn new(email: String, token: String, issued_at: DateTime<Utc>) -> Self {
        Self {
            email,
            token,
            issued_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_password() {
        let creds = Credentials::new("user@test.com", "supersecret");
        let debug = format!("{:?}", creds);

        assert!(debug.contains("user@test.com"));
        assert!(!debug.contains("supersecret"));
        assert!(debug.contains("***"));
    }

    #[test]
    fn test_session_serializes() {
        let now = Utc::now();
        let session = AuthSession::new("user@test.com".to_string(), "tok".to_string(), now);
        let json = serde_json::to_value(&session).unwrap();

        assert_eq!(json["email"], "user@test.com");
        assert_eq!(json["token"], "tok");
        assert!(json.get("issued_at").is_some());
    }
}
