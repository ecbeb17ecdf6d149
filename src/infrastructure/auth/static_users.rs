//! Authenticator backed by a fixed in-memory user table.

use async_trait::async_trait;
use chrono::Utc;
use hmac::{Hmac, Mac};
use serde_json::json;
use sha2::Sha256;
use std::collections::HashMap;

use super::token::generate_token;
use crate::domain::Authenticator;
use crate::domain::entities::{AuthSession, Credentials};
use crate::error::AuthError;

type HmacSha256 = Hmac<Sha256>;

const INVALID_CREDENTIALS: &str = "Credenziali non valide";

/// Checks credentials against a table of `email -> password digest`.
///
/// Passwords are kept only as HMAC-SHA256 digests keyed by `signing_secret`.
/// Emails are matched case-insensitively. Unknown emails and wrong passwords
/// produce the same error.
pub struct StaticAuthenticator {
    users: HashMap<String, String>,
    signing_secret: String,
}

impl StaticAuthenticator {
    /// Creates an authenticator with no users.
    pub fn new(signing_secret: impl Into<String>) -> Self {
        Self {
            users: HashMap::new(),
            signing_secret: signing_secret.into(),
        }
    }

    /// Creates an authenticator from plaintext `(email, password)` pairs.
    pub fn with_users<I, E, P>(signing_secret: impl Into<String>, users: I) -> Self
    where
        I: IntoIterator<Item = (E, P)>,
        E: AsRef<str>,
        P: AsRef<str>,
    {
        let mut auth = Self::new(signing_secret);
        for (email, password) in users {
            auth.add_user(email.as_ref(), password.as_ref());
        }
        auth
    }

    /// Registers or replaces a user.
    pub fn add_user(&mut self, email: &str, password: &str) {
        let digest = self.hash_password(password);
        self.users.insert(normalize_email(email), digest);
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Hashes a password with HMAC-SHA256 using the signing secret.
    ///
    /// Returns a 64-character lowercase hex-encoded MAC.
    fn hash_password(&self, password: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(password.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Compares `password` with the stored digest in constant time.
    fn verify(&self, stored_digest: &str, password: &str) -> bool {
        let Ok(expected) = hex::decode(stored_digest) else {
            return false;
        };

        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(password.as_bytes());
        mac.verify_slice(&expected).is_ok()
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[async_trait]
impl Authenticator for StaticAuthenticator {
    async fn authenticate(&self, credentials: Credentials) -> Result<AuthSession, AuthError> {
        let key = normalize_email(&credentials.email);

        let verified = self
            .users
            .get(&key)
            .is_some_and(|digest| self.verify(digest, &credentials.password));

        if !verified {
            tracing::debug!(email = %key, "Credentials did not match");
            return Err(AuthError::invalid_credentials(
                INVALID_CREDENTIALS,
                json!({ "reason": "Unknown email or wrong password" }),
            ));
        }

        Ok(AuthSession::new(
            credentials.email,
            generate_token()?,
            Utc::now(),
        ))
    }
}
