//! Failure reasons reported by authentication collaborators.
//!
//! The form controller treats [`AuthError`] as opaque: it forwards the value to
//! the caller inside [`crate::application::services::SubmitOutcome::Failed`]
//! without inspecting the variant.

use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: ErrorInfo<'a>,
}

#[derive(Serialize)]
struct ErrorInfo<'a> {
    code: &'static str,
    message: &'a str,
    details: &'a Value,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthError {
    #[error("{message}")]
    InvalidCredentials { message: String, details: Value },
    #[error("{message}")]
    Unavailable { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AuthError {
    pub fn invalid_credentials(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidCredentials {
            message: message.into(),
            details,
        }
    }
    pub fn unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::Unavailable {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Stable machine-readable code for the failure kind.
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials { .. } => "invalid_credentials",
            AuthError::Unavailable { .. } => "unavailable",
            AuthError::Internal { .. } => "internal_error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AuthError::InvalidCredentials { message, .. }
            | AuthError::Unavailable { message, .. }
            | AuthError::Internal { message, .. } => message,
        }
    }

    pub fn details(&self) -> &Value {
        match self {
            AuthError::InvalidCredentials { details, .. }
            | AuthError::Unavailable { details, .. }
            | AuthError::Internal { details, .. } => details,
        }
    }

    /// Renders the error as `{"error": {"code", "message", "details"}}`.
    pub fn to_json(&self) -> Value {
        let body = ErrorBody {
            error: ErrorInfo {
                code: self.code(),
                message: self.message(),
                details: self.details(),
            },
        };

        serde_json::to_value(body).unwrap_or_else(|_| json!({ "error": { "code": self.code() } }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_message() {
        let err = AuthError::invalid_credentials("Credenziali non valide", json!({}));
        assert_eq!(err.to_string(), "Credenziali non valide");
    }

    #[test]
    fn test_codes() {
        assert_eq!(
            AuthError::invalid_credentials("x", json!({})).code(),
            "invalid_credentials"
        );
        assert_eq!(AuthError::unavailable("x", json!({})).code(), "unavailable");
        assert_eq!(AuthError::internal("x", json!({})).code(), "internal_error");
    }

    #[test]
    fn test_to_json_shape() {
        let err = AuthError::unavailable("Backend down", json!({"retry_after": 5}));
        let body = err.to_json();

        assert_eq!(body["error"]["code"], "unavailable");
        assert_eq!(body["error"]["message"], "Backend down");
        assert_eq!(body["error"]["details"]["retry_after"], 5);
    }
}
