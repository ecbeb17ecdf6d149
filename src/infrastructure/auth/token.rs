//! Session token generation.

use base64::Engine as _;

use crate::error::AuthError;
use serde_json::json;

/// Length of random bytes before base64 encoding.
const TOKEN_LENGTH_BYTES: usize = 24;

/// Generates an opaque session token.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing a 32-character token.
///
/// # Errors
///
/// Returns [`AuthError::Internal`] if the system random number generator fails.
pub fn generate_token() -> Result<String, AuthError> {
    let mut buffer = [0u8; TOKEN_LENGTH_BYTES];

    getrandom::fill(&mut buffer).map_err(|e| {
        AuthError::internal(
            "Failed to generate session token",
            json!({ "reason": e.to_string() }),
        )
    })?;

    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_token_length() {
        let token = generate_token().unwrap();
        assert_eq!(token.len(), 32);
    }

    #[test]
    fn test_generate_token_charset() {
        let token = generate_token().unwrap();
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }

    #[test]
    fn test_generate_token_unique() {
        let a = generate_token().unwrap();
        let b = generate_token().unwrap();
        assert_ne!(a, b);
    }
}
