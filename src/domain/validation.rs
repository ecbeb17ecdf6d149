//! Field-level validation rules of the credential form.
//!
//! Rules are evaluated only when the form is validated (submit attempt). Each
//! field yields at most one [`FieldError`]; the first failing rule wins.
//!
//! | Field      | Rule                                   | Message                                          |
//! |------------|----------------------------------------|--------------------------------------------------|
//! | `email`    | trimmed value empty                    | `Email è richiesta`                              |
//! | `email`    | not `local@domain.tld`                 | `Formato email non valido`                       |
//! | `password` | empty                                  | `Password è richiesta`                           |
//! | `password` | fewer than [`MIN_PASSWORD_LENGTH`]     | `La password deve contenere almeno 6 caratteri`  |

use regex::Regex;
use std::sync::LazyLock;

use crate::domain::entities::Field;

/// Minimum number of characters (Unicode scalar values) in a password.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Non-whitespace, non-`@` local part, `@`, then a domain with at least one dot.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// A validation failure attached to one input.
///
/// `Display` renders the message shown under the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{} è richiesta", .0.label())]
    EmptyField(Field),

    #[error("Formato {} non valido", .0.name())]
    InvalidFormat(Field),

    #[error("La {} deve contenere almeno {min} caratteri", .field.name())]
    TooShort { field: Field, min: usize },
}

impl FieldError {
    pub fn field(&self) -> Field {
        match *self {
            FieldError::EmptyField(field)
            | FieldError::InvalidFormat(field)
            | FieldError::TooShort { field, .. } => field,
        }
    }
}

/// Outcome of validating the whole form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub email: Option<FieldError>,
    pub password: Option<FieldError>,
}

impl ValidationErrors {
    /// True when both fields passed.
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Email => self.email,
            Field::Password => self.password,
        }
    }

    /// Message for `field`, or an empty string when the field is valid.
    pub fn message(&self, field: Field) -> String {
        self.get(field).map(|e| e.to_string()).unwrap_or_default()
    }
}

/// Checks an email address.
///
/// # Errors
///
/// - [`FieldError::EmptyField`] if the value is blank after trimming
/// - [`FieldError::InvalidFormat`] if it does not look like `local@domain.tld`
///
/// # Examples
///
/// ```
/// use credential_form::domain::validation::validate_email;
///
/// assert!(validate_email("user@test.com").is_ok());
/// assert!(validate_email("user@test").is_err());
/// ```
pub fn validate_email(email: &str) -> Result<(), FieldError> {
    if email.trim().is_empty() {
        return Err(FieldError::EmptyField(Field::Email));
    }

    if !EMAIL_REGEX.is_match(email) {
        return Err(FieldError::InvalidFormat(Field::Email));
    }

    Ok(())
}

/// Checks a password.
///
/// Length is counted in characters, not bytes.
///
/// # Errors
///
/// - [`FieldError::EmptyField`] if the value is empty
/// - [`FieldError::TooShort`] if it has fewer than [`MIN_PASSWORD_LENGTH`] characters
pub fn validate_password(password: &str) -> Result<(), FieldError> {
    if password.is_empty() {
        return Err(FieldError::EmptyField(Field::Password));
    }

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(FieldError::TooShort {
            field: Field::Password,
            min: MIN_PASSWORD_LENGTH,
        });
    }

    Ok(())
}

/// Runs both field rules.
pub fn validate_credentials(email: &str, password: &str) -> ValidationErrors {
    ValidationErrors {
        email: validate_email(email).err(),
        password: validate_password(password).err(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_required_message() {
        let err = validate_email("").unwrap_err();
        assert_eq!(err, FieldError::EmptyField(Field::Email));
        assert_eq!(err.to_string(), "Email è richiesta");
    }

    #[test]
    fn test_email_whitespace_only_is_empty() {
        assert_eq!(
            validate_email("   \t").unwrap_err(),
            FieldError::EmptyField(Field::Email)
        );
    }

    #[test]
    fn test_email_invalid_format_message() {
        let err = validate_email("user@test").unwrap_err();
        assert_eq!(err, FieldError::InvalidFormat(Field::Email));
        assert_eq!(err.to_string(), "Formato email non valido");
    }

    #[test]
    fn test_email_rejected_shapes() {
        for input in [
            "plainaddress",
            "@test.com",
            "user@",
            "user@.",
            "user@test.",
            "user@@test.com",
            "us er@test.com",
            "user@te st.com",
            " user@test.com",
            "user@test.com ",
            "user.test.com",
        ] {
            assert_eq!(
                validate_email(input),
                Err(FieldError::InvalidFormat(Field::Email)),
                "expected {input:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_email_accepted_shapes() {
        for input in [
            "user@test.com",
            "a@b.c",
            "first.last+tag@sub.example.org",
            "utente@dominio.it",
            "ünïcødé@exämple.de",
            "user@test.com.",
        ] {
            assert!(validate_email(input).is_ok(), "expected {input:?} to pass");
        }
    }

    #[test]
    fn test_password_required_message() {
        let err = validate_password("").unwrap_err();
        assert_eq!(err, FieldError::EmptyField(Field::Password));
        assert_eq!(err.to_string(), "Password è richiesta");
    }

    #[test]
    fn test_password_too_short_message() {
        let err = validate_password("abcde").unwrap_err();
        assert_eq!(
            err,
            FieldError::TooShort {
                field: Field::Password,
                min: 6
            }
        );
        assert_eq!(
            err.to_string(),
            "La password deve contenere almeno 6 caratteri"
        );
    }

    #[test]
    fn test_password_whitespace_is_not_empty() {
        assert!(validate_password("      ").is_ok());
        assert!(matches!(
            validate_password(" "),
            Err(FieldError::TooShort { .. })
        ));
    }

    #[test]
    fn test_password_length_counts_characters() {
        // 5 characters, 10 bytes
        assert!(validate_password("ààààà").is_err());
        assert!(validate_password("àààààà").is_ok());
    }

    #[test]
    fn test_password_boundary() {
        for len in 1..MIN_PASSWORD_LENGTH {
            assert!(validate_password(&"x".repeat(len)).is_err());
        }
        assert!(validate_password(&"x".repeat(MIN_PASSWORD_LENGTH)).is_ok());
    }

    #[test]
    fn test_validate_credentials_collects_both() {
        let errors = validate_credentials("", "");
        assert!(!errors.is_empty());
        assert_eq!(errors.message(Field::Email), "Email è richiesta");
        assert_eq!(errors.message(Field::Password), "Password è richiesta");

        let errors = validate_credentials("user@test.com", "abcdef");
        assert!(errors.is_empty());
        assert_eq!(errors.message(Field::Email), "");
    }

    #[test]
    fn test_field_error_reports_field() {
        assert_eq!(FieldError::InvalidFormat(Field::Email).field(), Field::Email);
        assert_eq!(
            FieldError::TooShort {
                field: Field::Password,
                min: 6
            }
            .field(),
            Field::Password
        );
    }
}
