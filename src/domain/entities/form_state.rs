//! Immutable snapshot of the credential form.
//!
//! Every user event is expressed as a transition that consumes nothing and
//! returns the next snapshot, so the rules can be exercised without any
//! rendering layer or runtime.

use serde::Serialize;

use crate::domain::entities::Field;
use crate::domain::validation::{ValidationErrors, validate_credentials};

/// Data, error messages, and transient flags of one form instance.
///
/// An empty error string means "no error". `can_submit` is derived on demand
/// and never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormState {
    email: String,
    password: String,
    email_error: String,
    password_error: String,
    password_visible: bool,
    submitting: bool,
}

impl FormState {
    /// All fields empty, no errors, password hidden, idle.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn email_error(&self) -> &str {
        &self.email_error
    }

    pub fn password_error(&self) -> &str {
        &self.password_error
    }

    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    pub fn submitting(&self) -> bool {
        self.submitting
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    pub fn error(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email_error,
            Field::Password => &self.password_error,
        }
    }

    pub fn has_error(&self, field: Field) -> bool {
        !self.error(field).is_empty()
    }

    /// Whether the submit action is enabled.
    pub fn can_submit(&self) -> bool {
        !self.email.is_empty()
            && !self.password.is_empty()
            && self.email_error.is_empty()
            && self.password_error.is_empty()
            && !self.submitting
    }

    /// Inputs and the visibility toggle render as disabled while a submission runs.
    pub fn inputs_disabled(&self) -> bool {
        self.submitting
    }

    /// HTML-style input type for the password box.
    pub fn password_input_type(&self) -> &'static str {
        if self.password_visible {
            "text"
        } else {
            "password"
        }
    }

    /// Overwrites `field` and clears its error, without re-validating.
    pub fn with_field(&self, field: Field, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        match field {
            Field::Email => {
                next.email = value.into();
                next.email_error.clear();
            }
            Field::Password => {
                next.password = value.into();
                next.password_error.clear();
            }
        }
        next
    }

    pub fn with_password_visibility_toggled(&self) -> Self {
        Self {
            password_visible: !self.password_visible,
            ..self.clone()
        }
    }

    /// Re-evaluates both field rules and stores their messages.
    ///
    /// `submitting` is left untouched.
    pub fn validated(&self) -> (Self, ValidationErrors) {
        let errors = validate_credentials(&self.email, &self.password);
        let next = Self {
            email_error: errors.message(Field::Email),
            password_error: errors.message(Field::Password),
            ..self.clone()
        };
        (next, errors)
    }

    pub(crate) fn with_submitting(&self, submitting: bool) -> Self {
        Self {
            submitting,
            ..self.clone()
        }
    }
}
