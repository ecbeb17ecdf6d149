//! Domain layer containing the form entities and rules.
//!
//! This module is independent of any runtime, rendering layer, or backend.
//!
//! # Architecture
//!
//! - [`entities`] - Form snapshot, field identifiers, credentials
//! - [`validation`] - Field-level validation rules and messages
//! - [`authenticator`] - Contract implemented by authentication backends
//!
//! # Submission Flow
//!
//! 1. The rendering layer dispatches a submit event to
//!    [`crate::application::services::FormController`]
//! 2. [`entities::FormState::validated`] repopulates the error messages
//! 3. On success the controller calls [`authenticator::Authenticator::authenticate`]
//! 4. The outcome is returned to the caller, which decides what to show or where to go

pub mod authenticator;
pub mod entities;
pub mod validation;

pub use authenticator::Authenticator;

#[cfg(test)]
pub use authenticator::MockAuthenticator;
