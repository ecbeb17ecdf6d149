//! # Credential Form
//!
//! State machine behind an email/password login form: local validation,
//! transient UI state, and sequencing of the asynchronous authentication call.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Form snapshot, validation rules, authenticator trait
//! - **Application Layer** ([`application`]) - [`FormController`] sequencing edits and submissions
//! - **Infrastructure Layer** ([`infrastructure`]) - Authentication backends
//!
//! The rendering layer is external: it reads [`domain::entities::FormState`]
//! snapshots (or subscribes to them) and dispatches user actions to the controller.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use credential_form::prelude::*;
//! use credential_form::infrastructure::auth::SimulatedAuthenticator;
//!
//! # async fn run() {
//! let controller = FormController::new(Arc::new(SimulatedAuthenticator::default()));
//! controller.update_field(Field::Email, "mario@rossi.it");
//! controller.update_field(Field::Password, "password1");
//!
//! match controller.submit().await {
//!     SubmitOutcome::Authenticated(session) => println!("welcome {}", session.email),
//!     SubmitOutcome::Rejected(_) => println!("{:?}", controller.state()),
//!     SubmitOutcome::Failed(reason) => println!("login failed: {reason}"),
//! }
//! # }
//! ```
//!
//! ## Configuration
//!
//! The bundled terminal front end is configured from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod telemetry;

pub use application::services::FormController;
pub use error::AuthError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{FormController, Rejection, SubmitOutcome};
    pub use crate::domain::Authenticator;
    pub use crate::domain::entities::{AuthSession, Credentials, Field, FormState};
    pub use crate::domain::validation::{FieldError, ValidationErrors};
    pub use crate::error::AuthError;
}
