//! Core domain entities of the credential form.
//!
//! Entities are plain data structures. The only behavior they carry is the
//! pure transition logic of [`FormState`].
//!
//! # Entity Types
//!
//! - [`Field`] - Identifier of an editable input
//! - [`FormState`] - Snapshot of the form data, errors, and flags
//! - [`Credentials`] - Email and password handed to the authenticator
//! - [`AuthSession`] - Payload returned on successful authentication

pub mod credentials;
pub mod field;
pub mod form_state;

pub use credentials::{AuthSession, Credentials};
pub use field::{Field, UnknownField};
pub use form_state::FormState;
