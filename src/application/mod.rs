//! Application layer services implementing the form behavior.
//!
//! This layer orchestrates the domain rules and the authenticator contract and
//! provides the API consumed by a rendering layer.
//!
//! # Available Services
//!
//! - [`services::form_controller::FormController`] - Form state, validation, and submission

pub mod services;
