//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`auth`] - Authentication backends (simulated and static user table)

pub mod auth;
