//! Business logic services for the application layer.

pub mod form_controller;

pub use form_controller::{FormController, Rejection, SubmitOutcome};
