#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;
use credential_form::infrastructure::auth::{SimulatedAuthenticator, StaticAuthenticator};
use credential_form::prelude::*;

pub const TEST_SECRET: &str = "test-signing-secret";
pub const TEST_EMAIL: &str = "mario@rossi.it";
pub const TEST_PASSWORD: &str = "password1";

pub fn simulated_controller() -> FormController<SimulatedAuthenticator> {
    FormController::new(Arc::new(SimulatedAuthenticator::new(Duration::ZERO)))
}

pub fn slow_controller(delay: Duration) -> FormController<SimulatedAuthenticator> {
    FormController::new(Arc::new(SimulatedAuthenticator::new(delay)))
}

pub fn static_controller() -> FormController<StaticAuthenticator> {
    let auth = StaticAuthenticator::with_users(TEST_SECRET, [(TEST_EMAIL, TEST_PASSWORD)]);
    FormController::new(Arc::new(auth))
}

pub fn fill<A: Authenticator + ?Sized>(controller: &FormController<A>, email: &str, password: &str) {
    controller.update_field(Field::Email, email);
    controller.update_field(Field::Password, password);
}
