//! Authentication backends implementing [`crate::domain::Authenticator`].

pub mod simulated;
pub mod static_users;
pub mod token;

pub use simulated::SimulatedAuthenticator;
pub use static_users::StaticAuthenticator;
