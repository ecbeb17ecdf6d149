//! Form controller: single source of truth for the credential form.

use std::sync::Arc;
use tokio::sync::watch;

use crate::domain::Authenticator;
use crate::domain::entities::{AuthSession, Credentials, Field, FormState};
use crate::domain::validation::ValidationErrors;
use crate::error::AuthError;

const SUBMISSIONS_METRIC: &str = "credential_form_submissions_total";

/// Why a submission never reached the authenticator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// At least one field failed validation. Messages are also stored in the form state.
    #[error("Form contains invalid fields")]
    Invalid(ValidationErrors),

    /// Another submission is still in flight.
    #[error("A submission is already in progress")]
    AlreadySubmitting,
}

/// Result of [`FormController::submit`].
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Authenticated(AuthSession),
    Rejected(Rejection),
    Failed(AuthError),
}

impl SubmitOutcome {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SubmitOutcome::Authenticated(_))
    }

    fn label(&self) -> &'static str {
        match self {
            SubmitOutcome::Authenticated(_) => "authenticated",
            SubmitOutcome::Rejected(Rejection::Invalid(_)) => "invalid",
            SubmitOutcome::Rejected(Rejection::AlreadySubmitting) => "already_submitting",
            SubmitOutcome::Failed(_) => "failed",
        }
    }
}

/// Holds the `submitting` flag for the lifetime of one submission.
///
/// The flag is raised by [`SubmittingGuard::acquire`] and lowered on drop, so
/// every exit path (success, failure, or the submit future being dropped)
/// leaves the form idle.
struct SubmittingGuard<'a> {
    state: &'a watch::Sender<FormState>,
}

impl<'a> SubmittingGuard<'a> {
    /// Validates the form and, if it is idle and valid, marks it as submitting.
    ///
    /// Check and flag flip happen in one state update, so two callers can never
    /// both be admitted.
    fn acquire(state: &'a watch::Sender<FormState>) -> Result<(Self, Credentials), Rejection> {
        let mut admission = Err(Rejection::AlreadySubmitting);

        state.send_if_modified(|current| {
            if current.submitting() {
                return false;
            }

            let (validated, errors) = current.validated();
            if !errors.is_empty() {
                let changed = validated != *current;
                *current = validated;
                admission = Err(Rejection::Invalid(errors));
                return changed;
            }

            *current = validated.with_submitting(true);
            admission = Ok(Credentials::new(current.email(), current.password()));
            true
        });

        admission.map(|credentials| (Self { state }, credentials))
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.state
            .send_modify(|current| *current = current.with_submitting(false));
    }
}

/// Owns the form state, validates it, and sequences submissions.
///
/// All operations take `&self`: while [`Self::submit`] is waiting on the
/// authenticator, the rendering layer can keep calling [`Self::update_field`]
/// and [`Self::toggle_password_visibility`]. Every transition is published to
/// the receivers returned by [`Self::subscribe`].
pub struct FormController<A: Authenticator + ?Sized> {
    authenticator: Arc<A>,
    state: watch::Sender<FormState>,
}

impl<A: Authenticator + ?Sized> FormController<A> {
    /// Creates a controller with an empty form.
    pub fn new(authenticator: Arc<A>) -> Self {
        let (state, _) = watch::channel(FormState::new());
        Self {
            authenticator,
            state,
        }
    }

    /// Returns a snapshot of the current form state.
    pub fn state(&self) -> FormState {
        self.state.borrow().clone()
    }

    /// Returns a receiver notified after every state transition.
    pub fn subscribe(&self) -> watch::Receiver<FormState> {
        self.state.subscribe()
    }

    pub fn can_submit(&self) -> bool {
        self.state.borrow().can_submit()
    }

    /// Overwrites a field and clears its error message, if any.
    ///
    /// The new value is not validated until the next [`Self::validate`] or
    /// [`Self::submit`].
    pub fn update_field(&self, field: Field, value: impl Into<String>) {
        let value = value.into();
        tracing::trace!(field = %field, len = value.chars().count(), "Field updated");
        self.state
            .send_modify(|current| *current = current.with_field(field, value));
    }

    pub fn toggle_password_visibility(&self) {
        self.state
            .send_modify(|current| *current = current.with_password_visibility_toggled());
    }

    /// Re-runs the field rules and stores the resulting messages.
    ///
    /// Returns `true` iff both fields are valid. Does not touch `submitting`.
    pub fn validate(&self) -> bool {
        let mut valid = false;
        self.state.send_modify(|current| {
            let (validated, errors) = current.validated();
            valid = errors.is_empty();
            *current = validated;
        });
        valid
    }

    /// Validates the form and, if valid, hands the credentials to the authenticator.
    ///
    /// # Outcomes
    ///
    /// - [`SubmitOutcome::Rejected`] with [`Rejection::AlreadySubmitting`] if a
    ///   submission is in flight; nothing else happens
    /// - [`SubmitOutcome::Rejected`] with [`Rejection::Invalid`] if validation
    ///   fails; the messages stay in the form state
    /// - [`SubmitOutcome::Authenticated`] / [`SubmitOutcome::Failed`] once the
    ///   authenticator resolves; `submitting` is reset in both cases
    ///
    /// Failures are reported as-is: no retry, no error message is written into
    /// the form.
    pub async fn submit(&self) -> SubmitOutcome {
        let outcome = match SubmittingGuard::acquire(&self.state) {
            Ok((guard, credentials)) => {
                tracing::info!(email = %credentials.email, "Submitting credentials");

                let result = self.authenticator.authenticate(credentials).await;
                drop(guard);

                match result {
                    Ok(session) => {
                        tracing::info!(email = %session.email, "Authentication succeeded");
                        SubmitOutcome::Authenticated(session)
                    }
                    Err(reason) => {
                        tracing::warn!(code = reason.code(), "Authentication failed: {}", reason);
                        SubmitOutcome::Failed(reason)
                    }
                }
            }
            Err(rejection) => {
                tracing::debug!("Submission rejected: {}", rejection);
                SubmitOutcome::Rejected(rejection)
            }
        };

        metrics::counter!(SUBMISSIONS_METRIC, "outcome" => outcome.label()).increment(1);

        outcome
    }
}
