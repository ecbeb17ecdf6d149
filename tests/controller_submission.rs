mod common;

use credential_form::prelude::*;
use std::time::Duration;

#[tokio::test]
async fn test_valid_credentials_are_authenticated() {
    let controller = common::static_controller();
    common::fill(&controller, common::TEST_EMAIL, common::TEST_PASSWORD);

    let outcome = controller.submit().await;

    match outcome {
        SubmitOutcome::Authenticated(session) => {
            assert_eq!(session.email, common::TEST_EMAIL);
            assert!(!session.token.is_empty());
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert!(!controller.state().submitting());
}

#[tokio::test]
async fn test_rejected_by_backend() {
    let controller = common::static_controller();
    common::fill(&controller, common::TEST_EMAIL, "wrong-password");

    let outcome = controller.submit().await;

    let SubmitOutcome::Failed(reason) = outcome else {
        panic!("expected a failure, got {outcome:?}");
    };
    assert_eq!(reason.code(), "invalid_credentials");

    let state = controller.state();
    assert!(!state.submitting());
    assert_eq!(state.email_error(), "");
    assert_eq!(state.password_error(), "");
}

#[tokio::test]
async fn test_invalid_form_is_rejected_locally() {
    let controller = common::static_controller();

    let outcome = controller.submit().await;

    let SubmitOutcome::Rejected(Rejection::Invalid(errors)) = outcome else {
        panic!("expected a validation rejection, got {outcome:?}");
    };
    assert_eq!(errors.email, Some(FieldError::EmptyField(Field::Email)));
    assert_eq!(errors.password, Some(FieldError::EmptyField(Field::Password)));
    assert_eq!(controller.state().email_error(), "Email è richiesta");
}

#[tokio::test(start_paused = true)]
async fn test_busy_state_is_observable_and_exclusive() {
    let controller = common::slow_controller(Duration::from_secs(2));
    common::fill(&controller, "user@test.com", "abcdef");
    let mut rx = controller.subscribe();

    let first = controller.submit();
    let observer = async {
        rx.wait_for(|s| s.submitting()).await.unwrap();
        assert!(!controller.can_submit());

        let second = controller.submit().await;
        assert_eq!(second, SubmitOutcome::Rejected(Rejection::AlreadySubmitting));

        rx.wait_for(|s| !s.submitting()).await.unwrap();
    };

    let (outcome, ()) = tokio::join!(first, observer);

    assert!(outcome.is_authenticated());
    assert!(controller.can_submit());
}

#[tokio::test]
async fn test_dyn_authenticator_from_config() {
    use credential_form::config::{AuthMode, Config};

    let config = Config {
        auth_mode: AuthMode::Static,
        auth_signing_secret: Some(common::TEST_SECRET.to_string()),
        auth_users: vec![(
            common::TEST_EMAIL.to_string(),
            common::TEST_PASSWORD.to_string(),
        )],
        ..Config::default()
    };
    config.validate().unwrap();

    let controller = FormController::new(config.build_authenticator());
    common::fill(&controller, "MARIO@rossi.it", common::TEST_PASSWORD);

    assert!(controller.submit().await.is_authenticated());
}
