//! Terminal front end for the credential form.
//!
//! Renders the form state after every action and dispatches field edits, the
//! password visibility toggle, and submissions to the
//! [`FormController`](credential_form::application::services::FormController).
//!
//! # Usage
//!
//! ```bash
//! # Simulated backend, accepts anything after 2 seconds
//! cargo run
//!
//! # Prefill the email and shorten the simulated latency
//! cargo run -- --email mario@rossi.it --delay-ms 500
//!
//! # Static user table
//! AUTH_MODE=static AUTH_SIGNING_SECRET=dev AUTH_USERS="mario@rossi.it:password1" cargo run
//! ```

use credential_form::application::services::{FormController, Rejection, SubmitOutcome};
use credential_form::config::Config;
use credential_form::domain::Authenticator;
use credential_form::domain::entities::{Field, FormState};
use credential_form::telemetry;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use dialoguer::{Input, Password, Select};
use tokio::sync::watch;

/// Interactive login form.
#[derive(Parser)]
#[command(name = "credential-form")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Prefill the email field
    #[arg(short, long)]
    email: Option<String>,

    /// Latency of the simulated backend in milliseconds (overrides AUTH_DELAY_MS)
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Log format: text or json (overrides LOG_FORMAT)
    #[arg(long)]
    log_format: Option<String>,
}

/// Menu entries, in display order.
#[derive(Clone, Copy)]
enum Action {
    EditEmail,
    EditPassword,
    ToggleVisibility,
    Submit,
    Quit,
}

const ACTIONS: [Action; 5] = [
    Action::EditEmail,
    Action::EditPassword,
    Action::ToggleVisibility,
    Action::Submit,
    Action::Quit,
];

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(delay_ms) = cli.delay_ms {
        config.auth_delay_ms = delay_ms;
    }
    if let Some(log_format) = cli.log_format {
        config.log_format = log_format;
    }
    config.validate()?;

    telemetry::init(&config)?;
    config.print_summary();

    let controller = FormController::new(config.build_authenticator());
    if let Some(email) = cli.email {
        controller.update_field(Field::Email, email);
    }

    tokio::spawn(watch_submission(controller.subscribe()));

    run_form(&controller).await
}

/// Prints a busy indicator whenever a submission starts.
async fn watch_submission(mut rx: watch::Receiver<FormState>) {
    let mut was_submitting = false;

    while rx.changed().await.is_ok() {
        let submitting = rx.borrow_and_update().submitting();
        if submitting && !was_submitting {
            println!("{}", "⏳ Accedendo...".bright_blue());
        }
        was_submitting = submitting;
    }
}

/// Main interaction loop. Returns once the user is authenticated or quits.
async fn run_form(controller: &FormController<dyn Authenticator>) -> Result<()> {
    loop {
        let state = controller.state();
        render(&state);

        let labels: Vec<String> = ACTIONS
            .iter()
            .map(|action| action_label(action, &state))
            .collect();

        let selection = Select::new()
            .with_prompt("Azione")
            .items(&labels)
            .default(0)
            .interact()?;

        match ACTIONS[selection] {
            Action::EditEmail => {
                let email: String = Input::new()
                    .with_prompt(Field::Email.label())
                    .with_initial_text(state.email())
                    .allow_empty(true)
                    .interact_text()?;
                controller.update_field(Field::Email, email);
            }
            Action::EditPassword => {
                let password = if state.password_visible() {
                    Input::<String>::new()
                        .with_prompt(Field::Password.label())
                        .with_initial_text(state.password())
                        .allow_empty(true)
                        .interact_text()?
                } else {
                    Password::new()
                        .with_prompt(Field::Password.label())
                        .allow_empty_password(true)
                        .interact()?
                };
                controller.update_field(Field::Password, password);
            }
            Action::ToggleVisibility => controller.toggle_password_visibility(),
            Action::Submit => {
                if report(controller.submit().await) {
                    return Ok(());
                }
            }
            Action::Quit => {
                println!("{}", "👋 Alla prossima".dimmed());
                return Ok(());
            }
        }
    }
}

fn action_label(action: &Action, state: &FormState) -> String {
    match action {
        Action::EditEmail => "Modifica email".to_string(),
        Action::EditPassword => "Modifica password".to_string(),
        Action::ToggleVisibility if state.password_visible() => "Nascondi password".to_string(),
        Action::ToggleVisibility => "Mostra password".to_string(),
        Action::Submit if state.can_submit() => "Accedi".to_string(),
        Action::Submit => format!("Accedi {}", "(campi incompleti)".dimmed()),
        Action::Quit => "Esci".to_string(),
    }
}

fn render(state: &FormState) {
    println!();
    println!("{}", "Accedi al tuo account".bright_white().bold());
    println!("{}", "Inserisci le tue credenziali per accedere".dimmed());
    println!();

    render_field(Field::Email, state.email().to_string(), state);

    let password = if state.password_visible() {
        state.password().to_string()
    } else {
        "•".repeat(state.password().chars().count())
    };
    render_field(Field::Password, password, state);
    println!();
}

fn render_field(field: Field, shown: String, state: &FormState) {
    let placeholder = format!("Inserisci la tua {}", field.name());
    let value = if shown.is_empty() {
        placeholder.dimmed()
    } else if state.has_error(field) {
        shown.red()
    } else {
        shown.cyan()
    };

    println!("  {:<9} {}", format!("{}:", field.label()), value);
    if state.has_error(field) {
        println!("  {:<9} {}", "", state.error(field).red());
    }
}

/// Prints the submission outcome. Returns `true` when the form is done.
fn report(outcome: SubmitOutcome) -> bool {
    match outcome {
        SubmitOutcome::Authenticated(session) => {
            println!();
            println!("{}", "✅ Accesso effettuato".green().bold());
            println!("  Utente: {}", session.email.cyan());
            println!("  Token:  {}", session.token.bright_yellow());
            println!("  Emesso: {}", session.issued_at.to_rfc3339());
            true
        }
        SubmitOutcome::Failed(reason) => {
            println!("{} {}", "❌ Accesso non riuscito:".red().bold(), reason);
            false
        }
        SubmitOutcome::Rejected(Rejection::Invalid(_)) => false,
        SubmitOutcome::Rejected(Rejection::AlreadySubmitting) => {
            println!("{}", "⏳ Accesso già in corso".yellow());
            false
        }
    }
}
