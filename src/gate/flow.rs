use crate::error::GateError;
use crate::gate::forms::{LoginForm, RegisterForm};
use crate::gate::main_app::MainApp;
use crate::gate::session::SessionContext;
use crate::service::CredentialStore;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    Created,
    UsernameTaken,
    PasswordMismatch,
}

impl RegisterOutcome {
    pub fn code(&self) -> &'static str {
        match self {
            RegisterOutcome::Created => "created",
            RegisterOutcome::UsernameTaken => "username_taken",
            RegisterOutcome::PasswordMismatch => "password_mismatch",
        }
    }

    pub fn message(&self) -> String {
        match self {
            RegisterOutcome::Created => "Account created successfully! Please log in.",
            RegisterOutcome::UsernameTaken => "Username already exists. Please choose another.",
            RegisterOutcome::PasswordMismatch => "Passwords do not match. Please try again.",
        }
        .to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    LoggedIn { username: String },
    InvalidCredentials,
}

impl LoginOutcome {
    pub fn code(&self) -> &'static str {
        match self {
            LoginOutcome::LoggedIn { .. } => "logged_in",
            LoginOutcome::InvalidCredentials => "invalid_credentials",
        }
    }

    pub fn message(&self) -> String {
        match self {
            LoginOutcome::LoggedIn { username } => format!("Logged in as {username}"),
            LoginOutcome::InvalidCredentials => {
                "Invalid username or password. Please register if user is not registered."
                    .to_string()
            }
        }
    }
}

/// What the presentation layer should show next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    LoginForm,
    MainApp,
}

/// Login/registration flow in front of the main application.
#[derive(Clone)]
pub struct LoginGate {
    store: CredentialStore,
    main_app: Arc<dyn MainApp>,
}

impl LoginGate {
    pub fn new(store: CredentialStore, main_app: Arc<dyn MainApp>) -> Self {
        Self { store, main_app }
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &CredentialStore {
        &self.store
    }

    pub async fn register(&self, form: &RegisterForm) -> Result<RegisterOutcome, GateError> {
        if form.password != form.confirm_password {
            debug!(username = %form.username, "registration rejected: passwords differ");
            return Ok(RegisterOutcome::PasswordMismatch);
        }
        let outcome = if self.store.register(&form.username, &form.password).await? {
            RegisterOutcome::Created
        } else {
            RegisterOutcome::UsernameTaken
        };
        Ok(outcome)
    }

    /// Check the credentials and, on success only, set the session flag.
    pub async fn login(
        &self,
        session: &mut SessionContext,
        form: &LoginForm,
    ) -> Result<LoginOutcome, GateError> {
        if !self.store.verify(&form.username, &form.password).await? {
            debug!(username = %form.username, "login rejected");
            return Ok(LoginOutcome::InvalidCredentials);
        }
        session.sign_in(form.username.clone());
        info!(username = %form.username, "login succeeded");
        Ok(LoginOutcome::LoggedIn {
            username: form.username.clone(),
        })
    }

    /// Hand off to the main application when the session flag is set.
    pub fn dispatch(&self, session: &SessionContext) -> Screen {
        if session.is_logged_in() {
            self.main_app.enter(session.username());
            Screen::MainApp
        } else {
            Screen::LoginForm
        }
    }
}
