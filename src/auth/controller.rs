// SPDX-License-Identifier: MPL-2.0
//! Auth screen component: pane switching, phrase rotation, form input and
//! submission bookkeeping.
//!
//! Requests are not sent from here. [`AuthController::update`] returns an
//! [`Event`] carrying the validated request; the application performs the
//! HTTP call and reports back through [`AuthController::finish_login`] or
//! [`AuthController::finish_register`].

use super::form::{LoginForm, RegisterField, RegisterForm};
use super::phrases::PhraseRotator;
use super::state::{transition, Action, AuthView};
use crate::api::{LoginRequest, LoginSuccess, RegisterRequest, RegisterResponse};
use crate::config::INTRO_DURATION_MS;
use crate::error::{Error, Result, ServerError};
use std::time::{Duration, Instant};

pub const ALERT_LOGIN_FAILED: &str = "alert-login-failed";
pub const ALERT_LOGIN_NETWORK: &str = "alert-login-network";
pub const ALERT_REGISTER_SUCCESS: &str = "alert-register-success";
pub const ALERT_REGISTER_FAILED: &str = "alert-register-failed";
pub const ALERT_REGISTER_NETWORK: &str = "alert-register-network";

/// Text of a blocking alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    /// Localized message identified by its i18n key.
    Key(&'static str),
    /// Message supplied by the server, shown verbatim.
    Server(String),
}

#[derive(Debug, Clone)]
pub enum Message {
    ShowRegister,
    ShowLogin,
    LoginUsernameChanged(String),
    LoginPasswordChanged(String),
    SubmitLogin,
    RegisterInput(RegisterField, String),
    DocumentTypeSelected(String),
    UserTypeSelected(String),
    TermsToggled(bool),
    SubmitRegister,
    DismissAlert,
}

/// What the application should do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    SubmitLogin(LoginRequest),
    SubmitRegister(RegisterRequest),
}

#[derive(Debug, Clone)]
pub struct AuthController {
    view: AuthView,
    phrases: PhraseRotator,
    intro_until: Option<Instant>,
    login: LoginForm,
    register: RegisterForm,
    alert: Option<Alert>,
    in_flight: bool,
}

impl AuthController {
    pub fn new(now: Instant) -> Self {
        Self {
            view: AuthView::Login,
            phrases: PhraseRotator::new(AuthView::Login, now),
            intro_until: Some(now + Duration::from_millis(INTRO_DURATION_MS)),
            login: LoginForm::default(),
            register: RegisterForm::default(),
            alert: None,
            in_flight: false,
        }
    }

    pub fn update(&mut self, message: Message, now: Instant) -> Event {
        match message {
            Message::ShowRegister => {
                self.apply(Action::GoToRegister, now);
            }
            Message::ShowLogin => {
                self.apply(Action::GoToLogin, now);
            }
            Message::LoginUsernameChanged(value) => self.login.username = value,
            Message::LoginPasswordChanged(value) => self.login.password = value,
            Message::RegisterInput(field, value) => self.register.set(field, value),
            Message::DocumentTypeSelected(value) => self.register.tipo_documento = Some(value),
            Message::UserTypeSelected(value) => self.register.tipo_usuario = Some(value),
            Message::TermsToggled(accepted) => self.register.terms_accepted = accepted,
            Message::DismissAlert => self.alert = None,
            Message::SubmitLogin => {
                if self.in_flight || self.alert.is_some() {
                    return Event::None;
                }
                match self.login.validate() {
                    Ok(request) => {
                        self.in_flight = true;
                        return Event::SubmitLogin(request);
                    }
                    Err(err) => {
                        tracing::debug!(%err, "login blocked");
                        self.alert = Some(Alert::Key(err.i18n_key()));
                    }
                }
            }
            Message::SubmitRegister => {
                if self.in_flight || self.alert.is_some() {
                    return Event::None;
                }
                match self.register.validate() {
                    Ok(request) => {
                        self.in_flight = true;
                        return Event::SubmitRegister(request);
                    }
                    Err(err) => {
                        tracing::debug!(%err, "registration blocked");
                        self.alert = Some(Alert::Key(err.i18n_key()));
                    }
                }
            }
        }
        Event::None
    }

    /// Applies a transition; returns whether the view changed.
    pub fn apply(&mut self, action: Action, now: Instant) -> bool {
        let Some(next) = transition(self.view, action) else {
            return false;
        };
        tracing::debug!(from = ?self.view, to = ?next, "auth view transition");
        self.view = next;
        self.intro_until = None;
        self.phrases.set_view(next, now);
        true
    }

    /// Advances the phrase rotation and the intro marker.
    pub fn tick(&mut self, now: Instant) {
        if self.intro_until.is_some_and(|until| now >= until) {
            self.intro_until = None;
        }
        self.phrases.tick(now);
    }

    /// Records the outcome of a login request.
    ///
    /// Returns the session on success; on failure an alert is raised and the
    /// view is left untouched.
    pub fn finish_login(&mut self, outcome: Result<LoginSuccess>) -> Option<LoginSuccess> {
        self.in_flight = false;
        match outcome {
            Ok(success) => {
                self.login = LoginForm::default();
                Some(success)
            }
            Err(err) => {
                tracing::warn!(%err, "login failed");
                self.alert = Some(failure_alert(&err, ALERT_LOGIN_FAILED, ALERT_LOGIN_NETWORK));
                None
            }
        }
    }

    /// Records the outcome of a registration request.
    ///
    /// Success resets the form and returns to the login pane.
    pub fn finish_register(&mut self, outcome: Result<RegisterResponse>, now: Instant) {
        self.in_flight = false;
        match outcome {
            Ok(response) => {
                tracing::info!(id = ?response.id, "account created");
                self.alert = Some(Alert::Key(ALERT_REGISTER_SUCCESS));
                self.register.reset();
                self.apply(Action::RegistrationSucceeded, now);
            }
            Err(err) => {
                tracing::warn!(%err, "registration failed");
                self.alert = Some(failure_alert(
                    &err,
                    ALERT_REGISTER_FAILED,
                    ALERT_REGISTER_NETWORK,
                ));
            }
        }
    }

    #[must_use]
    pub fn view(&self) -> AuthView {
        self.view
    }

    /// Whether the register pane is shown.
    #[must_use]
    pub fn register_active(&self) -> bool {
        self.view.is_register()
    }

    /// Whether the intro animation marker is still set.
    #[must_use]
    pub fn is_initial(&self) -> bool {
        self.intro_until.is_some()
    }

    #[must_use]
    pub fn phrases(&self) -> &PhraseRotator {
        &self.phrases
    }

    #[must_use]
    pub fn login_form(&self) -> &LoginForm {
        &self.login
    }

    #[must_use]
    pub fn register_form(&self) -> &RegisterForm {
        &self.register
    }

    #[must_use]
    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }
}

fn failure_alert(err: &Error, fallback: &'static str, network: &'static str) -> Alert {
    match err {
        Error::Server(ServerError {
            message: Some(message),
            ..
        }) if !message.is_empty() => Alert::Server(message.clone()),
        Error::Network(_) => Alert::Key(network),
        _ => Alert::Key(fallback),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::form::filled_register_form;
    use crate::auth::phrases::{PHRASES_LOGIN, PHRASES_REGISTER};
    use crate::error::ValidationError;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn fill_register(auth: &mut AuthController, now: Instant) {
        let form = filled_register_form();
        let inputs = [
            (RegisterField::Nombre, form.nombre),
            (RegisterField::Ficha, form.ficha),
            (RegisterField::Documento, form.documento),
            (RegisterField::Correo, form.correo),
            (RegisterField::Telefono, form.telefono),
            (RegisterField::Username, form.username),
            (RegisterField::Password, form.password),
            (RegisterField::Confirm, form.confirm),
        ];
        for (field, value) in inputs {
            auth.update(Message::RegisterInput(field, value), now);
        }
        auth.update(Message::DocumentTypeSelected("CC".into()), now);
        auth.update(Message::UserTypeSelected("Aprendiz".into()), now);
        auth.update(Message::TermsToggled(true), now);
    }

    #[test]
    fn starts_on_login_with_intro_marker() {
        let start = Instant::now();
        let mut auth = AuthController::new(start);
        assert_eq!(auth.view(), AuthView::Login);
        assert!(auth.is_initial());

        auth.tick(start + ms(1199));
        assert!(auth.is_initial());
        auth.tick(start + ms(1200));
        assert!(!auth.is_initial());
    }

    #[test]
    fn show_register_switches_phrases_and_clears_intro() {
        let start = Instant::now();
        let mut auth = AuthController::new(start);
        auth.update(Message::ShowRegister, start);

        assert!(auth.register_active());
        assert!(!auth.is_initial());
        assert_eq!(auth.phrases().current(), PHRASES_REGISTER[0]);

        auth.update(Message::ShowLogin, start);
        assert!(!auth.register_active());
        assert_eq!(auth.phrases().current(), PHRASES_LOGIN[0]);
    }

    #[test]
    fn empty_username_sends_nothing() {
        let now = Instant::now();
        let mut auth = AuthController::new(now);
        auth.update(Message::LoginPasswordChanged("secreto".into()), now);

        let event = auth.update(Message::SubmitLogin, now);

        assert_eq!(event, Event::None);
        assert_eq!(
            auth.alert(),
            Some(&Alert::Key(ValidationError::MissingLoginFields.i18n_key()))
        );
        assert!(!auth.is_submitting());
    }

    #[test]
    fn valid_login_emits_request_once() {
        let now = Instant::now();
        let mut auth = AuthController::new(now);
        auth.update(Message::LoginUsernameChanged(" ana ".into()), now);
        auth.update(Message::LoginPasswordChanged("secreto".into()), now);

        let event = auth.update(Message::SubmitLogin, now);
        assert_eq!(event, Event::SubmitLogin(LoginRequest::new("ana", "secreto")));
        assert_eq!(auth.update(Message::SubmitLogin, now), Event::None);
    }

    #[test]
    fn login_server_error_uses_server_text() {
        let now = Instant::now();
        let mut auth = AuthController::new(now);
        let outcome = auth.finish_login(Err(Error::Server(ServerError {
            status: 401,
            message: Some("Credenciales inválidas".into()),
        })));
        assert!(outcome.is_none());
        assert_eq!(
            auth.alert(),
            Some(&Alert::Server("Credenciales inválidas".into()))
        );
        assert_eq!(auth.view(), AuthView::Login);
    }

    #[test]
    fn login_failure_without_message_falls_back() {
        let now = Instant::now();
        let mut auth = AuthController::new(now);
        auth.finish_login(Err(Error::Server(ServerError {
            status: 500,
            message: None,
        })));
        assert_eq!(auth.alert(), Some(&Alert::Key(ALERT_LOGIN_FAILED)));

        auth.update(Message::DismissAlert, now);
        auth.finish_login(Err(Error::Network("refused".into())));
        assert_eq!(auth.alert(), Some(&Alert::Key(ALERT_LOGIN_NETWORK)));
    }

    #[test]
    fn register_submits_exactly_once_with_mapped_fields() {
        let now = Instant::now();
        let mut auth = AuthController::new(now);
        auth.update(Message::ShowRegister, now);
        fill_register(&mut auth, now);

        let first = auth.update(Message::SubmitRegister, now);
        let second = auth.update(Message::SubmitRegister, now);

        let Event::SubmitRegister(request) = first else {
            panic!("expected a registration request, got {first:?}");
        };
        assert_eq!(second, Event::None);
        assert_eq!(request.nombre, "Ana Pérez");
        assert_eq!(request.tipo_documento, "CC");
        assert_eq!(request.tipo_usuario, "Aprendiz");
        assert_eq!(request.role, "user");
    }

    #[test]
    fn register_mismatch_blocks_request() {
        let now = Instant::now();
        let mut auth = AuthController::new(now);
        auth.update(Message::ShowRegister, now);
        fill_register(&mut auth, now);
        auth.update(
            Message::RegisterInput(RegisterField::Confirm, "distinta".into()),
            now,
        );

        assert_eq!(auth.update(Message::SubmitRegister, now), Event::None);
        assert_eq!(
            auth.alert(),
            Some(&Alert::Key(ValidationError::PasswordMismatch.i18n_key()))
        );
    }

    #[test]
    fn register_success_resets_form_and_returns_to_login() {
        let now = Instant::now();
        let mut auth = AuthController::new(now);
        auth.update(Message::ShowRegister, now);
        fill_register(&mut auth, now);
        auth.update(Message::SubmitRegister, now);

        auth.finish_register(
            Ok(RegisterResponse {
                ok: true,
                id: Some("9".into()),
                error: None,
            }),
            now,
        );

        assert_eq!(auth.view(), AuthView::Login);
        assert_eq!(auth.alert(), Some(&Alert::Key(ALERT_REGISTER_SUCCESS)));
        assert_eq!(auth.register_form(), &RegisterForm::default());
        assert!(!auth.is_submitting());
    }

    #[test]
    fn register_failure_keeps_form() {
        let now = Instant::now();
        let mut auth = AuthController::new(now);
        auth.update(Message::ShowRegister, now);
        fill_register(&mut auth, now);
        auth.update(Message::SubmitRegister, now);

        auth.finish_register(Err(Error::Network("timeout".into())), now);

        assert!(auth.register_active());
        assert_eq!(auth.alert(), Some(&Alert::Key(ALERT_REGISTER_NETWORK)));
        assert_eq!(auth.register_form().username, "ana");
    }

    #[test]
    fn open_alert_blocks_submission() {
        let now = Instant::now();
        let mut auth = AuthController::new(now);
        auth.update(Message::SubmitLogin, now);
        assert!(auth.alert().is_some());

        auth.update(Message::LoginUsernameChanged("ana".into()), now);
        auth.update(Message::LoginPasswordChanged("x".into()), now);
        assert_eq!(auth.update(Message::SubmitLogin, now), Event::None);

        auth.update(Message::DismissAlert, now);
        assert!(matches!(
            auth.update(Message::SubmitLogin, now),
            Event::SubmitLogin(_)
        ));
    }
}
