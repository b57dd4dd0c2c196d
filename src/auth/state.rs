// SPDX-License-Identifier: MPL-2.0
//! Login/Register view state and its transition table.

/// Which pane of the auth screen is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthView {
    #[default]
    Login,
    Register,
}

impl AuthView {
    /// Whether the register pane is the active one.
    #[must_use]
    pub fn is_register(self) -> bool {
        matches!(self, AuthView::Register)
    }
}

/// Actions that may move the auth screen between panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    GoToRegister,
    GoToLogin,
    RegistrationSucceeded,
}

/// Returns the next view for `action` in `view`, or `None` when the action
/// does not apply (e.g. `GoToRegister` while already registering).
#[must_use]
pub fn transition(view: AuthView, action: Action) -> Option<AuthView> {
    match (view, action) {
        (AuthView::Login, Action::GoToRegister) => Some(AuthView::Register),
        (AuthView::Register, Action::GoToLogin | Action::RegistrationSucceeded) => {
            Some(AuthView::Login)
        }
        _ => None,
    }
}
