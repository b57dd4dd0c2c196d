// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Login/register panes over the particle background.
    #[default]
    Login,
    /// Landing screen after a successful login.
    Home,
}
