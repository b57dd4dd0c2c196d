// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! screen renders from borrowed state and reports user intent as messages.
//!
//! # Screens
//!
//! - [`login`] - Login and register panes over the animated background
//! - [`home`] - Greeting, favorites and log out
//!
//! # Shared Infrastructure
//!
//! - [`alert`] - Blocking alert overlay
//! - [`notifications`] - Toast notification system for user feedback
//! - [`particles`] - Decorative particle field and its canvas
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod alert;
pub mod design_tokens;
pub mod home;
pub mod login;
pub mod notifications;
pub mod particles;
pub mod styles;
pub mod theming;
