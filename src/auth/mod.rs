// SPDX-License-Identifier: MPL-2.0
//! Login/Register screen logic.
//!
//! - [`state`] - the two panes and their transition table
//! - [`phrases`] - rotating welcome phrases
//! - [`form`] - form fields and validation
//! - [`controller`] - the component tying them together

pub mod controller;
pub mod form;
pub mod phrases;
pub mod state;

pub use controller::{Alert, AuthController, Event, Message};
pub use form::{LoginForm, RegisterField, RegisterForm, DOCUMENT_TYPES, USER_TYPES};
pub use phrases::PhraseRotator;
pub use state::{transition, Action, AuthView};
