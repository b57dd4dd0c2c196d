// SPDX-License-Identifier: MPL-2.0
//! `bibliosena` is the desktop client core of the BIBLIOSENA library
//! application, built with the Iced GUI framework.
//!
//! It covers the login/register screen with its animated background, the
//! session and favorites persisted in a local key/value store, toast
//! notifications and the HTTP calls to the BIBLIOSENA service.

pub mod api;
pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod favorites;
pub mod i18n;
pub mod session;
pub mod storage;
pub mod ui;
