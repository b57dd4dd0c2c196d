// SPDX-License-Identifier: MPL-2.0
//! Localization through Fluent. Spanish is the default locale.

pub mod fluent;

pub use fluent::I18n;
