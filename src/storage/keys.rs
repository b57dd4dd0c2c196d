// SPDX-License-Identifier: MPL-2.0
//! Storage key names shared with the web client.

/// JSON array of favorited item identifiers.
pub const FAVORITES: &str = "favoritos";

/// Opaque session token returned by `/api/login`.
pub const TOKEN: &str = "token";

/// JSON object with the logged-in user's profile.
pub const USER_DATA: &str = "userData";

/// Identifier of the logged-in user (`id`, else `documento`).
pub const MY_ID: &str = "miId";
