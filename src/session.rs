// SPDX-License-Identifier: MPL-2.0
//! Session state persisted under `token`, `userData` and `miId`.
//!
//! The token is opaque; only its shape is inspected to tell guests,
//! the built-in administrator and regular users apart.

use crate::api::{UserProfile, UserRecord};
use crate::storage::{keys, KeyValueStore};

const ADMIN_TOKEN: &str = "admin-token";
const USER_TOKEN_PREFIX: &str = "user-";

pub const GUEST_NAME: &str = "Invitado";
pub const ADMIN_NAME: &str = "Administrador";
pub const FALLBACK_USER_NAME: &str = "Usuario";

/// Who the stored token belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionKind {
    Guest,
    Admin,
    /// Regular account; carries the id embedded in the token.
    User(String),
    /// A token with an unrecognized shape.
    Unknown,
}

impl SessionKind {
    #[must_use]
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            None | Some("") => SessionKind::Guest,
            Some(ADMIN_TOKEN) => SessionKind::Admin,
            Some(token) => match token.strip_prefix(USER_TOKEN_PREFIX) {
                Some(id) => SessionKind::User(id.to_string()),
                None => SessionKind::Unknown,
            },
        }
    }
}

/// Persists a successful login.
///
/// The profile, when present, is written verbatim as JSON and its id
/// (falling back to the document number) under `miId`.
pub fn store_login<S: KeyValueStore + ?Sized>(
    store: &S,
    token: &str,
    user: Option<&UserProfile>,
) -> crate::error::Result<()> {
    store.set_item(keys::TOKEN, token)?;
    if let Some(user) = user {
        let serialized = serde_json::to_string(user)?;
        store.set_item(keys::USER_DATA, &serialized)?;
        store.set_item(keys::MY_ID, &user.my_id())?;
    }
    Ok(())
}

/// Returns the stored token, treating storage failures as "logged out".
#[must_use]
pub fn token<S: KeyValueStore + ?Sized>(store: &S) -> Option<String> {
    store.get_item(keys::TOKEN).ok().flatten()
}

/// Returns the session kind derived from the stored token.
#[must_use]
pub fn kind<S: KeyValueStore + ?Sized>(store: &S) -> SessionKind {
    SessionKind::from_token(token(store).as_deref())
}

/// Returns the cached profile, or `None` if absent or malformed.
#[must_use]
pub fn cached_profile<S: KeyValueStore + ?Sized>(store: &S) -> Option<UserProfile> {
    let raw = store.get_item(keys::USER_DATA).ok().flatten()?;
    serde_json::from_str(&raw).ok()
}

/// Name to greet the current user with, without contacting the backend.
///
/// Returns `None` for a regular user whose name is not cached yet; the
/// caller may then look it up with [`crate::api::ApiClient::fetch_user`].
#[must_use]
pub fn cached_display_name<S: KeyValueStore + ?Sized>(store: &S) -> Option<String> {
    match kind(store) {
        SessionKind::Guest => Some(GUEST_NAME.to_string()),
        SessionKind::Admin => Some(ADMIN_NAME.to_string()),
        SessionKind::Unknown => Some(FALLBACK_USER_NAME.to_string()),
        SessionKind::User(_) => cached_profile(store)
            .and_then(|profile| profile.display_name().map(str::to_string)),
    }
}

/// Like [`cached_display_name`], falling back to "Usuario".
#[must_use]
pub fn display_name<S: KeyValueStore + ?Sized>(store: &S) -> String {
    cached_display_name(store).unwrap_or_else(|| FALLBACK_USER_NAME.to_string())
}

/// Caches a profile fetched from `/api/usuarios/{id}` in the compact shape
/// `{id, nombre, name, documento}`. Records without a name are ignored.
pub fn cache_fetched_user<S: KeyValueStore + ?Sized>(store: &S, record: &UserRecord) {
    let Some(nombre) = record.nombre.as_deref().filter(|n| !n.is_empty()) else {
        return;
    };
    let compact = serde_json::json!({
        "id": record.id,
        "nombre": nombre,
        "name": nombre,
        "documento": record.documento,
    });
    if let Err(err) = store.set_item(keys::USER_DATA, &compact.to_string()) {
        tracing::error!(error = %err, "could not cache user profile");
    }
}

/// Clears every session key.
pub fn logout<S: KeyValueStore + ?Sized>(store: &S) {
    for key in [keys::TOKEN, keys::USER_DATA, keys::MY_ID] {
        if let Err(err) = store.remove_item(key) {
            tracing::error!(key, error = %err, "could not clear session key");
        }
    }
}
