// SPDX-License-Identifier: MPL-2.0
//! Request and response records exchanged with the BIBLIOSENA service.
//!
//! Field names follow the service's JSON (Spanish, snake_case). Optional
//! response fields default when missing so partial bodies still decode.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/login`.
///
/// The service accepts either `user` or `username`; both are sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub user: String,
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        let username = username.into();
        Self {
            user: username.clone(),
            username,
            password: password.into(),
        }
    }
}

/// Body returned by `POST /api/login`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<UserProfile>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Profile attached to a successful login.
///
/// Admin logins carry only `name` and `role`; user logins add `id`,
/// `documento` and `correo`. Unknown fields are kept so the profile can be
/// stored verbatim.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documento: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correo: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UserProfile {
    /// Name to greet the user with (`name`, else `nombre`).
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or_else(|| self.nombre.as_deref().filter(|n| !n.is_empty()))
    }

    /// Identifier stored under `miId`: `id`, else `documento`, else empty.
    #[must_use]
    pub fn my_id(&self) -> String {
        self.id
            .as_deref()
            .filter(|id| !id.is_empty())
            .or_else(|| self.documento.as_deref().filter(|d| !d.is_empty()))
            .unwrap_or_default()
            .to_string()
    }
}

/// Body of `POST /api/usuarios`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub nombre: String,
    pub tipo_documento: String,
    pub ficha: String,
    pub documento: String,
    pub correo: String,
    pub telefono: String,
    pub tipo_usuario: String,
    pub username: String,
    pub password: String,
    pub role: String,
}

/// Role assigned to self-registered accounts.
pub const DEFAULT_ROLE: &str = "user";

/// Body returned by `POST /api/usuarios`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body returned by `GET /api/usuarios/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub documento: Option<String>,
    #[serde(default)]
    pub correo: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}
