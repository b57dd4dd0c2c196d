// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the BIBLIOSENA REST service.
//!
//! Only the endpoints the client core needs are covered:
//!
//! - `POST /api/login` - exchange credentials for a session token
//! - `POST /api/usuarios` - self-registration
//! - `GET /api/usuarios/{id}` - profile lookup for the greeting
//!
//! Calls are single attempts with no timeout and no retry. A response whose
//! status or `ok` flag signals failure becomes [`Error::Server`] carrying the
//! server's `error` text when present; transport failures and undecodable
//! bodies become [`Error::Network`].

pub mod types;

pub use types::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UserProfile, UserRecord,
    DEFAULT_ROLE,
};

use crate::error::{Error, Result, ServerError};
use serde::de::DeserializeOwned;

/// Outcome of a successful login.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginSuccess {
    pub token: String,
    pub user: Option<UserProfile>,
}

/// Thin wrapper around a `reqwest::Client` bound to a base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client resolving endpoints against `base_url`
    /// (e.g. `http://127.0.0.1:5000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Returns the base URL without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends credentials to `/api/login`.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginSuccess> {
        let response = self
            .http
            .post(self.endpoint("/api/login"))
            .json(request)
            .send()
            .await?;
        let (status, body): (u16, LoginResponse) = decode(response).await?;

        match body {
            LoginResponse {
                ok: true,
                token: Some(token),
                user,
                ..
            } if is_success(status) => {
                tracing::info!(status, "login accepted");
                Ok(LoginSuccess { token, user })
            }
            LoginResponse { error, .. } => {
                tracing::info!(status, "login rejected");
                Err(Error::Server(ServerError {
                    status,
                    message: error,
                }))
            }
        }
    }

    /// Creates an account through `/api/usuarios`.
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse> {
        let response = self
            .http
            .post(self.endpoint("/api/usuarios"))
            .json(request)
            .send()
            .await?;
        let (status, body): (u16, RegisterResponse) = decode(response).await?;

        if is_success(status) && body.ok {
            tracing::info!(status, "registration accepted");
            Ok(body)
        } else {
            tracing::info!(status, "registration rejected");
            Err(Error::Server(ServerError {
                status,
                message: body.error,
            }))
        }
    }

    /// Looks up a user by id, document number or username.
    ///
    /// A non-success status yields `Ok(None)`.
    pub async fn fetch_user(&self, id: &str) -> Result<Option<UserRecord>> {
        let response = self
            .http
            .get(self.endpoint(&format!("/api/usuarios/{id}")))
            .send()
            .await?;
        if !response.status().is_success() {
            tracing::debug!(status = response.status().as_u16(), id, "user lookup failed");
            return Ok(None);
        }
        let (_, record) = decode(response).await?;
        Ok(Some(record))
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<(u16, T)> {
    let status = response.status().as_u16();
    let bytes = response.bytes().await?;
    let body = serde_json::from_slice(&bytes)
        .map_err(|e| Error::Network(format!("invalid response body (status {status}): {e}")))?;
    Ok((status, body))
}
