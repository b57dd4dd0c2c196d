// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    /// Persisted key/value storage is unreadable, corrupt or unwritable.
    Storage(String),
    /// The backend could not be reached or answered with an undecodable body.
    Network(String),
    /// The backend answered but rejected the request.
    Server(ServerError),
    Validation(ValidationError),
}

/// A backend rejection, carrying the message the server provided (if any).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerError {
    pub status: u16,
    pub message: Option<String>,
}

/// Client-side form validation failures.
///
/// Each variant maps to a distinct user-facing alert. Validation always runs
/// before any request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Username or password is empty on the login form.
    MissingLoginFields,
    /// At least one registration field is empty.
    MissingRegisterFields,
    /// Password and confirmation differ.
    PasswordMismatch,
    /// The terms and conditions box is unchecked.
    TermsNotAccepted,
}

impl ValidationError {
    /// Returns the i18n message key for this validation error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ValidationError::MissingLoginFields => "alert-login-missing-fields",
            ValidationError::MissingRegisterFields => "alert-register-missing-fields",
            ValidationError::PasswordMismatch => "alert-register-password-mismatch",
            ValidationError::TermsNotAccepted => "alert-register-terms",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingLoginFields => write!(f, "login fields are incomplete"),
            ValidationError::MissingRegisterFields => {
                write!(f, "registration fields are incomplete")
            }
            ValidationError::PasswordMismatch => write!(f, "passwords do not match"),
            ValidationError::TermsNotAccepted => write!(f, "terms were not accepted"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Storage(e) => write!(f, "Storage Error: {}", e),
            Error::Network(e) => write!(f, "Network Error: {}", e),
            Error::Server(e) => match &e.message {
                Some(message) => write!(f, "Server Error ({}): {}", e.status, message),
                None => write!(f, "Server Error ({})", e.status),
            },
            Error::Validation(e) => write!(f, "Validation Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::Validation(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Storage(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn json_error_maps_to_storage() {
        let parse = serde_json::from_str::<Vec<String>>("{not json").unwrap_err();
        let err: Error = parse.into();
        assert!(matches!(err, Error::Storage(_)));
    }

    #[test]
    fn server_error_display_includes_message() {
        let err = Error::Server(ServerError {
            status: 401,
            message: Some("Credenciales inválidas".into()),
        });
        assert_eq!(format!("{}", err), "Server Error (401): Credenciales inválidas");
    }

    #[test]
    fn server_error_display_without_message() {
        let err = Error::Server(ServerError {
            status: 500,
            message: None,
        });
        assert_eq!(format!("{}", err), "Server Error (500)");
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn validation_i18n_keys_are_distinct() {
        let keys = [
            ValidationError::MissingLoginFields.i18n_key(),
            ValidationError::MissingRegisterFields.i18n_key(),
            ValidationError::PasswordMismatch.i18n_key(),
            ValidationError::TermsNotAccepted.i18n_key(),
        ];
        for (i, a) in keys.iter().enumerate() {
            for b in &keys[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
