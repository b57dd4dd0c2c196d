// SPDX-License-Identifier: MPL-2.0
//! Login and registration form fields with their validation rules.
//!
//! Text inputs are trimmed before validation. Password fields and select
//! values are taken as entered.

use crate::api::{LoginRequest, RegisterRequest, DEFAULT_ROLE};
use crate::error::ValidationError;

/// Document types offered on the registration form.
pub const DOCUMENT_TYPES: [&str; 3] = ["CC", "TI", "CE"];

/// User types offered on the registration form.
pub const USER_TYPES: [&str; 2] = ["Aprendiz", "Instructor"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    /// Builds the login request, or reports missing fields.
    pub fn validate(&self) -> Result<LoginRequest, ValidationError> {
        let username = self.username.trim();
        let password = self.password.trim();
        if username.is_empty() || password.is_empty() {
            return Err(ValidationError::MissingLoginFields);
        }
        Ok(LoginRequest::new(username, password))
    }
}

/// Registration form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub nombre: String,
    pub tipo_documento: Option<String>,
    pub ficha: String,
    pub documento: String,
    pub correo: String,
    pub telefono: String,
    pub tipo_usuario: Option<String>,
    pub username: String,
    pub password: String,
    pub confirm: String,
    pub terms_accepted: bool,
}

/// Text inputs on the registration form, for field-level messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterField {
    Nombre,
    Ficha,
    Documento,
    Correo,
    Telefono,
    Username,
    Password,
    Confirm,
}

impl RegisterForm {
    /// Replaces the value of a text input.
    pub fn set(&mut self, field: RegisterField, value: String) {
        let slot = match field {
            RegisterField::Nombre => &mut self.nombre,
            RegisterField::Ficha => &mut self.ficha,
            RegisterField::Documento => &mut self.documento,
            RegisterField::Correo => &mut self.correo,
            RegisterField::Telefono => &mut self.telefono,
            RegisterField::Username => &mut self.username,
            RegisterField::Password => &mut self.password,
            RegisterField::Confirm => &mut self.confirm,
        };
        *slot = value;
    }

    /// Builds the registration request.
    ///
    /// Checks run in order: every field present, passwords equal, terms
    /// accepted. The first failure is reported.
    pub fn validate(&self) -> Result<RegisterRequest, ValidationError> {
        let tipo_documento = self.tipo_documento.as_deref().unwrap_or_default();
        let tipo_usuario = self.tipo_usuario.as_deref().unwrap_or_default();
        let trimmed = [
            self.nombre.trim(),
            self.ficha.trim(),
            self.documento.trim(),
            self.correo.trim(),
            self.telefono.trim(),
            self.username.trim(),
        ];
        let untrimmed = [tipo_documento, tipo_usuario, &self.password, &self.confirm];

        if trimmed.iter().chain(untrimmed.iter()).any(|v| v.is_empty()) {
            return Err(ValidationError::MissingRegisterFields);
        }
        if self.password != self.confirm {
            return Err(ValidationError::PasswordMismatch);
        }
        if !self.terms_accepted {
            return Err(ValidationError::TermsNotAccepted);
        }

        let [nombre, ficha, documento, correo, telefono, username] = trimmed;
        Ok(RegisterRequest {
            nombre: nombre.to_string(),
            tipo_documento: tipo_documento.to_string(),
            ficha: ficha.to_string(),
            documento: documento.to_string(),
            correo: correo.to_string(),
            telefono: telefono.to_string(),
            tipo_usuario: tipo_usuario.to_string(),
            username: username.to_string(),
            password: self.password.clone(),
            role: DEFAULT_ROLE.to_string(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
pub(crate) fn filled_register_form() -> RegisterForm {
    RegisterForm {
        nombre: "  Ana Pérez ".into(),
        tipo_documento: Some("CC".into()),
        ficha: "2558".into(),
        documento: "1010".into(),
        correo: "ana@sena.edu.co".into(),
        telefono: "3001234567".into(),
        tipo_usuario: Some("Aprendiz".into()),
        username: "ana".into(),
        password: " clave ".into(),
        confirm: " clave ".into(),
        terms_accepted: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_requires_both_fields_after_trim() {
        let form = LoginForm {
            username: "   ".into(),
            password: "x".into(),
        };
        assert_eq!(form.validate(), Err(ValidationError::MissingLoginFields));

        let form = LoginForm {
            username: "ana".into(),
            password: "  ".into(),
        };
        assert_eq!(form.validate(), Err(ValidationError::MissingLoginFields));
    }

    #[test]
    fn login_trims_values() {
        let form = LoginForm {
            username: " ana ".into(),
            password: " secreto ".into(),
        };
        let request = form.validate().unwrap();
        assert_eq!(request.username, "ana");
        assert_eq!(request.user, "ana");
        assert_eq!(request.password, "secreto");
    }

    #[test]
    fn register_maps_every_field() {
        let request = filled_register_form().validate().unwrap();
        assert_eq!(request.nombre, "Ana Pérez");
        assert_eq!(request.tipo_documento, "CC");
        assert_eq!(request.ficha, "2558");
        assert_eq!(request.documento, "1010");
        assert_eq!(request.correo, "ana@sena.edu.co");
        assert_eq!(request.telefono, "3001234567");
        assert_eq!(request.tipo_usuario, "Aprendiz");
        assert_eq!(request.username, "ana");
        assert_eq!(request.password, " clave ");
        assert_eq!(request.role, "user");
    }

    #[test]
    fn register_missing_field_wins_over_other_checks() {
        let mut form = filled_register_form();
        form.ficha = " ".into();
        form.confirm = "other".into();
        form.terms_accepted = false;
        assert_eq!(form.validate(), Err(ValidationError::MissingRegisterFields));
    }

    #[test]
    fn register_missing_select_is_reported() {
        let mut form = filled_register_form();
        form.tipo_usuario = None;
        assert_eq!(form.validate(), Err(ValidationError::MissingRegisterFields));
    }

    #[test]
    fn register_password_mismatch_before_terms() {
        let mut form = filled_register_form();
        form.confirm = "clave".into();
        form.terms_accepted = false;
        assert_eq!(form.validate(), Err(ValidationError::PasswordMismatch));
    }

    #[test]
    fn register_requires_terms() {
        let mut form = filled_register_form();
        form.terms_accepted = false;
        assert_eq!(form.validate(), Err(ValidationError::TermsNotAccepted));
    }

    #[test]
    fn set_and_reset() {
        let mut form = RegisterForm::default();
        form.set(RegisterField::Correo, "a@b.co".into());
        assert_eq!(form.correo, "a@b.co");
        form.reset();
        assert_eq!(form, RegisterForm::default());
    }
}
