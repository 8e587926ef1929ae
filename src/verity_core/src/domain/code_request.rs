use std::collections::BTreeMap;

use secrecy::{ExposeSecret, Secret};

use super::{
    field_error::FieldError, input_filter::sanitize, password::Password,
    phone_number::PhoneNumber, username::Username,
};

/// Form field names of the code request form.
pub mod fields {
    pub const USERNAME: &str = "username";
    pub const PASSWORD: &str = "password";
    pub const NUMBER: &str = "number";
}

/// Raw, unvalidated submission of the code request form. Missing fields are `None`.
#[derive(Debug, Default)]
pub struct CodeRequestInput {
    pub username: Option<String>,
    pub password: Option<Secret<String>>,
    pub number: Option<String>,
}

/// A code request whose every field passed validation.
#[derive(Debug, Clone)]
pub struct CodeRequest {
    username: Username,
    password: Password,
    phone_number: PhoneNumber,
}

impl CodeRequest {
    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn phone_number(&self) -> &PhoneNumber {
        &self.phone_number
    }
}

/// Rejected code request: one message per failing field, plus the sanitized
/// values to re-populate the form with. The password is never included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvalidCodeRequest {
    pub errors: BTreeMap<String, String>,
    pub data: BTreeMap<String, String>,
}

impl CodeRequestInput {
    /// Sanitized values safe to send back to the browser.
    pub fn redisplay_data(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            (
                fields::USERNAME.to_string(),
                sanitize(self.username.as_deref().unwrap_or_default()),
            ),
            (
                fields::NUMBER.to_string(),
                sanitize(self.number.as_deref().unwrap_or_default()),
            ),
        ])
    }

    pub fn validate(self) -> Result<CodeRequest, InvalidCodeRequest> {
        let data = self.redisplay_data();
        let mut errors = BTreeMap::new();

        let username = record(
            &mut errors,
            fields::USERNAME,
            Username::try_from(data[fields::USERNAME].clone()),
        );
        let password = record(
            &mut errors,
            fields::PASSWORD,
            Password::try_from(Secret::new(sanitize(
                self.password
                    .as_ref()
                    .map(|p| p.expose_secret().as_str())
                    .unwrap_or_default(),
            ))),
        );
        let phone_number = record(
            &mut errors,
            fields::NUMBER,
            PhoneNumber::try_from(data[fields::NUMBER].clone()),
        );

        match (username, password, phone_number) {
            (Some(username), Some(password), Some(phone_number)) => Ok(CodeRequest {
                username,
                password,
                phone_number,
            }),
            _ => Err(InvalidCodeRequest { errors, data }),
        }
    }
}

fn record<T>(
    errors: &mut BTreeMap<String, String>,
    field: &str,
    result: Result<T, FieldError>,
) -> Option<T> {
    result
        .map_err(|e| {
            errors.insert(field.to_string(), e.to_string());
        })
        .ok()
}
