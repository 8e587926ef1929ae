use secrecy::{ExposeSecret, Secret};

use super::field_error::{FieldError, check_length};

pub const PASSWORD_MIN_LENGTH: usize = 10;

/// A submitted password of at least 10 characters.
///
/// The value is kept behind [`Secret`] so it never shows up in `Debug`
/// output or tracing spans.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl TryFrom<Secret<String>> for Password {
    type Error = FieldError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        check_length(value.expose_secret(), PASSWORD_MIN_LENGTH, None)?;
        Ok(Self(value))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}
