use super::{
    field_error::{FieldError, is_blank},
    input_filter::sanitize,
};

/// Form field name of the code check form.
pub const CODE_FIELD: &str = "code";

/// The one-time code a user received. Only required to be non-blank; the
/// provider decides whether it is correct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationCode(String);

impl VerificationCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Sanitizes and validates the raw `code` field of a submitted form.
    pub fn from_input(raw: Option<&str>) -> Result<Self, FieldError> {
        Self::try_from(sanitize(raw.unwrap_or_default()))
    }
}

impl TryFrom<String> for VerificationCode {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if is_blank(&value) {
            return Err(FieldError::Required);
        }
        Ok(Self(value))
    }
}

impl AsRef<str> for VerificationCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
