use thiserror::Error;

/// Validation failure for a single submitted form field.
///
/// The display text is shown to the user next to the offending field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Value is required and can't be empty")]
    Required,
    #[error("The input is less than {min} characters long")]
    TooShort { min: usize },
    #[error("The input is more than {max} characters long")]
    TooLong { max: usize },
    #[error("The input is not a valid E.164 phone number")]
    InvalidPhoneNumber,
}

/// Empty or whitespace-only values count as missing.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Checks a character count against inclusive bounds.
pub(crate) fn check_length(
    value: &str,
    min: usize,
    max: Option<usize>,
) -> Result<(), FieldError> {
    if is_blank(value) {
        return Err(FieldError::Required);
    }
    let length = value.chars().count();
    if length < min {
        return Err(FieldError::TooShort { min });
    }
    match max {
        Some(max) if length > max => Err(FieldError::TooLong { max }),
        _ => Ok(()),
    }
}
