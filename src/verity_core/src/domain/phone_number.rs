use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::field_error::{FieldError, is_blank};

// ASCII digits only; `\d` would also accept other Unicode digits
static E164: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+[1-9][0-9]{1,14}$").expect("E.164 pattern is a valid regex"));

/// A phone number in E.164 format: `+`, a non-zero leading digit, 2 to 15
/// digits in total.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Keeps the country prefix and the last two digits, e.g. `+61********90`.
    pub fn masked(&self) -> String {
        let digits = &self.0[1..];
        if digits.len() <= 4 {
            return format!("+{}", "*".repeat(digits.len()));
        }
        let (head, rest) = digits.split_at(2);
        let tail = &rest[rest.len() - 2..];
        format!("+{head}{}{tail}", "*".repeat(rest.len() - 2))
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if is_blank(&value) {
            return Err(FieldError::Required);
        }
        if !E164.is_match(&value) {
            return Err(FieldError::InvalidPhoneNumber);
        }
        Ok(Self(value))
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
