use super::field_error::{FieldError, check_length};

pub const USERNAME_MIN_LENGTH: usize = 5;
pub const USERNAME_MAX_LENGTH: usize = 255;

/// A submitted username of 5 to 255 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Username {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        check_length(&value, USERNAME_MIN_LENGTH, Some(USERNAME_MAX_LENGTH))?;
        Ok(Self(value))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert_eq!(
            Username::try_from("user".to_string()),
            Err(FieldError::TooShort { min: 5 })
        );
        assert!(Username::try_from("users".to_string()).is_ok());
        assert!(Username::try_from("u".repeat(255)).is_ok());
        assert_eq!(
            Username::try_from("u".repeat(256)),
            Err(FieldError::TooLong { max: 255 })
        );
        assert_eq!(Username::try_from(String::new()), Err(FieldError::Required));
    }
}
