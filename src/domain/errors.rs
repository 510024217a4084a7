//! Domain validation errors.

use std::fmt;

/// Errors that can occur during field validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is not exactly 10 digits.
    InvalidPhone(String),

    /// The provided birthday is not a real date in `DD.MM.YYYY` form.
    InvalidBirthday(String),
}

impl ValidationError {
    /// The raw input that failed validation.
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidPhone(raw) | Self::InvalidBirthday(raw) => raw,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(_) => write!(f, "phone must be exactly 10 digits"),
            Self::InvalidBirthday(_) => write!(f, "birthday must be DD.MM.YYYY"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::InvalidPhone("12345".to_string());
        assert_eq!(err.to_string(), "phone must be exactly 10 digits");

        let err = ValidationError::InvalidBirthday("1.1.2020".to_string());
        assert_eq!(err.to_string(), "birthday must be DD.MM.YYYY");
    }

    #[test]
    fn test_validation_error_keeps_input() {
        let err = ValidationError::InvalidBirthday("31.02.2020".to_string());
        assert_eq!(err.input(), "31.02.2020");
    }
}
