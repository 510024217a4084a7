//! Uniform wrapper over the validated contact fields.

use super::birthday::Birthday;
use super::errors::ValidationError;
use super::phone::PhoneNumber;
use std::fmt;

/// The kinds of value a contact field can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Phone,
    Birthday,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Phone => write!(f, "phone"),
            Self::Birthday => write!(f, "birthday"),
        }
    }
}

/// A field value that has passed validation for its kind.
///
/// There is no way to obtain a `ValidatedField` holding invalid data: the
/// only constructors are [`ValidatedField::construct`] and the `From`
/// conversions from already-validated value objects.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValidatedField {
    Phone(PhoneNumber),
    Birthday(Birthday),
}

impl ValidatedField {
    /// Validate `raw` as a field of the given kind.
    ///
    /// # Errors
    ///
    /// Returns the kind-specific `ValidationError` when `raw` is malformed.
    pub fn construct(kind: FieldKind, raw: impl Into<String>) -> Result<Self, ValidationError> {
        match kind {
            FieldKind::Phone => PhoneNumber::new(raw).map(Self::Phone),
            FieldKind::Birthday => Birthday::new(raw).map(Self::Birthday),
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Phone(_) => FieldKind::Phone,
            Self::Birthday(_) => FieldKind::Birthday,
        }
    }

    /// The string the field was constructed from.
    pub fn raw(&self) -> &str {
        match self {
            Self::Phone(phone) => phone.as_str(),
            Self::Birthday(birthday) => birthday.as_str(),
        }
    }
}

impl From<PhoneNumber> for ValidatedField {
    fn from(phone: PhoneNumber) -> Self {
        Self::Phone(phone)
    }
}

impl From<Birthday> for ValidatedField {
    fn from(birthday: Birthday) -> Self {
        Self::Birthday(birthday)
    }
}

impl fmt::Display for ValidatedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_construct_phone() {
        let field = ValidatedField::construct(FieldKind::Phone, "1234567890").unwrap();
        assert_eq!(field.kind(), FieldKind::Phone);
        assert_eq!(field.raw(), "1234567890");
    }

    #[test]
    fn test_construct_birthday() {
        let field = ValidatedField::construct(FieldKind::Birthday, "24.08.1991").unwrap();
        assert_eq!(field.kind(), FieldKind::Birthday);
        assert_eq!(field.raw(), "24.08.1991");

        match field {
            ValidatedField::Birthday(b) => {
                assert_eq!(b.date(), NaiveDate::from_ymd_opt(1991, 8, 24).unwrap())
            }
            other => panic!("Expected birthday field, got: {:?}", other),
        }
    }

    #[test]
    fn test_construct_rejects_by_kind() {
        assert_eq!(
            ValidatedField::construct(FieldKind::Phone, "24.08.1991"),
            Err(ValidationError::InvalidPhone("24.08.1991".to_string()))
        );
        assert_eq!(
            ValidatedField::construct(FieldKind::Birthday, "1234567890"),
            Err(ValidationError::InvalidBirthday("1234567890".to_string()))
        );
    }

    #[test]
    fn test_field_kind_display() {
        assert_eq!(FieldKind::Phone.to_string(), "phone");
        assert_eq!(FieldKind::Birthday.to_string(), "birthday");
    }

    #[test]
    fn test_from_value_objects() {
        let phone = PhoneNumber::new("5555555555").unwrap();
        let field: ValidatedField = phone.into();
        assert_eq!(field.to_string(), "5555555555");
    }
}
