//! Contact record: one person with their phones and optional birthday.

use crate::domain::{Birthday, PhoneNumber};
use crate::error::{DirectoryError, DirectoryResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact in the directory.
///
/// The name is fixed at creation and doubles as the directory key.
/// Phones keep insertion order and may contain duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    name: String,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl ContactRecord {
    /// Create a record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    pub fn add_phone(&mut self, phone: &str) -> DirectoryResult<()> {
        let phone = PhoneNumber::new(phone)?;
        tracing::debug!(name = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Find the first phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| *p == phone)
    }

    /// Remove the first phone equal to `phone`.
    pub fn remove_phone(&mut self, phone: &str) -> DirectoryResult<()> {
        let index = self
            .phones
            .iter()
            .position(|p| p == phone)
            .ok_or(DirectoryError::PhoneNotFound)?;

        self.phones.remove(index);
        tracing::debug!(name = %self.name, phone = %phone, "Removed phone");
        Ok(())
    }

    /// Replace `old` with `new`.
    ///
    /// The new number is validated before anything changes, so a failed edit
    /// leaves the record untouched. The new number goes to the end of the
    /// list. Editing a number to itself is a no-op.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> DirectoryResult<()> {
        if self.find_phone(old).is_none() {
            return Err(DirectoryError::PhoneNotFound);
        }

        let replacement = PhoneNumber::new(new)?;
        if old == new {
            return Ok(());
        }

        self.phones.push(replacement);
        self.remove_phone(old)
    }

    /// Validate and set the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, birthday: &str) -> DirectoryResult<()> {
        let birthday = Birthday::new(birthday)?;
        tracing::debug!(name = %self.name, birthday = %birthday, "Setting birthday");
        self.birthday = Some(birthday);
        Ok(())
    }

    /// The weekend-adjusted date of the next birthday reminder.
    pub fn next_birthday(&self, today: NaiveDate) -> Option<NaiveDate> {
        self.birthday.as_ref()?.next_reminder_date(today)
    }

    /// Days from `today` until the next birthday reminder.
    ///
    /// Returns `None` when no birthday is set. Never negative.
    pub fn next_birthday_offset(&self, today: NaiveDate) -> Option<i64> {
        self.next_birthday(today)
            .map(|date| date.signed_duration_since(today).num_days())
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");

        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn phone_values(record: &ContactRecord) -> Vec<&str> {
        record.phones().iter().map(PhoneNumber::as_str).collect()
    }

    #[test]
    fn test_new_record_is_empty() {
        let record = ContactRecord::new("John Doe");
        assert_eq!(record.name(), "John Doe");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_add_phone_allows_duplicates() {
        let mut record = ContactRecord::new("John");
        record.add_phone("1234567890").unwrap();
        record.add_phone("1234567890").unwrap();
        assert_eq!(phone_values(&record), vec!["1234567890", "1234567890"]);
    }

    #[test]
    fn test_add_phone_rejects_invalid() {
        let mut record = ContactRecord::new("John");
        let err = record.add_phone("12345").unwrap_err();
        assert_eq!(
            err,
            DirectoryError::Validation(ValidationError::InvalidPhone("12345".to_string()))
        );
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_remove_phone_removes_first_match() {
        let mut record = ContactRecord::new("John");
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.add_phone("1111111111").unwrap();

        record.remove_phone("1111111111").unwrap();
        assert_eq!(phone_values(&record), vec!["2222222222", "1111111111"]);
    }

    #[test]
    fn test_remove_missing_phone_leaves_list() {
        let mut record = ContactRecord::new("John");
        record.add_phone("1111111111").unwrap();

        assert_eq!(
            record.remove_phone("9999999999"),
            Err(DirectoryError::PhoneNotFound)
        );
        assert_eq!(phone_values(&record), vec!["1111111111"]);
    }

    #[test]
    fn test_edit_phone_appends_replacement() {
        let mut record = ContactRecord::new("John");
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();

        record.edit_phone("1111111111", "3333333333").unwrap();
        assert_eq!(phone_values(&record), vec!["2222222222", "3333333333"]);
    }

    #[test]
    fn test_edit_phone_missing_old() {
        let mut record = ContactRecord::new("John");
        record.add_phone("1111111111").unwrap();

        assert_eq!(
            record.edit_phone("9999999999", "3333333333"),
            Err(DirectoryError::PhoneNotFound)
        );
        assert_eq!(phone_values(&record), vec!["1111111111"]);
    }

    #[test]
    fn test_edit_phone_invalid_new_leaves_record() {
        let mut record = ContactRecord::new("John");
        record.add_phone("1111111111").unwrap();

        let err = record.edit_phone("1111111111", "abc").unwrap_err();
        assert!(matches!(err, DirectoryError::Validation(_)));
        assert_eq!(phone_values(&record), vec!["1111111111"]);
    }

    #[test]
    fn test_edit_phone_same_value_is_noop() {
        let mut record = ContactRecord::new("John");
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();

        record.edit_phone("1111111111", "1111111111").unwrap();
        assert_eq!(phone_values(&record), vec!["1111111111", "2222222222"]);
    }

    #[test]
    fn test_add_birthday_overwrites() {
        let mut record = ContactRecord::new("John");
        record.add_birthday("01.01.1990").unwrap();
        record.add_birthday("02.02.1992").unwrap();
        assert_eq!(record.birthday().unwrap().as_str(), "02.02.1992");

        assert!(record.add_birthday("31.02.2020").is_err());
        assert_eq!(record.birthday().unwrap().as_str(), "02.02.1992");
    }

    #[test]
    fn test_next_birthday_offset_without_birthday() {
        let record = ContactRecord::new("John");
        assert_eq!(record.next_birthday_offset(date(2024, 1, 1)), None);
    }

    #[test]
    fn test_next_birthday_offset_weekday() {
        let mut record = ContactRecord::new("Alice");
        record.add_birthday("03.01.2024").unwrap();
        assert_eq!(record.next_birthday_offset(date(2024, 1, 1)), Some(2));
    }

    #[test]
    fn test_next_birthday_offset_saturday_shift() {
        let mut record = ContactRecord::new("Bob");
        record.add_birthday("06.01.2024").unwrap();
        assert_eq!(record.next_birthday(date(2024, 1, 1)), Some(date(2024, 1, 8)));
        assert_eq!(record.next_birthday_offset(date(2024, 1, 1)), Some(7));
    }

    #[test]
    fn test_next_birthday_offset_after_birthday_passed() {
        let mut record = ContactRecord::new("John");
        // 2025-03-10 is a Monday
        record.add_birthday("10.03.1980").unwrap();
        assert_eq!(
            record.next_birthday_offset(date(2024, 3, 11)),
            Some(364)
        );
    }

    #[test]
    fn test_display_format() {
        let mut record = ContactRecord::new("John");
        assert_eq!(record.to_string(), "Contact name: John, phones: ");

        record.add_phone("1234567890").unwrap();
        record.add_phone("5555555555").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 1234567890; 5555555555"
        );

        record.add_birthday("05.05.1995").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 1234567890; 5555555555, birthday: 05.05.1995"
        );
    }

    #[test]
    fn test_record_serialization() {
        let mut record = ContactRecord::new("John");
        record.add_phone("1234567890").unwrap();

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"John","phones":["1234567890"]}"#);

        let parsed: ContactRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
