//! Birthday value object and the reminder-date arithmetic built on it.

use super::errors::ValidationError;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// `chrono` format used for both parsing and display.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// chrono alone accepts unpadded fields such as "1.1.2020".
static BIRTHDAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("birthday pattern is valid")
});

/// A validated birthday in `DD.MM.YYYY` form.
///
/// Keeps the raw input alongside the parsed calendar date.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Birthday;
///
/// let birthday = Birthday::new("03.01.1990").unwrap();
/// assert_eq!(birthday.as_str(), "03.01.1990");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday, validating the format and the calendar date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the input is not zero-padded
    /// `DD.MM.YYYY` or names a day that does not exist (e.g. `31.02.2020`).
    pub fn new(birthday: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = birthday.into();

        if !BIRTHDAY_PATTERN.is_match(&raw) {
            return Err(ValidationError::InvalidBirthday(raw));
        }

        match NaiveDate::parse_from_str(&raw, BIRTHDAY_FORMAT) {
            Ok(date) => Ok(Self { raw, date }),
            Err(_) => Err(ValidationError::InvalidBirthday(raw)),
        }
    }

    /// Get the birthday exactly as it was entered.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Get the parsed calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The date this birthday is observed in `year`.
    ///
    /// 29 February falls back to 1 March in non-leap years.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        let (month, day) = (self.date.month(), self.date.day());
        NaiveDate::from_ymd_opt(year, month, day).or_else(|| {
            if month == 2 && day == 29 {
                NaiveDate::from_ymd_opt(year, 3, 1)
            } else {
                None
            }
        })
    }

    /// The next date on or after `today` to congratulate on this birthday.
    ///
    /// Birthdays falling on a weekend move to the following Monday.
    /// Returns `None` only when the date leaves chrono's supported range.
    pub fn next_reminder_date(&self, today: NaiveDate) -> Option<NaiveDate> {
        let mut candidate = self.in_year(today.year())?;
        if candidate < today {
            candidate = self.in_year(today.year() + 1)?;
        }

        candidate.checked_add_days(Days::new(weekend_shift(candidate.weekday())))
    }
}

/// Days needed to move `weekday` off the weekend onto Monday.
fn weekend_shift(weekday: Weekday) -> u64 {
    match weekday {
        Weekday::Sat | Weekday::Sun => u64::from(7 - weekday.num_days_from_monday()),
        _ => 0,
    }
}

// Serde support - serialize as the raw string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
