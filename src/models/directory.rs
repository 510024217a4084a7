//! Contact directory: the name-keyed collection of every record.

use super::record::ContactRecord;
use crate::domain::birthday::BIRTHDAY_FORMAT;
use crate::error::{DirectoryError, DirectoryResult};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::fmt;

/// Default reminder window for [`ContactDirectory::upcoming_birthdays`].
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: u32 = 7;

/// A birthday reminder produced by the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Name of the contact
    pub name: String,

    /// Weekend-adjusted date to congratulate on
    pub date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.date.format(BIRTHDAY_FORMAT))
    }
}

/// In-memory contact directory.
///
/// Records are keyed by name and iterate in insertion order. Adding a record
/// under an existing name replaces the stored record in place.
#[derive(Debug, Clone, Default)]
pub struct ContactDirectory {
    records: Vec<ContactRecord>,
    index: HashMap<String, usize>,
}

impl ContactDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record`, replacing any record with the same name.
    pub fn add_record(&mut self, record: ContactRecord) {
        match self.index.get(record.name()) {
            Some(&slot) => {
                tracing::debug!(name = %record.name(), "Replacing record");
                self.records[slot] = record;
            }
            None => {
                tracing::debug!(name = %record.name(), "Inserting record");
                self.index.insert(record.name().to_string(), self.records.len());
                self.records.push(record);
            }
        }
    }

    /// Exact, case-sensitive lookup by name.
    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.index.get(name).map(|&slot| &self.records[slot])
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        match self.index.get(name) {
            Some(&slot) => self.records.get_mut(slot),
            None => None,
        }
    }

    /// Remove the record stored under `name`.
    pub fn delete(&mut self, name: &str) -> DirectoryResult<ContactRecord> {
        let slot = self
            .index
            .remove(name)
            .ok_or(DirectoryError::RecordNotFound)?;

        let removed = self.records.remove(slot);
        for position in self.index.values_mut() {
            if *position > slot {
                *position -= 1;
            }
        }

        tracing::debug!(name = %name, "Deleted record");
        Ok(removed)
    }

    /// Birthdays whose weekend-adjusted reminder falls within `within_days`
    /// of `today`, inclusive of today.
    ///
    /// Sorted by date; records sharing a date keep insertion order.
    pub fn upcoming_birthdays(&self, today: NaiveDate, within_days: u32) -> Vec<UpcomingBirthday> {
        let mut upcoming: Vec<UpcomingBirthday> = self
            .records
            .iter()
            .filter_map(|record| {
                let date = record.next_birthday(today)?;
                let offset = date.signed_duration_since(today).num_days();
                (offset <= i64::from(within_days)).then(|| UpcomingBirthday {
                    name: record.name().to_string(),
                    date,
                })
            })
            .collect();

        upcoming.sort_by_key(|entry| entry.date);

        tracing::debug!(
            within_days = within_days,
            result_count = upcoming.len(),
            "Computed upcoming birthdays"
        );
        upcoming
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContactRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Every record on its own line, in insertion order.
///
/// An empty directory renders as an empty string.
impl fmt::Display for ContactDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}
