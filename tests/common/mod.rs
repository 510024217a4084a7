//! Shared fixtures for integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use contact_assistant::clock::FixedClock;
use contact_assistant::{Assistant, Config, ContactDirectory, ContactRecord};

/// Monday, 1 January 2024. Used as "today" throughout the tests.
pub fn new_year_2024() -> NaiveDate {
    date(2024, 1, 1)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// A record with one phone and, optionally, a birthday.
pub fn sample_record(name: &str, phone: &str, birthday: Option<&str>) -> ContactRecord {
    let mut record = ContactRecord::new(name);
    record.add_phone(phone).expect("valid test phone");
    if let Some(birthday) = birthday {
        record.add_birthday(birthday).expect("valid test birthday");
    }
    record
}

pub fn directory_with(records: Vec<ContactRecord>) -> ContactDirectory {
    let mut directory = ContactDirectory::new();
    for record in records {
        directory.add_record(record);
    }
    directory
}

/// An assistant whose clock is pinned to `today`.
pub fn assistant_on(today: NaiveDate) -> Assistant<FixedClock> {
    Assistant::new(FixedClock(today), &Config::default())
}
