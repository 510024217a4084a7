//! Data models for the contact book.
//!
//! This module contains the contact record and the directory that owns every
//! record for the lifetime of the process.

pub mod directory;
pub mod record;

pub use directory::{ContactDirectory, UpcomingBirthday, DEFAULT_BIRTHDAY_WINDOW_DAYS};
pub use record::ContactRecord;
