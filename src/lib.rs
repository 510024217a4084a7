//! Contact assistant - an interactive, in-memory contact book.
//!
//! Keeps contacts with phone numbers and birthdays for the lifetime of the
//! process and answers "whose birthday is coming up?" with weekend birthdays
//! moved to the following Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated field value objects (phone numbers, birthdays)
//! - **models**: Contact records and the directory that owns them
//! - **error**: Custom error types for precise error handling
//! - **commands**: Text command parsing and handlers
//! - **assistant**: The line dispatcher and the interactive session loop
//! - **clock**: Source of "today" for birthday reminders
//! - **config**: Configuration management from environment variables
//! - **observability**: Session metrics

pub mod assistant;
pub mod clock;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod observability;

pub use assistant::{Assistant, Reply};
pub use config::Config;
pub use domain::{Birthday, FieldKind, PhoneNumber, ValidatedField, ValidationError};
pub use error::{CommandError, ConfigError, DirectoryError};
pub use models::{ContactDirectory, ContactRecord, UpcomingBirthday};
