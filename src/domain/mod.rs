//! Domain value objects and types.
//!
//! Type-safe wrappers for the contact fields that carry validation rules.
//! Validation happens at construction time, so invalid phone numbers or
//! birthdays can never be represented in the system.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use field::{FieldKind, ValidatedField};
pub use phone::PhoneNumber;
