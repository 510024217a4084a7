//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by contact records and the directory.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// A phone or birthday value was malformed
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No record is stored under the requested name
    #[error("record not found")]
    RecordNotFound,

    /// The record has no phone with the requested value
    #[error("phone number not found")]
    PhoneNotFound,

    /// The record has no birthday set
    #[error("birthday not found")]
    BirthdayNotFound,
}

/// Errors produced while interpreting a line of user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A directory or record operation failed
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    /// The command received the wrong number of arguments
    #[error("Invalid input. Please provide the required arguments.")]
    ArgumentCount {
        command: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The command name is not recognised
    #[error("Invalid command.")]
    UnknownCommand(String),

    /// The line contained nothing but whitespace
    #[error("Please enter a command.")]
    EmptyInput,
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        Self::Directory(DirectoryError::Validation(err))
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with DirectoryError
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
