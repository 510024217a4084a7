//! Text commands understood by the assistant.
//!
//! This module turns a raw input line into a [`Command`] plus its arguments.
//! The handlers that execute each command live in [`handlers`].

pub mod handlers;

use crate::error::{CommandError, CommandResult};
use std::fmt;
use std::str::FromStr;

/// Every command the assistant accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    RemovePhone,
    Delete,
    AddBirthday,
    ShowBirthday,
    All,
    Birthdays,
    Exit,
}

impl Command {
    /// Canonical name as typed by the user.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Add => "add",
            Command::Change => "change",
            Command::Phone => "phone",
            Command::RemovePhone => "remove-phone",
            Command::Delete => "delete",
            Command::AddBirthday => "add-birthday",
            Command::ShowBirthday => "show-birthday",
            Command::All => "all",
            Command::Birthdays => "birthdays",
            Command::Exit => "exit",
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hello" => Ok(Command::Hello),
            "add" => Ok(Command::Add),
            "change" => Ok(Command::Change),
            "phone" => Ok(Command::Phone),
            "remove-phone" => Ok(Command::RemovePhone),
            "delete" => Ok(Command::Delete),
            "add-birthday" => Ok(Command::AddBirthday),
            "show-birthday" => Ok(Command::ShowBirthday),
            "all" => Ok(Command::All),
            "birthdays" => Ok(Command::Birthdays),
            "close" | "exit" => Ok(Command::Exit),
            _ => Err(CommandError::UnknownCommand(s.to_string())),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Split a line into a command and its whitespace-separated arguments.
///
/// # Errors
///
/// - `CommandError::EmptyInput` if the line is blank
/// - `CommandError::UnknownCommand` if the first word is not a command
pub fn parse_input(line: &str) -> CommandResult<(Command, Vec<&str>)> {
    let mut words = line.split_whitespace();
    let command = words
        .next()
        .ok_or(CommandError::EmptyInput)?
        .parse::<Command>()?;
    Ok((command, words.collect()))
}
