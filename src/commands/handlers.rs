//! Command handlers.
//!
//! Each handler checks its argument count, calls into the directory, and
//! returns the text to show the user. Errors are returned, never printed.

use super::Command;
use crate::error::{CommandError, CommandResult, DirectoryError};
use crate::models::{ContactDirectory, ContactRecord};
use chrono::NaiveDate;

/// Destructure `args` into exactly `N` arguments.
fn expect_args<'a, const N: usize>(
    command: Command,
    args: &[&'a str],
) -> CommandResult<[&'a str; N]> {
    <[&'a str; N]>::try_from(args).map_err(|_| CommandError::ArgumentCount {
        command: command.name(),
        expected: N,
        actual: args.len(),
    })
}

fn record_mut<'d>(
    directory: &'d mut ContactDirectory,
    name: &str,
) -> CommandResult<&'d mut ContactRecord> {
    directory
        .find_mut(name)
        .ok_or(CommandError::Directory(DirectoryError::RecordNotFound))
}

fn record<'d>(directory: &'d ContactDirectory, name: &str) -> CommandResult<&'d ContactRecord> {
    directory
        .find(name)
        .ok_or(CommandError::Directory(DirectoryError::RecordNotFound))
}

/// `add <name> <phone>`: create the contact or add a phone to an existing one.
pub fn add_contact(args: &[&str], directory: &mut ContactDirectory) -> CommandResult<String> {
    let [name, phone] = expect_args(Command::Add, args)?;

    if let Some(existing) = directory.find_mut(name) {
        existing.add_phone(phone)?;
        return Ok(format!("Contact {} updated.", name));
    }

    let mut record = ContactRecord::new(name);
    record.add_phone(phone)?;
    directory.add_record(record);
    Ok(format!("Contact {} added.", name))
}

/// `change <name> <old> <new>`
pub fn change_phone(args: &[&str], directory: &mut ContactDirectory) -> CommandResult<String> {
    let [name, old, new] = expect_args(Command::Change, args)?;
    record_mut(directory, name)?.edit_phone(old, new)?;
    Ok(format!("Phone for {} updated.", name))
}

/// `phone <name>`
pub fn show_phone(args: &[&str], directory: &ContactDirectory) -> CommandResult<String> {
    let [name] = expect_args(Command::Phone, args)?;
    let phones = record(directory, name)?
        .phones()
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    Ok(format!("{}'s phones: {}.", name, phones))
}

/// `remove-phone <name> <phone>`
pub fn remove_phone(args: &[&str], directory: &mut ContactDirectory) -> CommandResult<String> {
    let [name, phone] = expect_args(Command::RemovePhone, args)?;
    record_mut(directory, name)?.remove_phone(phone)?;
    Ok(format!("Phone {} removed from {}.", phone, name))
}

/// `delete <name>`
pub fn delete_contact(args: &[&str], directory: &mut ContactDirectory) -> CommandResult<String> {
    let [name] = expect_args(Command::Delete, args)?;
    directory.delete(name)?;
    Ok(format!("Contact {} deleted.", name))
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[&str], directory: &mut ContactDirectory) -> CommandResult<String> {
    let [name, birthday] = expect_args(Command::AddBirthday, args)?;
    record_mut(directory, name)?.add_birthday(birthday)?;
    Ok(format!("Added birthday for {}.", name))
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[&str], directory: &ContactDirectory) -> CommandResult<String> {
    let [name] = expect_args(Command::ShowBirthday, args)?;
    let birthday = record(directory, name)?
        .birthday()
        .ok_or(CommandError::Directory(DirectoryError::BirthdayNotFound))?;
    Ok(format!("{}'s birthday: {}.", name, birthday))
}

/// `all`
pub fn show_all(directory: &ContactDirectory) -> String {
    if directory.is_empty() {
        "No contacts saved.".to_string()
    } else {
        directory.to_string()
    }
}

/// `birthdays`: reminders due within `within_days` of `today`.
pub fn birthdays(directory: &ContactDirectory, today: NaiveDate, within_days: u32) -> String {
    let upcoming = directory.upcoming_birthdays(today, within_days);
    if upcoming.is_empty() {
        return "No upcoming birthdays.".to_string();
    }

    upcoming
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
