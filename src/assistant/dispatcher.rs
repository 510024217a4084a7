//! Line-level dispatcher: one input line in, one reply out.

use crate::clock::{Clock, SystemClock};
use crate::commands::{handlers, parse_input, Command};
use crate::config::Config;
use crate::error::{CommandError, CommandResult, DirectoryError};
use crate::models::ContactDirectory;
use crate::observability::SessionMetrics;
use tracing::warn;

/// What the session loop should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Show the text and keep reading input
    Continue(String),

    /// Show the text and end the session
    Exit(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Continue(text) | Reply::Exit(text) => text,
        }
    }
}

/// The assistant bot: owns the contact directory for the whole session.
pub struct Assistant<C = SystemClock> {
    directory: ContactDirectory,
    clock: C,
    birthday_window_days: u32,
    metrics: SessionMetrics,
}

impl<C: Clock> Assistant<C> {
    pub fn new(clock: C, config: &Config) -> Self {
        Self {
            directory: ContactDirectory::new(),
            clock,
            birthday_window_days: config.birthday_window_days,
            metrics: SessionMetrics::new(),
        }
    }

    pub fn directory(&self) -> &ContactDirectory {
        &self.directory
    }

    pub fn metrics(&self) -> &SessionMetrics {
        &self.metrics
    }

    /// Handle one line of input.
    ///
    /// Every error is converted to its display text here; nothing a user
    /// types can end the session except `close` or `exit`.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let (command, args) = match parse_input(line) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(error = %e, "Rejected input");
                self.metrics.track_rejected_input();
                return Reply::Continue(e.to_string());
            }
        };

        let outcome = self.execute(command, &args);
        self.metrics.track_command(command.name(), outcome.is_ok());

        match outcome {
            Ok(reply) => reply,
            Err(e) => {
                if matches!(e, CommandError::Directory(DirectoryError::Validation(_))) {
                    self.metrics.track_validation_error(command.name());
                }
                warn!(command = %command, error = %e, "Command failed");
                Reply::Continue(e.to_string())
            }
        }
    }

    fn execute(&mut self, command: Command, args: &[&str]) -> CommandResult<Reply> {
        let directory = &mut self.directory;

        let text = match command {
            Command::Hello => "How can I help you?".to_string(),
            Command::Add => handlers::add_contact(args, directory)?,
            Command::Change => handlers::change_phone(args, directory)?,
            Command::Phone => handlers::show_phone(args, directory)?,
            Command::RemovePhone => handlers::remove_phone(args, directory)?,
            Command::Delete => handlers::delete_contact(args, directory)?,
            Command::AddBirthday => handlers::add_birthday(args, directory)?,
            Command::ShowBirthday => handlers::show_birthday(args, directory)?,
            Command::All => handlers::show_all(directory),
            Command::Birthdays => {
                handlers::birthdays(directory, self.clock.today(), self.birthday_window_days)
            }
            Command::Exit => return Ok(Reply::Exit("Good bye!".to_string())),
        };

        Ok(Reply::Continue(text))
    }
}
