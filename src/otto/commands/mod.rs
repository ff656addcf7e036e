//! # Commands
//!
//! Business logic for every assistant command. Each function takes the
//! collection it works on plus plain Rust arguments and returns a
//! [`CmdResult`]: structured data to list plus leveled messages. Nothing in
//! here prints or reads from the terminal.
//!
//! Outcomes are split in two:
//! - bad input (invalid phone, short delete key, ...) is an `Err`, which the
//!   session turns into an error line and carries on;
//! - "not found" and similar non-events are `Ok` with a warning message.

use crate::model::{Note, Record};
use crate::sorter::SortReport;

pub mod birthdays;
pub mod contacts;
pub mod help;
pub mod notes;
pub mod sort;

pub use birthdays::UpcomingBirthday;
pub use help::HelpEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_contacts: Vec<Record>,
    pub birthdays: Vec<UpcomingBirthday>,
    pub listed_notes: Vec<Note>,
    pub help: Vec<HelpEntry>,
    pub sort_report: Option<SortReport>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn message(message: CmdMessage) -> Self {
        let mut result = Self::default();
        result.add_message(message);
        result
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_contacts(mut self, contacts: Vec<Record>) -> Self {
        self.listed_contacts = contacts;
        self
    }

    pub fn with_birthdays(mut self, birthdays: Vec<UpcomingBirthday>) -> Self {
        self.birthdays = birthdays;
        self
    }

    pub fn with_listed_notes(mut self, notes: Vec<Note>) -> Self {
        self.listed_notes = notes;
        self
    }

    pub fn with_help(mut self, help: Vec<HelpEntry>) -> Self {
        self.help = help;
        self
    }

    pub fn with_sort_report(mut self, report: SortReport) -> Self {
        self.sort_report = Some(report);
        self
    }
}
