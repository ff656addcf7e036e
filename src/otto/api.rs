//! # API Facade
//!
//! The API layer is a thin facade over the command layer and the single
//! entry point for every assistant operation, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns the session state**: the [`ContactBook`] and [`NoteBook`] are
//!   loaded once by [`AssistantApi::open`] and live in memory until
//!   [`AssistantApi::save`]
//! - **Dispatches** to the appropriate command function
//! - **Supplies "today"** to date-dependent commands
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no terminal I/O and holds no presentation logic.
//!
//! ## Generic Over DataStore
//!
//! `AssistantApi<S: DataStore>` is generic over the storage backend:
//! - Production: `AssistantApi<FileStore>`
//! - Testing: `AssistantApi<InMemoryStore>`
//!
//! Mutating calls never touch the store. Only `save` persists, which is what
//! the session does on exit.

use crate::commands;
use crate::contacts::ContactBook;
use crate::error::Result;
use crate::notes::NoteBook;
use crate::store::DataStore;
use chrono::{Local, NaiveDate};
use std::path::Path;
use tracing::debug;

const DEFAULT_BIRTHDAY_WINDOW: u32 = 14;

pub struct AssistantApi<S: DataStore> {
    store: S,
    contacts: ContactBook,
    notes: NoteBook,
    birthday_window: u32,
}

impl<S: DataStore> AssistantApi<S> {
    /// Loads both collections from `store`.
    pub fn open(store: S) -> Result<Self> {
        let contacts = ContactBook::from_records(store.load_contacts()?);
        let notes = NoteBook::from_notes(store.load_notes()?);
        debug!(
            contacts = contacts.len(),
            notes = notes.len(),
            "loaded assistant data"
        );
        Ok(Self {
            store,
            contacts,
            notes,
            birthday_window: DEFAULT_BIRTHDAY_WINDOW,
        })
    }

    pub fn with_birthday_window(mut self, days: u32) -> Self {
        self.birthday_window = days;
        self
    }

    /// Writes both collections back, replacing what the store held.
    pub fn save(&mut self) -> Result<()> {
        self.store.save_contacts(self.contacts.records())?;
        self.store.save_notes(self.notes.notes())?;
        debug!(
            contacts = self.contacts.len(),
            notes = self.notes.len(),
            "saved assistant data"
        );
        Ok(())
    }

    pub fn hello(&self) -> commands::CmdResult {
        commands::CmdResult::message(commands::CmdMessage::info("How can I help you?"))
    }

    pub fn help(&self) -> commands::CmdResult {
        commands::help::run()
    }

    pub fn help_note(&self) -> commands::CmdResult {
        commands::help::notes()
    }

    pub fn add_contact(&mut self, name: &str, phone: &str) -> Result<commands::CmdResult> {
        commands::contacts::add(&mut self.contacts, name, phone)
    }

    pub fn change_contact_phone(&mut self, name: &str, phone: &str) -> Result<commands::CmdResult> {
        commands::contacts::change_phone(&mut self.contacts, name, phone)
    }

    pub fn change_contact_name(&mut self, old: &str, new: &str) -> Result<commands::CmdResult> {
        commands::contacts::change_name(&mut self.contacts, old, new)
    }

    pub fn add_phone(&mut self, name: &str, phone: &str) -> Result<commands::CmdResult> {
        commands::contacts::add_phone(&mut self.contacts, name, phone)
    }

    pub fn add_birthday(&mut self, name: &str, birthday: &str) -> Result<commands::CmdResult> {
        commands::contacts::add_birthday(&mut self.contacts, name, birthday, today())
    }

    pub fn add_email(&mut self, name: &str, email: &str) -> Result<commands::CmdResult> {
        commands::contacts::add_email(&mut self.contacts, name, email)
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::contacts::delete(&mut self.contacts, name)
    }

    pub fn search_contacts(&self, term: &str) -> commands::CmdResult {
        commands::contacts::search(&self.contacts, term)
    }

    pub fn show_all_contacts(&self) -> commands::CmdResult {
        commands::contacts::show_all(&self.contacts)
    }

    /// Birthdays within `days` (or the configured window) from today.
    pub fn upcoming_birthdays(&self, days: Option<u32>) -> commands::CmdResult {
        self.upcoming_birthdays_at(days, today())
    }

    pub fn upcoming_birthdays_at(
        &self,
        days: Option<u32>,
        today: NaiveDate,
    ) -> commands::CmdResult {
        let window = days.unwrap_or(self.birthday_window);
        commands::birthdays::run(&self.contacts, window, today)
    }

    pub fn add_note(&mut self, title: &str, text: &str, tags: &str) -> commands::CmdResult {
        commands::notes::add(&mut self.notes, title, text, tags)
    }

    pub fn search_notes(&self, query: &str) -> commands::CmdResult {
        commands::notes::search(&self.notes, query)
    }

    pub fn edit_note(&mut self, title: &str, text: &str) -> commands::CmdResult {
        commands::notes::edit(&mut self.notes, title, text)
    }

    pub fn remove_note(&mut self, title: &str) -> commands::CmdResult {
        commands::notes::remove(&mut self.notes, title)
    }

    pub fn show_notes(&self) -> commands::CmdResult {
        commands::notes::show(&self.notes)
    }

    pub fn sort_files(&self, path: &Path) -> Result<commands::CmdResult> {
        commands::sort::run(path)
    }

    pub fn contacts(&self) -> &ContactBook {
        &self.contacts
    }

    pub fn notes(&self) -> &NoteBook {
        &self.notes
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
