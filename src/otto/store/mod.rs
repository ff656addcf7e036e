//! # Storage Layer
//!
//! The [`DataStore`] trait is the persistence seam for the two collections.
//! The books themselves live in memory for the whole session; a store is
//! only asked to load them once at start-up and to save them once on exit.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one JSON array per collection
//!   - contacts in `address_book.json` (name configurable)
//!   - notes in `notes.json` (name configurable)
//!   - saves are whole-file overwrites via temp file and rename
//!
//! - [`memory::InMemoryStore`]: in-memory storage for testing
//!
//! ## Storage Format
//!
//! ```text
//! address_book.json   [{"name", "phones", "email", "birthday"}, ...]
//! notes.json          [{"title", "text", "tags", "creation_date"}, ...]
//! ```
//!
//! Absent emails and birthdays are written as the string `"None"`.

use crate::error::Result;
use crate::model::{Note, Record};

pub mod fs;
pub mod memory;

/// Abstract interface for loading and saving both collections.
pub trait DataStore {
    /// Load every contact. A store with nothing saved yields an empty list.
    fn load_contacts(&self) -> Result<Vec<Record>>;

    /// Replace all saved contacts with `records`.
    fn save_contacts(&mut self, records: &[Record]) -> Result<()>;

    /// Load every note in saved order.
    fn load_notes(&self) -> Result<Vec<Note>>;

    /// Replace all saved notes with `notes`.
    fn save_notes(&mut self, notes: &[Note]) -> Result<()>;
}
