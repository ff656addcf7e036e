use super::DataStore;
use crate::error::Result;
use crate::model::{Note, Record};

/// Keeps saved collections in memory. Counts saves so tests can check that
/// only the exit path persists.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    contacts: Vec<Record>,
    notes: Vec<Note>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(mut self, contacts: Vec<Record>) -> Self {
        self.contacts = contacts;
        self
    }

    pub fn with_notes(mut self, notes: Vec<Note>) -> Self {
        self.notes = notes;
        self
    }

    pub fn contacts(&self) -> &[Record] {
        &self.contacts
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load_contacts(&self) -> Result<Vec<Record>> {
        Ok(self.contacts.clone())
    }

    fn save_contacts(&mut self, records: &[Record]) -> Result<()> {
        self.contacts = records.to_vec();
        self.saves += 1;
        Ok(())
    }

    fn load_notes(&self) -> Result<Vec<Note>> {
        Ok(self.notes.clone())
    }

    fn save_notes(&mut self, notes: &[Note]) -> Result<()> {
        self.notes = notes.to_vec();
        self.saves += 1;
        Ok(())
    }
}
