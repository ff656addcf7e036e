use super::DataStore;
use crate::error::{AssistantError, Result};
use crate::fields::{Birthday, Email, Name, Phone, NONE_SENTINEL};
use crate::model::{Note, Record};
use chrono::NaiveDateTime;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const CREATED_AT_WRITE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";
const CREATED_AT_READ_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// On-disk shape of one contact.
#[derive(Debug, Serialize, Deserialize)]
struct ContactEntry {
    name: String,
    phones: Vec<String>,
    email: String,
    birthday: String,
}

/// On-disk shape of one note.
#[derive(Debug, Serialize, Deserialize)]
struct NoteEntry {
    title: String,
    text: String,
    tags: Vec<String>,
    creation_date: String,
}

impl From<&Record> for ContactEntry {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name.to_string(),
            phones: record.phones.iter().map(Phone::to_string).collect(),
            email: record
                .email
                .as_ref()
                .map(Email::to_string)
                .unwrap_or_else(|| NONE_SENTINEL.to_string()),
            birthday: record
                .birthday
                .map(|b| b.to_string())
                .unwrap_or_else(|| NONE_SENTINEL.to_string()),
        }
    }
}

impl TryFrom<ContactEntry> for Record {
    type Error = AssistantError;

    fn try_from(entry: ContactEntry) -> Result<Self> {
        let corrupt = |e: AssistantError| {
            AssistantError::Store(format!("contact '{}' is invalid: {}", entry.name, e))
        };

        let mut record = Record::new(Name::new(entry.name.as_str()).map_err(corrupt)?);
        for phone in &entry.phones {
            record.add_phone(Phone::new(phone.as_str()).map_err(corrupt)?);
        }
        record.email = Email::parse_optional(&entry.email).map_err(corrupt)?;
        record.birthday = Birthday::parse_optional(&entry.birthday).map_err(corrupt)?;
        Ok(record)
    }
}

impl From<&Note> for NoteEntry {
    fn from(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            text: note.text.clone(),
            tags: note.tags.clone(),
            creation_date: note.created_at().format(CREATED_AT_WRITE_FORMAT).to_string(),
        }
    }
}

impl TryFrom<NoteEntry> for Note {
    type Error = AssistantError;

    fn try_from(entry: NoteEntry) -> Result<Self> {
        let created_at =
            NaiveDateTime::parse_from_str(&entry.creation_date, CREATED_AT_READ_FORMAT).map_err(
                |e| {
                    AssistantError::Store(format!(
                        "note '{}' has a bad creation_date '{}': {}",
                        entry.title, entry.creation_date, e
                    ))
                },
            )?;
        Ok(Note::with_created_at(
            entry.title,
            entry.text,
            entry.tags,
            created_at,
        ))
    }
}

/// JSON-file storage: one array file per collection.
pub struct FileStore {
    contacts_path: PathBuf,
    notes_path: PathBuf,
}

impl FileStore {
    pub fn new(contacts_path: impl Into<PathBuf>, notes_path: impl Into<PathBuf>) -> Self {
        Self {
            contacts_path: contacts_path.into(),
            notes_path: notes_path.into(),
        }
    }

    pub fn contacts_path(&self) -> &Path {
        &self.contacts_path
    }

    pub fn notes_path(&self) -> &Path {
        &self.notes_path
    }
}

/// Reads a JSON array. A missing or blank file is an empty list.
fn read_entries<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        debug!(path = %path.display(), "no data file yet, starting empty");
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path).map_err(AssistantError::Io)?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    let entries: Vec<T> = serde_json::from_str(&content).map_err(AssistantError::Serialization)?;
    debug!(path = %path.display(), count = entries.len(), "loaded entries");
    Ok(entries)
}

/// Overwrites `path` with `entries`, writing to a sibling temp file first.
fn write_entries<T: Serialize>(path: &Path, entries: &[T]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(AssistantError::Io)?;
        }
    }
    let content = serde_json::to_string_pretty(entries).map_err(AssistantError::Serialization)?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "data".to_string());
    let tmp_path = path.with_file_name(format!(".{}.tmp", file_name));
    fs::write(&tmp_path, content).map_err(AssistantError::Io)?;
    fs::rename(&tmp_path, path).map_err(AssistantError::Io)?;

    debug!(path = %path.display(), count = entries.len(), "saved entries");
    Ok(())
}

impl DataStore for FileStore {
    fn load_contacts(&self) -> Result<Vec<Record>> {
        read_entries::<ContactEntry>(&self.contacts_path)?
            .into_iter()
            .map(Record::try_from)
            .collect()
    }

    fn save_contacts(&mut self, records: &[Record]) -> Result<()> {
        let entries: Vec<ContactEntry> = records.iter().map(ContactEntry::from).collect();
        write_entries(&self.contacts_path, &entries)
    }

    fn load_notes(&self) -> Result<Vec<Note>> {
        read_entries::<NoteEntry>(&self.notes_path)?
            .into_iter()
            .map(Note::try_from)
            .collect()
    }

    fn save_notes(&mut self, notes: &[Note]) -> Result<()> {
        let entries: Vec<NoteEntry> = notes.iter().map(NoteEntry::from).collect();
        write_entries(&self.notes_path, &entries)
    }
}
