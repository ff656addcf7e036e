use crate::fields::{Birthday, Email, Name, Phone, NONE_SENTINEL};
use chrono::{Local, NaiveDate, NaiveDateTime, SubsecRound};
use std::fmt;

/// One contact: a name key, its phones, and optional birthday and email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: Name,
    pub phones: Vec<Phone>,
    pub birthday: Option<Birthday>,
    pub email: Option<Email>,
}

impl Record {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
            email: None,
        }
    }

    pub fn with_phone(mut self, phone: Phone) -> Self {
        self.phones.push(phone);
        self
    }

    /// Appends a phone. Duplicates are kept.
    pub fn add_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    /// Drops every phone and keeps only `phone`.
    pub fn replace_phones(&mut self, phone: Phone) {
        self.phones.clear();
        self.phones.push(phone);
    }

    pub fn remove_phone(&mut self, phone: &Phone) -> bool {
        match self.phones.iter().position(|p| p == phone) {
            Some(pos) => {
                self.phones.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn edit_phone(&mut self, old: &Phone, new: Phone) -> bool {
        match self.phones.iter_mut().find(|p| *p == old) {
            Some(slot) => {
                *slot = new;
                true
            }
            None => false,
        }
    }

    pub fn has_phone(&self, phone: &Phone) -> bool {
        self.phones.contains(phone)
    }

    pub fn days_to_birthday(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.map(|b| b.days_until(today))
    }

    pub fn phones_joined(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, Phones: {}", self.name, self.phones_joined())?;
        match &self.email {
            Some(email) => write!(f, ", Email: {}", email)?,
            None => write!(f, ", Email: {}", NONE_SENTINEL)?,
        }
        match &self.birthday {
            Some(birthday) => write!(f, ", Birthday: {}", birthday),
            None => write!(f, ", Birthday: {}", NONE_SENTINEL),
        }
    }
}

/// A free-form note. The creation timestamp is fixed when the note is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub title: String,
    pub text: String,
    pub tags: Vec<String>,
    created_at: NaiveDateTime,
}

impl Note {
    /// Builds a note from raw user input; `tags` is a comma-separated list.
    pub fn new(title: impl Into<String>, text: impl Into<String>, tags: &str) -> Self {
        // Persisted timestamps carry microseconds, so drop anything finer.
        let created_at = Local::now().naive_local().trunc_subsecs(6);
        Self::with_created_at(title, text, split_tags(tags), created_at)
    }

    pub fn with_created_at(
        title: impl Into<String>,
        text: impl Into<String>,
        tags: Vec<String>,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            tags,
            created_at,
        }
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    pub fn tags_joined(&self) -> String {
        self.tags.join(", ")
    }

    /// True if `term` (already lowercased) occurs in the title, text or tags.
    pub fn contains_term(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(term)
            || self.text.to_lowercase().contains(term)
            || self.tags.join(" ").to_lowercase().contains(term)
    }
}

/// Splits comma-separated tags, trimming each and dropping blanks.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
