//! The address book: contacts keyed by name, kept in insertion order.

use crate::error::{AssistantError, Result};
use crate::fields::{Name, Phone};
use crate::model::Record;
use chrono::NaiveDate;

#[derive(Debug, Default, Clone)]
pub struct ContactBook {
    records: Vec<Record>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a book from loaded records. Later records with a repeated name
    /// replace earlier ones.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut book = Self::new();
        for record in records {
            book.add(record);
        }
        book
    }

    /// Inserts `record`, replacing any record with the same name in place.
    pub fn add(&mut self, record: Record) {
        match self.position(record.name.as_str()) {
            Some(pos) => self.records[pos] = record,
            None => self.records.push(record),
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name.as_str() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name.as_str() == name)
    }

    /// Removes the contact with exactly this (trimmed) name.
    ///
    /// Keys shorter than two characters are rejected with `InvalidKey`; an
    /// unknown name is `Ok(None)`.
    pub fn delete(&mut self, name: &str) -> Result<Option<Record>> {
        let key = name.trim();
        if key.chars().count() <= 1 {
            return Err(AssistantError::InvalidKey(key.to_string()));
        }
        Ok(self.position(key).map(|pos| self.records.remove(pos)))
    }

    /// Renames a contact. The record moves to the end of the book and
    /// overwrites any contact already called `new_name`.
    pub fn rename(&mut self, old_name: &str, new_name: Name) -> Option<&Record> {
        let pos = self.position(old_name)?;
        let mut record = self.records.remove(pos);
        if let Some(existing) = self.position(new_name.as_str()) {
            self.records.remove(existing);
        }
        record.name = new_name;
        self.records.push(record);
        self.records.last()
    }

    /// Case-insensitive match against the name or any phone.
    pub fn search(&self, term: &str) -> Vec<&Record> {
        let needle = term.to_lowercase();
        self.records
            .iter()
            .filter(|r| {
                r.name.as_str().to_lowercase().contains(&needle)
                    || r.phones.iter().any(|p| p.as_str().contains(&needle))
            })
            .collect()
    }

    /// Contacts whose next birthday is within `window_days` of `today`,
    /// paired with the number of days left.
    pub fn upcoming_birthdays(&self, window_days: u32, today: NaiveDate) -> Vec<(&Record, i64)> {
        self.records
            .iter()
            .filter_map(|r| r.days_to_birthday(today).map(|days| (r, days)))
            .filter(|(_, days)| (0..=i64::from(window_days)).contains(days))
            .collect()
    }

    /// The contact that already owns `phone`, if any.
    pub fn phone_owner(&self, phone: &Phone) -> Option<&Record> {
        self.records.iter().find(|r| r.has_phone(phone))
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name.as_str() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Birthday;

    fn record(name: &str, phone: &str) -> Record {
        Record::new(Name::new(name).unwrap()).with_phone(Phone::new(phone).unwrap())
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn add_overwrites_same_name_in_place() {
        let mut book = ContactBook::new();
        book.add(record("Alice", "1111111111"));
        book.add(record("Bob", "2222222222"));
        book.add(record("Alice", "3333333333"));

        assert_eq!(book.len(), 2);
        assert_eq!(book.records()[0].name.as_str(), "Alice");
        assert_eq!(book.find("Alice").unwrap().phones_joined(), "3333333333");
    }

    #[test]
    fn find_is_case_sensitive() {
        let mut book = ContactBook::new();
        book.add(record("Alice", "1111111111"));
        assert!(book.find("Alice").is_some());
        assert!(book.find("alice").is_none());
    }

    #[test]
    fn delete_requires_two_characters() {
        let mut book = ContactBook::new();
        assert!(matches!(book.delete(""), Err(AssistantError::InvalidKey(_))));
        assert!(matches!(book.delete("a"), Err(AssistantError::InvalidKey(_))));
        assert!(matches!(book.delete("  a  "), Err(AssistantError::InvalidKey(_))));
    }

    #[test]
    fn delete_unknown_is_not_an_error() {
        let mut book = ContactBook::new();
        assert!(book.delete("Bob").unwrap().is_none());
    }

    #[test]
    fn delete_exact_trimmed_match() {
        let mut book = ContactBook::new();
        book.add(record("Bob", "2222222222"));
        assert!(book.delete("bob").unwrap().is_none());
        let removed = book.delete(" Bob ").unwrap().unwrap();
        assert_eq!(removed.name.as_str(), "Bob");
        assert!(book.is_empty());
    }

    #[test]
    fn search_matches_name_or_phone() {
        let mut book = ContactBook::new();
        book.add(record("Alice", "1234567890"));
        book.add(record("Bob", "5550001111"));
        book.add(record("Malice", "9999999999"));

        let names: Vec<_> = book.search("ALI").iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Malice"]);

        let by_phone = book.search("555");
        assert_eq!(by_phone.len(), 1);
        assert_eq!(by_phone[0].name.as_str(), "Bob");

        assert!(book.search("zzz").is_empty());
    }

    #[test]
    fn upcoming_birthdays_window() {
        let today = date(2024, 3, 1);
        let mut book = ContactBook::new();

        let mut soon = record("Soon", "1111111111");
        soon.birthday = Some(Birthday::new_at("2020-03-10", today).unwrap());
        let mut passed = record("Passed", "2222222222");
        passed.birthday = Some(Birthday::new_at("2020-02-01", today).unwrap());
        let mut now = record("Now", "3333333333");
        now.birthday = Some(Birthday::new_at("1990-03-01", today).unwrap());
        book.add(soon);
        book.add(passed);
        book.add(now);
        book.add(record("NoBirthday", "4444444444"));

        let upcoming: Vec<_> = book
            .upcoming_birthdays(14, today)
            .into_iter()
            .map(|(r, d)| (r.name.as_str().to_string(), d))
            .collect();
        assert_eq!(
            upcoming,
            vec![("Soon".to_string(), 9), ("Now".to_string(), 0)]
        );
    }

    #[test]
    fn rename_moves_record_to_end() {
        let mut book = ContactBook::new();
        book.add(record("Alice", "1111111111"));
        book.add(record("Bob", "2222222222"));

        let renamed = book.rename("Alice", Name::new("Alicia").unwrap()).unwrap();
        assert_eq!(renamed.phones_joined(), "1111111111");
        let names: Vec<_> = book.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Bob", "Alicia"]);

        assert!(book.rename("Nobody", Name::new("Someone").unwrap()).is_none());
    }

    #[test]
    fn rename_onto_existing_name_overwrites() {
        let mut book = ContactBook::new();
        book.add(record("Alice", "1111111111"));
        book.add(record("Bob", "2222222222"));

        book.rename("Alice", Name::new("Bob").unwrap());
        assert_eq!(book.len(), 1);
        assert_eq!(book.find("Bob").unwrap().phones_joined(), "1111111111");
    }

    #[test]
    fn phone_owner_finds_holder() {
        let mut book = ContactBook::new();
        book.add(record("Alice", "1111111111"));
        let phone = Phone::new("1111111111").unwrap();
        assert_eq!(book.phone_owner(&phone).unwrap().name.as_str(), "Alice");
        assert!(book.phone_owner(&Phone::new("0000000000").unwrap()).is_none());
    }
}
