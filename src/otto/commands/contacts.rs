use crate::commands::{CmdMessage, CmdResult};
use crate::contacts::ContactBook;
use crate::error::Result;
use crate::fields::{is_none_sentinel, Birthday, Email, Name, Phone};
use crate::model::Record;
use chrono::NaiveDate;

const PHONE_TAKEN: &str = "The phone number you entered already exists";

/// Creates (or replaces) a contact with a single phone.
pub fn add(book: &mut ContactBook, name: &str, phone: &str) -> Result<CmdResult> {
    let name = Name::new(name)?;
    let phone = Phone::new(phone)?;
    if let Some(owner) = book.phone_owner(&phone) {
        return Ok(CmdResult::message(CmdMessage::warning(format!(
            "{} (held by {})",
            PHONE_TAKEN, owner.name
        ))));
    }

    let message = format!("Contact {} added with phone {}", name, phone);
    book.add(Record::new(name).with_phone(phone));
    Ok(CmdResult::message(CmdMessage::success(message)))
}

/// Replaces all of a contact's phones with `phone`.
pub fn change_phone(book: &mut ContactBook, name: &str, phone: &str) -> Result<CmdResult> {
    let phone = Phone::new(phone)?;
    match book.find_mut(name) {
        Some(record) => {
            record.replace_phones(phone);
            Ok(CmdResult::message(CmdMessage::success(format!(
                "Phone number updated for {}",
                name
            ))))
        }
        None => Ok(not_found(name)),
    }
}

pub fn change_name(book: &mut ContactBook, old: &str, new: &str) -> Result<CmdResult> {
    let new_name = Name::new(new)?;
    match book.rename(old, new_name) {
        Some(record) => Ok(CmdResult::message(CmdMessage::success(format!(
            "Name updated successfully for {} to {}",
            old, record.name
        )))),
        None => Ok(not_found(old)),
    }
}

/// Appends a phone to an existing contact.
pub fn add_phone(book: &mut ContactBook, name: &str, phone: &str) -> Result<CmdResult> {
    let phone = Phone::new(phone)?;
    if let Some(owner) = book.phone_owner(&phone) {
        return Ok(CmdResult::message(CmdMessage::warning(format!(
            "{} (held by {})",
            PHONE_TAKEN, owner.name
        ))));
    }
    match book.find_mut(name) {
        Some(record) => {
            let message = format!("Phone number {} added for {}", phone, name);
            record.add_phone(phone);
            Ok(CmdResult::message(CmdMessage::success(message)))
        }
        None => Ok(not_found(name)),
    }
}

/// Sets a contact's birthday; `none` clears it.
pub fn add_birthday(
    book: &mut ContactBook,
    name: &str,
    birthday: &str,
    today: NaiveDate,
) -> Result<CmdResult> {
    let Some(record) = book.find_mut(name) else {
        return Ok(missing_contact(name));
    };
    record.birthday = if is_none_sentinel(birthday) {
        None
    } else {
        Some(Birthday::new_at(birthday, today)?)
    };
    Ok(CmdResult::message(CmdMessage::success(format!(
        "Birthday added for {}",
        name
    ))))
}

/// Sets a contact's email; `none` clears it.
pub fn add_email(book: &mut ContactBook, name: &str, email: &str) -> Result<CmdResult> {
    let Some(record) = book.find_mut(name) else {
        return Ok(missing_contact(name));
    };
    record.email = Email::parse_optional(email)?;
    Ok(CmdResult::message(CmdMessage::success(format!(
        "Email added for {}",
        name
    ))))
}

pub fn delete(book: &mut ContactBook, name: &str) -> Result<CmdResult> {
    match book.delete(name)? {
        Some(record) => Ok(CmdResult::message(CmdMessage::success(format!(
            "Contact {} deleted",
            record.name
        )))),
        None => Ok(not_found(name.trim())),
    }
}

pub fn search(book: &ContactBook, term: &str) -> CmdResult {
    let found: Vec<Record> = book.search(term).into_iter().cloned().collect();
    if found.is_empty() {
        return CmdResult::message(CmdMessage::info(format!(
            "No contacts found matching '{}'",
            term
        )));
    }
    CmdResult::default().with_listed_contacts(found)
}

pub fn show_all(book: &ContactBook) -> CmdResult {
    if book.is_empty() {
        return CmdResult::message(CmdMessage::info("No contacts available"));
    }
    CmdResult::default().with_listed_contacts(book.records().to_vec())
}

fn not_found(name: &str) -> CmdResult {
    CmdResult::message(CmdMessage::warning(format!("Contact '{}' not found", name)))
}

fn missing_contact(name: &str) -> CmdResult {
    CmdResult::message(CmdMessage::warning(format!(
        "Contact with name {} does not exist.",
        name
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::AssistantError;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn book_with_alice() -> ContactBook {
        let mut book = ContactBook::new();
        add(&mut book, "Alice", "1234567890").unwrap();
        book
    }

    #[test]
    fn add_contact_stores_record() {
        let book = book_with_alice();
        let alice = book.find("Alice").unwrap();
        assert_eq!(alice.phones_joined(), "1234567890");
        assert_eq!(alice.email, None);
    }

    #[test]
    fn add_contact_invalid_phone_leaves_book_unchanged() {
        let mut book = ContactBook::new();
        let err = add(&mut book, "Alice", "123").unwrap_err();
        assert!(matches!(err, AssistantError::InvalidValue { .. }));
        assert!(book.is_empty());
    }

    #[test]
    fn add_contact_rejects_phone_held_by_someone_else() {
        let mut book = book_with_alice();
        let result = add(&mut book, "Bob", "1234567890").unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.messages[0].content.contains("already exists"));
        assert!(book.find("Bob").is_none());
    }

    #[test]
    fn change_phone_replaces_all() {
        let mut book = book_with_alice();
        add_phone(&mut book, "Alice", "1111111111").unwrap();
        change_phone(&mut book, "Alice", "2222222222").unwrap();
        assert_eq!(book.find("Alice").unwrap().phones_joined(), "2222222222");

        let result = change_phone(&mut book, "Nobody", "3333333333").unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn add_phone_appends() {
        let mut book = book_with_alice();
        let result = add_phone(&mut book, "Alice", "0987654321").unwrap();
        assert_eq!(result.messages[0].content, "Phone number 0987654321 added for Alice");
        assert_eq!(
            book.find("Alice").unwrap().phones_joined(),
            "1234567890, 0987654321"
        );
    }

    #[test]
    fn birthday_only_for_existing_contact() {
        let mut book = book_with_alice();
        let result = add_birthday(&mut book, "Bob", "1990-01-01", today()).unwrap();
        assert_eq!(result.messages[0].content, "Contact with name Bob does not exist.");

        add_birthday(&mut book, "Alice", "1990-01-01", today()).unwrap();
        assert_eq!(
            book.find("Alice").unwrap().birthday.unwrap().to_string(),
            "1990-01-01"
        );

        assert!(add_birthday(&mut book, "Alice", "2030-01-01", today()).is_err());
        add_birthday(&mut book, "Alice", "none", today()).unwrap();
        assert_eq!(book.find("Alice").unwrap().birthday, None);
    }

    #[test]
    fn email_validated_and_overwritten() {
        let mut book = book_with_alice();
        assert!(add_email(&mut book, "Alice", "not-an-email").is_err());
        add_email(&mut book, "Alice", "a@example.com").unwrap();
        add_email(&mut book, "Alice", "b@example.com").unwrap();
        assert_eq!(
            book.find("Alice").unwrap().email.as_ref().unwrap().as_str(),
            "b@example.com"
        );
    }

    #[test]
    fn delete_reports_outcomes() {
        let mut book = book_with_alice();
        assert!(matches!(delete(&mut book, "A"), Err(AssistantError::InvalidKey(_))));

        let missing = delete(&mut book, "Bob").unwrap();
        assert_eq!(missing.messages[0].content, "Contact 'Bob' not found");

        let removed = delete(&mut book, "Alice").unwrap();
        assert_eq!(removed.messages[0].content, "Contact Alice deleted");
        assert!(book.is_empty());
    }

    #[test]
    fn rename_contact() {
        let mut book = book_with_alice();
        let result = change_name(&mut book, "Alice", "Alicia").unwrap();
        assert_eq!(
            result.messages[0].content,
            "Name updated successfully for Alice to Alicia"
        );
        assert!(book.find("Alicia").is_some());
        assert!(book.find("Alice").is_none());
    }

    #[test]
    fn show_all_and_search() {
        let mut book = ContactBook::new();
        assert_eq!(show_all(&book).messages[0].content, "No contacts available");

        add(&mut book, "Alice", "1234567890").unwrap();
        add(&mut book, "Bob", "5555555555").unwrap();
        assert_eq!(show_all(&book).listed_contacts.len(), 2);

        let found = search(&book, "bob");
        assert_eq!(found.listed_contacts.len(), 1);
        assert!(search(&book, "carol").listed_contacts.is_empty());
    }
}
