//! # Command Input
//!
//! Turns one line of user input into a [`Command`]. The first
//! whitespace-delimited word is the command keyword and is matched exactly
//! (ignoring case) against a closed set, so `add_note` can never be mistaken
//! for `add_birthday` or `add_contact`. The rest of the line is the payload,
//! passed on with its original casing.
//!
//! Payload rules:
//!
//! - Contact commands take `<name> <value>`. The value is the last word and
//!   the name is everything before it, so names may contain spaces.
//! - `change_contact_name` takes `<old name>, <new name>`.
//! - `edit_note` takes `<title> <new text>`; a title with spaces can be
//!   wrapped in double quotes.
//! - Commands without arguments reject trailing text.
//!
//! A line that is one of the exit phrases (`good bye`, `close`, `exit`, `.`)
//! parses to [`Command::Exit`].

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub const EXIT_PHRASES: &[&str] = &["good bye", "close", "exit", "."];

/// Every command keyword, in help order. Used for tab completion.
pub const COMMAND_KEYWORDS: &[&str] = &[
    "hello",
    "help",
    "help_note",
    "add_contact",
    "change_contact_phone",
    "change_contact_name",
    "add_phone",
    "add_birthday",
    "add_email",
    "delete_contact",
    "search_contacts",
    "show_all_contacts",
    "search_by_bd",
    "add_note",
    "search_note",
    "edit_note",
    "remove_note",
    "show_note",
    "sort_files",
    "exit",
    "close",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    HelpNote,
    Exit,
    AddContact { name: String, phone: String },
    ChangeContactPhone { name: String, phone: String },
    ChangeContactName { old: String, new: String },
    AddPhone { name: String, phone: String },
    AddBirthday { name: String, birthday: String },
    AddEmail { name: String, email: String },
    DeleteContact { name: String },
    SearchContacts { term: String },
    ShowAllContacts,
    SearchByBirthday { days: Option<u32> },
    AddNote,
    SearchNote { query: String },
    EditNote { title: String, text: String },
    RemoveNote { title: String },
    ShowNotes,
    SortFiles { path: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Blank input line.
    Empty,
    /// The first word is not a known command.
    Unknown(String),
    /// Known command, wrong payload. Carries the message shown to the user.
    Malformed(&'static str),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "Please enter a command. Type 'help' to see them all."),
            ParseError::Unknown(_) => write!(f, "Invalid command. Try again."),
            ParseError::Malformed(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ParseError {}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Err(ParseError::Empty);
        }
        let lowered = line.to_lowercase();
        if EXIT_PHRASES.contains(&lowered.as_str()) {
            return Ok(Command::Exit);
        }

        let (keyword, payload) = split_keyword(line);
        match keyword.to_lowercase().as_str() {
            "hello" => no_args(payload, "Invalid command format. Usage: hello", Command::Hello),
            "help" => no_args(payload, "Invalid command format. Usage: help", Command::Help),
            "help_note" => no_args(
                payload,
                "Invalid command format. Usage: help_note",
                Command::HelpNote,
            ),
            "add_contact" => {
                let (name, phone) = name_and_value(
                    payload,
                    "Invalid data format. Please provide both name and phone.",
                )?;
                Ok(Command::AddContact { name, phone })
            }
            "change_contact_phone" => {
                let (name, phone) = name_and_value(
                    payload,
                    "Invalid data format. Please provide both name and phone.",
                )?;
                Ok(Command::ChangeContactPhone { name, phone })
            }
            "change_contact_name" => {
                let (old, new) = old_and_new_name(payload)?;
                Ok(Command::ChangeContactName { old, new })
            }
            "add_phone" => {
                let (name, phone) = name_and_value(
                    payload,
                    "Invalid data format. Please provide both name and phone number.",
                )?;
                Ok(Command::AddPhone { name, phone })
            }
            "add_birthday" => {
                let (name, birthday) = name_and_value(
                    payload,
                    "Invalid data format. Please provide both name and birthday.",
                )?;
                Ok(Command::AddBirthday { name, birthday })
            }
            "add_email" => {
                let (name, email) = name_and_value(
                    payload,
                    "Invalid data format. Please provide both name and email.",
                )?;
                Ok(Command::AddEmail { name, email })
            }
            "delete_contact" => Ok(Command::DeleteContact {
                name: payload.to_string(),
            }),
            "search_contacts" => {
                required(payload, "Please provide a name or phone to search for.")?;
                Ok(Command::SearchContacts {
                    term: payload.to_string(),
                })
            }
            "show_all_contacts" => no_args(
                payload,
                "Invalid command format. Usage: show_all_contacts",
                Command::ShowAllContacts,
            ),
            "search_by_bd" => {
                if payload.is_empty() {
                    return Ok(Command::SearchByBirthday { days: None });
                }
                payload
                    .parse::<u32>()
                    .map(|days| Command::SearchByBirthday { days: Some(days) })
                    .map_err(|_| {
                        ParseError::Malformed(
                            "Invalid command format. Usage: search_by_bd [days ahead]",
                        )
                    })
            }
            "add_note" => no_args(
                payload,
                "Invalid command format. Usage: add_note",
                Command::AddNote,
            ),
            "search_note" => {
                required(payload, "Please provide a keyword to search for.")?;
                Ok(Command::SearchNote {
                    query: payload.to_string(),
                })
            }
            "edit_note" => {
                let (title, text) = title_and_text(payload)?;
                Ok(Command::EditNote { title, text })
            }
            "remove_note" => {
                required(payload, "Please provide the title of the note to remove.")?;
                Ok(Command::RemoveNote {
                    title: unquote(payload).to_string(),
                })
            }
            "show_note" => no_args(
                payload,
                "Invalid command format. Usage: show_note",
                Command::ShowNotes,
            ),
            "sort_files" => {
                required(
                    payload,
                    "Please provide the path to the folder you want to sort.",
                )?;
                Ok(Command::SortFiles {
                    path: PathBuf::from(unquote(payload)),
                })
            }
            _ => Err(ParseError::Unknown(keyword.to_string())),
        }
    }
}

/// Splits off the first word; the payload is trimmed.
fn split_keyword(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    }
}

fn no_args(payload: &str, usage: &'static str, command: Command) -> Result<Command, ParseError> {
    if payload.is_empty() {
        Ok(command)
    } else {
        Err(ParseError::Malformed(usage))
    }
}

fn required(payload: &str, message: &'static str) -> Result<(), ParseError> {
    if payload.is_empty() {
        Err(ParseError::Malformed(message))
    } else {
        Ok(())
    }
}

/// `<name words...> <value>`: the value is the last word.
fn name_and_value(payload: &str, message: &'static str) -> Result<(String, String), ParseError> {
    match payload.rsplit_once(char::is_whitespace) {
        Some((name, value)) if !name.trim().is_empty() && !value.is_empty() => {
            Ok((unquote(name.trim()).to_string(), value.to_string()))
        }
        _ => Err(ParseError::Malformed(message)),
    }
}

fn old_and_new_name(payload: &str) -> Result<(String, String), ParseError> {
    const MESSAGE: &str = "Invalid data format. Please provide both old name and new name.";
    let parts: Vec<&str> = payload.split(',').map(str::trim).collect();
    match parts.as_slice() {
        [old, new] if !old.is_empty() && !new.is_empty() => Ok((old.to_string(), new.to_string())),
        _ => Err(ParseError::Malformed(MESSAGE)),
    }
}

/// `"<quoted title>" <text>` or `<title> <text>`.
fn title_and_text(payload: &str) -> Result<(String, String), ParseError> {
    const MESSAGE: &str = "Please, provide both a title and new content for the note.";
    let (title, rest) = match payload.strip_prefix('"') {
        Some(quoted) => quoted.split_once('"').ok_or(ParseError::Malformed(MESSAGE))?,
        None => payload
            .split_once(char::is_whitespace)
            .ok_or(ParseError::Malformed(MESSAGE))?,
    };
    let text = rest.trim();
    if title.is_empty() || text.is_empty() {
        return Err(ParseError::Malformed(MESSAGE));
    }
    Ok((title.to_string(), text.to_string()))
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Command, ParseError> {
        line.parse()
    }

    #[test]
    fn exit_phrases() {
        for phrase in ["good bye", "Good Bye", "close", "EXIT", ".", "  exit  "] {
            assert_eq!(parse(phrase), Ok(Command::Exit), "{phrase}");
        }
        assert!(matches!(parse("goodbye"), Err(ParseError::Unknown(_))));
    }

    #[test]
    fn keyword_is_case_insensitive_payload_keeps_case() {
        assert_eq!(
            parse("ADD_CONTACT Alice 1234567890"),
            Ok(Command::AddContact {
                name: "Alice".into(),
                phone: "1234567890".into()
            })
        );
    }

    #[test]
    fn similar_prefixes_do_not_collide() {
        assert_eq!(parse("add_note"), Ok(Command::AddNote));
        assert!(matches!(parse("add_notes"), Err(ParseError::Unknown(_))));
        assert!(matches!(parse("add_birthdayAlice"), Err(ParseError::Unknown(_))));
        assert_eq!(parse("help_note"), Ok(Command::HelpNote));
        assert_eq!(parse("help"), Ok(Command::Help));
    }

    #[test]
    fn contact_name_may_contain_spaces() {
        assert_eq!(
            parse("add_birthday John Smith 1990-01-02"),
            Ok(Command::AddBirthday {
                name: "John Smith".into(),
                birthday: "1990-01-02".into()
            })
        );
    }

    #[test]
    fn missing_value_is_malformed() {
        let err = parse("add_contact Alice").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid data format. Please provide both name and phone."
        );
        assert!(matches!(parse("add_email"), Err(ParseError::Malformed(_))));
    }

    #[test]
    fn change_contact_name_needs_comma() {
        assert_eq!(
            parse("change_contact_name Alice, Alicia"),
            Ok(Command::ChangeContactName {
                old: "Alice".into(),
                new: "Alicia".into()
            })
        );
        assert!(matches!(
            parse("change_contact_name Alice Alicia"),
            Err(ParseError::Malformed(_))
        ));
    }

    #[test]
    fn no_arg_commands_reject_payload() {
        assert!(matches!(parse("show_note now"), Err(ParseError::Malformed(_))));
        assert!(matches!(parse("add_note title"), Err(ParseError::Malformed(_))));
        assert_eq!(parse("show_all_contacts"), Ok(Command::ShowAllContacts));
    }

    #[test]
    fn search_by_bd_optional_window() {
        assert_eq!(parse("search_by_bd"), Ok(Command::SearchByBirthday { days: None }));
        assert_eq!(
            parse("search_by_bd 30"),
            Ok(Command::SearchByBirthday { days: Some(30) })
        );
        assert!(matches!(parse("search_by_bd soon"), Err(ParseError::Malformed(_))));
    }

    #[test]
    fn edit_note_plain_and_quoted_titles() {
        assert_eq!(
            parse("edit_note Groceries milk, eggs"),
            Ok(Command::EditNote {
                title: "Groceries".into(),
                text: "milk, eggs".into()
            })
        );
        assert_eq!(
            parse(r#"edit_note "Chocolate Cake" add more cocoa"#),
            Ok(Command::EditNote {
                title: "Chocolate Cake".into(),
                text: "add more cocoa".into()
            })
        );
        assert!(matches!(parse("edit_note Groceries"), Err(ParseError::Malformed(_))));
        assert!(matches!(
            parse(r#"edit_note "Unclosed title text"#),
            Err(ParseError::Malformed(_))
        ));
    }

    #[test]
    fn remove_note_takes_whole_payload() {
        assert_eq!(
            parse("remove_note Chocolate Cake"),
            Ok(Command::RemoveNote {
                title: "Chocolate Cake".into()
            })
        );
    }

    #[test]
    fn every_completion_keyword_is_a_command() {
        for keyword in COMMAND_KEYWORDS {
            assert!(
                !matches!(parse(keyword), Err(ParseError::Unknown(_))),
                "{keyword}"
            );
        }
    }

    #[test]
    fn unknown_and_empty() {
        assert_eq!(parse("   "), Err(ParseError::Empty));
        let err = parse("fly me to the moon").unwrap_err();
        assert_eq!(err.to_string(), "Invalid command. Try again.");
    }

    #[test]
    fn sort_files_needs_path() {
        assert_eq!(
            parse("sort_files /tmp/My Downloads"),
            Ok(Command::SortFiles {
                path: PathBuf::from("/tmp/My Downloads")
            })
        );
        assert!(matches!(parse("sort_files"), Err(ParseError::Malformed(_))));
    }
}
