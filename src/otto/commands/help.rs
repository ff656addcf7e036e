use crate::commands::CmdResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpEntry {
    pub command: &'static str,
    pub description: &'static str,
}

const fn entry(command: &'static str, description: &'static str) -> HelpEntry {
    HelpEntry {
        command,
        description,
    }
}

const ALL_COMMANDS: &[HelpEntry] = &[
    entry("hello", "Displays a greeting message and offers assistance."),
    entry("add_contact", "<name> <phone>: Adds a new contact."),
    entry(
        "change_contact_phone",
        "<name> <new phone>: Updates the phone number of a contact.",
    ),
    entry(
        "change_contact_name",
        "<old name>, <new name>: Updates the name of a contact.",
    ),
    entry(
        "add_phone",
        "<name> <phone>: Adds an additional phone number to an existing contact.",
    ),
    entry("show_all_contacts", "Displays all contacts."),
    entry(
        "search_by_bd",
        "[days]: Lists contacts whose birthday is within the next days (14 by default).",
    ),
    entry("add_birthday", "<name> <YYYY-MM-DD>: Adds a birthday to a contact."),
    entry("add_email", "<name> <email>: Adds an email to a contact."),
    entry("delete_contact", "<name>: Deletes a contact."),
    entry("search_contacts", "<name or phone>: Searches contacts by name or phone."),
    entry("add_note", "Adds a new note, asking for title, text and tags."),
    entry("search_note", "<keywords>: Searches notes by keyword."),
    entry("edit_note", "<note title> <new content>: Edits the content of a note."),
    entry("remove_note", "<note title>: Removes a note."),
    entry("show_note", "Displays all notes."),
    entry("help_note", "Displays help for note commands."),
    entry("sort_files", "<folder>: Sorts the files of a folder by type."),
    entry("exit", "Saves everything and quits (also: close, good bye, .)."),
];

const NOTE_COMMANDS: &[HelpEntry] = &[
    entry("add_note", "Add a new note. Usage: add_note"),
    entry("search_note", "Search notes by keyword. Usage: search_note keyword"),
    entry(
        "edit_note",
        "Edit an existing note. Usage: edit_note \"note title\" new content",
    ),
    entry("remove_note", "Remove a note. Usage: remove_note note title"),
    entry("show_note", "Show all notes."),
    entry("help_note", "Show this help message."),
];

pub fn run() -> CmdResult {
    CmdResult::default().with_help(ALL_COMMANDS.to_vec())
}

pub fn notes() -> CmdResult {
    CmdResult::default().with_help(NOTE_COMMANDS.to_vec())
}
