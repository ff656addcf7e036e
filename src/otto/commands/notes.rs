use crate::commands::{CmdMessage, CmdResult};
use crate::model::Note;
use crate::notes::NoteBook;

pub fn add(book: &mut NoteBook, title: &str, text: &str, tags: &str) -> CmdResult {
    let title = title.trim();
    if title.is_empty() {
        return CmdResult::message(CmdMessage::error("Note title cannot be empty"));
    }
    let mut result = CmdResult::default();
    if book.has_title(title) {
        result.add_message(CmdMessage::warning(format!(
            "A note titled '{}' already exists; edits will go to the older one",
            title
        )));
    }
    book.add(Note::new(title, text.trim(), tags));
    result.add_message(CmdMessage::success("Note added"));
    result
}

pub fn search(book: &NoteBook, query: &str) -> CmdResult {
    let found: Vec<Note> = book.search(query).into_iter().cloned().collect();
    if found.is_empty() {
        return CmdResult::message(CmdMessage::info(format!(
            "No notes found matching '{}'",
            query
        )));
    }
    CmdResult::default().with_listed_notes(found)
}

pub fn edit(book: &mut NoteBook, title: &str, text: &str) -> CmdResult {
    match book.edit_by_title(title, text) {
        Some(_) => CmdResult::message(CmdMessage::success("Note updated successfully.")),
        None => CmdResult::message(CmdMessage::warning("Note not found.")),
    }
}

pub fn remove(book: &mut NoteBook, title: &str) -> CmdResult {
    match book.remove_by_title(title) {
        Some(_) => CmdResult::message(CmdMessage::success("Note removed successfully.")),
        None => CmdResult::message(CmdMessage::warning("Note not found.")),
    }
}

pub fn show(book: &NoteBook) -> CmdResult {
    if book.is_empty() {
        return CmdResult::message(CmdMessage::info("No notes available"));
    }
    CmdResult::default().with_listed_notes(book.notes().to_vec())
}
