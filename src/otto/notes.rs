//! The notebook: notes in insertion order.
//!
//! Titles are not unique. Edit and remove act on the first matching note.

use crate::model::Note;

#[derive(Debug, Default, Clone)]
pub struct NoteBook {
    notes: Vec<Note>,
}

impl NoteBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_notes(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    pub fn add(&mut self, note: Note) {
        self.notes.push(note);
    }

    /// Notes where any whitespace-separated term of `query` appears in the
    /// title, text or tags, case-insensitively. Results keep store order.
    pub fn search(&self, query: &str) -> Vec<&Note> {
        let query = query.to_lowercase();
        let terms: Vec<&str> = query.split_whitespace().collect();
        if terms.is_empty() {
            return Vec::new();
        }
        self.notes
            .iter()
            .filter(|note| terms.iter().any(|term| note.contains_term(term)))
            .collect()
    }

    /// Replaces the text of the first note titled exactly `title`.
    pub fn edit_by_title(&mut self, title: &str, text: impl Into<String>) -> Option<&Note> {
        let note = self.notes.iter_mut().find(|n| n.title == title)?;
        note.text = text.into();
        Some(note)
    }

    /// Removes the first note whose title matches `title` ignoring case.
    pub fn remove_by_title(&mut self, title: &str) -> Option<Note> {
        let wanted = title.to_lowercase();
        let pos = self
            .notes
            .iter()
            .position(|n| n.title.to_lowercase() == wanted)?;
        Some(self.notes.remove(pos))
    }

    pub fn has_title(&self, title: &str) -> bool {
        self.notes.iter().any(|n| n.title == title)
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> NoteBook {
        let mut book = NoteBook::new();
        book.add(Note::new("Chocolate Cake", "flour, cocoa, eggs", "baking,dessert"));
        book.add(Note::new("Groceries", "milk and bread", "shopping"));
        book.add(Note::new("Cake", "second cake note", ""));
        book
    }

    #[test]
    fn search_by_title_substring() {
        let book = book();
        let found = book.search("cake");
        let titles: Vec<_> = found.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["Chocolate Cake", "Cake"]);
    }

    #[test]
    fn search_any_term_across_fields() {
        let book = book();
        let found = book.search("MILK dessert");
        let titles: Vec<_> = found.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["Chocolate Cake", "Groceries"]);
    }

    #[test]
    fn search_empty_store_or_blank_query() {
        assert!(NoteBook::new().search("cake").is_empty());
        assert!(book().search("   ").is_empty());
    }

    #[test]
    fn edit_first_exact_title_only() {
        let mut book = book();
        book.add(Note::new("Cake", "third", ""));

        assert!(book.edit_by_title("cake", "nope").is_none());
        let edited = book.edit_by_title("Cake", "updated").unwrap();
        assert_eq!(edited.text, "updated");
        assert_eq!(book.notes()[2].text, "updated");
        assert_eq!(book.notes()[3].text, "third");
    }

    #[test]
    fn remove_ignores_case_and_takes_first() {
        let mut book = book();
        let removed = book.remove_by_title("CAKE").unwrap();
        assert_eq!(removed.text, "second cake note");
        assert_eq!(book.len(), 2);
        assert!(book.remove_by_title("missing").is_none());
    }
}
