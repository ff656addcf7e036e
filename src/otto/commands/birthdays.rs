use crate::commands::{CmdMessage, CmdResult};
use crate::contacts::ContactBook;
use crate::model::Record;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub record: Record,
    pub days_left: i64,
}

impl UpcomingBirthday {
    pub fn is_today(&self) -> bool {
        self.days_left == 0
    }
}

/// Contacts with a birthday in the next `window_days` days. Birthdays that
/// fall on `today` are listed and also announced.
pub fn run(book: &ContactBook, window_days: u32, today: NaiveDate) -> CmdResult {
    let upcoming: Vec<UpcomingBirthday> = book
        .upcoming_birthdays(window_days, today)
        .into_iter()
        .map(|(record, days_left)| UpcomingBirthday {
            record: record.clone(),
            days_left,
        })
        .collect();

    if upcoming.is_empty() {
        return CmdResult::message(CmdMessage::info("No contacts with upcoming birthdays."));
    }

    let mut result = CmdResult::default();
    for entry in upcoming.iter().filter(|u| u.is_today()) {
        let birthday = entry
            .record
            .birthday
            .map(|b| b.to_string())
            .unwrap_or_default();
        result.add_message(CmdMessage::success(format!(
            "Today is BD of {}!!! {}",
            entry.record.name, birthday
        )));
    }
    result.with_birthdays(upcoming)
}
