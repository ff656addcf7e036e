//! Turns a `CmdResult` into terminal lines. Listings come first, then the
//! messages, each colored by level.

use chrono::{Local, NaiveDateTime};
use colored::*;
use otto::api::{CmdMessage, CmdResult, MessageLevel};
use otto::commands::{HelpEntry, UpcomingBirthday};
use otto::model::{Note, Record};
use otto::sorter::SortReport;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

const NOTE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn result(out: &mut impl Write, result: &CmdResult) -> io::Result<()> {
    contacts(out, &result.listed_contacts)?;
    birthdays(out, &result.birthdays)?;
    notes(out, &result.listed_notes)?;
    help(out, &result.help)?;
    if let Some(report) = &result.sort_report {
        sort_report(out, report)?;
    }
    messages(out, &result.messages)
}

pub fn messages(out: &mut impl Write, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub fn error(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{}", message.red())
}

fn contacts(out: &mut impl Write, records: &[Record]) -> io::Result<()> {
    for record in records {
        writeln!(out, "{}", record)?;
    }
    Ok(())
}

fn birthdays(out: &mut impl Write, upcoming: &[UpcomingBirthday]) -> io::Result<()> {
    for entry in upcoming {
        let date = entry
            .record
            .birthday
            .map(|b| b.to_string())
            .unwrap_or_default();
        writeln!(
            out,
            "Contact: {}, Days until birthday: {} ({})",
            entry.record.name.as_str().bold(),
            entry.days_left,
            date
        )?;
    }
    Ok(())
}

fn notes(out: &mut impl Write, notes: &[Note]) -> io::Result<()> {
    let now = Local::now().naive_local();
    for (i, note) in notes.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(
            out,
            "{} {}",
            note.created_at().format(NOTE_TIME_FORMAT),
            format!("({})", time_ago(note.created_at(), now)).dimmed()
        )?;
        writeln!(out, "- {}", note.title.bold())?;
        writeln!(out, "- {}", note.text)?;
        writeln!(out, "- {}", note.tags_joined())?;
    }
    Ok(())
}

fn time_ago(then: NaiveDateTime, now: NaiveDateTime) -> String {
    let duration = now.signed_duration_since(then);
    timeago::Formatter::new().convert(duration.to_std().unwrap_or_default())
}

fn help(out: &mut impl Write, entries: &[HelpEntry]) -> io::Result<()> {
    let width = entries
        .iter()
        .map(|e| e.command.width())
        .max()
        .unwrap_or(0);
    for entry in entries {
        let padding = " ".repeat(width - entry.command.width());
        writeln!(
            out,
            "  {}{}  {}",
            entry.command.cyan(),
            padding,
            entry.description
        )?;
    }
    Ok(())
}

fn sort_report(out: &mut impl Write, report: &SortReport) -> io::Result<()> {
    writeln!(
        out,
        "Moved {} file(s), extracted {} archive(s)",
        report.moved, report.extracted
    )?;
    if !report.known_extensions.is_empty() {
        let known: Vec<&str> = report.known_extensions.iter().map(String::as_str).collect();
        writeln!(out, "{}", format!("Known extensions: {}", known.join(", ")).dimmed())?;
    }
    if !report.unknown_extensions.is_empty() {
        let unknown: Vec<&str> = report
            .unknown_extensions
            .iter()
            .map(String::as_str)
            .collect();
        writeln!(
            out,
            "{}",
            format!("Unknown extensions: {}", unknown.join(", ")).dimmed()
        )?;
    }
    Ok(())
}
