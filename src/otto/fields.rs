//! # Field Validators
//!
//! Small value types that are only constructible from valid input. Each
//! constructor checks its predicate and returns [`AssistantError::InvalidValue`]
//! on failure, so a `Phone` or `Email` held anywhere in the crate is known to
//! be well formed. The types are immutable: changing a field means building a
//! new value, which runs the same check again.
//!
//! Optional fields (`Email`, `Birthday`) also understand the persisted
//! sentinel `"none"` (any case), which maps to `None` rather than an empty
//! string.

use crate::error::{AssistantError, Result};
use chrono::{Datelike, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

pub const NONE_SENTINEL: &str = "None";
pub const DATE_FORMAT: &str = "%Y-%m-%d";
const PHONE_DIGITS: usize = 10;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});

/// Returns true when `value` is the "field intentionally absent" marker.
pub fn is_none_sentinel(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("none")
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(AssistantError::invalid("name", value, "name cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        let valid = value.len() == PHONE_DIGITS && value.bytes().all(|b| b.is_ascii_digit());
        if !valid {
            return Err(AssistantError::invalid(
                "phone number",
                value,
                "expected exactly 10 digits",
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if !EMAIL_RE.is_match(&value) {
            return Err(AssistantError::invalid(
                "email",
                value,
                "expected an address like name@example.com",
            ));
        }
        Ok(Self(value))
    }

    /// Parses an optional email, mapping the `"none"` sentinel to `None`.
    pub fn parse_optional(value: &str) -> Result<Option<Self>> {
        if is_none_sentinel(value) {
            return Ok(None);
        }
        Self::new(value).map(Some)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A birth date that was not in the future when it was validated.
///
/// Validity is checked once at construction; a stored birthday is never
/// re-checked against a later "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn new(value: &str) -> Result<Self> {
        Self::new_at(value, Local::now().date_naive())
    }

    pub fn new_at(value: &str, today: NaiveDate) -> Result<Self> {
        let date = NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
            AssistantError::invalid("birthday", value, "expected a date as YYYY-MM-DD")
        })?;
        if date > today {
            return Err(AssistantError::invalid(
                "birthday",
                value,
                "date cannot be in the future",
            ));
        }
        Ok(Self(date))
    }

    /// Parses an optional birthday, mapping the `"none"` sentinel and blank
    /// input to `None`.
    pub fn parse_optional(value: &str) -> Result<Option<Self>> {
        if value.trim().is_empty() || is_none_sentinel(value) {
            return Ok(None);
        }
        Self::new(value).map(Some)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The next occurrence of this birthday on or after `today`.
    ///
    /// A Feb 29 birthday falls on Feb 28 in non-leap years.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let this_year = anniversary(self.0, today.year());
        if this_year >= today {
            this_year
        } else {
            anniversary(self.0, today.year() + 1)
        }
    }

    pub fn days_until(&self, today: NaiveDate) -> i64 {
        (self.next_occurrence(today) - today).num_days()
    }
}

fn anniversary(date: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, date.month(), date.day() - 1))
        .unwrap_or(date)
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
