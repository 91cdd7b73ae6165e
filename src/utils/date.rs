//! Date utilities: parsing user input, storage and display formats.

use crate::errors::{AppError, AppResult};
use chrono::{Days, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

/// Storage format (ISO 8601).
pub const DB_FORMAT: &str = "%Y-%m-%d";
/// Display / export format (day/month/year).
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// Four-digit years only; chrono's `%Y` also takes shorter ones.
static ISO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{1,2}-\d{1,2}$").expect("valid ISO date regex"));
static DMY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}/\d{1,2}/\d{4}$").expect("valid DMY date regex"));

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a calendar date typed by the user.
///
/// Accepted: `YYYY-MM-DD`, `DD/MM/YYYY` (four-digit year), `today`,
/// `yesterday`, `tomorrow`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let t = s.trim();

    match t.to_lowercase().as_str() {
        "today" => return Some(today()),
        "yesterday" => return previous_day(today()),
        "tomorrow" => return today().checked_add_days(Days::new(1)),
        _ => {}
    }

    if ISO_RE.is_match(t) {
        NaiveDate::parse_from_str(t, DB_FORMAT).ok()
    } else if DMY_RE.is_match(t) {
        NaiveDate::parse_from_str(t, DISPLAY_FORMAT).ok()
    } else {
        None
    }
}

/// Parse an optional date argument, defaulting to today.
pub fn resolve_date(input: Option<&str>) -> AppResult<NaiveDate> {
    match input {
        None => Ok(today()),
        Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
    }
}

pub fn previous_day(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(1))
}

pub fn to_db(date: &NaiveDate) -> String {
    date.format(DB_FORMAT).to_string()
}

pub fn to_display(date: &NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Parse a date read back from the database.
pub fn from_db(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DB_FORMAT).ok()
}
