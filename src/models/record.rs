use super::status::Status;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

/// A stored process, as read from the `processes` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: i64,
    pub date: NaiveDate,            // ⇔ processes.date (TEXT "YYYY-MM-DD")
    pub process_number: String,     // ⇔ processes.process_number (NOT NULL)
    pub title: String,              // ⇔ processes.title (NOT NULL)
    pub client: Option<String>,     // ⇔ processes.client
    pub owner: Option<String>,      // ⇔ processes.owner
    pub status: Status,             // ⇔ processes.status (label text)
    pub notes: Option<String>,      // ⇔ processes.notes
}

/// User-editable content of a record: everything except the id.
///
/// A draft is only built through [`RecordDraft::new`], which trims the input,
/// turns blank optional fields into `None` and rejects blank required fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDraft {
    pub date: NaiveDate,
    pub process_number: String,
    pub title: String,
    pub client: Option<String>,
    pub owner: Option<String>,
    pub status: Status,
    pub notes: Option<String>,
}

impl RecordDraft {
    pub fn new(
        date: NaiveDate,
        process_number: &str,
        title: &str,
        client: Option<&str>,
        owner: Option<&str>,
        status: Status,
        notes: Option<&str>,
    ) -> AppResult<Self> {
        let process_number = process_number.trim();
        if process_number.is_empty() {
            return Err(AppError::MissingField("process number"));
        }

        let title = title.trim();
        if title.is_empty() {
            return Err(AppError::MissingField("title"));
        }

        Ok(Self {
            date,
            process_number: process_number.to_string(),
            title: title.to_string(),
            client: normalize_optional(client),
            owner: normalize_optional(owner),
            status,
            notes: normalize_optional(notes),
        })
    }

    /// Same content, moved to another date (used by the previous-day copy).
    pub fn on_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }
}

impl Record {
    /// Content of this record without its id.
    pub fn to_draft(&self) -> RecordDraft {
        RecordDraft {
            date: self.date,
            process_number: self.process_number.clone(),
            title: self.title.clone(),
            client: self.client.clone(),
            owner: self.owner.clone(),
            status: self.status,
            notes: self.notes.clone(),
        }
    }

    pub fn has_notes(&self) -> bool {
        self.notes.as_deref().is_some_and(|n| !n.trim().is_empty())
    }
}

/// Blank or whitespace-only text is stored as NULL.
pub fn normalize_optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
