// src/export/model.rs

use crate::models::record::Record;
use crate::utils::date;
use serde::{Deserialize, Serialize};

/// Flat record shape shared by the delimited and JSON formats.
///
/// Field names (camelCase) double as the header row.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecordRow {
    pub date: String,
    pub process_number: String,
    pub title: String,
    pub client: Option<String>,
    pub owner: Option<String>,
    pub status: String,
    pub notes: Option<String>,
}

/// Header written by the delimited exporter.
pub const HEADERS: [&str; 7] = [
    "date",
    "processNumber",
    "title",
    "client",
    "owner",
    "status",
    "notes",
];

impl RecordRow {
    /// Row with the date in day/month/year form.
    pub fn display(r: &Record) -> Self {
        Self::with_date(r, date::to_display(&r.date))
    }

    /// Row with the ISO date.
    pub fn iso(r: &Record) -> Self {
        Self::with_date(r, date::to_db(&r.date))
    }

    fn with_date(r: &Record, date: String) -> Self {
        Self {
            date,
            process_number: r.process_number.clone(),
            title: r.title.clone(),
            client: r.client.clone(),
            owner: r.owner.clone(),
            status: r.status.label().to_string(),
            notes: r.notes.clone(),
        }
    }
}
