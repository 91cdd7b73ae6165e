use super::status::Status;
use chrono::NaiveDate;

/// The (date, status, substring) triple narrowing a query.
///
/// Built fresh by every command from its own arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub date: NaiveDate,
    pub status: Option<Status>,
    pub search: Option<String>,
}

impl Filter {
    /// Every record of a day.
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            date,
            status: None,
            search: None,
        }
    }

    pub fn with_status(mut self, status: Option<Status>) -> Self {
        self.status = status;
        self
    }

    /// Blank search text means no substring filtering.
    pub fn with_search(mut self, search: Option<&str>) -> Self {
        self.search = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        self
    }
}
