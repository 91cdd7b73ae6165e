use super::record::Record;
use super::status::Status;
use crate::utils::date;
use chrono::NaiveDate;

/// Records of one day grouped by status, in canonical status order.
pub struct DaySummary {
    pub date: NaiveDate,
    pub groups: Vec<(Status, Vec<Record>)>,
}

impl DaySummary {
    pub fn total(&self) -> usize {
        self.groups.iter().map(|(_, rows)| rows.len()).sum()
    }

    /// Render the digest read out at the standup.
    pub fn render(&self, meeting_title: &str) -> String {
        let mut lines = vec![
            format!("Summary {} - {}", date::to_display(&self.date), meeting_title),
            format!("Total records: {}", self.total()),
            String::new(),
        ];

        for (status, rows) in &self.groups {
            lines.push(format!("• {}: {}", status.label(), rows.len()));
            for r in rows {
                lines.push(format!("   - #{} - {}{}", r.process_number, r.title, tags(r)));
            }
            lines.push(String::new());
        }

        lines.join("\n").trim_end().to_string()
    }
}

/// Client / owner tags, each omitted when the field is empty.
fn tags(r: &Record) -> String {
    let mut out = String::new();
    if let Some(c) = r.client.as_deref().filter(|c| !c.is_empty()) {
        out.push_str(&format!(" | Client: {}", c));
    }
    if let Some(o) = r.owner.as_deref().filter(|o| !o.is_empty()) {
        out.push_str(&format!(" | Owner: {}", o));
    }
    out
}
