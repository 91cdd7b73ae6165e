use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::insert_record;
use crate::errors::{AppError, AppResult};
use crate::export::RecordRow;
use crate::export::delimited::read_delimited;
use crate::models::record::RecordDraft;
use crate::models::status::Status;
use crate::utils::date;
use chrono::NaiveDate;
use std::path::Path;

pub struct ImportLogic;

impl ImportLogic {
    /// Create one record per row of a `;`-separated export file.
    ///
    /// The whole file is validated and inserted in one transaction: a bad row
    /// aborts the import and nothing is stored. `force_date` puts every
    /// record on that date instead of the one in the file.
    pub fn apply(
        pool: &mut DbPool,
        path: &Path,
        force_date: Option<NaiveDate>,
    ) -> AppResult<usize> {
        let rows = read_delimited(path)?;
        if rows.is_empty() {
            return Err(AppError::EmptyResult(format!(
                "No rows found in {}.",
                path.display()
            )));
        }

        let mut drafts = Vec::with_capacity(rows.len());
        for (line, row) in &rows {
            let draft = row_to_draft(row, force_date)
                .map_err(|e| AppError::InvalidInput(format!("line {}: {}", line, e)))?;
            drafts.push(draft);
        }

        let imported = pool.with_tx(|tx| {
            for d in &drafts {
                insert_record(tx, d)?;
            }
            Ok(drafts.len())
        })?;

        audit(
            &pool.conn,
            "import",
            &path.to_string_lossy(),
            &format!("Imported {} record(s)", imported),
        );

        Ok(imported)
    }
}

pub fn row_to_draft(row: &RecordRow, force_date: Option<NaiveDate>) -> AppResult<RecordDraft> {
    let day = match force_date {
        Some(d) => d,
        None => date::parse_date(&row.date).ok_or_else(|| AppError::InvalidDate(row.date.clone()))?,
    };

    let status = Status::from_db_str(&row.status)
        .or_else(|| Status::from_code(&row.status))
        .ok_or_else(|| AppError::InvalidStatus(row.status.clone()))?;

    RecordDraft::new(
        day,
        &row.process_number,
        &row.title,
        row.client.as_deref(),
        row.owner.as_deref(),
        status,
        row.notes.as_deref(),
    )
}
