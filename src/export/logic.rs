// src/export/logic.rs

use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::load_filtered;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::delimited::export_delimited;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::export_json;
use crate::export::model::RecordRow;
use crate::models::filter::Filter;
use crate::models::record::Record;
use crate::utils::date;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the records matching `filter`.
    ///
    /// Nothing is written when the filter matches no record
    /// (`EmptyResult`). Returns the number of exported rows.
    pub fn export(
        pool: &mut DbPool,
        filter: &Filter,
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<usize> {
        let records = load_filtered(&pool.conn, filter)?;

        if records.is_empty() {
            return Err(AppError::EmptyResult(
                "No records to export with the current filters.".to_string(),
            ));
        }

        ensure_writable(path, force)?;
        Self::write(&records, format, path)?;

        audit(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!(
                "Exported {} record(s) of {} as {}",
                records.len(),
                date::to_db(&filter.date),
                format.as_str()
            ),
        );

        Ok(records.len())
    }

    /// Serialize already-filtered records to `path`.
    pub fn write(records: &[Record], format: ExportFormat, path: &Path) -> AppResult<()> {
        match format {
            ExportFormat::Csv => {
                let rows: Vec<RecordRow> = records.iter().map(RecordRow::display).collect();
                export_delimited(&rows, path)
            }
            ExportFormat::Json => {
                let rows: Vec<RecordRow> = records.iter().map(RecordRow::iso).collect();
                export_json(&rows, path)
            }
        }
    }

    /// File name used when the caller gives no destination.
    pub fn default_path(day: &NaiveDate, format: ExportFormat) -> PathBuf {
        PathBuf::from(format!("standup_{}.{}", date::to_db(day), format.as_str()))
    }
}
