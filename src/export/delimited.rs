// src/export/delimited.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{HEADERS, RecordRow};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use csv::{ReaderBuilder, WriterBuilder};
use std::path::Path;

pub const DELIMITER: u8 = b';';

/// Write rows as `;`-separated UTF-8 text with a header row.
pub(crate) fn export_delimited(rows: &[RecordRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = WriterBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .from_path(path)?;

    wtr.write_record(HEADERS)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}

/// Read back a file written by [`export_delimited`].
///
/// Each row comes with the file line it starts on (the header is line 1;
/// quoted multi-line notes span several lines). Empty fields come back as
/// `None`.
pub fn read_delimited(path: &Path) -> AppResult<Vec<(u64, RecordRow)>> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(true)
        .from_path(path)?;
    let headers = rdr.headers()?.clone();

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let line = rec.position().map(|p| p.line()).unwrap_or_default();
        let row: RecordRow = rec
            .deserialize(Some(&headers))
            .map_err(|e| AppError::InvalidInput(format!("line {}: {}", line, e)))?;
        out.push((line, row));
    }
    Ok(out)
}
