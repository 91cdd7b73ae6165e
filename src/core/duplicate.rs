use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_record, load_by_date_ascending};
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::NaiveDate;

pub struct DuplicateLogic;

impl DuplicateLogic {
    /// Copy every process of the day before `day` onto `day`.
    ///
    /// Copies get fresh ids and default legacy fields; the offset is always
    /// one calendar day. Returns the number of records created.
    pub fn apply(pool: &mut DbPool, day: NaiveDate) -> AppResult<usize> {
        let prev = date::previous_day(day)
            .ok_or_else(|| AppError::InvalidDate(date::to_db(&day)))?;

        let created = pool.with_tx(|tx| {
            let sources = load_by_date_ascending(tx, &prev)?;
            if sources.is_empty() {
                return Err(AppError::EmptyResult(format!(
                    "No records found on {} to duplicate.",
                    date::to_display(&prev)
                )));
            }

            for src in &sources {
                insert_record(tx, &src.to_draft().on_date(day))?;
            }
            Ok(sources.len())
        })?;

        audit(
            &pool.conn,
            "duplicate",
            &date::to_db(&day),
            &format!(
                "Duplicated {} record(s) from {}",
                created,
                date::to_db(&prev)
            ),
        );

        Ok(created)
    }
}
