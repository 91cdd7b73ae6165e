use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::insert_record;
use crate::errors::AppResult;
use crate::models::record::RecordDraft;
use crate::utils::date;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Store a new process and return its id.
    pub fn apply(pool: &mut DbPool, draft: &RecordDraft) -> AppResult<i64> {
        let id = insert_record(&pool.conn, draft)?;

        audit(
            &pool.conn,
            "add",
            &format!("#{}", id),
            &format!(
                "Added process {} '{}' on {}",
                draft.process_number,
                draft.title,
                date::to_db(&draft.date)
            ),
        );

        Ok(id)
    }
}
