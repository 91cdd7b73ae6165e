use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::update_record;
use crate::errors::{AppError, AppResult};
use crate::models::record::RecordDraft;

pub struct EditLogic;

impl EditLogic {
    /// Replace all user-editable fields of process `id`.
    ///
    /// Fails with `NotFound` (and writes nothing) when `id` does not exist.
    pub fn apply(pool: &mut DbPool, id: i64, draft: &RecordDraft) -> AppResult<()> {
        let changed = update_record(&pool.conn, id, draft)?;
        if changed == 0 {
            return Err(AppError::NotFound(vec![id]));
        }

        audit(
            &pool.conn,
            "edit",
            &format!("#{}", id),
            &format!(
                "Updated process {} '{}' ({})",
                draft.process_number, draft.title, draft.status
            ),
        );

        Ok(())
    }
}
