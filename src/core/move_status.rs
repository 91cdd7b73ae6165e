use crate::core::del::{dedup, join_ids};
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{missing_ids, update_status};
use crate::errors::{AppError, AppResult};
use crate::models::status::Status;

pub struct MoveLogic;

impl MoveLogic {
    /// Set `status` on every process in `ids`; nothing else changes.
    pub fn apply(pool: &mut DbPool, ids: &[i64], status: Status) -> AppResult<usize> {
        let ids = dedup(ids);
        if ids.is_empty() {
            return Ok(0);
        }

        let moved = pool.with_tx(|tx| {
            let missing = missing_ids(tx, &ids)?;
            if !missing.is_empty() {
                return Err(AppError::NotFound(missing));
            }
            update_status(tx, &ids, status)
        })?;

        audit(
            &pool.conn,
            "move",
            &join_ids(&ids),
            &format!("Moved {} record(s) to '{}'", moved, status),
        );

        Ok(moved)
    }
}
