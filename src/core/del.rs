use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_records, missing_ids};
use crate::errors::{AppError, AppResult};

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete every process in `ids` in one transaction.
    ///
    /// All ids must exist; otherwise nothing is deleted and the unknown ids
    /// are reported. An empty id set is a no-op.
    pub fn apply(pool: &mut DbPool, ids: &[i64]) -> AppResult<usize> {
        let ids = dedup(ids);
        if ids.is_empty() {
            return Ok(0);
        }

        let deleted = pool.with_tx(|tx| {
            let missing = missing_ids(tx, &ids)?;
            if !missing.is_empty() {
                return Err(AppError::NotFound(missing));
            }
            delete_records(tx, &ids)
        })?;

        audit(
            &pool.conn,
            "del",
            &join_ids(&ids),
            &format!("Deleted {} record(s)", deleted),
        );

        Ok(deleted)
    }
}

/// Keep the first occurrence of every id, preserving order.
pub(crate) fn dedup(ids: &[i64]) -> Vec<i64> {
    let mut out: Vec<i64> = Vec::with_capacity(ids.len());
    for id in ids {
        if !out.contains(id) {
            out.push(*id);
        }
    }
    out
}

pub(crate) fn join_ids(ids: &[i64]) -> String {
    ids.iter()
        .map(|id| format!("#{}", id))
        .collect::<Vec<_>>()
        .join(",")
}
