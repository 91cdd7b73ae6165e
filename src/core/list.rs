use crate::db::pool::DbPool;
use crate::db::queries::{load_filtered, load_record};
use crate::errors::{AppError, AppResult};
use crate::models::filter::Filter;
use crate::models::record::Record;

pub struct ListLogic;

impl ListLogic {
    /// Records matching `filter`, most recently created first.
    pub fn filtered(pool: &mut DbPool, filter: &Filter) -> AppResult<Vec<Record>> {
        load_filtered(&pool.conn, filter)
    }

    pub fn load(pool: &mut DbPool, id: i64) -> AppResult<Record> {
        load_record(&pool.conn, id)?.ok_or(AppError::NotFound(vec![id]))
    }
}
