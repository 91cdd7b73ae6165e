pub mod add;
pub mod backup;
pub mod config;
pub mod db;
pub mod del;
pub mod duplicate;
pub mod edit;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod move_status;
pub mod show;
pub mod summary;

use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use std::path::Path;

/// Open the configured database; it must have been created by `init`.
pub(crate) fn open_pool(cfg: &Config) -> AppResult<DbPool> {
    if !Path::new(&cfg.database).exists() {
        return Err(AppError::Config(format!(
            "database '{}' not found, run `dailycheck init` first",
            cfg.database
        )));
    }
    Ok(DbPool::new(&cfg.database)?)
}
