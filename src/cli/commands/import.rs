use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file, force_date } = cmd {
        let forced = match force_date {
            Some(s) => Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?),
            None => None,
        };

        let mut pool = open_pool(cfg)?;
        let n = ImportLogic::apply(&mut pool, Path::new(file), forced)?;

        success(format!("Imported {} record(s) from {}", n, file));
    }
    Ok(())
}
