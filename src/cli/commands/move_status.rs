use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::move_status::MoveLogic;
use crate::errors::{AppError, AppResult};
use crate::models::status::Status;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Move { status, ids } = cmd {
        let st = Status::from_code(status).ok_or_else(|| AppError::InvalidStatus(status.clone()))?;

        let mut pool = open_pool(cfg)?;
        let moved = MoveLogic::apply(&mut pool, ids, st)?;

        success(format!("Moved {} record(s) to '{}'.", moved, st));
    }

    Ok(())
}
