use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::{AppError, AppResult};
use crate::models::record::RecordDraft;
use crate::models::status::Status;
use crate::ui::messages::success;
use crate::utils::date;

/// Add a process to a day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        process,
        title,
        date: date_arg,
        client,
        owner,
        status,
        notes,
    } = cmd
    {
        //
        // 1. Parse input (date defaults to today, status to the configured one)
        //
        let d = date::resolve_date(date_arg.as_deref())?;

        let st = match status {
            Some(s) => Status::from_code(s).ok_or_else(|| AppError::InvalidStatus(s.clone()))?,
            None => cfg.default_status()?,
        };

        let draft = RecordDraft::new(
            d,
            process,
            title,
            client.as_deref(),
            owner.as_deref(),
            st,
            notes.as_deref(),
        )?;

        //
        // 2. Store
        //
        let mut pool = open_pool(cfg)?;
        let id = AddLogic::apply(&mut pool, &draft)?;

        success(format!(
            "Added #{} ({} - {}) on {}",
            id,
            draft.process_number,
            draft.title,
            date::to_display(&draft.date)
        ));
    }

    Ok(())
}
