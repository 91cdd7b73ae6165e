use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::core::list::ListLogic;
use crate::errors::{AppError, AppResult};
use crate::models::record::RecordDraft;
use crate::models::status::Status;
use crate::ui::messages::success;
use crate::utils::date;

/// Edit a process.
///
/// The stored record is loaded and every given flag replaces the matching
/// field; the complete result is then written back.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        date: date_arg,
        process,
        title,
        client,
        owner,
        status,
        notes,
    } = cmd
    {
        let mut pool = open_pool(cfg)?;
        let current = ListLogic::load(&mut pool, *id)?;

        let d = match date_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => current.date,
        };

        let st = match status {
            Some(s) => Status::from_code(s).ok_or_else(|| AppError::InvalidStatus(s.clone()))?,
            None => current.status,
        };

        let draft = RecordDraft::new(
            d,
            process.as_deref().unwrap_or(&current.process_number),
            title.as_deref().unwrap_or(&current.title),
            client.as_deref().or(current.client.as_deref()),
            owner.as_deref().or(current.owner.as_deref()),
            st,
            notes.as_deref().or(current.notes.as_deref()),
        )?;

        EditLogic::apply(&mut pool, *id, &draft)?;

        success(format!(
            "Updated #{} ({} - {}) on {}",
            id,
            draft.process_number,
            draft.title,
            date::to_display(&draft.date)
        ));
    }

    Ok(())
}
