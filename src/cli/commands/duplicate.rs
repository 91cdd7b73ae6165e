use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::duplicate::DuplicateLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Duplicate { date: date_arg } = cmd {
        let d = date::resolve_date(date_arg.as_deref())?;

        let mut pool = open_pool(cfg)?;
        let n = DuplicateLogic::apply(&mut pool, d)?;

        success(format!(
            "Duplicated {} record(s) onto {}.",
            n,
            date::to_display(&d)
        ));
    }
    Ok(())
}
