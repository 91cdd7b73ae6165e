use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::SummaryLogic;
use crate::errors::AppResult;
use crate::export::ensure_writable;
use crate::ui::messages::success;
use crate::utils::date;
use std::fs;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary {
        date: date_arg,
        file,
        force,
    } = cmd
    {
        let d = date::resolve_date(date_arg.as_deref())?;

        let mut pool = open_pool(cfg)?;
        let text = SummaryLogic::summarize(&mut pool, d, &cfg.meeting_title)?;

        println!("{}", text);

        if let Some(path) = file {
            ensure_writable(Path::new(path), *force)?;
            fs::write(path, format!("{}\n", text))?;
            success(format!("Summary written to {}", path));
        }
    }

    Ok(())
}
