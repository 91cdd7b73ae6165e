use crate::cli::commands::list::build_filter;
use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use std::path::PathBuf;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        date,
        status,
        search,
        format,
        file,
        force,
    } = cmd
    {
        let filter = build_filter(date.as_deref(), status.as_deref(), search.as_deref())?;

        let path = match file {
            Some(f) => PathBuf::from(f),
            None => ExportLogic::default_path(&filter.date, *format),
        };

        let mut pool = open_pool(cfg)?;
        ExportLogic::export(&mut pool, &filter, *format, &path, *force)?;
    }
    Ok(())
}
