use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { ids, yes } = cmd {
        let listed = ids
            .iter()
            .map(|id| format!("#{}", id))
            .collect::<Vec<_>>()
            .join(", ");

        if !*yes
            && !confirm(
                format!(
                    "Delete {} record(s) ({})? This action is irreversible.",
                    ids.len(),
                    listed
                ),
                "Confirm",
            )?
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut pool = open_pool(cfg)?;
        let deleted = DeleteLogic::apply(&mut pool, ids)?;

        success(format!("Deleted {} record(s).", deleted));
    }

    Ok(())
}
