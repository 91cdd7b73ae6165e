use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::migrate::run_pending_migrations;
use crate::db::stats;
use crate::errors::{AppError, AppResult};
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

/// Maintenance actions run in a fixed order: migrate, info, check, vacuum.
/// A failed integrity check stops before VACUUM and fails the command.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    else {
        return Ok(());
    };

    if !(*migrate || *check || *vacuum || *info) {
        return Ok(());
    }

    let mut pool = open_pool(cfg)?;

    if *migrate {
        println!("{CYAN}▶ Running migrations…{RESET}");
        run_pending_migrations(&pool.conn)?;
        println!("{GREEN}✔ Schema is up to date.{RESET}\n");
    }

    if *info {
        stats::print_db_info(&mut pool, &cfg.database)?;
    }

    if *check {
        println!("{CYAN}▶ Running integrity check…{RESET}");
        let problems = stats::integrity_problems(&pool)?;
        if !problems.is_empty() {
            for p in &problems {
                println!("{RED}  ✘ {p}{RESET}");
            }
            return Err(AppError::InvalidInput(format!(
                "integrity check reported {} problem(s) in {}",
                problems.len(),
                cfg.database
            )));
        }
        println!("{GREEN}✔ Integrity check passed.{RESET}\n");
    }

    if *vacuum {
        println!("{CYAN}▶ Running VACUUM…{RESET}");
        pool.conn.execute_batch("VACUUM;")?;
        audit(&pool.conn, "vacuum", &cfg.database, "Database compacted");
        println!("{GREEN}✔ Vacuum completed.{RESET}\n");
    }

    Ok(())
}
