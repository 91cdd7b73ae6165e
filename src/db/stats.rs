use crate::db::pool::DbPool;
use crate::models::status::Status;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::date;
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) TOTAL RECORDS
    //
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM processes", [], |row| row.get(0))?;
    println!(
        "{}• Total records:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    //
    // 3) DATE RANGE
    //
    let bounds: Option<(Option<String>, Option<String>)> = pool
        .conn
        .query_row("SELECT MIN(date), MAX(date) FROM processes", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .optional()?;

    let (first, last) = bounds.unwrap_or((None, None));
    let show = |d: Option<String>| match d.as_deref().and_then(date::from_db) {
        Some(nd) => date::to_display(&nd),
        None => format!("{GREY}--{RESET}"),
    };

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", show(first));
    println!("    to:   {}", show(last));

    //
    // 4) RECORDS PER STATUS
    //
    println!("{}• Records per status:{}", CYAN, RESET);
    let mut stmt = pool
        .conn
        .prepare("SELECT COUNT(*) FROM processes WHERE status = ?1")?;
    for st in Status::ALL {
        let n: i64 = stmt.query_row([st.to_db_str()], |row| row.get(0))?;
        println!("    {:<26} {}", st.label(), n);
    }

    println!();
    Ok(())
}

/// Run `PRAGMA integrity_check`; returns the problems found (empty when ok).
pub fn integrity_problems(pool: &DbPool) -> rusqlite::Result<Vec<String>> {
    let mut stmt = pool.conn.prepare("PRAGMA integrity_check;")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut problems = Vec::new();
    for r in rows {
        let line = r?;
        if line != "ok" {
            problems.push(line);
        }
    }
    Ok(problems)
}
