use crate::ui::messages::success;
use rusqlite::{Connection, Error, OptionalExtension, Result};

/// Columns kept only so that databases written by older builds stay readable.
const LEGACY_COLUMNS: [(&str, &str); 3] = [
    ("channel", "TEXT"),
    ("priority", "TEXT"),
    ("minutes_spent", "INTEGER DEFAULT 0"),
];

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `processes` table exists.
fn processes_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='processes'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn processes_columns(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare("PRAGMA table_info('processes')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    let mut out = Vec::new();
    for c in cols {
        out.push(c?);
    }
    Ok(out)
}

/// Create the `processes` table with the full schema.
fn create_processes_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS processes (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            date           TEXT NOT NULL,
            process_number TEXT NOT NULL,
            title          TEXT NOT NULL,
            client         TEXT,
            owner          TEXT,
            channel        TEXT,
            priority       TEXT,
            status         TEXT NOT NULL,
            notes          TEXT,
            minutes_spent  INTEGER DEFAULT 0
        );
        "#,
    )?;
    ensure_indexes(conn)
}

fn ensure_indexes(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE INDEX IF NOT EXISTS idx_processes_date ON processes(date);
        CREATE INDEX IF NOT EXISTS idx_processes_status ON processes(status);
        "#,
    )
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Add any legacy column that an older `processes` table lacks.
fn migrate_add_legacy_columns(conn: &Connection) -> Result<(), Error> {
    let version = "20250301_0001_legacy_columns";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    let existing = processes_columns(conn)?;
    let mut added = Vec::new();

    for (name, decl) in LEGACY_COLUMNS {
        if existing.iter().any(|c| c == name) {
            continue;
        }

        conn.execute(&format!("ALTER TABLE processes ADD COLUMN {name} {decl};"), [])
            .map_err(|e| {
                Error::SqliteFailure(
                    rusqlite::ffi::Error::new(1),
                    Some(format!("Failed to add '{name}' column: {e}")),
                )
            })?;
        added.push(name);
    }

    let message = if added.is_empty() {
        "Legacy columns already present".to_string()
    } else {
        format!("Added legacy columns: {}", added.join(", "))
    };
    mark_applied(conn, version, &message)?;

    if !added.is_empty() {
        success(format!("Migration applied: {} → {}", version, message));
    }

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db() and by `db --migrate`.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Create or upgrade the processes table
    if !processes_table_exists(conn)? {
        create_processes_table(conn)?;
        success("Created processes table.");
        mark_applied(
            conn,
            "20250301_0001_legacy_columns",
            "Fresh schema includes legacy columns",
        )?;
    } else {
        ensure_indexes(conn)?;
        migrate_add_legacy_columns(conn)?;
    }

    Ok(())
}
