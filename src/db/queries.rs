use crate::errors::{AppError, AppResult};
use crate::models::filter::Filter;
use crate::models::record::{Record, RecordDraft};
use crate::models::status::Status;
use crate::utils::date;
use chrono::NaiveDate;
use rusqlite::types::Value;
use rusqlite::{Connection, OptionalExtension, Result, Row, params, params_from_iter};

const SELECT_COLUMNS: &str =
    "SELECT id, date, process_number, title, client, owner, status, notes FROM processes";

pub fn map_row(row: &Row) -> Result<Record> {
    let date_str: String = row.get("date")?;
    let date = date::from_db(&date_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            1,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let status_str: String = row.get("status")?;
    let status = Status::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            6,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidStatus(status_str.clone())),
        )
    })?;

    Ok(Record {
        id: row.get("id")?,
        date,
        process_number: row.get("process_number")?,
        title: row.get("title")?,
        client: row.get("client")?,
        owner: row.get("owner")?,
        status,
        notes: row.get("notes")?,
    })
}

/// Insert a new process. Legacy columns get NULL / NULL / 0.
pub fn insert_record(conn: &Connection, draft: &RecordDraft) -> AppResult<i64> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO processes
            (date, process_number, title, client, owner, channel, priority, status, notes, minutes_spent)
         VALUES (?1, ?2, ?3, ?4, ?5, NULL, NULL, ?6, ?7, 0)",
    )?;

    stmt.execute(params![
        date::to_db(&draft.date),
        draft.process_number,
        draft.title,
        draft.client,
        draft.owner,
        draft.status.to_db_str(),
        draft.notes,
    ])?;

    Ok(conn.last_insert_rowid())
}

/// Replace every user-editable field. Returns the number of rows touched.
pub fn update_record(conn: &Connection, id: i64, draft: &RecordDraft) -> AppResult<usize> {
    let changed = conn.execute(
        "UPDATE processes
         SET date = ?1, process_number = ?2, title = ?3, client = ?4, owner = ?5,
             status = ?6, notes = ?7
         WHERE id = ?8",
        params![
            date::to_db(&draft.date),
            draft.process_number,
            draft.title,
            draft.client,
            draft.owner,
            draft.status.to_db_str(),
            draft.notes,
            id,
        ],
    )?;
    Ok(changed)
}

pub fn delete_records(conn: &Connection, ids: &[i64]) -> AppResult<usize> {
    if ids.is_empty() {
        return Ok(0);
    }

    let sql = format!(
        "DELETE FROM processes WHERE id IN ({})",
        placeholders(ids.len())
    );
    Ok(conn.execute(&sql, params_from_iter(ids.iter()))?)
}

pub fn update_status(conn: &Connection, ids: &[i64], status: Status) -> AppResult<usize> {
    let mut stmt = conn.prepare_cached("UPDATE processes SET status = ?1 WHERE id = ?2")?;

    let mut changed = 0;
    for id in ids {
        changed += stmt.execute(params![status.to_db_str(), id])?;
    }
    Ok(changed)
}

pub fn load_record(conn: &Connection, id: i64) -> AppResult<Option<Record>> {
    let sql = format!("{SELECT_COLUMNS} WHERE id = ?1");
    let rec = conn.query_row(&sql, [id], map_row).optional()?;
    Ok(rec)
}

/// Return the ids of `ids` that are not present in the table.
pub fn missing_ids(conn: &Connection, ids: &[i64]) -> AppResult<Vec<i64>> {
    let mut stmt = conn.prepare_cached("SELECT 1 FROM processes WHERE id = ?1")?;

    let mut missing = Vec::new();
    for id in ids {
        if stmt.query_row([id], |_| Ok(())).optional()?.is_none() {
            missing.push(*id);
        }
    }
    Ok(missing)
}

/// Records matching `filter`, newest first (id descending).
pub fn load_filtered(conn: &Connection, filter: &Filter) -> AppResult<Vec<Record>> {
    let mut sql = format!("{SELECT_COLUMNS} WHERE date = ?");
    let mut args: Vec<Value> = vec![Value::Text(date::to_db(&filter.date))];

    if let Some(st) = filter.status {
        sql.push_str(" AND status = ?");
        args.push(Value::Text(st.to_db_str().to_string()));
    }

    if let Some(q) = &filter.search {
        sql.push_str(
            " AND (process_number LIKE ? ESCAPE '\\'
                OR title LIKE ? ESCAPE '\\'
                OR client LIKE ? ESCAPE '\\'
                OR owner LIKE ? ESCAPE '\\')",
        );
        let pattern = format!("%{}%", escape_like(q));
        for _ in 0..4 {
            args.push(Value::Text(pattern.clone()));
        }
    }

    sql.push_str(" ORDER BY id DESC");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(args.iter()), map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Every record of `date`, oldest first.
pub fn load_by_date_ascending(conn: &Connection, day: &NaiveDate) -> AppResult<Vec<Record>> {
    let sql = format!("{SELECT_COLUMNS} WHERE date = ?1 ORDER BY id ASC");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([date::to_db(day)], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

fn placeholders(n: usize) -> String {
    vec!["?"; n].join(",")
}

/// Make `%`, `_` and `\` literal inside a LIKE pattern using `\` as escape.
fn escape_like(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
