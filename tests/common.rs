#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use dailycheck::db::initialize::init_db;
use dailycheck::db::pool::DbPool;
use dailycheck::models::record::RecordDraft;
use dailycheck::models::status::Status;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn dc() -> Command {
    cargo_bin_cmd!("dailycheck")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_dailycheck.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_dailycheck_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a DB through the CLI (test mode: no config file is written)
pub fn init_cli_db(db_path: &str) {
    dc().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Open a fresh, migrated DB for library-level tests
pub fn fresh_pool(name: &str) -> DbPool {
    let db_path = setup_test_db(name);
    let pool = DbPool::new(&db_path).expect("open db");
    init_db(&pool.conn).expect("init db");
    pool
}

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub fn draft(
    date: &str,
    process: &str,
    title: &str,
    client: Option<&str>,
    owner: Option<&str>,
    status: Status,
) -> RecordDraft {
    RecordDraft::new(day(date), process, title, client, owner, status, None).expect("valid draft")
}
