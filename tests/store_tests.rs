mod common;
use common::{day, draft, fresh_pool};
use dailycheck::core::add::AddLogic;
use dailycheck::core::del::DeleteLogic;
use dailycheck::core::duplicate::DuplicateLogic;
use dailycheck::core::edit::EditLogic;
use dailycheck::core::list::ListLogic;
use dailycheck::core::move_status::MoveLogic;
use dailycheck::db::migrate::run_pending_migrations;
use dailycheck::db::pool::DbPool;
use dailycheck::errors::AppError;
use dailycheck::models::filter::Filter;
use dailycheck::models::record::RecordDraft;
use dailycheck::models::status::Status;
use dailycheck::utils::date::parse_date;

#[test]
fn test_create_then_list_returns_same_fields() {
    let mut pool = fresh_pool("store_create_list");

    let d = RecordDraft::new(
        day("2024-03-10"),
        "1234",
        "Printer down",
        None,
        Some("Ana"),
        Status::Attended,
        None,
    )
    .unwrap();
    let id = AddLogic::apply(&mut pool, &d).unwrap();

    let rows = ListLogic::filtered(&mut pool, &Filter::for_date(day("2024-03-10"))).unwrap();
    assert_eq!(rows.len(), 1);

    let r = &rows[0];
    assert_eq!(r.id, id);
    assert_eq!(r.process_number, "1234");
    assert_eq!(r.title, "Printer down");
    assert_eq!(r.client, None);
    assert_eq!(r.owner.as_deref(), Some("Ana"));
    assert_eq!(r.status, Status::Attended);
    assert_eq!(r.notes, None);
    assert_eq!(r.to_draft(), d);
}

#[test]
fn test_create_writes_legacy_defaults() {
    let mut pool = fresh_pool("store_legacy_defaults");
    let id = AddLogic::apply(
        &mut pool,
        &draft("2024-03-10", "1", "t", None, None, Status::Completed),
    )
    .unwrap();

    let (channel, priority, minutes): (Option<String>, Option<String>, i64) = pool
        .conn
        .query_row(
            "SELECT channel, priority, minutes_spent FROM processes WHERE id = ?1",
            [id],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .unwrap();

    assert_eq!(channel, None);
    assert_eq!(priority, None);
    assert_eq!(minutes, 0);
}

#[test]
fn test_draft_rejects_blank_required_fields() {
    let err = RecordDraft::new(
        day("2024-03-10"),
        "   ",
        "Title",
        None,
        None,
        Status::Attended,
        None,
    )
    .unwrap_err();
    assert!(matches!(err, AppError::MissingField("process number")));

    let err = RecordDraft::new(day("2024-03-10"), "12", "", None, None, Status::Attended, None)
        .unwrap_err();
    assert!(matches!(err, AppError::MissingField("title")));
}

#[test]
fn test_draft_blank_optional_fields_become_none() {
    let d = RecordDraft::new(
        day("2024-03-10"),
        " 12 ",
        " Title ",
        Some("  "),
        Some(""),
        Status::Reviewed,
        Some("\n"),
    )
    .unwrap();

    assert_eq!(d.process_number, "12");
    assert_eq!(d.title, "Title");
    assert_eq!(d.client, None);
    assert_eq!(d.owner, None);
    assert_eq!(d.notes, None);
}

#[test]
fn test_list_orders_by_id_descending_and_isolates_dates() {
    let mut pool = fresh_pool("store_order");

    let a = AddLogic::apply(
        &mut pool,
        &draft("2024-03-10", "A", "first", None, None, Status::Attended),
    )
    .unwrap();
    let b = AddLogic::apply(
        &mut pool,
        &draft("2024-03-10", "B", "second", None, None, Status::Unclear),
    )
    .unwrap();
    AddLogic::apply(
        &mut pool,
        &draft("2024-03-11", "C", "other day", None, None, Status::Attended),
    )
    .unwrap();
    let c = AddLogic::apply(
        &mut pool,
        &draft("2024-03-10", "D", "third", None, None, Status::Completed),
    )
    .unwrap();

    let rows = ListLogic::filtered(&mut pool, &Filter::for_date(day("2024-03-10"))).unwrap();
    let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![c, b, a]);
}

#[test]
fn test_status_filter_is_subset_of_day() {
    let mut pool = fresh_pool("store_status_filter");

    AddLogic::apply(
        &mut pool,
        &draft("2024-03-10", "1", "a", None, None, Status::Attended),
    )
    .unwrap();
    AddLogic::apply(
        &mut pool,
        &draft("2024-03-10", "2", "b", None, None, Status::Completed),
    )
    .unwrap();
    AddLogic::apply(
        &mut pool,
        &draft("2024-03-10", "3", "c", None, None, Status::Completed),
    )
    .unwrap();

    let all = ListLogic::filtered(&mut pool, &Filter::for_date(day("2024-03-10"))).unwrap();
    let completed = ListLogic::filtered(
        &mut pool,
        &Filter::for_date(day("2024-03-10")).with_status(Some(Status::Completed)),
    )
    .unwrap();

    assert_eq!(completed.len(), 2);
    assert!(completed.iter().all(|r| r.status == Status::Completed));
    assert!(completed.iter().all(|r| all.contains(r)));

    // "(All)" is no filter at all
    let st = Status::parse_filter("(All)").unwrap();
    let unfiltered = ListLogic::filtered(
        &mut pool,
        &Filter::for_date(day("2024-03-10")).with_status(st).with_search(Some("")),
    )
    .unwrap();
    assert_eq!(unfiltered, all);
}

#[test]
fn test_search_matches_any_of_four_fields() {
    let mut pool = fresh_pool("store_search");

    let by_process = AddLogic::apply(
        &mut pool,
        &draft("2024-03-10", "INC-778", "x", None, None, Status::Attended),
    )
    .unwrap();
    let by_title = AddLogic::apply(
        &mut pool,
        &draft("2024-03-10", "1", "Printer 778 jam", None, None, Status::Attended),
    )
    .unwrap();
    let by_client = AddLogic::apply(
        &mut pool,
        &draft("2024-03-10", "2", "y", Some("Store 778"), None, Status::Attended),
    )
    .unwrap();
    let by_owner = AddLogic::apply(
        &mut pool,
        &draft("2024-03-10", "3", "z", None, Some("ops778"), Status::Attended),
    )
    .unwrap();
    AddLogic::apply(
        &mut pool,
        &draft("2024-03-10", "4", "nothing here", Some("c"), Some("o"), Status::Attended),
    )
    .unwrap();

    let rows = ListLogic::filtered(
        &mut pool,
        &Filter::for_date(day("2024-03-10")).with_search(Some("778")),
    )
    .unwrap();
    let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();

    assert_eq!(ids, vec![by_owner, by_client, by_title, by_process]);
}

#[test]
fn test_search_is_ascii_case_insensitive_and_literal() {
    let mut pool = fresh_pool("store_search_literal");

    let pct = AddLogic::apply(
        &mut pool,
        &draft("2024-03-10", "1", "disk 100% full", None, None, Status::Attended),
    )
    .unwrap();
    AddLogic::apply(
        &mut pool,
        &draft("2024-03-10", "2", "disk 1000 full", None, None, Status::Attended),
    )
    .unwrap();
    let printer = AddLogic::apply(
        &mut pool,
        &draft("2024-03-10", "3", "Printer down", None, None, Status::Attended),
    )
    .unwrap();

    let rows = ListLogic::filtered(
        &mut pool,
        &Filter::for_date(day("2024-03-10")).with_search(Some("100%")),
    )
    .unwrap();
    assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![pct]);

    let rows = ListLogic::filtered(
        &mut pool,
        &Filter::for_date(day("2024-03-10")).with_search(Some("printer")),
    )
    .unwrap();
    assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![printer]);
}

#[test]
fn test_update_replaces_fields_and_moves_date() {
    let mut pool = fresh_pool("store_update");

    let id = AddLogic::apply(
        &mut pool,
        &draft("2024-03-10", "1234", "Printer down", Some("ACME"), Some("Ana"), Status::Attended),
    )
    .unwrap();

    let new = RecordDraft::new(
        day("2024-03-11"),
        "1234-b",
        "Printer replaced",
        None,
        Some("Bruno"),
        Status::Completed,
        Some("swapped the unit"),
    )
    .unwrap();
    EditLogic::apply(&mut pool, id, &new).unwrap();

    let old_day = ListLogic::filtered(&mut pool, &Filter::for_date(day("2024-03-10"))).unwrap();
    assert!(old_day.is_empty());

    let rows = ListLogic::filtered(&mut pool, &Filter::for_date(day("2024-03-11"))).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, id);
    assert_eq!(rows[0].to_draft(), new);
}

#[test]
fn test_update_unknown_id_is_not_found() {
    let mut pool = fresh_pool("store_update_missing");

    let err = EditLogic::apply(
        &mut pool,
        4242,
        &draft("2024-03-10", "1", "t", None, None, Status::Attended),
    )
    .unwrap_err();

    assert!(matches!(err, AppError::NotFound(ref ids) if ids == &vec![4242]));
}

#[test]
fn test_delete_many_removes_only_given_ids() {
    let mut pool = fresh_pool("store_delete");

    let a = AddLogic::apply(
        &mut pool,
        &draft("2024-03-10", "1", "a", None, None, Status::Attended),
    )
    .unwrap();
    let b = AddLogic::apply(
        &mut pool,
        &draft("2024-03-10", "2", "b", None, None, Status::Attended),
    )
    .unwrap();
    let c = AddLogic::apply(
        &mut pool,
        &draft("2024-03-10", "3", "c", None, None, Status::Attended),
    )
    .unwrap();

    assert_eq!(DeleteLogic::apply(&mut pool, &[a, c]).unwrap(), 2);

    let rows = ListLogic::filtered(&mut pool, &Filter::for_date(day("2024-03-10"))).unwrap();
    assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![b]);

    // ids are never reused
    let d = AddLogic::apply(
        &mut pool,
        &draft("2024-03-10", "4", "d", None, None, Status::Attended),
    )
    .unwrap();
    assert!(d > c);
}

#[test]
fn test_delete_empty_set_is_noop() {
    let mut pool = fresh_pool("store_delete_empty");
    AddLogic::apply(
        &mut pool,
        &draft("2024-03-10", "1", "a", None, None, Status::Attended),
    )
    .unwrap();

    assert_eq!(DeleteLogic::apply(&mut pool, &[]).unwrap(), 0);
    assert_eq!(
        ListLogic::filtered(&mut pool, &Filter::for_date(day("2024-03-10"))).unwrap().len(),
        1
    );
}

#[test]
fn test_delete_with_unknown_id_deletes_nothing() {
    let mut pool = fresh_pool("store_delete_partial");
    let a = AddLogic::apply(
        &mut pool,
        &draft("2024-03-10", "1", "a", None, None, Status::Attended),
    )
    .unwrap();

    let err = DeleteLogic::apply(&mut pool, &[a, 999]).unwrap_err();
    assert!(matches!(err, AppError::NotFound(ref ids) if ids == &vec![999]));

    assert!(ListLogic::load(&mut pool, a).is_ok());
}

#[test]
fn test_move_status_changes_status_only() {
    let mut pool = fresh_pool("store_move");

    let a = AddLogic::apply(
        &mut pool,
        &draft("2024-03-10", "1", "a", Some("ACME"), None, Status::Attended),
    )
    .unwrap();
    let b = AddLogic::apply(
        &mut pool,
        &draft("2024-03-10", "2", "b", None, Some("Ana"), Status::Unclear),
    )
    .unwrap();
    let untouched = AddLogic::apply(
        &mut pool,
        &draft("2024-03-10", "3", "c", None, None, Status::Attended),
    )
    .unwrap();

    assert_eq!(MoveLogic::apply(&mut pool, &[a, b], Status::Reviewed).unwrap(), 2);

    let ra = ListLogic::load(&mut pool, a).unwrap();
    assert_eq!(ra.status, Status::Reviewed);
    assert_eq!(ra.client.as_deref(), Some("ACME"));
    assert_eq!(ListLogic::load(&mut pool, b).unwrap().status, Status::Reviewed);
    assert_eq!(ListLogic::load(&mut pool, untouched).unwrap().status, Status::Attended);

    let err = MoveLogic::apply(&mut pool, &[untouched, 777], Status::Completed).unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(ListLogic::load(&mut pool, untouched).unwrap().status, Status::Attended);
}

#[test]
fn test_duplicate_from_previous_day() {
    let mut pool = fresh_pool("store_duplicate");

    let s1 = draft("2024-03-09", "1", "one", Some("ACME"), Some("Ana"), Status::Unclear);
    let s2 = RecordDraft::new(
        day("2024-03-09"),
        "2",
        "two",
        None,
        None,
        Status::Completed,
        Some("multi\nline"),
    )
    .unwrap();
    let id1 = AddLogic::apply(&mut pool, &s1).unwrap();
    let id2 = AddLogic::apply(&mut pool, &s2).unwrap();
    // two days before: must not be copied
    AddLogic::apply(
        &mut pool,
        &draft("2024-03-08", "0", "old", None, None, Status::Attended),
    )
    .unwrap();

    let n = DuplicateLogic::apply(&mut pool, day("2024-03-10")).unwrap();
    assert_eq!(n, 2);

    let copies = ListLogic::filtered(&mut pool, &Filter::for_date(day("2024-03-10"))).unwrap();
    assert_eq!(copies.len(), 2);
    assert!(copies.iter().all(|r| r.id != id1 && r.id != id2));

    // newest first: the copy of s2 was inserted last
    assert_eq!(copies[0].to_draft(), s2.clone().on_date(day("2024-03-10")));
    assert_eq!(copies[1].to_draft(), s1.clone().on_date(day("2024-03-10")));

    // sources untouched
    let sources = ListLogic::filtered(&mut pool, &Filter::for_date(day("2024-03-09"))).unwrap();
    assert_eq!(sources.len(), 2);
}

#[test]
fn test_duplicate_with_empty_previous_day_creates_nothing() {
    let mut pool = fresh_pool("store_duplicate_empty");
    AddLogic::apply(
        &mut pool,
        &draft("2024-03-10", "1", "today", None, None, Status::Attended),
    )
    .unwrap();

    let err = DuplicateLogic::apply(&mut pool, day("2024-03-12")).unwrap_err();
    assert!(err.is_informational());

    let rows = ListLogic::filtered(&mut pool, &Filter::for_date(day("2024-03-12"))).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_duplicate_crosses_month_boundary() {
    let mut pool = fresh_pool("store_duplicate_month");
    AddLogic::apply(
        &mut pool,
        &draft("2024-02-29", "1", "leap", None, None, Status::Attended),
    )
    .unwrap();

    assert_eq!(DuplicateLogic::apply(&mut pool, day("2024-03-01")).unwrap(), 1);
}

#[test]
fn test_parse_date_requires_four_digit_year() {
    assert_eq!(parse_date("10/03/2024"), Some(day("2024-03-10")));
    assert_eq!(parse_date("2024-3-9"), Some(day("2024-03-09")));

    assert_eq!(parse_date("10/03/24"), None);
    assert_eq!(parse_date("24-03-10"), None);
    assert_eq!(parse_date("10/03/02024"), None);
    assert_eq!(parse_date("10/03/2024x"), None);
}

#[test]
fn test_migration_adds_legacy_columns_to_old_table() {
    let pool = fresh_pool("store_legacy_upgrade");

    // table as written by a build that predates the legacy columns
    pool.conn
        .execute_batch(
            "DROP TABLE processes;
             DELETE FROM log WHERE operation = 'migration_applied';
             CREATE TABLE processes (
                 id             INTEGER PRIMARY KEY AUTOINCREMENT,
                 date           TEXT NOT NULL,
                 process_number TEXT NOT NULL,
                 title          TEXT NOT NULL,
                 client         TEXT,
                 owner          TEXT,
                 status         TEXT NOT NULL,
                 notes          TEXT
             );
             INSERT INTO processes (date, process_number, title, status)
             VALUES ('2024-03-10', '1', 'kept', 'Attended');",
        )
        .unwrap();

    run_pending_migrations(&pool.conn).unwrap();

    let columns = |pool: &DbPool| -> Vec<String> {
        let mut stmt = pool.conn.prepare("PRAGMA table_info('processes')").unwrap();
        let names: Vec<String> = stmt
            .query_map([], |row| row.get::<_, String>(1))
            .unwrap()
            .map(|c| c.unwrap())
            .collect();
        names
    };
    let cols = columns(&pool);
    for legacy in ["channel", "priority", "minutes_spent"] {
        assert!(cols.iter().any(|c| c == legacy), "missing column {legacy}");
    }

    let indexes: i64 = pool
        .conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master
             WHERE type = 'index' AND name IN ('idx_processes_date', 'idx_processes_status')",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(indexes, 2);

    let applied = |pool: &DbPool| -> i64 {
        pool.conn
            .query_row(
                "SELECT COUNT(*) FROM log
                 WHERE operation = 'migration_applied'
                   AND target = '20250301_0001_legacy_columns'",
                [],
                |row| row.get(0),
            )
            .unwrap()
    };
    assert_eq!(applied(&pool), 1);

    // existing rows survive and read back with the default minutes
    let minutes: i64 = pool
        .conn
        .query_row("SELECT minutes_spent FROM processes WHERE title = 'kept'", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(minutes, 0);

    // second run changes nothing
    run_pending_migrations(&pool.conn).unwrap();
    assert_eq!(columns(&pool), cols);
    assert_eq!(applied(&pool), 1);
}
