mod common;
use common::{day, draft, fresh_pool, temp_out};
use dailycheck::core::add::AddLogic;
use dailycheck::core::import::ImportLogic;
use dailycheck::core::list::ListLogic;
use dailycheck::core::summary::SummaryLogic;
use dailycheck::errors::AppError;
use dailycheck::export::delimited::read_delimited;
use dailycheck::export::{ExportFormat, ExportLogic};
use dailycheck::models::filter::Filter;
use dailycheck::models::record::RecordDraft;
use dailycheck::models::status::Status;
use std::fs;
use std::path::Path;

#[test]
fn test_summary_groups_by_canonical_status_order() {
    let mut pool = fresh_pool("summary_groups");

    AddLogic::apply(
        &mut pool,
        &draft("2024-03-10", "1234", "Printer down", None, Some("Ana"), Status::Attended),
    )
    .unwrap();
    AddLogic::apply(
        &mut pool,
        &draft("2024-03-10", "55", "POS frozen", Some("Store 3"), None, Status::Unclear),
    )
    .unwrap();
    AddLogic::apply(
        &mut pool,
        &draft("2024-03-10", "77", "VPN", Some("HQ"), Some("Bruno"), Status::Attended),
    )
    .unwrap();
    // other day, not counted
    AddLogic::apply(
        &mut pool,
        &draft("2024-03-11", "99", "Tomorrow", None, None, Status::Attended),
    )
    .unwrap();

    let text = SummaryLogic::summarize(&mut pool, day("2024-03-10"), "Standup 08:30").unwrap();

    let expected = "\
Summary 10/03/2024 - Standup 08:30
Total records: 3

• Attended: 2
   - #77 - VPN | Client: HQ | Owner: Bruno
   - #1234 - Printer down | Owner: Ana

• Forwarded to Store Front: 0

• Completed: 0

• Reviewed: 0

• Unclear: 1
   - #55 - POS frozen | Client: Store 3";

    assert_eq!(text, expected);
}

#[test]
fn test_summary_total_matches_listing() {
    let mut pool = fresh_pool("summary_total");

    for (i, st) in Status::ALL.iter().enumerate() {
        for j in 0..=i {
            AddLogic::apply(
                &mut pool,
                &draft("2024-05-02", &format!("{i}-{j}"), "t", None, None, *st),
            )
            .unwrap();
        }
    }

    let summary = SummaryLogic::collect(&mut pool, day("2024-05-02")).unwrap();
    let listed = ListLogic::filtered(&mut pool, &Filter::for_date(day("2024-05-02"))).unwrap();

    assert_eq!(summary.total(), 15);
    assert_eq!(summary.total(), listed.len());
    let order: Vec<Status> = summary.groups.iter().map(|(s, _)| *s).collect();
    assert_eq!(order, Status::ALL.to_vec());
}

#[test]
fn test_summary_of_empty_day_has_no_trailing_blank_line() {
    let mut pool = fresh_pool("summary_empty");

    let text = SummaryLogic::summarize(&mut pool, day("2024-03-10"), "Standup").unwrap();

    assert!(text.starts_with("Summary 10/03/2024 - Standup\nTotal records: 0\n"));
    assert!(text.ends_with("• Unclear: 0"));
}

#[test]
fn test_export_empty_filter_writes_no_file() {
    let mut pool = fresh_pool("export_empty");
    AddLogic::apply(
        &mut pool,
        &draft("2024-03-10", "1", "t", None, None, Status::Attended),
    )
    .unwrap();

    let out = temp_out("export_empty", "csv");
    let filter = Filter::for_date(day("2024-03-10")).with_status(Some(Status::Completed));

    let err = ExportLogic::export(&mut pool, &filter, ExportFormat::Csv, Path::new(&out), true)
        .unwrap_err();

    assert!(matches!(err, AppError::EmptyResult(_)));
    assert!(!Path::new(&out).exists());
}

#[test]
fn test_export_csv_format() {
    let mut pool = fresh_pool("export_format");

    AddLogic::apply(
        &mut pool,
        &draft("2024-03-10", "1234", "Printer down", None, Some("Ana"), Status::Attended),
    )
    .unwrap();
    AddLogic::apply(
        &mut pool,
        &RecordDraft::new(
            day("2024-03-10"),
            "88",
            "Café; açúcar",
            Some("Loja"),
            None,
            Status::ForwardedToStoreFront,
            Some("line one\nline two"),
        )
        .unwrap(),
    )
    .unwrap();

    let out = temp_out("export_format", "csv");
    let n = ExportLogic::export(
        &mut pool,
        &Filter::for_date(day("2024-03-10")),
        ExportFormat::Csv,
        Path::new(&out),
        true,
    )
    .unwrap();
    assert_eq!(n, 2);

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("date;processNumber;title;client;owner;status;notes")
    );
    // newest first; the field containing ';' is quoted
    assert_eq!(
        lines.next(),
        Some("10/03/2024;88;\"Café; açúcar\";Loja;;Forwarded to Store Front;\"line one")
    );
    assert!(content.contains("10/03/2024;1234;Printer down;;Ana;Attended;\n"));
}

#[test]
fn test_export_then_import_round_trip() {
    let mut pool = fresh_pool("export_round_trip_src");

    let originals = vec![
        RecordDraft::new(
            day("2024-03-10"),
            "1234",
            "Printer down",
            None,
            Some("Ana"),
            Status::Attended,
            None,
        )
        .unwrap(),
        RecordDraft::new(
            day("2024-03-10"),
            "X-9",
            "Quotes \"inside\"; and semicolons",
            Some("ACME"),
            None,
            Status::Reviewed,
            Some("multi\nline notes"),
        )
        .unwrap(),
    ];
    for d in &originals {
        AddLogic::apply(&mut pool, d).unwrap();
    }

    let out = temp_out("export_round_trip", "csv");
    ExportLogic::export(
        &mut pool,
        &Filter::for_date(day("2024-03-10")),
        ExportFormat::Csv,
        Path::new(&out),
        true,
    )
    .unwrap();

    let rows = read_delimited(Path::new(&out)).unwrap();
    assert_eq!(rows.len(), 2);

    let mut target = fresh_pool("export_round_trip_dst");
    assert_eq!(ImportLogic::apply(&mut target, Path::new(&out), None).unwrap(), 2);

    let mut imported: Vec<RecordDraft> =
        ListLogic::filtered(&mut target, &Filter::for_date(day("2024-03-10")))
            .unwrap()
            .iter()
            .map(|r| r.to_draft())
            .collect();
    // the export is newest first, so the import stores them reversed
    imported.reverse();
    let mut expected = originals.clone();
    expected.reverse();

    assert_eq!(imported, expected);
}

#[test]
fn test_import_rejects_bad_row_and_stores_nothing() {
    let src = temp_out("import_bad_row", "csv");
    fs::write(
        &src,
        "date;processNumber;title;client;owner;status;notes\n\
         10/03/2024;1;ok;;;Attended;\n\
         10/03/2024;2;bad status;;;Lost;\n",
    )
    .unwrap();

    let mut pool = fresh_pool("import_bad_row");
    let err = ImportLogic::apply(&mut pool, Path::new(&src), None).unwrap_err();

    assert!(matches!(err, AppError::InvalidInput(ref m) if m.contains("line 3")));
    assert!(
        ListLogic::filtered(&mut pool, &Filter::for_date(day("2024-03-10")))
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_export_json_uses_iso_dates() {
    let mut pool = fresh_pool("export_json");
    AddLogic::apply(
        &mut pool,
        &draft("2024-03-10", "1234", "Printer down", None, Some("Ana"), Status::Attended),
    )
    .unwrap();

    let out = temp_out("export_json", "json");
    ExportLogic::export(
        &mut pool,
        &Filter::for_date(day("2024-03-10")),
        ExportFormat::Json,
        Path::new(&out),
        true,
    )
    .unwrap();

    let content = fs::read_to_string(&out).expect("read exported json");
    let v: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(v[0]["date"], "2024-03-10");
    assert_eq!(v[0]["processNumber"], "1234");
    assert_eq!(v[0]["client"], serde_json::Value::Null);
    assert_eq!(v[0]["status"], "Attended");
}

#[test]
fn test_import_error_names_physical_line_after_multiline_notes() {
    let src = temp_out("import_multiline_line", "csv");
    fs::write(
        &src,
        "date;processNumber;title;client;owner;status;notes\n\
         10/03/2024;1;ok;;;Attended;\"first\nsecond\nthird\"\n\
         10/03/2024;2;bad;;;Lost;\n",
    )
    .unwrap();

    let rows = read_delimited(Path::new(&src)).unwrap();
    assert_eq!(rows[0].0, 2);
    assert_eq!(rows[0].1.notes.as_deref(), Some("first\nsecond\nthird"));
    assert_eq!(rows[1].0, 5);

    let mut pool = fresh_pool("import_multiline_line");
    let err = ImportLogic::apply(&mut pool, Path::new(&src), None).unwrap_err();

    assert!(matches!(err, AppError::InvalidInput(ref m) if m.starts_with("line 5:")));
}
