use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::errors::{AppError, AppResult};
use crate::models::filter::Filter;
use crate::models::record::Record;
use crate::models::status::Status;
use crate::ui::messages::info;
use crate::utils::colors::{GREY, RESET, color_for_status};
use crate::utils::date;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        date: date_arg,
        status,
        search,
    } = cmd
    {
        let filter = build_filter(date_arg.as_deref(), status.as_deref(), search.as_deref())?;

        let mut pool = open_pool(cfg)?;
        let records = ListLogic::filtered(&mut pool, &filter)?;

        println!("=== {} ===", date::to_display(&filter.date));

        if records.is_empty() {
            info(format!(
                "No records for {} with the current filters.",
                date::to_display(&filter.date)
            ));
            return Ok(());
        }

        print!("{}", render_records(&records));
        println!("{GREY}{} record(s){RESET}", records.len());
    }
    Ok(())
}

/// Build the request filter from raw command-line values.
pub(crate) fn build_filter(
    date_arg: Option<&str>,
    status: Option<&str>,
    search: Option<&str>,
) -> AppResult<Filter> {
    let d = date::resolve_date(date_arg)?;

    let st = match status {
        Some(s) => Status::parse_filter(s).ok_or_else(|| AppError::InvalidStatus(s.to_string()))?,
        None => None,
    };

    Ok(Filter::for_date(d).with_status(st).with_search(search))
}

fn render_records(records: &[Record]) -> String {
    let mut table = Table::new(vec![
        Column::new("ID", 8),
        Column::new("Date", 10),
        Column::new("Process", 16),
        Column::new("Title", 40),
        Column::new("Client", 24),
        Column::new("Owner", 20),
        Column::new("Status", 24),
        Column::new("Notes", 5),
    ]);

    for r in records {
        table.add_row(vec![
            r.id.to_string(),
            date::to_display(&r.date),
            r.process_number.clone(),
            r.title.clone(),
            r.client.clone().unwrap_or_default(),
            r.owner.clone().unwrap_or_default(),
            r.status.label().to_string(),
            if r.has_notes() { "..." } else { "" }.to_string(),
        ]);
    }

    // colour the status cells after layout so ANSI codes do not skew widths
    let rendered = table.render();
    let mut out = String::new();
    for (i, line) in rendered.lines().enumerate() {
        let colored = match i.checked_sub(2).and_then(|idx| records.get(idx)) {
            Some(r) => paint_last(line, r.status),
            None => line.to_string(),
        };
        out.push_str(&colored);
        out.push('\n');
    }
    out
}

/// The status column is the last cell holding the label.
fn paint_last(line: &str, status: Status) -> String {
    let label = status.label();
    match line.rfind(label) {
        Some(pos) => format!(
            "{}{}{}{}{}",
            &line[..pos],
            color_for_status(status),
            label,
            RESET,
            &line[pos + label.len()..]
        ),
        None => line.to_string(),
    }
}
