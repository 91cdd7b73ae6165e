use crate::db::pool::DbPool;
use crate::db::queries::load_filtered;
use crate::errors::AppResult;
use crate::models::day_summary::DaySummary;
use crate::models::filter::Filter;
use crate::models::status::Status;
use chrono::NaiveDate;

pub struct SummaryLogic;

impl SummaryLogic {
    pub fn collect(pool: &mut DbPool, day: NaiveDate) -> AppResult<DaySummary> {
        let mut groups = Vec::with_capacity(Status::ALL.len());
        for st in Status::ALL {
            let rows = load_filtered(&pool.conn, &Filter::for_date(day).with_status(Some(st)))?;
            groups.push((st, rows));
        }

        Ok(DaySummary { date: day, groups })
    }

    pub fn summarize(pool: &mut DbPool, day: NaiveDate, meeting_title: &str) -> AppResult<String> {
        Ok(Self::collect(pool, day)?.render(meeting_title))
    }
}
