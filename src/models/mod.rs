pub mod day_summary;
pub mod filter;
pub mod record;
pub mod status;
