/// ANSI color helper utilities for terminal output.
use crate::models::status::Status;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

pub fn color_for_status(status: Status) -> &'static str {
    match status {
        Status::Attended => BLUE,
        Status::ForwardedToStoreFront => MAGENTA,
        Status::Completed => GREEN,
        Status::Reviewed => CYAN,
        Status::Unclear => YELLOW,
    }
}

/// Returns the value, or a grey placeholder when it is empty.
pub fn or_placeholder(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => format!("{GREY}--{RESET}"),
    }
}
