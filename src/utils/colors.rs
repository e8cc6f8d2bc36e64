/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const CYAN: &str = "\x1b[36m";

use crate::models::AttendanceStatus;

/// Present in green, absent in grey.
pub fn colorize_status(status: AttendanceStatus) -> String {
    match status {
        AttendanceStatus::Present => format!("{GREEN}{}{RESET}", status.as_str()),
        AttendanceStatus::Absent => format!("{GREY}{}{RESET}", status.as_str()),
    }
}

/// Greys out empty placeholders such as "-" or "--:--".
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "-" || v == "--:--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Board-feet units in cyan, manual units unchanged.
pub fn colorize_unit(unit: &str) -> String {
    if unit.trim_end().ends_with(" BF") {
        format!("{CYAN}{unit}{RESET}")
    } else {
        unit.to_string()
    }
}
