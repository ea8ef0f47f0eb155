/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const REVERSE: &str = "\x1b[7m";

/// Grey for the "-" placeholder, plain text otherwise.
///
/// Esempio:
/// `colorize_optional("-")` → "<grey>-<reset>"
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == crate::utils::formatting::PLACEHOLDER {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Color of a calendar cell: selected → reverse video, with data → green,
/// empty day → grey.
pub fn color_for_day(has_data: bool, selected: bool) -> &'static str {
    if selected {
        REVERSE
    } else if has_data {
        GREEN
    } else {
        GREY
    }
}
