/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Grey out placeholders ("--", "" or "00:00"), leave real values alone.
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "--" || v == "00:00" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Closed sheets are shown in red, open ones in green.
pub fn color_for_state(closed: bool) -> &'static str {
    if closed { RED } else { GREEN }
}
