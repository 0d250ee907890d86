//! Formatting utilities used for CLI and print outputs.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Left-aligned to `width` display columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{s}{}", " ".repeat(pad))
}

/// Placeholder for empty cells in terminal output.
pub fn or_dash(s: &str) -> &str {
    if s.trim().is_empty() { "--" } else { s }
}
