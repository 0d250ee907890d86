//! Time utilities: parsing HH:MM, elapsed spans with midnight rollover, formatting minutes.
//!
//! Parsing is total: anything that is not a strict `H:MM` / `HH:MM` value reads
//! as `0`, which callers treat as "absent". A real `00:00` reads the same way.

use crate::errors::{AppError, AppResult};
use chrono::Local;
use regex::Regex;
use std::sync::LazyLock;

pub const MINUTES_PER_DAY: i64 = 1440;

static CLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{1,2}):([0-9]{2})$").expect("clock pattern is valid"));

/// Minutes since midnight for `H:MM` or `HH:MM`, `0` for anything else.
pub fn parse_clock(text: &str) -> i64 {
    let Some(caps) = CLOCK_RE.captures(text) else {
        return 0;
    };

    let hours: i64 = caps[1].parse().unwrap_or(0);
    let minutes: i64 = caps[2].parse().unwrap_or(0);
    hours * 60 + minutes
}

/// `HH:MM`, zero padded. Hours are not wrapped at 24 because elapsed spans go
/// through here too. Negative input is floored to `00:00`.
pub fn format_clock(minutes: i64) -> String {
    let m = minutes.max(0);
    format!("{:02}:{:02}", m / 60, m % 60)
}

/// Elapsed time between two clock strings, or an empty string when either end
/// is absent. A negative span is taken to cross midnight once.
pub fn elapsed(start: &str, end: &str) -> String {
    if start.is_empty() || end.is_empty() {
        return String::new();
    }

    let s = parse_clock(start);
    let e = parse_clock(end);
    if s == 0 || e == 0 {
        return String::new();
    }

    let mut diff = e - s;
    if diff < 0 {
        diff += MINUTES_PER_DAY;
    }
    format_clock(diff)
}

/// Sum of a set of `HH:MM` durations, formatted back to `HH:MM`.
pub fn sum_clocks<'a, I>(values: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    format_clock(values.into_iter().map(parse_clock).sum())
}

/// Current local wall-clock time as `HH:MM`.
pub fn now_clock() -> String {
    Local::now().format("%H:%M").to_string()
}

/// Strict check used for CLI arguments that must be a clock value.
/// An empty string is accepted and means "unset".
pub fn require_clock(text: &str) -> AppResult<String> {
    if text.is_empty() || CLOCK_RE.is_match(text) {
        Ok(text.to_string())
    } else {
        Err(AppError::InvalidTime(text.to_string()))
    }
}
