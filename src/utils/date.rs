use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Accepts `today` as a shortcut for the current local date.
pub fn resolve_date(s: &str) -> String {
    if s.eq_ignore_ascii_case("today") {
        today().format("%Y-%m-%d").to_string()
    } else {
        s.to_string()
    }
}
