use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Display form used in tables, e.g. `Jul 21, 2024` for `%b %d, %Y`.
pub fn display_date(d: NaiveDate, pattern: &str) -> String {
    d.format(pattern).to_string()
}

/// Long form used in notices, e.g. `July 21st, 2024`.
pub fn long_date(d: NaiveDate) -> String {
    use chrono::Datelike;
    let day = d.day();
    let suffix = match (day % 10, day % 100) {
        (1, n) if n != 11 => "st",
        (2, n) if n != 12 => "nd",
        (3, n) if n != 13 => "rd",
        _ => "th",
    };
    format!("{} {}{}, {}", d.format("%B"), day, suffix, d.year())
}
