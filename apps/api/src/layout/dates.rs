//! Date Formatter: normalizes `MM/YYYY` period tokens to `Mon YYYY`.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

/// Separator used when rejoining a two-part period.
pub const PERIOD_SEPARATOR: &str = " \u{2013} ";

fn month_year_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([0-9]{2})/([0-9]{4})$").expect("valid month/year regex"))
}

fn is_dash(c: char) -> bool {
    c == '-' || c == '\u{2013}'
}

/// Reformats a single two-digit `MM/YYYY` token. Anything else, including months
/// outside 1..=12, is returned unchanged.
fn format_month_year(token: &str) -> String {
    let Some(caps) = month_year_regex().captures(token) else {
        return token.to_string();
    };
    let month: u32 = caps[1].parse().unwrap_or(0);
    let year: i32 = caps[2].parse().unwrap_or(0);

    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%b %Y").to_string())
        .unwrap_or_else(|| token.to_string())
}

/// Normalizes a job period such as `01/2020 - 02/2022` to `Jan 2020 – Feb 2022`.
///
/// A period with a hyphen or en dash is split once, each side trimmed and
/// reformatted independently, then rejoined with a spaced en dash. Already
/// formatted periods pass through unchanged.
pub fn format_period(period: &str) -> String {
    match period.split_once(is_dash) {
        Some((start, end)) => {
            let start = format_month_year(start.trim());
            let end = format_month_year(end.trim());
            format!("{start}{PERIOD_SEPARATOR}{end}")
        }
        None => format_month_year(period.trim()),
    }
}
