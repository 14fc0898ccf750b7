//! Display formatting for dates and scores, shared by the report
//! pipeline and the archive views.

use jiff::Timestamp;
use jiff::civil::Date;

/// DD/MM/YYYY.
pub fn format_date(ts: Timestamp) -> String {
    ts.strftime("%d/%m/%Y").to_string()
}

/// DD/MM/YYYY HH:MM:SS.
pub fn format_date_time(ts: Timestamp) -> String {
    ts.strftime("%d/%m/%Y %H:%M:%S").to_string()
}

/// YYYYMMDD, for report filenames.
pub fn format_file_date(ts: Timestamp) -> String {
    ts.strftime("%Y%m%d").to_string()
}

/// Render a date-input value (YYYY-MM-DD) as DD/MM/YYYY. Empty input
/// renders as "N/A"; anything unparseable passes through untouched.
pub fn format_dob(dob: &str) -> String {
    if dob.trim().is_empty() {
        return "N/A".to_string();
    }
    match Date::strptime("%Y-%m-%d", dob) {
        Ok(date) => date.strftime("%d/%m/%Y").to_string(),
        Err(_) => dob.to_string(),
    }
}

/// Score display: one decimal place with a trailing `.0` stripped, so a
/// whole score shows as "24" while a fractional one shows as "7.5".
pub fn format_score(value: f64) -> String {
    let s = format!("{value:.1}");
    match s.strip_suffix(".0") {
        Some(trimmed) => trimmed.to_string(),
        None => s,
    }
}
