use chrono::NaiveDate;

/// Date layouts accepted in the sheet's date column.
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d", "%Y年%m月%d日"];

/// Parse a sheet date cell into a calendar date.
///
/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, `YYYY.MM.DD` and `YYYY年MM月DD日`
/// (single-digit month/day allowed). A trailing time part separated by a
/// space or `T` is ignored. Anything else yields `None`.
pub fn parse_sheet_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    let date_part = s
        .split_once(|c: char| c == ' ' || c == 'T')
        .map(|(d, _)| d)
        .unwrap_or(s);

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(date_part, fmt).ok())
}

/// Parse a strict ISO date (`YYYY-MM-DD`).
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}
