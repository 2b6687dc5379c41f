use super::month_key::MonthKey;
use crate::utils::time::display_duration;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

/// One attendance line as read from the sheet (columns A..E).
///
/// Every field is raw text; nothing here has been validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRow {
    pub user_id: String,   // A: ユーザーID
    pub date: String,      // B: 日付
    pub clock_in: String,  // C: 出勤時刻
    pub clock_out: String, // D: 退勤時刻
    /// E: コメント. `None` when the row has no fifth cell.
    pub comment: Option<String>,
}

/// A row together with the values derived from it.
///
/// The row is kept untouched; `start`/`end` already include the overnight
/// adjustment, so `duration` is never negative.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceEntry {
    pub row: AttendanceRow,
    pub date_value: Option<NaiveDate>,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub duration: Option<TimeDelta>,
    /// Clock-out was earlier than clock-in and was moved to the next day.
    pub overnight: bool,
}

impl AttendanceEntry {
    pub fn month_key(&self) -> Option<MonthKey> {
        self.date_value.map(MonthKey::from_date)
    }

    /// `HH:MM:SS`, or the `00:00:00` placeholder when no duration exists.
    pub fn duration_str(&self) -> String {
        display_duration(self.duration)
    }
}
