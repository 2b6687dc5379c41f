//! Worked duration of a single attendance row.

use crate::models::{AttendanceEntry, AttendanceRow};
use crate::utils::date::parse_sheet_date;
use crate::utils::time::parse_clock;
use chrono::TimeDelta;

/// Worked time of a row, or `None` when the date or either clock cell does
/// not parse.
///
/// A clock-out earlier than the clock-in is moved to the following day,
/// once. Shifts longer than 24 hours are therefore under-counted.
pub fn compute_duration(row: &AttendanceRow) -> Option<TimeDelta> {
    derive_entry(row).duration
}

/// Compute every derived value of a row into a new entry.
pub fn derive_entry(row: &AttendanceRow) -> AttendanceEntry {
    let date_value = parse_sheet_date(&row.date);
    let midnight = date_value.and_then(|d| d.and_hms_opt(0, 0, 0));

    let start = midnight
        .zip(parse_clock(&row.clock_in))
        .and_then(|(m, off)| m.checked_add_signed(off));
    let raw_end = midnight
        .zip(parse_clock(&row.clock_out))
        .and_then(|(m, off)| m.checked_add_signed(off));

    let (end, overnight) = match (start, raw_end) {
        (Some(s), Some(e)) if e < s => (e.checked_add_signed(TimeDelta::days(1)), true),
        (_, e) => (e, false),
    };

    let duration = match (start, end) {
        (Some(s), Some(e)) => Some(e - s),
        _ => None,
    };

    AttendanceEntry {
        row: row.clone(),
        date_value,
        start,
        end,
        duration,
        overnight,
    }
}

/// Derive all rows, preserving their order.
pub fn derive_entries(rows: &[AttendanceRow]) -> Vec<AttendanceEntry> {
    rows.iter().map(derive_entry).collect()
}
