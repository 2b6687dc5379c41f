//! Month-level views over derived entries: user filter, month selector,
//! month selection and per-month totals.

use crate::models::{AttendanceEntry, MonthKey, MonthlyTotal};
use crate::utils::time::sum_durations;
use chrono::TimeDelta;
use std::collections::BTreeMap;

/// Keep entries whose user id equals `user_id` exactly (no trimming, no
/// case folding).
pub fn filter_by_user(entries: &[AttendanceEntry], user_id: &str) -> Vec<AttendanceEntry> {
    entries
        .iter()
        .filter(|e| e.row.user_id == user_id)
        .cloned()
        .collect()
}

/// Months that have at least one entry with a parseable date, ascending and
/// without duplicates.
pub fn available_months(entries: &[AttendanceEntry]) -> Vec<MonthKey> {
    let mut months: Vec<MonthKey> = entries.iter().filter_map(|e| e.month_key()).collect();
    months.sort();
    months.dedup();
    months
}

/// Resolve which month is shown: the requested one, otherwise the most
/// recent month present. `None` when no entry has a parseable date.
pub fn resolve_month(entries: &[AttendanceEntry], month: Option<&MonthKey>) -> Option<MonthKey> {
    match month {
        Some(m) => Some(m.clone()),
        None => entries.iter().filter_map(|e| e.month_key()).max(),
    }
}

/// Entries of the requested month, or of the most recent month when
/// `month` is `None`. Empty when no entry has a parseable date.
pub fn select_month(entries: &[AttendanceEntry], month: Option<&MonthKey>) -> Vec<AttendanceEntry> {
    let Some(target) = resolve_month(entries, month) else {
        return Vec::new();
    };

    entries
        .iter()
        .filter(|e| e.month_key().as_ref() == Some(&target))
        .cloned()
        .collect()
}

/// Sum of the defined durations; entries without one are skipped.
pub fn total_duration(entries: &[AttendanceEntry]) -> TimeDelta {
    sum_durations(entries.iter().filter_map(|e| e.duration))
}

/// Total worked time per month, ascending by month.
///
/// Entries lacking a date or a duration are left out entirely, so a month
/// made only of such entries does not appear.
pub fn group_by_month(entries: &[AttendanceEntry]) -> Vec<MonthlyTotal> {
    let mut totals: BTreeMap<MonthKey, TimeDelta> = BTreeMap::new();

    for e in entries {
        if let (Some(month), Some(d)) = (e.month_key(), e.duration) {
            let slot = totals.entry(month).or_insert_with(TimeDelta::zero);
            *slot = *slot + d;
        }
    }

    totals
        .into_iter()
        .map(|(month, total)| MonthlyTotal { month, total })
        .collect()
}
