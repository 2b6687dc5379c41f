use crate::core::calculator::{
    available_months, derive_entries, filter_by_user, group_by_month, select_month, total_duration,
};
use crate::core::sheet::Sheet;
use crate::models::{AttendanceEntry, DetailLine, MonthKey, Report};
use tracing::debug;

/// What the caller asks for: optional user filter and optional month.
#[derive(Debug, Clone, Default)]
pub struct ReportRequest {
    pub user: Option<String>,
    pub month: Option<MonthKey>,
}

impl ReportRequest {
    /// Empty user ids mean "no filter".
    pub fn user_filter(&self) -> Option<&str> {
        self.user.as_deref().filter(|u| !u.is_empty())
    }
}

pub struct Core;

impl Core {
    /// Build the whole report from the sheet. Pure: same input, same output.
    pub fn build_report(sheet: &Sheet, req: &ReportRequest) -> Report {
        let mut entries = derive_entries(&sheet.rows);

        if let Some(user) = req.user_filter() {
            entries = filter_by_user(&entries, user);
            debug!(user, kept = entries.len(), "user filter applied");
        }

        let without_duration = entries.iter().filter(|e| e.duration.is_none()).count();
        if without_duration > 0 {
            debug!(rows = without_duration, "rows without a computable duration");
        }

        let months = available_months(&entries);
        let selected_month = if months.is_empty() {
            None
        } else {
            req.month.clone().or_else(|| months.last().cloned())
        };

        let month_entries = match &selected_month {
            Some(m) => select_month(&entries, Some(m)),
            None => Vec::new(),
        };

        let details = month_entries
            .iter()
            .map(|e| detail_line(e, sheet.has_comment_column))
            .collect();

        Report {
            user_filter: req.user_filter().map(str::to_string),
            source_rows: sheet.rows.len(),
            months,
            selected_month,
            has_comment_column: sheet.has_comment_column,
            details,
            month_total: total_duration(&month_entries),
            monthly: group_by_month(&entries),
        }
    }
}

fn detail_line(e: &AttendanceEntry, with_comment: bool) -> DetailLine {
    DetailLine {
        date: e.row.date.clone(),
        clock_in: e.row.clock_in.clone(),
        clock_out: e.row.clock_out.clone(),
        duration: e.duration_str(),
        comment: if with_comment {
            Some(e.row.comment.clone().unwrap_or_default())
        } else {
            None
        },
    }
}
