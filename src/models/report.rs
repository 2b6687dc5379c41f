use super::month_key::MonthKey;
use crate::utils::time::format_duration;
use chrono::TimeDelta;
use serde::Serialize;

/// One line of the detail table (selected month only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailLine {
    pub date: String,
    pub clock_in: String,
    pub clock_out: String,
    pub duration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Worked time of one month across all included entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyTotal {
    pub month: MonthKey,
    pub total: TimeDelta,
}

impl MonthlyTotal {
    pub fn total_str(&self) -> String {
        format_duration(self.total)
    }
}

/// Informational states the presenter shows instead of (or next to) data.
/// None of these is an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The source returned no data rows.
    EmptySource,
    /// Rows exist but none has a parseable date: no month selector.
    NoValidDates,
    /// The requested month has no rows.
    MonthNotFound(MonthKey),
    /// Nothing to aggregate in the all-months table.
    NoMonthlyData,
}

/// Everything the presenter needs for one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub user_filter: Option<String>,
    /// Data rows read from the source, header excluded, before filtering.
    pub source_rows: usize,
    /// Month selector values, ascending.
    pub months: Vec<MonthKey>,
    pub selected_month: Option<MonthKey>,
    pub has_comment_column: bool,
    pub details: Vec<DetailLine>,
    pub month_total: TimeDelta,
    pub monthly: Vec<MonthlyTotal>,
}

impl Report {
    pub fn month_total_str(&self) -> String {
        format_duration(self.month_total)
    }

    pub fn notices(&self) -> Vec<Notice> {
        let mut out = Vec::new();

        if self.source_rows == 0 {
            out.push(Notice::EmptySource);
        } else if self.months.is_empty() {
            out.push(Notice::NoValidDates);
        }

        if let Some(m) = &self.selected_month
            && !self.months.contains(m)
        {
            out.push(Notice::MonthNotFound(m.clone()));
        }

        if self.monthly.is_empty() {
            out.push(Notice::NoMonthlyData);
        }

        out
    }
}
