//! Turns the raw cell grid returned by a row source into attendance rows.

use crate::models::AttendanceRow;

/// Number of columns the viewer understands: A:user, B:date, C:in, D:out, E:comment.
pub const SHEET_COLUMNS: usize = 5;

/// Labels that identify a header row.
#[derive(Debug, Clone)]
pub struct HeaderLabels {
    pub user_id: Vec<String>,
    pub date: Vec<String>,
}

/// Rows ready for aggregation.
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    pub rows: Vec<AttendanceRow>,
    /// The comment column (E) exists in the imported range.
    pub has_comment_column: bool,
}

/// Map positional cells to an [`AttendanceRow`].
///
/// Missing trailing cells become empty strings (the comment becomes `None`),
/// cells past the fifth are ignored. Never fails.
pub fn parse_row(raw: &[String]) -> AttendanceRow {
    let cell = |i: usize| raw.get(i).cloned().unwrap_or_default();

    AttendanceRow {
        user_id: cell(0),
        date: cell(1),
        clock_in: cell(2),
        clock_out: cell(3),
        comment: raw.get(4).cloned(),
    }
}

/// Build the sheet from all values of the worksheet.
///
/// - imports `min(5, widest row)` columns and truncates every row to it;
/// - drops the first row when it looks like a header (first cell matches a
///   user-id label or second cell matches a date label, both trimmed).
pub fn build_sheet(values: &[Vec<String>], labels: &HeaderLabels) -> Sheet {
    let width = values
        .iter()
        .map(|r| r.len())
        .max()
        .unwrap_or(0)
        .min(SHEET_COLUMNS);

    let skip = match values.first() {
        Some(first) if is_header(first, labels) => 1,
        _ => 0,
    };

    let rows = values
        .iter()
        .skip(skip)
        .map(|r| parse_row(&r[..r.len().min(width)]))
        .map(|mut row| {
            // Con 5 colonne importate ogni riga ha una cella commento (anche vuota)
            if width == SHEET_COLUMNS && row.comment.is_none() {
                row.comment = Some(String::new());
            }
            row
        })
        .collect();

    Sheet {
        rows,
        has_comment_column: width == SHEET_COLUMNS,
    }
}

fn is_header(first: &[String], labels: &HeaderLabels) -> bool {
    let matches = |cell: Option<&String>, wanted: &[String]| {
        cell.map(|c| wanted.iter().any(|w| c.trim() == w.as_str()))
            .unwrap_or(false)
    };

    matches(first.first(), &labels.user_id) || matches(first.get(1), &labels.date)
}
