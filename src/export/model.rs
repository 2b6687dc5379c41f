// src/export/model.rs

use crate::export::excel_date::CellKind;
use crate::models::{DetailLine, Report};
use crate::ui::Labels;
use serde::Serialize;

/// Riga “piatta” del riepilogo mensile.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct MonthlyExport {
    pub month: String,
    pub total: String,
}

/// Which table of the report is exported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportTable {
    Details,
    Monthly,
}

/// A report table flattened into headers and string cells (XLSX).
pub(crate) struct ExportGrid {
    pub headers: Vec<&'static str>,
    pub kinds: Vec<CellKind>,
    pub rows: Vec<Vec<String>>,
}

pub(crate) fn monthly_rows(report: &Report) -> Vec<MonthlyExport> {
    report
        .monthly
        .iter()
        .map(|m| MonthlyExport {
            month: m.month.to_string(),
            total: m.total_str(),
        })
        .collect()
}

pub(crate) fn detail_to_row(d: &DetailLine) -> Vec<String> {
    let mut row = vec![
        d.date.clone(),
        d.clock_in.clone(),
        d.clock_out.clone(),
        d.duration.clone(),
    ];
    if let Some(c) = &d.comment {
        row.push(c.clone());
    }
    row
}

pub(crate) fn to_grid(report: &Report, table: ExportTable, labels: &Labels) -> ExportGrid {
    match table {
        ExportTable::Details => ExportGrid {
            headers: labels.detail_headers(report.has_comment_column),
            kinds: vec![
                CellKind::Date,
                CellKind::Clock,
                CellKind::Clock,
                CellKind::Clock,
                CellKind::Text,
            ],
            rows: report.details.iter().map(detail_to_row).collect(),
        },
        ExportTable::Monthly => ExportGrid {
            headers: labels.monthly_headers(),
            kinds: vec![CellKind::Text, CellKind::Clock],
            rows: monthly_rows(report)
                .into_iter()
                .map(|m| vec![m.month, m.total])
                .collect(),
        },
    }
}
