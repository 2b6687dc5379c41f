// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{ExportTable, monthly_rows, to_grid};
use crate::export::xlsx::export_xlsx;
use crate::models::Report;
use crate::ui::Labels;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use tracing::debug;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export di una tabella del report.
    ///
    /// - `format`: csv | json | xlsx
    /// - `file`: path assoluto del file di output (`~` ammesso)
    /// - `table`: dettaglio del mese selezionato oppure riepilogo mensile
    pub fn export(
        report: &Report,
        labels: &Labels,
        format: &ExportFormat,
        file: &str,
        table: ExportTable,
        force: bool,
    ) -> AppResult<()> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let empty = match table {
            ExportTable::Details => report.details.is_empty(),
            ExportTable::Monthly => report.monthly.is_empty(),
        };
        if empty {
            warning("No rows to export for the selected filters.");
            return Ok(());
        }

        ensure_writable(&path, force)?;
        debug!(path = %path.display(), format = format.as_str(), ?table, "exporting");

        match (format, table) {
            (ExportFormat::Csv, ExportTable::Details) => export_csv(&report.details, &path)?,
            (ExportFormat::Csv, ExportTable::Monthly) => export_csv(&monthly_rows(report), &path)?,
            (ExportFormat::Json, ExportTable::Details) => export_json(&report.details, &path)?,
            (ExportFormat::Json, ExportTable::Monthly) => {
                export_json(&monthly_rows(report), &path)?
            }
            (ExportFormat::Xlsx, _) => {
                let grid = to_grid(report, table, labels);
                let sheet_name = match table {
                    ExportTable::Details => labels.details,
                    ExportTable::Monthly => labels.month_col,
                };
                export_xlsx(&grid, sheet_name, &path)?
            }
        }

        Ok(())
    }
}
