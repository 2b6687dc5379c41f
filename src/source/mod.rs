//! Row sources: where the attendance grid comes from.
//!
//! A source hands back every row of one worksheet as plain text cells. It
//! does not interpret them; header detection and parsing live in `core`.

mod csv_file;
mod sheet;

pub use csv_file::CsvFileSource;
pub use sheet::{SheetSource, gviz_csv_url, spreadsheet_id};

use crate::config::{Config, SourceKind};
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Failures of a row source. All of them are fatal for the current request.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("access denied to {0}")]
    Access(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed data: {0}")]
    Malformed(String),
}

/// Supplier of the raw cell grid.
pub trait RowSource {
    /// Human readable location, used in messages.
    fn describe(&self) -> String;

    /// All rows of the resource, in sheet order.
    fn fetch_all_rows(&self) -> Result<Vec<Vec<String>>, SourceError>;
}

/// Build the source for this process: `--source-file` wins over the config.
pub fn from_config(cfg: &Config, source_file: Option<&str>) -> AppResult<Box<dyn RowSource>> {
    if let Some(file) = source_file {
        return Ok(Box::new(CsvFileSource::new(expand_tilde(file))));
    }

    match cfg.source {
        SourceKind::Csv => {
            if cfg.csv_path.trim().is_empty() {
                return Err(AppError::Config(
                    "source is 'csv' but csv_path is empty".to_string(),
                ));
            }
            Ok(Box::new(CsvFileSource::new(expand_tilde(&cfg.csv_path))))
        }
        SourceKind::Sheet => {
            let timeout = Duration::from_secs(cfg.timeout_secs.max(1));
            let source = SheetSource::new(&cfg.sheet_url, &cfg.worksheet, timeout)?;
            Ok(Box::new(source))
        }
    }
}

/// Read every record of a CSV stream as text cells (no header, ragged rows).
pub(crate) fn read_csv_records<R: std::io::Read>(
    reader: R,
    origin: &str,
) -> Result<Vec<Vec<String>>, SourceError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(|e| SourceError::Malformed(format!("{origin}: {e}")))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(rows)
}

pub(crate) fn display_path(p: &Path) -> String {
    p.display().to_string()
}
