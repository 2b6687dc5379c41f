use super::{RowSource, SourceError, display_path, read_csv_records};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::debug;

/// A worksheet exported as CSV on the local disk.
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl RowSource for CsvFileSource {
    fn describe(&self) -> String {
        display_path(&self.path)
    }

    fn fetch_all_rows(&self) -> Result<Vec<Vec<String>>, SourceError> {
        let origin = self.describe();

        let file = File::open(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => SourceError::NotFound(origin.clone()),
            io::ErrorKind::PermissionDenied => SourceError::Access(origin.clone()),
            _ => SourceError::Transport(format!("{origin}: {e}")),
        })?;

        let rows = read_csv_records(file, &origin)?;
        debug!(path = %origin, rows = rows.len(), "csv rows read");
        Ok(rows)
    }
}
