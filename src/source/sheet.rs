use super::{RowSource, SourceError, read_csv_records};
use crate::errors::{AppError, AppResult};
use std::time::Duration;
use tracing::{debug, warn};

const SHEETS_BASE: &str = "https://docs.google.com/spreadsheets/d";

/// One worksheet of a Google Sheets document, read through the
/// visualization endpoint as CSV.
///
/// The document must be readable by link; no credentials are sent.
pub struct SheetSource {
    agent: ureq::Agent,
    url: String,
    worksheet: String,
}

impl SheetSource {
    pub fn new(sheet_url: &str, worksheet: &str, timeout: Duration) -> AppResult<Self> {
        let id = spreadsheet_id(sheet_url).ok_or_else(|| {
            AppError::Config(format!("cannot find a spreadsheet id in '{sheet_url}'"))
        })?;

        let agent = ureq::AgentBuilder::new()
            .timeout_connect(timeout)
            .timeout_read(timeout)
            .user_agent(concat!("rattendview/", env!("CARGO_PKG_VERSION")))
            .build();

        Ok(Self {
            agent,
            url: gviz_csv_url(&id, worksheet),
            worksheet: worksheet.to_string(),
        })
    }
}

impl RowSource for SheetSource {
    fn describe(&self) -> String {
        format!("worksheet '{}' ({})", self.worksheet, self.url)
    }

    fn fetch_all_rows(&self) -> Result<Vec<Vec<String>>, SourceError> {
        let origin = self.describe();
        debug!(url = %self.url, "fetching worksheet");

        let response = self
            .agent
            .get(&self.url)
            .call()
            .map_err(|e| error_from_ureq(e, &origin))?;

        // Un documento privato risponde 200 con la pagina di login
        if response.content_type().starts_with("text/html") {
            warn!(url = %self.url, "received an HTML page instead of CSV");
            return Err(SourceError::Access(format!(
                "{origin}: the document is not shared for reading"
            )));
        }

        let rows = read_csv_records(response.into_reader(), &origin)?;
        debug!(rows = rows.len(), "worksheet rows read");
        Ok(rows)
    }
}

fn error_from_ureq(err: ureq::Error, origin: &str) -> SourceError {
    match err {
        ureq::Error::Status(401 | 403, _) => SourceError::Access(origin.to_string()),
        ureq::Error::Status(404, _) => SourceError::NotFound(origin.to_string()),
        ureq::Error::Status(code, _) => SourceError::Transport(format!("{origin}: HTTP {code}")),
        ureq::Error::Transport(t) => SourceError::Transport(format!("{origin}: {t}")),
    }
}

/// Extract the document id from a sheet URL (`.../spreadsheets/d/<id>/edit...`).
/// A bare id is returned as is.
pub fn spreadsheet_id(url: &str) -> Option<String> {
    let url = url.trim();

    let id = match url.split_once("/spreadsheets/d/") {
        Some((_, rest)) => rest.split(['/', '?', '#']).next().unwrap_or(""),
        None if !url.contains(['/', '?', '#', ':']) => url,
        None => "",
    };

    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}

/// CSV export URL of a named worksheet.
///
/// `headers=0` returns every row as data; header detection happens in `build_sheet`.
pub fn gviz_csv_url(id: &str, worksheet: &str) -> String {
    format!(
        "{SHEETS_BASE}/{id}/gviz/tq?tqx=out:csv&headers=0&sheet={}",
        urlencoding::encode(worksheet)
    )
}
