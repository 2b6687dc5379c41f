use crate::config::Config;
use crate::core::logic::{Core, ReportRequest};
use crate::core::sheet::build_sheet;
use crate::errors::AppResult;
use crate::models::Report;
use crate::source::RowSource;
use tracing::{debug, info};

/// Fetch, parse and aggregate in one pass.
pub struct ReportLogic;

impl ReportLogic {
    /// Only a source failure is an error here; empty or unparseable data
    /// comes back as a report carrying notices.
    pub fn load(source: &dyn RowSource, cfg: &Config, req: &ReportRequest) -> AppResult<Report> {
        info!(source = %source.describe(), "reading attendance rows");
        let values = source.fetch_all_rows()?;

        let sheet = build_sheet(&values, &cfg.header_labels());
        debug!(
            raw = values.len(),
            rows = sheet.rows.len(),
            comment_column = sheet.has_comment_column,
            "sheet normalised"
        );

        Ok(Core::build_report(&sheet, req))
    }
}
