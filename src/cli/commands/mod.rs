pub mod config;
pub mod export;
pub mod init;
pub mod months;
pub mod report;

use crate::config::Config;
use crate::core::ReportRequest;
use crate::errors::{AppError, AppResult};
use crate::models::MonthKey;
use crate::utils::query::parse_first_query_value;

/// Resolve the user filter and month from the command options.
///
/// User precedence: `--user`, then `--query`, then `default_user` from the
/// configuration. A malformed `--month` is rejected before any fetch.
pub(crate) fn build_request(
    user: &Option<String>,
    query: Option<&str>,
    month: &Option<String>,
    cfg: &Config,
) -> AppResult<ReportRequest> {
    let month = match month {
        Some(m) => Some(MonthKey::parse(m).ok_or_else(|| AppError::InvalidMonth(m.clone()))?),
        None => None,
    };

    let user = user
        .clone()
        .or_else(|| query.and_then(parse_first_query_value))
        .or_else(|| cfg.default_user.clone());

    Ok(ReportRequest { user, month })
}
