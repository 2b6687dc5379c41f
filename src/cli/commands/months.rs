use crate::cli::commands::build_request;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;
use crate::source::RowSource;
use crate::ui::Labels;
use crate::ui::report_view::render_months;

/// Handle the `months` command
pub fn handle(cmd: &Commands, cfg: &Config, source: &dyn RowSource) -> AppResult<()> {
    if let Commands::Months { user } = cmd {
        let req = build_request(user, None, &None, cfg)?;
        let report = ReportLogic::load(source, cfg, &req)?;
        render_months(&report, Labels::for_lang(cfg.labels));
    }
    Ok(())
}
