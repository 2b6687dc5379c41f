use crate::cli::commands::build_request;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportTable};
use crate::source::RowSource;
use crate::ui::Labels;

/// Handle the `export` command
pub fn handle(cmd: &Commands, cfg: &Config, source: &dyn RowSource) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        monthly,
        user,
        month,
        force,
    } = cmd
    {
        let req = build_request(user, None, month, cfg)?;
        let report = ReportLogic::load(source, cfg, &req)?;

        let table = if *monthly {
            ExportTable::Monthly
        } else {
            ExportTable::Details
        };

        ExportLogic::export(
            &report,
            Labels::for_lang(cfg.labels),
            format,
            file,
            table,
            *force,
        )?;
    }
    Ok(())
}
