//! Terminal presenter for [`Report`].

use crate::models::{Notice, Report};
use crate::ui::labels::Labels;
use crate::ui::messages::{caption, header, info, metric, warning};
use crate::utils::colors::{CYAN, RESET, colorize_duration};
use crate::utils::table::Table;

pub fn render_report(report: &Report, labels: &Labels) {
    header(labels.title);

    if let Some(u) = &report.user_filter {
        caption(format!("{}: {}", labels.user_filter, u));
    }

    let notices = report.notices();

    for n in &notices {
        match n {
            Notice::EmptySource => info(labels.empty_source),
            Notice::NoValidDates => info(labels.no_valid_dates),
            _ => {}
        }
    }

    if let Some(m) = &report.selected_month {
        metric(labels.month, format!("{CYAN}{m}{RESET}"));
        if report.months.len() > 1 {
            let all: Vec<&str> = report.months.iter().map(|k| k.as_str()).collect();
            caption(format!("{}: {}", labels.months, all.join(", ")));
        }
    }

    for n in &notices {
        if let Notice::MonthNotFound(m) = n {
            warning(format!("{}: {}", labels.month_not_found, m));
        }
    }

    // ---------------------------
    // Dettaglio del mese
    // ---------------------------
    header(labels.details);
    let mut details = Table::with_headers(&labels.detail_headers(report.has_comment_column));
    for line in &report.details {
        let mut row = vec![
            line.date.clone(),
            line.clock_in.clone(),
            line.clock_out.clone(),
            line.duration.clone(),
        ];
        if let Some(c) = &line.comment {
            row.push(c.clone());
        }
        details.add_row(row);
    }
    print!("{}", details.render());

    println!();
    metric(labels.month_total, colorize_duration(&report.month_total_str()));

    // ---------------------------
    // Riepilogo mensile
    // ---------------------------
    header(labels.monthly);
    if notices.contains(&Notice::NoMonthlyData) {
        info(labels.no_monthly_data);
        return;
    }

    let mut monthly = Table::with_headers(&labels.monthly_headers());
    for m in &report.monthly {
        monthly.add_row(vec![m.month.to_string(), m.total_str()]);
    }
    print!("{}", monthly.render());
}

/// Month selector values, newest last.
pub fn render_months(report: &Report, labels: &Labels) {
    header(labels.months);

    if let Some(u) = &report.user_filter {
        caption(format!("{}: {}", labels.user_filter, u));
    }

    if report.months.is_empty() {
        if report.source_rows == 0 {
            info(labels.empty_source);
        } else {
            info(labels.no_valid_dates);
        }
        return;
    }

    let latest = report.months.last();
    for m in &report.months {
        if Some(m) == latest {
            println!("{CYAN}{m}{RESET} *");
        } else {
            println!("{m}");
        }
    }
}
