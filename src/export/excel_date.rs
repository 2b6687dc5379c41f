// src/export/excel_date.rs

use crate::utils::date::parse_sheet_date;
use crate::utils::time::parse_clock;
use chrono::{NaiveDate, TimeDelta};

/// How the cells of an exported column are written to XLSX.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    /// Sheet date, optionally followed by a time of day.
    Date,
    /// Clock-in / clock-out cell or an `HH:MM:SS` duration.
    Clock,
    /// Free text (user id, comment, month key): always written verbatim.
    Text,
}

/// Converte una cella nel *seriale Excel* + formattazione numerica,
/// secondo il tipo della colonna. `None` significa: scrivere come testo.
///
/// Clock values use `[h]:mm:ss` so totals above 24 hours are not wrapped.
pub fn excel_value(kind: CellKind, s: &str) -> Option<(&'static str, f64)> {
    match kind {
        CellKind::Text => None,
        CellKind::Clock => parse_clock(s).map(|t| ("[h]:mm:ss", day_fraction(t))),
        CellKind::Date => date_value(s),
    }
}

fn date_value(s: &str) -> Option<(&'static str, f64)> {
    let s = s.trim();
    let date = date_to_excel_serial(parse_sheet_date(s)?)?;

    match s.split_once([' ', 'T']) {
        None => Some(("yyyy-mm-dd", date)),
        Some((_, time)) => {
            // Parte oraria non leggibile: la cella resta testo
            let t = parse_clock(time)?;
            Some(("yyyy-mm-dd hh:mm:ss", date + day_fraction(t)))
        }
    }
}

fn date_to_excel_serial(d: NaiveDate) -> Option<f64> {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    Some((d - excel_epoch).num_days() as f64)
}

fn day_fraction(t: TimeDelta) -> f64 {
    t.num_seconds() as f64 / 86400.0
}
