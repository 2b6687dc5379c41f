pub mod calculator;
pub mod config;
pub mod logic;
pub mod report;
pub mod sheet;

pub use logic::{Core, ReportRequest};
pub use sheet::{HeaderLabels, Sheet, build_sheet, parse_row};
