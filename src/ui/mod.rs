pub mod labels;
pub mod messages;
pub mod report_view;

pub use labels::Labels;
