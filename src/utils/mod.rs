pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod query;
pub mod table;
pub mod time;

pub use time::{display_duration, format_duration};
