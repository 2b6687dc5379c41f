pub mod attendance;
pub mod month_key;
pub mod report;

pub use attendance::{AttendanceEntry, AttendanceRow};
pub use month_key::MonthKey;
pub use report::{DetailLine, MonthlyTotal, Notice, Report};
