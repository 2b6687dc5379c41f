pub mod duration;
pub mod monthly;

pub use duration::{compute_duration, derive_entries, derive_entry};
pub use monthly::{
    available_months, filter_by_user, group_by_month, resolve_month, select_month, total_duration,
};
