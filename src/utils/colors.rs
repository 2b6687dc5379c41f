/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const CYAN: &str = "\x1b[36m";

/// Grey for the duration placeholder (`00:00:00`), green otherwise.
pub fn colorize_duration(value: &str) -> String {
    if value.trim() == crate::utils::time::DURATION_PLACEHOLDER {
        format!("{GREY}{value}{RESET}")
    } else {
        format!("{GREEN}{value}{RESET}")
    }
}
