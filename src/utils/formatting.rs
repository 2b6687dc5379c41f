//! Formatting utilities used for CLI outputs.

use unicode_width::UnicodeWidthStr;

/// Pad on the right to `width` terminal columns (CJK characters count 2).
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}
