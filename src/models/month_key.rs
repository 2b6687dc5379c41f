use crate::utils::date::parse_date;
use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Grouping key "YYYY-MM" derived from an entry's calendar date.
///
/// Ordering is the textual ordering of the key, which for four-digit years
/// is also the chronological one.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey(String);

impl MonthKey {
    pub fn from_date(d: NaiveDate) -> Self {
        MonthKey(format!("{:04}-{:02}", d.year(), d.month()))
    }

    /// Parse user input (`--month 2024-02`) into a key.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let b = s.as_bytes();
        if b.len() != 7
            || b[4] != b'-'
            || !b
                .iter()
                .enumerate()
                .all(|(i, c)| i == 4 || c.is_ascii_digit())
        {
            return None;
        }
        parse_date(&format!("{s}-01")).map(Self::from_date)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
