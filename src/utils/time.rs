//! Time utilities: parsing clock cells into offsets since midnight and
//! formatting worked durations as HH:MM:SS.

use chrono::TimeDelta;

/// Text shown for rows whose duration could not be computed.
pub const DURATION_PLACEHOLDER: &str = "00:00:00";

/// Parse a clock cell (`H:MM`, `HH:MM`, `HH:MM:SS`, `HH:MM:SS.fff`) into
/// an offset since midnight.
///
/// Hours are not bounded to 23 (`25:30` is one day and ninety minutes),
/// minutes and seconds must be below 60. Anything else yields `None`.
pub fn parse_clock(s: &str) -> Option<TimeDelta> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() < 2 || parts.len() > 3 {
        return None;
    }

    let hours = parse_digits(parts[0])?;
    let minutes = parse_digits(parts[1])?;
    if parts[1].len() != 2 || minutes >= 60 {
        return None;
    }

    let (seconds, nanos) = match parts.get(2) {
        Some(sec) => parse_seconds(sec)?,
        None => (0, 0),
    };

    let total = hours
        .checked_mul(3600)?
        .checked_add(minutes * 60)?
        .checked_add(seconds)?;

    TimeDelta::try_seconds(total)?.checked_add(&TimeDelta::nanoseconds(nanos))
}

fn parse_digits(s: &str) -> Option<i64> {
    if s.is_empty() || s.len() > 6 || !s.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

// "SS" oppure "SS.fff" (fino ai nanosecondi)
fn parse_seconds(s: &str) -> Option<(i64, i64)> {
    let (whole, frac) = match s.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (s, None),
    };

    if whole.len() != 2 {
        return None;
    }
    let seconds = parse_digits(whole)?;
    if seconds >= 60 {
        return None;
    }

    let nanos = match frac {
        None => 0,
        Some(f) if f.is_empty() || f.len() > 9 || !f.chars().all(|c| c.is_ascii_digit()) => {
            return None;
        }
        Some(f) => {
            let padded = format!("{f:0<9}");
            padded.parse().ok()?
        }
    };

    Some((seconds, nanos))
}

/// Format a duration as `HH:MM:SS`.
///
/// Negative totals clamp to `00:00:00`, fractional seconds are truncated
/// and hours are never wrapped (30 hours → `30:00:00`).
pub fn format_duration(d: TimeDelta) -> String {
    let total_seconds = d.num_seconds().max(0);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Display mapping for an optional duration: `None` becomes the placeholder.
pub fn display_duration(d: Option<TimeDelta>) -> String {
    match d {
        Some(d) => format_duration(d),
        None => DURATION_PLACEHOLDER.to_string(),
    }
}

/// Parse a string produced by [`format_duration`] back into a duration.
pub fn parse_hms(s: &str) -> Option<TimeDelta> {
    let parts: Vec<&str> = s.trim().split(':').collect();
    if parts.len() != 3 {
        return None;
    }

    // Le ore non vanno mai a capo: nessun limite di cifre
    let hours = parse_unbounded_digits(parts[0])?;
    let minutes = parse_digits(parts[1])?;
    let seconds = parse_digits(parts[2])?;
    if parts[1].len() != 2 || parts[2].len() != 2 || minutes >= 60 || seconds >= 60 {
        return None;
    }

    let total = hours
        .checked_mul(3600)?
        .checked_add(minutes * 60)?
        .checked_add(seconds)?;

    TimeDelta::try_seconds(total)
}

fn parse_unbounded_digits(s: &str) -> Option<i64> {
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Sum a sequence of durations; an empty sequence sums to zero.
pub fn sum_durations<I>(durations: I) -> TimeDelta
where
    I: IntoIterator<Item = TimeDelta>,
{
    durations
        .into_iter()
        .fold(TimeDelta::zero(), |acc, d| acc + d)
}
