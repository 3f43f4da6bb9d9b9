//! Wall-clock time-of-day arithmetic.
//!
//! Times of day travel as "HH:MM" strings in the schedule documents and are
//! parsed on demand into minutes since midnight. Interval comparisons use
//! half-open semantics, so two slots that merely touch do not overlap.

use crate::error::{Result, RotaError};

/// Parse an "HH:MM" string into minutes since midnight.
///
/// Accepts exactly two colon-separated numeric fields with 0 <= HH <= 23 and
/// 0 <= MM <= 59.
///
/// # Errors
/// Returns `RotaError::InvalidTime` for anything else, including seconds
/// ("09:00:00") and out-of-range fields ("24:00").
pub fn parse_time(s: &str) -> Result<u32> {
    let invalid = || RotaError::InvalidTime(s.to_string());

    let (h, m) = s.split_once(':').ok_or_else(invalid)?;
    if h.is_empty() || m.is_empty() || !is_digits(h) || !is_digits(m) {
        return Err(invalid());
    }

    let hours: u32 = h.parse().map_err(|_| invalid())?;
    let minutes: u32 = m.parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }
    Ok(hours * 60 + minutes)
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Minutes from `start` to `end`; negative when `end` precedes `start`.
///
/// An inverted ordering is the caller's problem to report, not this
/// primitive's.
pub fn duration_minutes(start: &str, end: &str) -> Result<i32> {
    Ok(parse_time(end)? as i32 - parse_time(start)? as i32)
}

/// Half-open interval overlap on minute spans.
///
/// True iff `a_start < b_end && b_start < a_end`; touching endpoints do not
/// count as overlap.
pub fn spans_overlap(a_start: u32, a_end: u32, b_start: u32, b_end: u32) -> bool {
    a_start < b_end && b_start < a_end
}

/// Format a minute count as a compact duration: "45m", "3h", "1h 30m".
pub fn format_duration(minutes: u32) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}
