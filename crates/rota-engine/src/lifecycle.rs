//! Pattern lifecycle: expansion over the active window, read-time status,
//! and the duplicate/extend transformations.
//!
//! A pattern stores no state machine. Draft (no start date), active, and
//! expired are computed on read against an injected "now"; nothing is ever
//! written back.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::Serialize;

use crate::error::{Result, RotaError};
use crate::model::{MonthlyPattern, MonthlyTimeSlot};
use crate::occurrence::{add_months_clamped, occurrence_date};

/// Average Gregorian month length in days. Progress reporting is
/// deliberately coarse: elapsed wall time over the average month, not
/// calendar-exact month counting.
const AVG_DAYS_PER_MONTH: f64 = 30.44;

/// Expand a pattern into its concrete dates, one per month offset in
/// `[0, duration_months)`.
///
/// Drafts expand to nothing. Offsets whose rule cannot be resolved are
/// skipped rather than failing the whole expansion, so one malformed pattern
/// cannot block conflict checks against the rest.
pub fn expand(pattern: &MonthlyPattern) -> Vec<NaiveDate> {
    if pattern.is_draft() {
        return Vec::new();
    }
    (0..pattern.duration_months)
        .filter_map(|offset| occurrence_date(pattern, offset).ok())
        .collect()
}

/// Read-time lifecycle summary for one pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternStatus {
    pub total_months: u32,
    pub months_completed: u32,
    pub months_remaining: u32,
    pub is_active: bool,
    pub is_expired: bool,
    pub progress_percentage: u32,
    /// First occurrence on or after `now`'s date; `None` once the pattern is
    /// entirely in the past.
    pub next_occurrence: Option<NaiveDate>,
}

/// Compute a pattern's lifecycle status as of `now`.
///
/// The window runs from the start date to the start date plus
/// `duration_months` calendar months. `months_completed` uses the
/// average-month approximation and is clamped to the total;
/// `months_remaining` counts down from the same unclamped elapsed figure.
///
/// # Errors
/// `MissingStartDate` for drafts: a pattern without a start date has no
/// window to report on.
pub fn status(pattern: &MonthlyPattern, now: NaiveDateTime) -> Result<PatternStatus> {
    let start_date = pattern
        .start_date
        .ok_or_else(|| RotaError::MissingStartDate(pattern.id.clone()))?;
    let end_date = add_months_clamped(start_date, pattern.duration_months)
        .ok_or_else(|| RotaError::OutOfRange(pattern.id.clone()))?;

    let start = start_date.and_time(NaiveTime::MIN);
    let end = end_date.and_time(NaiveTime::MIN);

    let total_months = pattern.duration_months;
    let elapsed_days = (now - start).num_seconds() as f64 / 86_400.0;
    let months_passed = (elapsed_days / AVG_DAYS_PER_MONTH).floor().max(0.0) as u32;
    let months_completed = months_passed.min(total_months);

    let progress_percentage = if total_months == 0 {
        0
    } else {
        (months_completed as f64 * 100.0 / total_months as f64).round() as u32
    };

    let today = now.date();

    Ok(PatternStatus {
        total_months,
        months_completed,
        months_remaining: total_months.saturating_sub(months_passed),
        is_active: now >= start && now <= end,
        is_expired: now > end,
        progress_percentage,
        next_occurrence: expand(pattern).into_iter().find(|date| *date >= today),
    })
}

/// Copy with `months` added to the active window. The input is untouched.
pub fn extend(pattern: &MonthlyPattern, months: u32) -> MonthlyPattern {
    MonthlyPattern {
        duration_months: pattern.duration_months.saturating_add(months),
        ..pattern.clone()
    }
}

/// Copy a pattern as a fresh draft: new id, " (Copy)" name suffix, cleared
/// start date, active, fresh slot ids, creation stamped from the injected
/// clock. The caller must supply a start date before the duplicate produces
/// any occurrences.
pub fn duplicate(
    pattern: &MonthlyPattern,
    new_id: String,
    created_at: DateTime<Utc>,
    mut fresh_slot_id: impl FnMut() -> String,
) -> MonthlyPattern {
    MonthlyPattern {
        id: new_id,
        name: format!("{} (Copy)", pattern.name),
        start_date: None,
        active: true,
        created_at,
        time_slots: pattern
            .time_slots
            .iter()
            .map(|slot| MonthlyTimeSlot {
                id: fresh_slot_id(),
                ..slot.clone()
            })
            .collect(),
        ..pattern.clone()
    }
}
