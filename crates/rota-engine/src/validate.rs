//! Weekly schedule validation.
//!
//! Pure and accumulating: every violation across all enabled days comes back
//! in one pass, keyed by day and slot id, so a caller can surface them all
//! simultaneously. Disabled days are not checked.

use serde::Serialize;

use crate::clock::parse_time;
use crate::model::{Day, TimeSlot, WeeklySchedule};

/// Minimum weekly slot length, in minutes.
pub const MIN_SLOT_MINUTES: u32 = 60;

/// What a validation issue is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum IssueKind {
    /// Day is enabled but has no time slots.
    EmptyEnabledDay,
    /// Slot has no location.
    MissingLocation,
    /// Slot is missing its start or end time.
    MissingTime,
    /// Start or end time is not a valid "HH:MM" string.
    InvalidTimeFormat,
    /// End time is not after the start time.
    EndBeforeStart,
    /// Slot is shorter than [`MIN_SLOT_MINUTES`].
    SlotTooShort,
    /// Two or more of the day's slots overlap. Reported once per day,
    /// however many pairs collide.
    OverlappingSlots,
}

/// One violation found by [`validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    pub day: Day,
    /// `None` for day-level issues (empty day, overlaps).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot_id: Option<String>,
    pub kind: IssueKind,
}

impl ValidationIssue {
    fn day_level(day: Day, kind: IssueKind) -> Self {
        ValidationIssue {
            day,
            slot_id: None,
            kind,
        }
    }

    fn for_slot(day: Day, slot: &TimeSlot, kind: IssueKind) -> Self {
        ValidationIssue {
            day,
            slot_id: Some(slot.id.clone()),
            kind,
        }
    }
}

/// Validate every enabled day of a weekly schedule.
///
/// Never fail-fast: all violations are accumulated and returned together.
/// An enabled day with no slots yields only `EmptyEnabledDay`; otherwise
/// each slot is checked for location, time presence/format, ordering, and
/// minimum duration, and the day gets at most one `OverlappingSlots` flag.
pub fn validate(schedule: &WeeklySchedule) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for day in Day::ALL {
        let day_schedule = &schedule.schedule[day];
        if !day_schedule.enabled {
            continue;
        }
        if day_schedule.time_slots.is_empty() {
            issues.push(ValidationIssue::day_level(day, IssueKind::EmptyEnabledDay));
            continue;
        }

        for slot in &day_schedule.time_slots {
            check_slot(day, slot, &mut issues);
        }

        let slots = &day_schedule.time_slots;
        let overlapping = slots
            .iter()
            .enumerate()
            .any(|(i, a)| slots[i + 1..].iter().any(|b| a.overlaps(b)));
        if overlapping {
            issues.push(ValidationIssue::day_level(day, IssueKind::OverlappingSlots));
        }
    }

    issues
}

fn check_slot(day: Day, slot: &TimeSlot, issues: &mut Vec<ValidationIssue>) {
    if slot.location.is_empty() {
        issues.push(ValidationIssue::for_slot(day, slot, IssueKind::MissingLocation));
    }

    if slot.start_time.is_empty() || slot.end_time.is_empty() {
        issues.push(ValidationIssue::for_slot(day, slot, IssueKind::MissingTime));
        return;
    }

    let (start, end) = match (parse_time(&slot.start_time), parse_time(&slot.end_time)) {
        (Ok(start), Ok(end)) => (start, end),
        _ => {
            issues.push(ValidationIssue::for_slot(
                day,
                slot,
                IssueKind::InvalidTimeFormat,
            ));
            return;
        }
    };

    if end <= start {
        issues.push(ValidationIssue::for_slot(day, slot, IssueKind::EndBeforeStart));
    } else if end - start < MIN_SLOT_MINUTES {
        issues.push(ValidationIssue::for_slot(day, slot, IssueKind::SlotTooShort));
    }
}
