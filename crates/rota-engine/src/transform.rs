//! Pure weekly-schedule transformations.
//!
//! Every function takes a schedule by reference and returns a new one; the
//! input is never mutated. Fresh slot ids come from a caller-supplied
//! generator, for the same reason "now" is injected elsewhere: the engine
//! stays deterministic and testable.

use serde::Serialize;

use crate::clock::parse_time;
use crate::model::{Day, DaySchedule, TimeSlot, Week, WeeklySchedule};

/// Monday through Friday, for the copy-day preset buttons.
pub const WEEKDAYS: [Day; 5] = [
    Day::Monday,
    Day::Tuesday,
    Day::Wednesday,
    Day::Thursday,
    Day::Friday,
];

/// Saturday and Sunday.
pub const WEEKEND: [Day; 2] = [Day::Saturday, Day::Sunday];

/// Copy one day's slots onto each target day.
///
/// Targets are overwritten with an enabled day holding a deep copy of the
/// source slots under fresh ids; the source day itself is always excluded
/// from the targets. A disabled or empty source makes this a no-op.
pub fn copy_day(
    schedule: &WeeklySchedule,
    from: Day,
    targets: &[Day],
    mut fresh_id: impl FnMut() -> String,
) -> WeeklySchedule {
    let source = &schedule.schedule[from];
    if !source.enabled || source.time_slots.is_empty() {
        return schedule.clone();
    }

    let mut out = schedule.clone();
    for &target in targets {
        if target == from {
            continue;
        }
        out.schedule[target] = DaySchedule {
            enabled: true,
            time_slots: source
                .time_slots
                .iter()
                .map(|slot| TimeSlot {
                    id: fresh_id(),
                    ..slot.clone()
                })
                .collect(),
        };
    }
    out
}

/// Toggle a day on or off.
///
/// Enabling a day that has no slots seeds the 11:00–14:00 starter slot so
/// the day is never left enabled-but-empty; disabling clears its slots.
pub fn toggle_day(
    schedule: &WeeklySchedule,
    day: Day,
    mut fresh_id: impl FnMut() -> String,
) -> WeeklySchedule {
    let mut out = schedule.clone();
    let day_schedule = &mut out.schedule[day];

    if day_schedule.enabled {
        day_schedule.enabled = false;
        day_schedule.time_slots.clear();
    } else {
        day_schedule.enabled = true;
        if day_schedule.time_slots.is_empty() {
            day_schedule.time_slots.push(TimeSlot {
                id: fresh_id(),
                start_time: "11:00".to_string(),
                end_time: "14:00".to_string(),
                location: String::new(),
                coordinates: None,
            });
        }
    }
    out
}

/// Append a follow-on slot to a day.
///
/// The new slot starts an hour after the last slot ends, runs three hours,
/// and inherits the last slot's location and pin; hours saturate inside the
/// day. An empty day gets the 17:00–20:00 evening default.
pub fn add_slot(
    schedule: &WeeklySchedule,
    day: Day,
    mut fresh_id: impl FnMut() -> String,
) -> WeeklySchedule {
    let mut out = schedule.clone();
    let day_schedule = &mut out.schedule[day];

    let slot = match day_schedule.time_slots.last() {
        Some(last) => {
            let last_end_hour = parse_time(&last.end_time).map(|m| m / 60).unwrap_or(16);
            let start_hour = (last_end_hour + 1).min(20);
            let end_hour = (start_hour + 3).min(23);
            TimeSlot {
                id: fresh_id(),
                start_time: format!("{:02}:00", start_hour),
                end_time: format!("{:02}:00", end_hour),
                location: last.location.clone(),
                coordinates: last.coordinates,
            }
        }
        None => TimeSlot {
            id: fresh_id(),
            start_time: "17:00".to_string(),
            end_time: "20:00".to_string(),
            location: String::new(),
            coordinates: None,
        },
    };

    day_schedule.time_slots.push(slot);
    out
}

/// Remove a slot by id. Unknown ids are a no-op.
pub fn remove_slot(schedule: &WeeklySchedule, day: Day, slot_id: &str) -> WeeklySchedule {
    let mut out = schedule.clone();
    out.schedule[day]
        .time_slots
        .retain(|slot| slot.id != slot_id);
    out
}

/// Apply an edit to the slot with the given id, if present.
pub fn update_slot(
    schedule: &WeeklySchedule,
    day: Day,
    slot_id: &str,
    edit: impl FnOnce(&mut TimeSlot),
) -> WeeklySchedule {
    let mut out = schedule.clone();
    if let Some(slot) = out.schedule[day]
        .time_slots
        .iter_mut()
        .find(|slot| slot.id == slot_id)
    {
        edit(slot);
    }
    out
}

/// Reset every day to disabled-and-empty. The top-level flags are left for
/// the caller to recompute at save time.
pub fn clear_all_days(schedule: &WeeklySchedule) -> WeeklySchedule {
    WeeklySchedule {
        schedule: Week::default(),
        ..schedule.clone()
    }
}

/// Aggregate counts for the schedule overview card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSummary {
    pub active_days: u32,
    pub total_locations: u32,
    /// Short names of the enabled days, Monday-first: "Mon", "Tue", …
    pub active_day_names: Vec<&'static str>,
}

/// Count enabled days and their slots.
///
/// A schedule whose top-level flag is off summarizes as empty regardless of
/// per-day state.
pub fn summarize(schedule: &WeeklySchedule) -> ScheduleSummary {
    let mut summary = ScheduleSummary {
        active_days: 0,
        total_locations: 0,
        active_day_names: Vec::new(),
    };
    if !schedule.enabled {
        return summary;
    }

    for (day, day_schedule) in schedule.schedule.iter() {
        if day_schedule.enabled {
            summary.active_days += 1;
            summary.total_locations += day_schedule.time_slots.len() as u32;
            summary.active_day_names.push(day.short());
        }
    }
    summary
}
