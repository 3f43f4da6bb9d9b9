//! Schedule and pattern documents.
//!
//! These types mirror, field for field, the camelCase JSON documents the
//! persistence collaborator stores, so a document written by the web UI
//! round-trips through the engine unchanged. The engine itself treats them
//! as plain values: nothing here touches storage, the network, or a clock.

use std::ops::{Index, IndexMut};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::clock;
use crate::error::{Result, RotaError};

// ---------------------------------------------------------------------------
// Days of the week
// ---------------------------------------------------------------------------

/// Day of the week. Serializes as the lowercase day name used for the weekly
/// schedule's JSON keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// Monday-first, matching the weekly grid layout.
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Full display name, e.g. "Monday".
    pub fn label(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }

    /// Three-letter display name, e.g. "Mon".
    pub fn short(self) -> &'static str {
        &self.label()[..3]
    }

    /// The matching `chrono` weekday.
    pub fn weekday(self) -> chrono::Weekday {
        match self {
            Day::Monday => chrono::Weekday::Mon,
            Day::Tuesday => chrono::Weekday::Tue,
            Day::Wednesday => chrono::Weekday::Wed,
            Day::Thursday => chrono::Weekday::Thu,
            Day::Friday => chrono::Weekday::Fri,
            Day::Saturday => chrono::Weekday::Sat,
            Day::Sunday => chrono::Weekday::Sun,
        }
    }
}

// ---------------------------------------------------------------------------
// Weekly schedule
// ---------------------------------------------------------------------------

/// One open window: start/end times ("HH:MM"), where the vendor parks, and
/// optionally the pin for the map layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub id: String,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<(f64, f64)>,
}

impl TimeSlot {
    /// Half-open overlap against another slot.
    ///
    /// Slots whose times cannot be parsed never overlap anything; the
    /// validator flags them separately.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        match (
            clock::parse_time(&self.start_time),
            clock::parse_time(&self.end_time),
            clock::parse_time(&other.start_time),
            clock::parse_time(&other.end_time),
        ) {
            (Ok(a_start), Ok(a_end), Ok(b_start), Ok(b_end)) => {
                clock::spans_overlap(a_start, a_end, b_start, b_end)
            }
            _ => false,
        }
    }
}

/// One day of the weekly grid.
///
/// An enabled day must have slots and its slots must not overlap; both are
/// enforced by [`crate::validate::validate`], not at construction.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    pub enabled: bool,
    pub time_slots: Vec<TimeSlot>,
}

/// The seven-day grid, indexed by [`Day`].
///
/// A fixed array rather than a string-keyed map, so an invalid day key is
/// unrepresentable; it still serializes as the `{"monday": …, …}` object the
/// storage format uses.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "WeekDoc", into = "WeekDoc")]
pub struct Week([DaySchedule; 7]);

impl Week {
    /// Iterate the grid in Monday-first order.
    pub fn iter(&self) -> impl Iterator<Item = (Day, &DaySchedule)> {
        Day::ALL.iter().map(move |&day| (day, &self[day]))
    }
}

impl Index<Day> for Week {
    type Output = DaySchedule;

    fn index(&self, day: Day) -> &DaySchedule {
        &self.0[day as usize]
    }
}

impl IndexMut<Day> for Week {
    fn index_mut(&mut self, day: Day) -> &mut DaySchedule {
        &mut self.0[day as usize]
    }
}

/// Serde mirror of [`Week`] with the seven named keys of the wire format.
#[derive(Serialize, Deserialize)]
struct WeekDoc {
    monday: DaySchedule,
    tuesday: DaySchedule,
    wednesday: DaySchedule,
    thursday: DaySchedule,
    friday: DaySchedule,
    saturday: DaySchedule,
    sunday: DaySchedule,
}

impl From<WeekDoc> for Week {
    fn from(doc: WeekDoc) -> Self {
        Week([
            doc.monday,
            doc.tuesday,
            doc.wednesday,
            doc.thursday,
            doc.friday,
            doc.saturday,
            doc.sunday,
        ])
    }
}

impl From<Week> for WeekDoc {
    fn from(week: Week) -> Self {
        let [monday, tuesday, wednesday, thursday, friday, saturday, sunday] = week.0;
        WeekDoc {
            monday,
            tuesday,
            wednesday,
            thursday,
            friday,
            saturday,
            sunday,
        }
    }
}

/// The weekly recurring template: seven [`DaySchedule`]s plus the top-level
/// flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySchedule {
    pub enabled: bool,
    pub repeat_weekly: bool,
    pub schedule: Week,
}

impl WeeklySchedule {
    /// A schedule with every day disabled, as created before any editing.
    pub fn empty() -> Self {
        WeeklySchedule {
            enabled: false,
            repeat_weekly: true,
            schedule: Week::default(),
        }
    }

    /// Save-time rule: the top-level flag is "any day enabled", never set
    /// directly.
    pub fn derive_enabled(mut self) -> Self {
        self.enabled = self.schedule.iter().any(|(_, day)| day.enabled);
        self
    }

    /// Days currently switched on, Monday-first.
    pub fn enabled_days(&self) -> impl Iterator<Item = Day> + '_ {
        self.schedule
            .iter()
            .filter(|(_, day)| day.enabled)
            .map(|(day, _)| day)
    }
}

// ---------------------------------------------------------------------------
// Monthly patterns
// ---------------------------------------------------------------------------

/// Which occurrence of a weekday within the month a relative rule targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelativeWeek {
    First,
    Second,
    Third,
    Fourth,
    Last,
}

impl RelativeWeek {
    /// 1-based occurrence number; `None` for `Last`.
    pub fn ordinal(self) -> Option<u8> {
        match self {
            RelativeWeek::First => Some(1),
            RelativeWeek::Second => Some(2),
            RelativeWeek::Third => Some(3),
            RelativeWeek::Fourth => Some(4),
            RelativeWeek::Last => None,
        }
    }

    /// Lowercase display form, e.g. "first".
    pub fn label(self) -> &'static str {
        match self {
            RelativeWeek::First => "first",
            RelativeWeek::Second => "second",
            RelativeWeek::Third => "third",
            RelativeWeek::Fourth => "fourth",
            RelativeWeek::Last => "last",
        }
    }
}

/// The two rule shapes a monthly pattern can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    /// Exact day of month, e.g. the 15th. Day 31 means "always the last day".
    Specific,
    /// Nth (or last) weekday of the month, e.g. first Monday.
    Relative,
}

/// A monthly slot. Same shape as [`TimeSlot`] but without the weekly
/// minimum-duration rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTimeSlot {
    pub id: String,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<(f64, f64)>,
}

impl MonthlyTimeSlot {
    /// The 09:00–17:00 starter slot the UI seeds when one is added.
    pub fn starter(id: String) -> Self {
        MonthlyTimeSlot {
            id,
            start_time: "09:00".to_string(),
            end_time: "17:00".to_string(),
            location: String::new(),
            coordinates: None,
        }
    }
}

/// A bounded monthly recurrence: one date per month for `duration_months`
/// months from `start_date`.
///
/// The rule fields are optional on the wire — storage can hold a pattern
/// whose declared kind lacks its fields — so consumers go through
/// [`MonthlyPattern::rule`] to get a fully-typed rule or an explicit error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPattern {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PatternKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_month: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_week: Option<RelativeWeek>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_day: Option<Day>,
    /// `None` while the pattern is a draft (a template instantiation or a
    /// duplicate awaiting a new date). Stored as an empty string on the wire.
    #[serde(default, with = "draft_date")]
    pub start_date: Option<NaiveDate>,
    pub duration_months: u32,
    #[serde(default)]
    pub time_slots: Vec<MonthlyTimeSlot>,
    /// Older documents predate this flag; absent means active.
    #[serde(default = "default_true")]
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

fn default_true() -> bool {
    true
}

/// A fully-specified recurrence rule extracted from a pattern document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternRule {
    /// Fixed day of month in 1..=31; 31 is the "always the last day" sentinel.
    DayOfMonth(u8),
    /// Nth (or last) weekday of the month.
    NthWeekday { week: RelativeWeek, day: Day },
}

impl MonthlyPattern {
    /// Extract the typed rule for this pattern's declared kind.
    ///
    /// # Errors
    /// `IncompleteRule` when the fields the kind requires are missing, or
    /// when the day of month falls outside 1..=31.
    pub fn rule(&self) -> Result<PatternRule> {
        match self.kind {
            PatternKind::Specific => match self.day_of_month {
                Some(day @ 1..=31) => Ok(PatternRule::DayOfMonth(day)),
                _ => Err(RotaError::IncompleteRule(self.id.clone())),
            },
            PatternKind::Relative => match (self.relative_week, self.relative_day) {
                (Some(week), Some(day)) => Ok(PatternRule::NthWeekday { week, day }),
                _ => Err(RotaError::IncompleteRule(self.id.clone())),
            },
        }
    }

    /// Whether the pattern is still a draft, i.e. has no start date.
    pub fn is_draft(&self) -> bool {
        self.start_date.is_none()
    }
}

/// Wire form of the draft start date: the UI stores drafts with an empty
/// string, so both `""` and `null`/absent deserialize to `None`, and `None`
/// serializes back to `""`.
mod draft_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDate>,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        match value {
            Some(date) => serializer.serialize_str(&date.to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Option<NaiveDate>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref() {
            None | Some("") => Ok(None),
            Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
        }
    }
}
