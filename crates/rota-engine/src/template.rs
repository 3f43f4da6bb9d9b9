//! Built-in pattern templates and rule descriptions.
//!
//! Templates give a vendor a one-click starting point for the common monthly
//! shapes; descriptions provide the default pattern name when one is saved
//! without a name.

use chrono::{DateTime, Utc};

use crate::model::{Day, MonthlyPattern, PatternKind, PatternRule, RelativeWeek};

/// A quick-start pattern shape: a rule plus a suggested duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternTemplate {
    pub name: &'static str,
    pub kind: PatternKind,
    pub day_of_month: Option<u8>,
    pub relative_week: Option<RelativeWeek>,
    pub relative_day: Option<Day>,
    pub duration_months: u32,
}

/// The built-in quick-start templates.
pub fn builtin_templates() -> [PatternTemplate; 5] {
    [
        PatternTemplate {
            name: "First Friday of Month",
            kind: PatternKind::Relative,
            day_of_month: None,
            relative_week: Some(RelativeWeek::First),
            relative_day: Some(Day::Friday),
            duration_months: 6,
        },
        PatternTemplate {
            name: "Last Day of Each Month",
            kind: PatternKind::Specific,
            // Day 31 is the "always the last day" sentinel.
            day_of_month: Some(31),
            relative_week: None,
            relative_day: None,
            duration_months: 12,
        },
        PatternTemplate {
            name: "Mid-Month (15th)",
            kind: PatternKind::Specific,
            day_of_month: Some(15),
            relative_week: None,
            relative_day: None,
            duration_months: 6,
        },
        PatternTemplate {
            name: "First Monday of Month",
            kind: PatternKind::Relative,
            day_of_month: None,
            relative_week: Some(RelativeWeek::First),
            relative_day: Some(Day::Monday),
            duration_months: 6,
        },
        PatternTemplate {
            name: "Last Friday of Month",
            kind: PatternKind::Relative,
            day_of_month: None,
            relative_week: Some(RelativeWeek::Last),
            relative_day: Some(Day::Friday),
            duration_months: 6,
        },
    ]
}

impl PatternTemplate {
    /// Instantiate the template as a draft pattern: no start date, no slots,
    /// active. The caller supplies the id and the creation timestamp.
    pub fn instantiate(&self, id: String, created_at: DateTime<Utc>) -> MonthlyPattern {
        MonthlyPattern {
            id,
            name: self.name.to_string(),
            kind: self.kind,
            day_of_month: self.day_of_month,
            relative_week: self.relative_week,
            relative_day: self.relative_day,
            start_date: None,
            duration_months: self.duration_months,
            time_slots: Vec::new(),
            active: true,
            created_at,
        }
    }
}

/// Ordinal suffix for a day of month: 1st, 2nd, 3rd, 4th, …, 11th–13th "th".
pub fn ordinal_suffix(day: u8) -> &'static str {
    if (4..=20).contains(&day) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Human description of a pattern's rule: "15th of every month",
/// "Last day of every month", "first monday of every month".
pub fn describe_rule(pattern: &MonthlyPattern) -> String {
    match pattern.rule() {
        Ok(PatternRule::DayOfMonth(31)) => "Last day of every month".to_string(),
        Ok(PatternRule::DayOfMonth(day)) => {
            format!("{}{} of every month", day, ordinal_suffix(day))
        }
        Ok(PatternRule::NthWeekday { week, day }) => {
            format!(
                "{} {} of every month",
                week.label(),
                day.label().to_lowercase()
            )
        }
        Err(_) => "Monthly pattern".to_string(),
    }
}

/// The pattern's display name: the vendor's own, or the rule description
/// when none was typed.
pub fn display_name(pattern: &MonthlyPattern) -> String {
    if pattern.name.is_empty() {
        describe_rule(pattern)
    } else {
        pattern.name.clone()
    }
}
