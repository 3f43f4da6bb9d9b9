//! Tests for the document model: wire-format fidelity, rule extraction, and
//! the built-in templates.

use chrono::{NaiveDate, TimeZone, Utc};
use rota_engine::template::{builtin_templates, describe_rule, display_name, ordinal_suffix};
use rota_engine::{
    Day, MonthlyPattern, PatternKind, PatternRule, RelativeWeek, RotaError, WeeklySchedule,
};

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

/// A weekly schedule document as the web UI stores it.
const WEEKLY_DOC: &str = r#"{
  "enabled": true,
  "repeatWeekly": true,
  "schedule": {
    "monday": {
      "enabled": true,
      "timeSlots": [
        {
          "id": "demo-slot-1",
          "startTime": "11:00",
          "endTime": "14:00",
          "location": "Humbles City",
          "coordinates": [59.9139, 10.7522]
        }
      ]
    },
    "tuesday": { "enabled": false, "timeSlots": [] },
    "wednesday": { "enabled": false, "timeSlots": [] },
    "thursday": { "enabled": false, "timeSlots": [] },
    "friday": { "enabled": false, "timeSlots": [] },
    "saturday": { "enabled": false, "timeSlots": [] },
    "sunday": { "enabled": false, "timeSlots": [] }
  }
}"#;

#[test]
fn weekly_schedule_round_trips_through_the_stored_format() {
    let schedule: WeeklySchedule = serde_json::from_str(WEEKLY_DOC).unwrap();

    assert!(schedule.schedule[Day::Monday].enabled);
    let slot = &schedule.schedule[Day::Monday].time_slots[0];
    assert_eq!(slot.start_time, "11:00");
    assert_eq!(slot.location, "Humbles City");
    assert_eq!(slot.coordinates, Some((59.9139, 10.7522)));
    assert!(!schedule.schedule[Day::Sunday].enabled);

    // Round trip preserves the camelCase keys and the day map.
    let json = serde_json::to_value(&schedule).unwrap();
    assert!(json["schedule"]["monday"]["timeSlots"].is_array());
    assert_eq!(json["repeatWeekly"], true);
    let back: WeeklySchedule = serde_json::from_value(json).unwrap();
    assert_eq!(back, schedule);
}

#[test]
fn pattern_documents_use_type_and_camel_case_keys() {
    let doc = r#"{
      "id": "pattern_123",
      "name": "First Friday",
      "type": "relative",
      "relativeWeek": "first",
      "relativeDay": "friday",
      "startDate": "2025-01-01",
      "durationMonths": 6,
      "timeSlots": [],
      "active": true,
      "createdAt": "2025-01-01T09:00:00.000Z"
    }"#;
    let pattern: MonthlyPattern = serde_json::from_str(doc).unwrap();

    assert_eq!(pattern.kind, PatternKind::Relative);
    assert_eq!(pattern.relative_week, Some(RelativeWeek::First));
    assert_eq!(pattern.relative_day, Some(Day::Friday));
    assert_eq!(
        pattern.start_date,
        Some(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
    );

    let json = serde_json::to_value(&pattern).unwrap();
    assert_eq!(json["type"], "relative");
    assert_eq!(json["durationMonths"], 6);
    assert_eq!(json["relativeWeek"], "first");
}

#[test]
fn missing_active_flag_defaults_to_true() {
    // Documents written before the flag existed have no "active" key.
    let doc = r#"{
      "id": "pattern_old",
      "name": "Mid-Month",
      "type": "specific",
      "dayOfMonth": 15,
      "startDate": "2024-06-01",
      "durationMonths": 3,
      "createdAt": "2024-06-01T00:00:00Z"
    }"#;
    let pattern: MonthlyPattern = serde_json::from_str(doc).unwrap();
    assert!(pattern.active);
    assert!(pattern.time_slots.is_empty());
}

#[test]
fn draft_start_date_is_an_empty_string_on_the_wire() {
    let doc = r#"{
      "id": "pattern_draft",
      "name": "Copy",
      "type": "specific",
      "dayOfMonth": 1,
      "startDate": "",
      "durationMonths": 3,
      "createdAt": "2025-01-01T00:00:00Z"
    }"#;
    let pattern: MonthlyPattern = serde_json::from_str(doc).unwrap();
    assert!(pattern.is_draft());

    let json = serde_json::to_value(&pattern).unwrap();
    assert_eq!(json["startDate"], "", "drafts serialize back to \"\"");
}

// ---------------------------------------------------------------------------
// Rule extraction
// ---------------------------------------------------------------------------

fn base_pattern(kind: PatternKind) -> MonthlyPattern {
    MonthlyPattern {
        id: "p1".to_string(),
        name: String::new(),
        kind,
        day_of_month: None,
        relative_week: None,
        relative_day: None,
        start_date: Some(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()),
        duration_months: 3,
        time_slots: Vec::new(),
        active: true,
        created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
    }
}

#[test]
fn rule_extraction_respects_the_declared_kind() {
    let mut specific = base_pattern(PatternKind::Specific);
    specific.day_of_month = Some(15);
    // A stale relative field must not leak into a specific rule.
    specific.relative_week = Some(RelativeWeek::Last);
    assert_eq!(specific.rule().unwrap(), PatternRule::DayOfMonth(15));

    let mut relative = base_pattern(PatternKind::Relative);
    relative.relative_week = Some(RelativeWeek::Last);
    relative.relative_day = Some(Day::Friday);
    assert_eq!(
        relative.rule().unwrap(),
        PatternRule::NthWeekday {
            week: RelativeWeek::Last,
            day: Day::Friday,
        }
    );
}

#[test]
fn incomplete_and_out_of_range_rules_are_rejected() {
    let specific = base_pattern(PatternKind::Specific);
    assert!(matches!(specific.rule(), Err(RotaError::IncompleteRule(_))));

    let mut too_big = base_pattern(PatternKind::Specific);
    too_big.day_of_month = Some(32);
    assert!(matches!(too_big.rule(), Err(RotaError::IncompleteRule(_))));

    let mut half_relative = base_pattern(PatternKind::Relative);
    half_relative.relative_week = Some(RelativeWeek::First);
    assert!(matches!(
        half_relative.rule(),
        Err(RotaError::IncompleteRule(_))
    ));
}

// ---------------------------------------------------------------------------
// Templates and descriptions
// ---------------------------------------------------------------------------

#[test]
fn builtin_templates_instantiate_as_drafts() {
    let now = Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap();
    let templates = builtin_templates();
    assert_eq!(templates.len(), 5);

    let pattern = templates[0].instantiate("pattern_t1".to_string(), now);
    assert_eq!(pattern.name, "First Friday of Month");
    assert!(pattern.is_draft());
    assert!(pattern.active);
    assert!(pattern.time_slots.is_empty());
    assert_eq!(pattern.duration_months, 6);
    assert_eq!(
        pattern.rule().unwrap(),
        PatternRule::NthWeekday {
            week: RelativeWeek::First,
            day: Day::Friday,
        }
    );
}

#[test]
fn every_template_carries_a_complete_rule() {
    let now = Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap();
    for (i, template) in builtin_templates().iter().enumerate() {
        let pattern = template.instantiate(format!("pattern_t{}", i), now);
        assert!(
            pattern.rule().is_ok(),
            "template {:?} must instantiate with a usable rule",
            template.name
        );
    }
}

#[test]
fn rule_descriptions_read_naturally() {
    let mut p = base_pattern(PatternKind::Specific);
    p.day_of_month = Some(15);
    assert_eq!(describe_rule(&p), "15th of every month");

    p.day_of_month = Some(31);
    assert_eq!(describe_rule(&p), "Last day of every month");

    p.day_of_month = Some(2);
    assert_eq!(describe_rule(&p), "2nd of every month");

    p.day_of_month = Some(23);
    assert_eq!(describe_rule(&p), "23rd of every month");

    let mut r = base_pattern(PatternKind::Relative);
    r.relative_week = Some(RelativeWeek::First);
    r.relative_day = Some(Day::Monday);
    assert_eq!(describe_rule(&r), "first monday of every month");
}

#[test]
fn ordinal_suffixes_handle_the_teens() {
    assert_eq!(ordinal_suffix(1), "st");
    assert_eq!(ordinal_suffix(2), "nd");
    assert_eq!(ordinal_suffix(3), "rd");
    assert_eq!(ordinal_suffix(4), "th");
    assert_eq!(ordinal_suffix(11), "th");
    assert_eq!(ordinal_suffix(13), "th");
    assert_eq!(ordinal_suffix(21), "st");
    assert_eq!(ordinal_suffix(22), "nd");
    assert_eq!(ordinal_suffix(23), "rd");
    assert_eq!(ordinal_suffix(31), "st");
}

#[test]
fn display_name_falls_back_to_the_description() {
    let mut p = base_pattern(PatternKind::Specific);
    p.day_of_month = Some(15);
    assert_eq!(display_name(&p), "15th of every month");

    p.name = "Payday run".to_string();
    assert_eq!(display_name(&p), "Payday run");
}
