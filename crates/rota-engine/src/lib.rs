//! # rota-engine
//!
//! Recurrence, validation, and conflict engine for mobile-vendor schedules.
//!
//! A street vendor declares where and when they are open through two
//! complementary recurrence models: a seven-day weekly template and bounded
//! monthly patterns (a fixed day of month, or an nth-weekday rule such as
//! "first Monday"). This crate is the pure computation core that turns those
//! rule documents into concrete calendar dates and verifies their
//! consistency — month-end clamping, the day-31 "last day" sentinel,
//! time-slot integrity, and calendar-day collisions between patterns.
//!
//! The engine is stateless and side-effect-free: storage, rendering, ids,
//! and the system clock are collaborator concerns, injected by the caller.
//!
//! ## Modules
//!
//! - [`clock`] — "HH:MM" parsing, half-open overlap, duration formatting
//! - [`model`] — schedule and pattern documents (camelCase serde wire form)
//! - [`validate`] — accumulating weekly-schedule validation
//! - [`occurrence`] — pattern rule + month offset → concrete date
//! - [`lifecycle`] — expansion, read-time status, duplicate/extend
//! - [`conflict`] — calendar-day collisions between active patterns
//! - [`transform`] — day copying, toggling, slot edits, summaries
//! - [`template`] — built-in pattern templates and rule descriptions
//! - [`error`] — error types

pub mod clock;
pub mod conflict;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod occurrence;
pub mod template;
pub mod transform;
pub mod validate;

pub use conflict::find_conflicts;
pub use error::RotaError;
pub use lifecycle::{duplicate, expand, extend, status, PatternStatus};
pub use model::{
    Day, DaySchedule, MonthlyPattern, MonthlyTimeSlot, PatternKind, PatternRule, RelativeWeek,
    TimeSlot, Week, WeeklySchedule,
};
pub use occurrence::occurrence_date;
pub use template::{builtin_templates, PatternTemplate};
pub use transform::{copy_day, summarize, ScheduleSummary};
pub use validate::{validate, IssueKind, ValidationIssue};
