//! `rota` CLI — validate, expand, and inspect vendor schedules from the
//! command line.
//!
//! ## Usage
//!
//! ```sh
//! # Validate a weekly schedule document (stdin → report)
//! cat weekly.json | rota validate
//!
//! # Validate from a file
//! rota validate -i weekly.json
//!
//! # Expand a monthly pattern into its concrete dates
//! rota expand -i patterns.json --id pattern_123
//!
//! # Lifecycle status as of a given instant
//! rota status -i patterns.json --id pattern_123 --now 2025-06-01
//!
//! # Check a pattern for calendar-day conflicts with the rest of the file
//! rota conflicts -i patterns.json --id pattern_123
//!
//! # Summarize a weekly schedule
//! rota summary -i weekly.json
//!
//! # List the built-in pattern templates
//! rota templates
//! ```

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use clap::{Parser, Subcommand};
use std::io::{self, Read};

use rota_engine::template::{builtin_templates, describe_rule, display_name};
use rota_engine::validate::{IssueKind, ValidationIssue};
use rota_engine::{MonthlyPattern, WeeklySchedule};

#[derive(Parser)]
#[command(name = "rota", version, about = "Mobile-vendor schedule inspector")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a weekly schedule document
    Validate {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Expand a monthly pattern into its occurrence dates
    Expand {
        /// Patterns file: a JSON array of pattern documents (stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Id of the pattern to expand (optional when the file holds one)
        #[arg(long)]
        id: Option<String>,
    },
    /// Show a pattern's lifecycle status
    Status {
        /// Patterns file: a JSON array of pattern documents (stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Id of the pattern to inspect (optional when the file holds one)
        #[arg(long)]
        id: Option<String>,
        /// Evaluate as of this instant, "YYYY-MM-DD[THH:MM:SS]" (default: now)
        #[arg(long)]
        now: Option<String>,
    },
    /// Check a pattern for calendar-day conflicts with the other patterns
    Conflicts {
        /// Patterns file: a JSON array of pattern documents (stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Id of the candidate pattern (optional when the file holds one)
        #[arg(long)]
        id: Option<String>,
    },
    /// Summarize a weekly schedule document
    Summary {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// List the built-in pattern templates
    Templates,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { input } => {
            let schedule = read_schedule(input.as_deref())?;
            let issues = rota_engine::validate(&schedule);

            if issues.is_empty() {
                println!("Schedule is valid.");
                return Ok(());
            }
            for issue in &issues {
                println!("{}", describe_issue(issue));
            }
            bail!("{} validation issue(s) found", issues.len());
        }
        Commands::Expand { input, id } => {
            let patterns = read_patterns(input.as_deref())?;
            let pattern = select_pattern(&patterns, id.as_deref())?;

            let dates = rota_engine::expand(pattern);
            if dates.is_empty() {
                println!("No occurrences ({}).", draft_note(pattern));
                return Ok(());
            }
            for date in dates {
                println!("{}", date.format("%a, %b %-d, %Y"));
            }
        }
        Commands::Status { input, id, now } => {
            let patterns = read_patterns(input.as_deref())?;
            let pattern = select_pattern(&patterns, id.as_deref())?;
            let now = match now.as_deref() {
                Some(raw) => parse_now(raw)?,
                None => Local::now().naive_local(),
            };

            let status = rota_engine::status(pattern, now)
                .with_context(|| format!("Cannot compute status for \"{}\"", pattern.id))?;

            println!("Pattern:   {}", display_name(pattern));
            println!("Rule:      {}", describe_rule(pattern));
            println!(
                "State:     {}",
                if status.is_expired {
                    "expired"
                } else if status.is_active {
                    "active"
                } else {
                    "upcoming"
                }
            );
            println!(
                "Progress:  {}% ({}/{} months, {} remaining)",
                status.progress_percentage,
                status.months_completed,
                status.total_months,
                status.months_remaining
            );
            match status.next_occurrence {
                Some(date) => println!("Next:      {}", date.format("%a, %b %-d, %Y")),
                None => println!("Next:      none (all occurrences are in the past)"),
            }
        }
        Commands::Conflicts { input, id } => {
            let patterns = read_patterns(input.as_deref())?;
            let candidate = select_pattern(&patterns, id.as_deref())?;

            let conflicts = rota_engine::find_conflicts(candidate, &patterns);
            if conflicts.is_empty() {
                println!("No conflicts.");
            } else {
                println!(
                    "Warning: conflicts with existing patterns on {} date(s):",
                    conflicts.len()
                );
                for date in conflicts {
                    println!("  {}", date.format("%a, %b %-d, %Y"));
                }
            }
        }
        Commands::Summary { input } => {
            let schedule = read_schedule(input.as_deref())?;
            let summary = rota_engine::summarize(&schedule);

            println!("Active days:  {}", summary.active_days);
            println!("Total slots:  {}", summary.total_locations);
            if !summary.active_day_names.is_empty() {
                println!("Days:         {}", summary.active_day_names.join(", "));
            }
        }
        Commands::Templates => {
            for template in builtin_templates() {
                println!(
                    "{} ({} months)",
                    template.name, template.duration_months
                );
            }
        }
    }

    Ok(())
}

/// Human form of a validation issue, matching the messages the web UI shows.
fn describe_issue(issue: &ValidationIssue) -> String {
    let day = issue.day.label();
    let message = match issue.kind {
        IssueKind::EmptyEnabledDay => return format!("{}: enabled but has no time slots", day),
        IssueKind::OverlappingSlots => return format!("{}: has overlapping time slots", day),
        IssueKind::MissingLocation => "location is required",
        IssueKind::MissingTime => "start and end times are required",
        IssueKind::InvalidTimeFormat => "times must be valid HH:MM",
        IssueKind::EndBeforeStart => "end time must be after start time",
        IssueKind::SlotTooShort => "time slot must be at least 1 hour",
    };
    match &issue.slot_id {
        Some(slot_id) => format!("{} [slot {}]: {}", day, slot_id, message),
        None => format!("{}: {}", day, message),
    }
}

fn draft_note(pattern: &MonthlyPattern) -> &'static str {
    if pattern.is_draft() {
        "the pattern is a draft with no start date"
    } else {
        "the pattern's rule is incomplete"
    }
}

fn parse_now(raw: &str) -> Result<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|d| d.and_time(NaiveTime::MIN))
        .with_context(|| format!("Invalid --now value: {}", raw))
}

fn read_schedule(path: Option<&str>) -> Result<WeeklySchedule> {
    let raw = read_input(path)?;
    serde_json::from_str(&raw).context("Failed to parse weekly schedule JSON")
}

fn read_patterns(path: Option<&str>) -> Result<Vec<MonthlyPattern>> {
    let raw = read_input(path)?;
    serde_json::from_str(&raw).context("Failed to parse patterns JSON")
}

/// Pick the pattern to operate on: by id when given, or the file's only
/// pattern otherwise.
fn select_pattern<'a>(
    patterns: &'a [MonthlyPattern],
    id: Option<&str>,
) -> Result<&'a MonthlyPattern> {
    match id {
        Some(id) => patterns
            .iter()
            .find(|p| p.id == id)
            .with_context(|| format!("No pattern with id \"{}\" in the input", id)),
        None => match patterns {
            [only] => Ok(only),
            [] => bail!("The input holds no patterns"),
            _ => {
                let ids: Vec<&str> = patterns.iter().map(|p| p.id.as_str()).collect();
                bail!(
                    "The input holds {} patterns; pick one with --id ({})",
                    patterns.len(),
                    ids.join(", ")
                );
            }
        },
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
