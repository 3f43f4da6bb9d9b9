//! Monthly occurrence computation.
//!
//! Turns a pattern rule plus a month offset into one concrete calendar date,
//! handling variable month lengths, the day-31 "last day" sentinel, and
//! nth/last-weekday rules. Every function here is a pure function of its
//! arguments.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::error::{Result, RotaError};
use crate::model::{Day, MonthlyPattern, PatternRule};

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the given month (`month` in 1..=12).
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// The last calendar day of the given month, or `None` outside chrono's
/// supported year range.
pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, days_in_month(year, month))
}

/// The `n`th (1-based) `weekday` of the month.
///
/// Every month spans at least four full weeks, so `n` in 1..=4 always lands
/// inside the month; a hypothetical fifth occurrence may not exist and then
/// yields a date in the following month, which callers never request because
/// `RelativeWeek` caps at `Fourth`.
pub fn nth_weekday_of_month(year: i32, month: u32, weekday: Day, n: u8) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let days_until_target = (weekday.weekday().num_days_from_monday() + 7
        - first.weekday().num_days_from_monday())
        % 7;
    first.checked_add_days(Days::new(days_until_target as u64 + 7 * (n as u64 - 1)))
}

/// The last `weekday` of the month.
pub fn last_weekday_of_month(year: i32, month: u32, weekday: Day) -> Option<NaiveDate> {
    let last = last_day_of_month(year, month)?;
    let days_back_to_target = (last.weekday().num_days_from_monday() + 7
        - weekday.weekday().num_days_from_monday())
        % 7;
    last.checked_sub_days(Days::new(days_back_to_target as u64))
}

/// `start` plus `months` calendar months, clamped to the target month's
/// length (Jan 31 + 1 month = Feb 28). `None` outside chrono's year range.
pub fn add_months_clamped(start: NaiveDate, months: u32) -> Option<NaiveDate> {
    start.checked_add_months(Months::new(months))
}

/// Resolve `(year, month)` for a start month advanced by `offset` months.
/// Overflowing months normalize into following years.
fn shift_month(year: i32, month: u32, offset: u32) -> (i64, u32) {
    let total = (month as i64 - 1) + offset as i64;
    (year as i64 + total.div_euclid(12), (total.rem_euclid(12) + 1) as u32)
}

/// Compute the concrete date a pattern produces at the given month offset.
///
/// - Specific day 31 always resolves to the last day of the target month.
/// - Any other specific day clamps to the month's length, so day 30 in
///   February yields Feb 28 (29 in a leap year).
/// - Relative rules pick the nth or last matching weekday of the target
///   month.
///
/// # Errors
/// `IncompleteRule` when the pattern's declared kind lacks its fields,
/// `MissingStartDate` for drafts, and `OutOfRange` if the target month falls
/// outside chrono's supported years.
pub fn occurrence_date(pattern: &MonthlyPattern, month_offset: u32) -> Result<NaiveDate> {
    let rule = pattern.rule()?;
    let start = pattern
        .start_date
        .ok_or_else(|| RotaError::MissingStartDate(pattern.id.clone()))?;

    let (year, month) = shift_month(start.year(), start.month(), month_offset);
    let year = i32::try_from(year).map_err(|_| RotaError::OutOfRange(pattern.id.clone()))?;

    let date = match rule {
        PatternRule::DayOfMonth(31) => last_day_of_month(year, month),
        PatternRule::DayOfMonth(day) => {
            let day = (day as u32).min(days_in_month(year, month));
            NaiveDate::from_ymd_opt(year, month, day)
        }
        PatternRule::NthWeekday { week, day } => match week.ordinal() {
            Some(n) => nth_weekday_of_month(year, month, day, n),
            None => last_weekday_of_month(year, month, day),
        },
    };

    date.ok_or_else(|| RotaError::OutOfRange(pattern.id.clone()))
}
