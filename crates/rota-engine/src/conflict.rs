//! Calendar-day collision detection between monthly patterns.
//!
//! Two active patterns landing on the same calendar date is a conflict.
//! Detection is advisory: the caller decides whether a collision blocks a
//! save or merely warns.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::lifecycle::expand;
use crate::model::MonthlyPattern;

/// Dates where `candidate` lands on the same calendar day as any *other*
/// active pattern in `existing`.
///
/// The candidate's own id and inactive patterns are never compared, so a
/// pattern cannot conflict with itself and switched-off patterns are
/// invisible. The result is sorted and de-duplicated.
pub fn find_conflicts(candidate: &MonthlyPattern, existing: &[MonthlyPattern]) -> Vec<NaiveDate> {
    let candidate_dates: BTreeSet<NaiveDate> = expand(candidate).into_iter().collect();
    if candidate_dates.is_empty() {
        return Vec::new();
    }

    let mut conflicts = BTreeSet::new();
    for other in existing {
        if other.id == candidate.id || !other.active {
            continue;
        }
        for date in expand(other) {
            if candidate_dates.contains(&date) {
                conflicts.insert(date);
            }
        }
    }

    conflicts.into_iter().collect()
}
