//! Shift Fitter: maps each driver's occupied time span onto the
//! best-fitting shift window from the catalog.

use std::collections::BTreeMap;

use crate::types::{Bracket, PlanWarning, ShiftAssignment, ShiftWindow};

const DISQUALIFIED_SCORE: f64 = 1000.0;

/// Normalizes a `(start, end)` pair for midnight-crossing comparison: if
/// `end < start`, the span crosses midnight and `end` is pushed a day
/// forward.
fn normalize(start: i64, end: i64) -> (i64, i64) {
    if end < start {
        (start, end + 1440)
    } else {
        (start, end)
    }
}

/// True iff shift `(ss, se)` covers demand `(ds, de)`, after normalizing
/// both for midnight crossing.
fn fits(ss: i64, se: i64, ds: i64, de: i64) -> bool {
    let (ss, se) = normalize(ss, se);
    let (ds, de) = normalize(ds, de);
    ss <= ds && se >= de
}

/// Quality-of-fit score (lower is better); `None` if the shift does not
/// satisfy the fit predicate.
fn score(ss: i64, se: i64, ds: i64, de: i64) -> Option<f64> {
    if !fits(ss, se, ds, de) {
        return None;
    }
    let (ss, se) = normalize(ss, se);
    let (ds, de) = normalize(ds, de);

    let start_gap = (ds - ss) as f64;
    if start_gap < 0.0 {
        return Some(DISQUALIFIED_SCORE);
    }
    let duration_slack = ((se - ss) - (de - ds)).max(0) as f64;
    let end_slack = (se - de) as f64;
    Some(start_gap + 0.1 * duration_slack + 0.05 * end_slack)
}

/// Groups `brackets` by driver, then picks the best-fitting shift window
/// for each driver's combined `[earliest startTime, latest endTime]`
/// span. Drivers with no fitting shift are reported as warnings, not
/// assigned.
pub fn fit_shifts(brackets: &[Bracket], shifts: &[ShiftWindow]) -> (Vec<ShiftAssignment>, Vec<PlanWarning>) {
    let mut by_driver: BTreeMap<&str, Vec<&Bracket>> = BTreeMap::new();
    for b in brackets {
        by_driver.entry(b.driver_id.as_str()).or_default().push(b);
    }

    let mut assignments = Vec::new();
    let mut warnings = Vec::new();

    for (driver_id, driver_brackets) in by_driver {
        let earliest = driver_brackets.iter().map(|b| b.start_time).min().unwrap();
        let latest = driver_brackets.iter().map(|b| b.end_time).max().unwrap();

        let best = shifts
            .iter()
            .filter_map(|w| {
                let (ss, se) = w.as_minutes();
                score(ss, se, earliest, latest).map(|s| (s, w))
            })
            .min_by(|a, b| a.0.total_cmp(&b.0));

        match best {
            Some((_, window)) => assignments.push(ShiftAssignment {
                driver_id: driver_id.to_string(),
                shift_start: window.shift_start.clone(),
                shift_end: window.shift_end.clone(),
                bracket_ids: driver_brackets.iter().map(|b| b.id.clone()).collect(),
            }),
            None => warnings.push(PlanWarning::NoShiftAvailable {
                driver_id: driver_id.to_string(),
            }),
        }
    }

    (assignments, warnings)
}
