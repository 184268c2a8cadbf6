//! Bracket Builder: greedily partitions a sorted flight list into brackets
//! by legal aircraft mix, picking the temporally tightest candidate at
//! each step.
//!
//! Three phases run in order, each consuming flights from what the
//! previous phase left behind:
//! - Phase A groups SU9 flights into quintuples.
//! - Phase B groups any remaining SMS flights into triples.
//! - Phase C pairs remaining DMS flights with remaining SMS flights.
//!
//! All three share one "already assigned" set and the same driver queue;
//! a phase stops as soon as no driver remains or no legal candidate can be
//! found, leaving the rest for the next phase (or `unassigned`).
//!
//! Every candidate is filtered by both the interval check and catalog
//! mix validation before it can be emitted; a candidate whose aircraft
//! mix matches no catalog entry is silently discarded (`MixRejected`),
//! never built into a bracket.

use itertools::Itertools;
use std::collections::VecDeque;

use crate::catalog;
use crate::timing::RETURN_UNLOAD;
use crate::types::{Assignment, Bracket, Flight, FlightClass, UnassignedFlight, UnassignedReason};

const MAX_SPAN: i64 = 240;
const MIN_GAP: i64 = 18;
const MAX_GAP: i64 = 28;

/// Output of a full bracket-building pass.
pub struct BuildResult {
    pub brackets: Vec<Bracket>,
    pub assignments: Vec<Assignment>,
    pub unassigned: Vec<UnassignedFlight>,
}

/// True iff `flights` (any order) satisfy the compactness interval check:
/// span at most 240 minutes, every consecutive service gap in `[18, 28]`,
/// and no two service windows overlapping. A single flight always passes.
pub fn interval_check(flights: &[&Flight]) -> bool {
    if flights.len() <= 1 {
        return true;
    }
    let mut sorted: Vec<&&Flight> = flights.iter().collect();
    sorted.sort_by_key(|f| f.std);

    let span = sorted.last().unwrap().std - sorted.first().unwrap().std;
    if span > MAX_SPAN {
        return false;
    }

    for pair in sorted.windows(2) {
        let (cur, next) = (pair[0], pair[1]);
        let gap = next.service_start - cur.service_end;
        if !(MIN_GAP..=MAX_GAP).contains(&gap) {
            return false;
        }
        if cur.service_end > next.service_start {
            return false;
        }
    }
    true
}

/// True iff `flights`' aircraft-type multiset matches some catalog entry.
/// The `MixRejected` filter: a candidate that fails this is silently
/// discarded, never emitted, never reaches the orchestrator's fault check.
fn legal_mix(flights: &[&Flight]) -> bool {
    let mix = catalog::mix_of(flights.iter().map(|f| f.ac_type.as_str()));
    catalog::validate_mix(&mix).is_some()
}

/// Quality score for a candidate bracket (lower is better); zero for a
/// single-flight set.
pub fn quality(flights: &[&Flight]) -> f64 {
    if flights.len() <= 1 {
        return 0.0;
    }
    let mut sorted: Vec<&&Flight> = flights.iter().collect();
    sorted.sort_by_key(|f| f.std);

    let span = (sorted.last().unwrap().std - sorted.first().unwrap().std) as f64;
    let idle_sum: f64 = sorted
        .windows(2)
        .map(|pair| (pair[1].service_start - pair[0].service_end) as f64)
        .sum();
    let service_sum: f64 = flights.iter().map(|f| (f.service_end - f.service_start) as f64).sum();
    let efficiency = service_sum / span.max(1.0);

    0.7 * span + 1.2 * idle_sum - 100.0 * efficiency
}

fn bracket_bounds(flights: &[&Flight]) -> (i64, i64) {
    let mut sorted: Vec<&&Flight> = flights.iter().collect();
    sorted.sort_by_key(|f| f.std);
    let first = sorted.first().unwrap();
    let last = sorted.last().unwrap();
    let load = match first.class {
        FlightClass::Sms => crate::timing::LOAD_SMS,
        FlightClass::Dms => crate::timing::LOAD_DMS,
    };
    (first.std - load, last.service_end + RETURN_UNLOAD)
}

fn emit_bracket(
    flights: &[&Flight],
    driver_id: String,
    brackets: &mut Vec<Bracket>,
    assignments: &mut Vec<Assignment>,
) {
    let mut ordered: Vec<&&Flight> = flights.iter().collect();
    ordered.sort_by_key(|f| f.std);
    let (start_time, end_time) = bracket_bounds(flights);
    let class = ordered.first().unwrap().class;
    let bracket_id = format!("BR{}", brackets.len() + 1);

    for f in &ordered {
        assignments.push(Assignment {
            flight_no: f.flight_no.clone(),
            driver_id: driver_id.clone(),
            bracket_id: bracket_id.clone(),
            service_start: f.service_start,
            service_end: f.service_end,
        });
    }

    brackets.push(Bracket {
        id: bracket_id,
        flight_nos: ordered.iter().map(|f| f.flight_no.clone()).collect(),
        start_time,
        end_time,
        class,
        driver_id,
        loading_window: None,
        unloading_window: None,
    });
}

/// Phase A: while at least 5 unassigned SU9 flights remain and a driver is
/// available, pick the best-scoring legal quintuple and emit it as a
/// bracket.
fn phase_a_su9_quintuples(
    flights: &[Flight],
    assigned: &mut std::collections::HashSet<String>,
    drivers: &mut VecDeque<String>,
    brackets: &mut Vec<Bracket>,
    assignments: &mut Vec<Assignment>,
) {
    loop {
        let available: Vec<&Flight> = flights
            .iter()
            .filter(|f| f.ac_type == "SU9" && !assigned.contains(&f.flight_no))
            .collect();
        if available.len() < 5 || drivers.is_empty() {
            break;
        }

        let best = available
            .iter()
            .copied()
            .combinations(5)
            .filter(|combo| interval_check(combo) && legal_mix(combo))
            .min_by(|a, b| quality(a).total_cmp(&quality(b)));

        match best {
            Some(combo) => {
                let driver = drivers.pop_front().unwrap();
                for f in &combo {
                    assigned.insert(f.flight_no.clone());
                }
                emit_bracket(&combo, driver, brackets, assignments);
            }
            None => break,
        }
    }
}

/// Phase B: while at least 3 unassigned SMS flights (of any aircraft type)
/// remain and a driver is available, pick the best-scoring legal triple.
fn phase_b_sms_triples(
    flights: &[Flight],
    assigned: &mut std::collections::HashSet<String>,
    drivers: &mut VecDeque<String>,
    brackets: &mut Vec<Bracket>,
    assignments: &mut Vec<Assignment>,
) {
    loop {
        let available: Vec<&Flight> = flights
            .iter()
            .filter(|f| f.class == FlightClass::Sms && !assigned.contains(&f.flight_no))
            .collect();
        if available.len() < 3 || drivers.is_empty() {
            break;
        }

        let best = available
            .iter()
            .copied()
            .combinations(3)
            .filter(|combo| interval_check(combo) && legal_mix(combo))
            .min_by(|a, b| quality(a).total_cmp(&quality(b)));

        match best {
            Some(combo) => {
                let driver = drivers.pop_front().unwrap();
                for f in &combo {
                    assigned.insert(f.flight_no.clone());
                }
                emit_bracket(&combo, driver, brackets, assignments);
            }
            None => break,
        }
    }
}

/// Phase C: while both an unassigned DMS and an unassigned SMS flight
/// remain and a driver is available, pair the DMS×SMS combination with
/// the smallest `|std` difference`| that passes the interval check.
fn phase_c_dms_business_pairs(
    flights: &[Flight],
    assigned: &mut std::collections::HashSet<String>,
    drivers: &mut VecDeque<String>,
    brackets: &mut Vec<Bracket>,
    assignments: &mut Vec<Assignment>,
) {
    loop {
        let dms: Vec<&Flight> = flights
            .iter()
            .filter(|f| f.class == FlightClass::Dms && !assigned.contains(&f.flight_no))
            .collect();
        let sms: Vec<&Flight> = flights
            .iter()
            .filter(|f| f.class == FlightClass::Sms && !assigned.contains(&f.flight_no))
            .collect();
        if dms.is_empty() || sms.is_empty() || drivers.is_empty() {
            break;
        }

        let mut best: Option<(&Flight, &Flight, i64)> = None;
        for &d in &dms {
            for &s in &sms {
                let pair = [d, s];
                if !interval_check(&pair) || !legal_mix(&pair) {
                    continue;
                }
                let gap = (d.std - s.std).abs();
                if best.map(|(_, _, g)| gap < g).unwrap_or(true) {
                    best = Some((d, s, gap));
                }
            }
        }

        match best {
            Some((d, s, _)) => {
                let driver = drivers.pop_front().unwrap();
                assigned.insert(d.flight_no.clone());
                assigned.insert(s.flight_no.clone());
                emit_bracket(&[d, s], driver, brackets, assignments);
            }
            None => break,
        }
    }
}

/// Runs Phases A, B, and C over `flights` (must already be sorted by
/// `std`), consuming drivers from `drivers` as brackets are formed.
/// Flights no phase could place are reported as `unassigned`.
pub fn plan_brackets(flights: &[Flight], drivers: &mut VecDeque<String>) -> BuildResult {
    let mut assigned = std::collections::HashSet::new();
    let mut brackets = Vec::new();
    let mut assignments = Vec::new();

    phase_a_su9_quintuples(flights, &mut assigned, drivers, &mut brackets, &mut assignments);
    phase_b_sms_triples(flights, &mut assigned, drivers, &mut brackets, &mut assignments);
    phase_c_dms_business_pairs(flights, &mut assigned, drivers, &mut brackets, &mut assignments);

    let unassigned = flights
        .iter()
        .filter(|f| !assigned.contains(&f.flight_no))
        .map(|f| UnassignedFlight {
            flight_no: f.flight_no.clone(),
            ac_type: f.ac_type.clone(),
            std: f.std_hhmm(),
            flight_type: Some(f.class),
            reason: UnassignedReason::NoCompatibleBracket,
        })
        .collect();

    BuildResult {
        brackets,
        assignments,
        unassigned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn su9(flight_no: &str, std: i64) -> Flight {
        Flight::new(flight_no, "SU9", std).unwrap()
    }

    fn drivers(n: usize) -> VecDeque<String> {
        (1..=n).map(|i| format!("D{i}")).collect()
    }

    #[test]
    fn five_su9_with_40_minute_std_spacing_form_one_bracket() {
        // 40-minute spacing keeps every consecutive service gap at 21
        // minutes, inside the [18, 28] window.
        let flights: Vec<Flight> = [360, 400, 440, 480, 520]
            .iter()
            .enumerate()
            .map(|(i, &std)| su9(&format!("SU{i}"), std))
            .collect();
        let mut pool = drivers(5);
        let result = plan_brackets(&flights, &mut pool);

        assert_eq!(result.brackets.len(), 1);
        assert!(result.unassigned.is_empty());
        let b = &result.brackets[0];
        assert_eq!(b.start_time, 205); // 03:25
        assert_eq!(b.end_time, 480); // 08:00
    }

    #[test]
    fn four_su9_leaves_all_unassigned() {
        let flights: Vec<Flight> = [360, 400, 440, 480]
            .iter()
            .enumerate()
            .map(|(i, &std)| su9(&format!("SU{i}"), std))
            .collect();
        let mut pool = drivers(5);
        let result = plan_brackets(&flights, &mut pool);

        assert!(result.brackets.is_empty());
        assert_eq!(result.unassigned.len(), 4);
    }

    #[test]
    fn six_su9_forms_one_bracket_of_five_with_one_left_over() {
        let flights: Vec<Flight> = [360, 400, 440, 480, 520, 560]
            .iter()
            .enumerate()
            .map(|(i, &std)| su9(&format!("SU{i}"), std))
            .collect();
        let mut pool = drivers(5);
        let result = plan_brackets(&flights, &mut pool);

        assert_eq!(result.brackets.len(), 1);
        assert_eq!(result.brackets[0].flight_nos.len(), 5);
        assert_eq!(result.unassigned.len(), 1);
    }

    #[test]
    fn sms_triple_737_320_321_builds_expected_bracket() {
        let flights = vec![
            Flight::new("F1", "737", 600).unwrap(), // 10:00
            Flight::new("F2", "320", 640).unwrap(), // 10:40
            Flight::new("F3", "321", 680).unwrap(), // 11:20
        ];
        let mut pool = drivers(1);
        let result = plan_brackets(&flights, &mut pool);

        assert_eq!(result.brackets.len(), 1);
        let b = &result.brackets[0];
        assert_eq!(b.start_time, 445); // 07:25
        assert_eq!(b.end_time, 640); // 10:40
    }

    #[test]
    fn dms_business_pair_777_320_builds_expected_bracket() {
        let flights = vec![
            Flight::new("F1", "777", 720).unwrap(), // 12:00
            Flight::new("F2", "320", 760).unwrap(), // 12:40
        ];
        let mut pool = drivers(1);
        let result = plan_brackets(&flights, &mut pool);

        assert_eq!(result.brackets.len(), 1);
        let b = &result.brackets[0];
        assert_eq!(b.start_time, 540); // 09:00
        assert_eq!(b.end_time, 720); // 12:00
    }

    #[test]
    fn no_drivers_available_leaves_everything_unassigned() {
        let flights: Vec<Flight> = [360, 400, 440, 480, 520]
            .iter()
            .enumerate()
            .map(|(i, &std)| su9(&format!("SU{i}"), std))
            .collect();
        let mut pool = VecDeque::new();
        let result = plan_brackets(&flights, &mut pool);

        assert!(result.brackets.is_empty());
        assert_eq!(result.unassigned.len(), 5);
    }

    #[test]
    fn three_320s_pass_the_interval_check_but_have_no_legal_mix_and_land_unassigned() {
        // 40-minute spacing keeps every gap at 21 minutes (legal interval),
        // but {320:3} matches no SMS catalog entry, so the triple must be
        // discarded rather than faulting the whole run.
        let flights = vec![
            Flight::new("F1", "320", 600).unwrap(),
            Flight::new("F2", "320", 640).unwrap(),
            Flight::new("F3", "320", 680).unwrap(),
        ];
        let mut pool = drivers(1);
        let result = plan_brackets(&flights, &mut pool);

        assert!(result.brackets.is_empty());
        assert_eq!(result.unassigned.len(), 3);
    }

    #[test]
    fn dms_business_pair_accepts_330_and_787() {
        let flights_330 = vec![
            Flight::new("F1", "330", 720).unwrap(), // 12:00
            Flight::new("F2", "320", 760).unwrap(), // 12:40
        ];
        let mut pool = drivers(1);
        let result = plan_brackets(&flights_330, &mut pool);
        assert_eq!(result.brackets.len(), 1);

        let flights_787 = vec![
            Flight::new("F1", "787", 720).unwrap(),
            Flight::new("F2", "320", 760).unwrap(),
        ];
        let mut pool = drivers(1);
        let result = plan_brackets(&flights_787, &mut pool);
        assert_eq!(result.brackets.len(), 1);
    }
}
