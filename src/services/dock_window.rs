//! Dock window assignment: advisory first-fit placement of each bracket
//! onto a loading bay (1-19) and, independently, an unloading bay (20-23),
//! so that no two brackets using the same bay overlap in time.
//!
//! Not a planning constraint — a bracket with no free window still
//! stands, just without the metadata.

use std::collections::HashMap;

use crate::types::Bracket;

const LOADING_WINDOWS: std::ops::RangeInclusive<u32> = 1..=19;
const UNLOADING_WINDOWS: std::ops::RangeInclusive<u32> = 20..=23;
const LOADING_OCCUPANCY: i64 = 240;
const UNLOAD_TIME: i64 = 15;

fn overlaps(a: (i64, i64), b: (i64, i64)) -> bool {
    a.0 < b.1 && b.0 < a.1
}

fn first_fit(
    windows: std::ops::RangeInclusive<u32>,
    span: (i64, i64),
    occupancy: &mut HashMap<u32, Vec<(i64, i64)>>,
) -> Option<u32> {
    for w in windows {
        let busy = occupancy.entry(w).or_default();
        if busy.iter().all(|&existing| !overlaps(existing, span)) {
            busy.push(span);
            return Some(w);
        }
    }
    None
}

/// Assigns a loading and unloading window to every bracket, in `startTime`
/// order, mutating each `Bracket`'s `loading_window`/`unloading_window`.
pub fn assign_windows(brackets: &mut [Bracket]) {
    let mut order: Vec<usize> = (0..brackets.len()).collect();
    order.sort_by_key(|&i| brackets[i].start_time);

    let mut loading_occupancy: HashMap<u32, Vec<(i64, i64)>> = HashMap::new();
    let mut unloading_occupancy: HashMap<u32, Vec<(i64, i64)>> = HashMap::new();

    for i in order {
        let loading_span = (brackets[i].start_time, brackets[i].start_time + LOADING_OCCUPANCY);
        brackets[i].loading_window = first_fit(LOADING_WINDOWS, loading_span, &mut loading_occupancy);

        let unloading_span = (brackets[i].end_time - UNLOAD_TIME, brackets[i].end_time);
        brackets[i].unloading_window = first_fit(UNLOADING_WINDOWS, unloading_span, &mut unloading_occupancy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FlightClass;

    fn bracket(id: &str, start: i64, end: i64) -> Bracket {
        Bracket {
            id: id.to_string(),
            flight_nos: vec!["F1".to_string()],
            start_time: start,
            end_time: end,
            class: FlightClass::Sms,
            driver_id: "D1".to_string(),
            loading_window: None,
            unloading_window: None,
        }
    }

    #[test]
    fn non_overlapping_brackets_both_get_window_one() {
        let mut brackets = vec![bracket("B1", 0, 100), bracket("B2", 1000, 1100)];
        assign_windows(&mut brackets);
        assert_eq!(brackets[0].loading_window, Some(1));
        assert_eq!(brackets[1].loading_window, Some(1));
    }

    #[test]
    fn overlapping_brackets_get_distinct_windows() {
        let mut brackets = vec![bracket("B1", 0, 100), bracket("B2", 50, 150)];
        assign_windows(&mut brackets);
        assert_ne!(brackets[0].loading_window, brackets[1].loading_window);
    }

    #[test]
    fn unloading_window_drawn_from_its_own_pool() {
        let mut brackets = vec![bracket("B1", 0, 300)];
        assign_windows(&mut brackets);
        assert_eq!(brackets[0].loading_window, Some(1));
        assert_eq!(brackets[0].unloading_window, Some(20));
    }
}
