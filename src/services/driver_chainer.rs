//! Driver Chainer: a second pass over the brackets Phases A-C produced,
//! merging pairs onto one driver when the idle gap between them permits.
//!
//! Brackets are walked in `startTime` order; the chainer greedily pairs
//! the earliest unpaired bracket with the earliest later unpaired bracket
//! whose gap test passes, then moves on. A driver that loses its bracket
//! to a chain is not returned to the pool for further planning — see the
//! open question this preserves in `DESIGN.md`.

use crate::types::{Assignment, Bracket};

const MIN_CHAIN_GAP: i64 = 20;
const MAX_CHAIN_GAP: i64 = 60;

fn can_combine(first: &Bracket, second: &Bracket) -> bool {
    let gap = second.start_time - first.end_time;
    (MIN_CHAIN_GAP..=MAX_CHAIN_GAP).contains(&gap)
}

/// Reassigns the second bracket of every chained pair onto the first
/// bracket's driver, updating the corresponding assignment records in
/// place. Brackets themselves are mutated in `brackets`; `assignments` is
/// the full assignment list emitted by the builder.
pub fn chain_drivers(brackets: &mut [Bracket], assignments: &mut [Assignment]) {
    if brackets.len() < 2 {
        return;
    }

    let mut order: Vec<usize> = (0..brackets.len()).collect();
    order.sort_by_key(|&i| brackets[i].start_time);

    let mut used = vec![false; brackets.len()];

    for pos in 0..order.len() {
        let i = order[pos];
        if used[i] {
            continue;
        }

        let mut paired = None;
        for &j in &order[pos + 1..] {
            if used[j] {
                continue;
            }
            if can_combine(&brackets[i], &brackets[j]) {
                paired = Some(j);
                break;
            }
        }

        if let Some(j) = paired {
            let first_driver = brackets[i].driver_id.clone();
            let second_bracket_id = brackets[j].id.clone();
            brackets[j].driver_id = first_driver.clone();
            for a in assignments.iter_mut() {
                if a.bracket_id == second_bracket_id {
                    a.driver_id = first_driver.clone();
                }
            }
            used[i] = true;
            used[j] = true;
        } else {
            used[i] = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FlightClass;

    fn bracket(id: &str, driver_id: &str, start: i64, end: i64) -> Bracket {
        Bracket {
            id: id.to_string(),
            flight_nos: vec![format!("{id}F1")],
            start_time: start,
            end_time: end,
            class: FlightClass::Sms,
            driver_id: driver_id.to_string(),
            loading_window: None,
            unloading_window: None,
        }
    }

    fn assignment(bracket_id: &str, driver_id: &str) -> Assignment {
        Assignment {
            flight_no: format!("{bracket_id}F1"),
            driver_id: driver_id.to_string(),
            bracket_id: bracket_id.to_string(),
            service_start: 0,
            service_end: 0,
        }
    }

    #[test]
    fn gap_19_does_not_chain() {
        let mut brackets = vec![bracket("B1", "D1", 0, 600), bracket("B2", "D2", 619, 700)];
        let mut assignments = vec![assignment("B1", "D1"), assignment("B2", "D2")];
        chain_drivers(&mut brackets, &mut assignments);
        assert_eq!(brackets[1].driver_id, "D2");
    }

    #[test]
    fn gap_20_chains() {
        let mut brackets = vec![bracket("B1", "D1", 0, 600), bracket("B2", "D2", 620, 700)];
        let mut assignments = vec![assignment("B1", "D1"), assignment("B2", "D2")];
        chain_drivers(&mut brackets, &mut assignments);
        assert_eq!(brackets[1].driver_id, "D1");
        assert_eq!(assignments[1].driver_id, "D1");
    }

    #[test]
    fn gap_60_chains() {
        let mut brackets = vec![bracket("B1", "D1", 0, 600), bracket("B2", "D2", 660, 700)];
        let mut assignments = vec![assignment("B1", "D1"), assignment("B2", "D2")];
        chain_drivers(&mut brackets, &mut assignments);
        assert_eq!(brackets[1].driver_id, "D1");
    }

    #[test]
    fn gap_61_does_not_chain() {
        let mut brackets = vec![bracket("B1", "D1", 0, 600), bracket("B2", "D2", 661, 700)];
        let mut assignments = vec![assignment("B1", "D1"), assignment("B2", "D2")];
        chain_drivers(&mut brackets, &mut assignments);
        assert_eq!(brackets[1].driver_id, "D2");
    }

    #[test]
    fn second_brackets_original_driver_is_not_reclaimed() {
        // Three brackets, one driver each; only the first pair chains.
        // D2 (freed by the chain) never reappears on B3 even though it
        // is idle after the chain forms.
        let mut brackets = vec![
            bracket("B1", "D1", 0, 600),
            bracket("B2", "D2", 620, 700),
            bracket("B3", "D3", 1000, 1100),
        ];
        let mut assignments = vec![
            assignment("B1", "D1"),
            assignment("B2", "D2"),
            assignment("B3", "D3"),
        ];
        chain_drivers(&mut brackets, &mut assignments);

        assert_eq!(brackets[0].driver_id, "D1");
        assert_eq!(brackets[1].driver_id, "D1");
        assert_eq!(brackets[2].driver_id, "D3");
    }

    #[test]
    fn at_most_one_chain_per_driver() {
        // D1's bracket already chained onto B2; a third bracket with a
        // valid gap from B2 must not also chain onto D1.
        let mut brackets = vec![
            bracket("B1", "D1", 0, 600),
            bracket("B2", "D2", 620, 700),
            bracket("B3", "D3", 720, 800),
        ];
        let mut assignments = vec![
            assignment("B1", "D1"),
            assignment("B2", "D2"),
            assignment("B3", "D3"),
        ];
        chain_drivers(&mut brackets, &mut assignments);

        assert_eq!(brackets[0].driver_id, "D1");
        assert_eq!(brackets[1].driver_id, "D1");
        // B3's gap from B2 (700->720 = 20) would also pass, but B2 is
        // already used, so B3 keeps its own driver.
        assert_eq!(brackets[2].driver_id, "D3");
    }
}
