//! Planner Orchestrator: drives Bracket Builder, Driver Chainer, and Shift
//! Fitter in order, and assembles the result document.
//!
//! ```text
//! INIT -> BUILD_BRACKETS -> CHAIN_DRIVERS -> FIT_SHIFTS -> EMIT -> DONE
//!                                                   |
//!                                                   +-(empty input)-> EMPTY_RESULT
//! ```

use std::collections::VecDeque;

use tracing::{info, warn};

use crate::error::PlannerError;
use crate::services::{bracket_builder, dock_window, driver_chainer, shift_fitter};
use crate::types::{
    Driver, Flight, PlanResult, ShiftWindow, UnassignedFlight, UnassignedReason,
};

/// Raw flight input as ingestion hands it to the planner: not yet
/// classified, not yet timing-derived.
pub struct RawFlight {
    pub flight_no: String,
    pub ac_type: String,
    pub std: i64,
}

/// `plan(flights, drivers, shifts) -> PlanResult`. Never returns `Err`
/// except on an internal invariant violation (`PlannerFault`): a bracket
/// the builder emitted whose aircraft mix does not match any catalog
/// entry. Aborts and discards partial results in that case.
pub fn plan(
    flights: Vec<RawFlight>,
    drivers: &[Driver],
    shifts: &[ShiftWindow],
) -> Result<PlanResult, PlannerError> {
    if flights.is_empty() {
        info!("no flights supplied, returning empty result");
        return Ok(PlanResult::empty());
    }

    info!(flight_count = flights.len(), driver_count = drivers.len(), "planning started");

    let mut classified = Vec::new();
    let mut unassigned = Vec::new();
    for raw in flights {
        match Flight::new(&raw.flight_no, &raw.ac_type, raw.std) {
            Some(f) => classified.push(f),
            None => {
                warn!(flight_no = %raw.flight_no, ac_type = %raw.ac_type, "unknown aircraft type");
                unassigned.push(UnassignedFlight {
                    flight_no: raw.flight_no,
                    ac_type: raw.ac_type.to_uppercase(),
                    std: crate::timing::to_hhmm(raw.std),
                    flight_type: None,
                    reason: UnassignedReason::UnknownAircraftType,
                });
            }
        }
    }

    classified.sort_by(|a, b| a.std.cmp(&b.std).then_with(|| a.flight_no.cmp(&b.flight_no)));

    let mut driver_pool: VecDeque<String> = drivers.iter().map(|d| d.id.clone()).collect();

    let build = bracket_builder::plan_brackets(&classified, &mut driver_pool);
    let mut brackets = build.brackets;
    let mut assignments = build.assignments;
    unassigned.extend(build.unassigned);

    // The builder already filters every candidate by `validate_mix` before
    // emitting it (the `MixRejected` filter), so this should never fire.
    // It stays as a `PlannerFault` backstop against a builder regression.
    for b in &brackets {
        let mix = crate::catalog::mix_of(b.flight_nos.iter().filter_map(|no| {
            classified.iter().find(|f| &f.flight_no == no).map(|f| f.ac_type.as_str())
        }));
        if crate::catalog::validate_mix(&mix).is_none() {
            return Err(PlannerError::PlannerFault(format!(
                "bracket {} has a mix that matches no catalog entry",
                b.id
            )));
        }
    }

    info!(bracket_count = brackets.len(), "brackets built, chaining drivers");
    driver_chainer::chain_drivers(&mut brackets, &mut assignments);

    info!("fitting shifts");
    let (shift_assignments, warnings) = shift_fitter::fit_shifts(&brackets, shifts);
    for w in &warnings {
        warn!(?w, "no shift available for driver");
    }

    dock_window::assign_windows(&mut brackets);

    info!(
        bracket_count = brackets.len(),
        unassigned_count = unassigned.len(),
        "planning complete"
    );

    Ok(PlanResult {
        brackets,
        assignments,
        unassigned,
        shift_assignments,
        warnings,
    })
}
