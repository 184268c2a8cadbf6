//! The planner's result document and its constituent records.

use serde::{Deserialize, Serialize};

use super::{Bracket, FlightClass, ShiftAssignment};

/// One flight's final placement: which driver and bracket it ended up in,
/// and its service window for downstream display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub flight_no: String,
    pub driver_id: String,
    pub bracket_id: String,
    pub service_start: i64,
    pub service_end: i64,
}

/// A flight that did not make it into any bracket, with enough context to
/// explain why to an operator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnassignedFlight {
    pub flight_no: String,
    pub ac_type: String,
    pub std: String,
    pub flight_type: Option<FlightClass>,
    pub reason: UnassignedReason,
}

/// Why a flight ended up unassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnassignedReason {
    /// Aircraft code matched neither the SMS nor DMS membership table.
    UnknownAircraftType,
    /// Remained after all bracket-building phases ran out of drivers or
    /// compatible partners.
    NoCompatibleBracket,
}

/// A non-fatal condition surfaced alongside a successful plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum PlanWarning {
    /// No shift window satisfied the fit predicate for this driver.
    NoShiftAvailable { driver_id: String },
}

/// The planner's full output document.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlanResult {
    pub brackets: Vec<Bracket>,
    pub assignments: Vec<Assignment>,
    pub unassigned: Vec<UnassignedFlight>,
    pub shift_assignments: Vec<ShiftAssignment>,
    pub warnings: Vec<PlanWarning>,
}

impl PlanResult {
    /// The `EMPTY_RESULT` shortcut: no flights were supplied.
    pub fn empty() -> Self {
        Self::default()
    }
}
