//! Bracket: one dispatchable work unit for a single autolift crew.

use serde::{Deserialize, Serialize};

use super::FlightClass;

/// An ordered, non-empty sequence of flights scheduled onto one autolift
/// for one crew sortie.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bracket {
    pub id: String,
    /// Flight numbers, ordered by `std`.
    pub flight_nos: Vec<String>,
    /// Loading start: `std` of the first flight minus `LOAD_SMS`/`LOAD_DMS`.
    pub start_time: i64,
    /// `serviceEnd` of the last flight plus `RETURN_UNLOAD`.
    pub end_time: i64,
    pub class: FlightClass,
    pub driver_id: String,
    /// Dock bay assigned for loading (1-19), if one was free.
    pub loading_window: Option<u32>,
    /// Dock bay assigned for unloading (20-23), if one was free.
    pub unloading_window: Option<u32>,
}
