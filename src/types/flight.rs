//! Flight types: the scheduling atom the planner groups into brackets.

use serde::{Deserialize, Serialize};

/// Service class of a flight, derived from its aircraft type via the fixed
/// membership tables in [`crate::timing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FlightClass {
    /// Narrow-body.
    Sms,
    /// Wide-body.
    Dms,
}

/// One scheduled departure, plus the timing fields derived from it by the
/// timing kernel and the assignment fields filled in by the planner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub flight_no: String,
    /// Aircraft type code, normalized to upper case (e.g. `320`, `SU9`, `77W`).
    pub ac_type: String,
    pub class: FlightClass,
    /// Scheduled departure, minutes since midnight of the base day.
    pub std: i64,
    pub kitchen_out: i64,
    pub service_start: i64,
    pub service_end: i64,
    pub unload_end: i64,
    /// Set by the bracket builder once the flight is placed in a bracket.
    pub driver_id: Option<String>,
    pub bracket_id: Option<String>,
}

impl Flight {
    /// Builds a flight from its raw fields, deriving the timing fields and
    /// class via [`crate::timing::derive_from_std`]. Returns `None` if
    /// `ac_type` matches neither the SMS nor the DMS membership table —
    /// callers route such flights straight to `unassigned` per the
    /// `UnknownAircraftType` policy.
    pub fn new(flight_no: impl Into<String>, ac_type: impl Into<String>, std: i64) -> Option<Self> {
        let ac_type = ac_type.into().trim().to_uppercase();
        let class = crate::timing::classify(&ac_type)?;
        let timing = crate::timing::derive_from_std(class, std);
        Some(Self {
            flight_no: flight_no.into(),
            ac_type,
            class,
            std,
            kitchen_out: timing.kitchen_out,
            service_start: timing.service_start,
            service_end: timing.service_end,
            unload_end: timing.unload_end,
            driver_id: None,
            bracket_id: None,
        })
    }

    /// Renders `std` as `"HH:MM"`, wrapping modulo 24h — used for the
    /// `unassigned` report, never for scheduling arithmetic.
    pub fn std_hhmm(&self) -> String {
        crate::timing::to_hhmm(self.std)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_aircraft_type_yields_none() {
        assert!(Flight::new("SU100", "ZZZ", 600).is_none());
    }

    #[test]
    fn sms_flight_derives_expected_timing() {
        let f = Flight::new("SU100", "320", 600).unwrap();
        assert_eq!(f.class, FlightClass::Sms);
        assert_eq!(f.service_end, 540);
        assert_eq!(f.service_start, 521);
        assert_eq!(f.kitchen_out, 366);
        assert_eq!(f.unload_end, 695);
    }

    #[test]
    fn dms_flight_at_0430_derives_expected_timing() {
        let f = Flight::new("SU200", "777", 270).unwrap(); // std = 04:30
        assert_eq!(f.class, FlightClass::Dms);
        assert_eq!(f.service_end, 210); // 03:30
        assert_eq!(f.service_start, 165); // 02:45
        assert_eq!(f.kitchen_out, -15); // 23:45 the prior day
        assert_eq!(f.unload_end, 390); // 06:30
    }
}
