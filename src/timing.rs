//! Timing Kernel: pure functions deriving a flight's service-window
//! timestamps from its scheduled departure, and classifying aircraft types
//! into service classes. No state, no I/O.

use crate::types::FlightClass;

/// Minutes from first-flight STD back to loading start, narrow-body.
pub const LOAD_SMS: i64 = 155;
/// Same, wide-body.
pub const LOAD_DMS: i64 = 180;
/// On-aircraft service duration, narrow-body.
pub const SERVICE_SMS: i64 = 19;
/// On-aircraft service duration, wide-body.
pub const SERVICE_DMS: i64 = 45;
/// Driving time between adjacent aircraft.
pub const TRAVEL: i64 = 25;
/// Return to dock plus unload tail.
pub const RETURN_UNLOAD: i64 = 20;

/// Lower bound of the clamping range: roughly 6 hours before midnight.
pub const DAY_START: i64 = -360;
/// Upper bound of the clamping range: roughly 30 hours after midnight.
pub const DAY_END: i64 = 1800;

const SMS_TYPES: &[&str] = &[
    "320", "321", "737", "319", "32A", "32B", "32N", "32Q", "73H", "739", "SU9",
];

const DMS_TYPES: &[&str] = &[
    "777", "350", "330", "787", "77W", "77R", "773", "744", "333", "359", "332",
];

/// Classifies a (normalized, upper-case) aircraft type code into its
/// service class. Returns `None` if the code is in neither table — the
/// `UnknownAircraftType` case, which callers route to `unassigned`.
pub fn classify(ac_type: &str) -> Option<FlightClass> {
    if SMS_TYPES.contains(&ac_type) {
        Some(FlightClass::Sms)
    } else if DMS_TYPES.contains(&ac_type) {
        Some(FlightClass::Dms)
    } else {
        None
    }
}

/// Clamps a minute value into `[DAY_START, DAY_END]`.
pub fn clamp_day(m: i64) -> i64 {
    m.clamp(DAY_START, DAY_END)
}

/// The four timing fields derived from one flight's STD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedTiming {
    pub kitchen_out: i64,
    pub service_start: i64,
    pub service_end: i64,
    pub unload_end: i64,
}

/// Derives `kitchenOut`/`serviceStart`/`serviceEnd`/`unloadEnd` from a
/// flight's scheduled departure and class, then clamps each into the day
/// range.
pub fn derive_from_std(class: FlightClass, std: i64) -> DerivedTiming {
    let (load, service) = match class {
        FlightClass::Sms => (LOAD_SMS, SERVICE_SMS),
        FlightClass::Dms => (LOAD_DMS, SERVICE_DMS),
    };

    let departure_from_aircraft = std - 60;
    let service_end = departure_from_aircraft;
    let service_start = service_end - service;
    let kitchen_out = service_start - load;
    let unload_end = departure_from_aircraft + load;

    DerivedTiming {
        kitchen_out: clamp_day(kitchen_out),
        service_start: clamp_day(service_start),
        service_end: clamp_day(service_end),
        unload_end: clamp_day(unload_end),
    }
}

/// Renders a minute value as `"HH:MM"`, wrapping modulo 24h (negative
/// values wrap to the prior day).
pub fn to_hhmm(m: i64) -> String {
    let wrapped = ((m % 1440) + 1440) % 1440;
    format!("{:02}:{:02}", wrapped / 60, wrapped % 60)
}

/// Parses an `"HH:MM"` string into minutes since midnight. Malformed input
/// parses as `0` — callers validating shift/driver CSV rows reject those
/// upstream rather than here.
pub fn to_hhmm_parse(hhmm: &str) -> i64 {
    let mut parts = hhmm.trim().splitn(2, ':');
    let h: i64 = parts.next().and_then(|s| s.parse().ok()).unwrap_or(0);
    let m: i64 = parts.next().and_then(|s| s.parse().ok()).unwrap_or(0);
    h * 60 + m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_recognizes_sms_and_dms_and_rejects_unknown() {
        assert_eq!(classify("320"), Some(FlightClass::Sms));
        assert_eq!(classify("SU9"), Some(FlightClass::Sms));
        assert_eq!(classify("777"), Some(FlightClass::Dms));
        assert_eq!(classify("77W"), Some(FlightClass::Dms));
        assert_eq!(classify("A380"), None);
    }

    #[test]
    fn derive_from_std_five_su9_example() {
        // std 06:00 = 360, SMS class (SU9)
        let t = derive_from_std(FlightClass::Sms, 360);
        assert_eq!(t.service_end, 300); // 05:00
        assert_eq!(t.service_start, 281); // 04:41
        assert_eq!(t.kitchen_out, 126); // 02:06
        assert_eq!(t.unload_end, 455); // 07:35
    }

    #[test]
    fn clamp_day_bounds_extreme_values() {
        assert_eq!(clamp_day(-10_000), DAY_START);
        assert_eq!(clamp_day(10_000), DAY_END);
        assert_eq!(clamp_day(100), 100);
    }

    #[test]
    fn to_hhmm_wraps_negative_minutes_to_prior_day() {
        assert_eq!(to_hhmm(-15), "23:45");
        assert_eq!(to_hhmm(0), "00:00");
        assert_eq!(to_hhmm(90), "01:30");
    }

    #[test]
    fn to_hhmm_parse_round_trips_with_to_hhmm() {
        assert_eq!(to_hhmm_parse("07:25"), 445);
        assert_eq!(to_hhmm_parse("23:00"), 1380);
        assert_eq!(to_hhmm(to_hhmm_parse("06:41")), "06:41");
    }
}
