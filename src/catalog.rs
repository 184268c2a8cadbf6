//! Mix-catalog validation: the legal aircraft-type combinations a bracket's
//! flight multiset must match. Catalogs are data; the validator is a
//! set-equality check over normalized-upper-case codes.

use std::collections::BTreeMap;

/// An aircraft-type multiset, e.g. `{"320": 2, "321": 1}`.
pub type Mix = BTreeMap<&'static str, u32>;

fn mix(entries: &[(&'static str, u32)]) -> Mix {
    entries.iter().copied().collect()
}

/// Legal narrow-body combinations (3 or 5 flights).
pub fn sms_combinations() -> Vec<Mix> {
    vec![
        mix(&[("737", 1), ("320", 1), ("321", 1)]),
        mix(&[("737", 1), ("321", 2)]),
        mix(&[("320", 2), ("321", 1)]),
        mix(&[("737", 2), ("320", 1)]),
        mix(&[("321", 2), ("737", 1)]),
        mix(&[("32A", 1), ("321", 1), ("737", 1)]),
        mix(&[("32B", 1), ("321", 1), ("737", 1)]),
        mix(&[("73H", 1), ("320", 1), ("321", 1)]),
        mix(&[("739", 1), ("320", 1), ("321", 1)]),
        mix(&[("SU9", 5)]),
    ]
}

/// Legal DMS-business combinations: exactly one wide-body type paired with
/// exactly one narrow-body type.
pub fn dms_business_combinations() -> Vec<Mix> {
    const DMS_CODES: &[&str] = &[
        "777", "350", "330", "787", "333", "744", "332", "77W", "77R", "773", "359",
    ];
    const SMS_CODES: &[&str] = &["320", "321", "737", "SU9", "32A", "32B", "32N", "32Q", "73H", "739"];

    let mut out = Vec::new();
    for &dms in DMS_CODES {
        for &sms in SMS_CODES {
            out.push(mix(&[(dms, 1), (sms, 1)]));
        }
    }
    out
}

/// Legal DMS-economy combinations: a singleton of one wide-body type.
pub fn dms_economy_combinations() -> Vec<Mix> {
    ["777", "350", "330", "787", "333", "744", "77W", "77R", "773", "359", "332"]
        .iter()
        .map(|&code| mix(&[(code, 1)]))
        .collect()
}

/// Builds the multiset of aircraft-type codes for a candidate set of flights.
pub fn mix_of<'a>(ac_types: impl IntoIterator<Item = &'a str>) -> BTreeMap<String, u32> {
    let mut out: BTreeMap<String, u32> = BTreeMap::new();
    for t in ac_types {
        *out.entry(t.to_uppercase()).or_insert(0) += 1;
    }
    out
}

fn matches(candidate: &BTreeMap<String, u32>, catalog_entry: &Mix) -> bool {
    if candidate.len() != catalog_entry.len() {
        return false;
    }
    catalog_entry
        .iter()
        .all(|(code, count)| candidate.get(*code) == Some(count))
}

/// Checks whether a candidate aircraft-type multiset matches some entry in
/// one of the three catalogs. Returns the catalog it matched, if any.
pub fn validate_mix(candidate: &BTreeMap<String, u32>) -> Option<&'static str> {
    if sms_combinations().iter().any(|m| matches(candidate, m)) {
        return Some("SMS");
    }
    if dms_business_combinations().iter().any(|m| matches(candidate, m)) {
        return Some("DMS_BUSINESS");
    }
    if dms_economy_combinations().iter().any(|m| matches(candidate, m)) {
        return Some("DMS_ECONOMY");
    }
    None
}
