//! Flights CSV ingestion: delimiter auto-detection, BOM stripping, and
//! header-alternative matching, mirroring the original `csv_parser.py`.
//!
//! Deliberately lenient: a row with no flight number or an unparseable
//! `STD` is skipped with a `warn!`, not an error. An aircraft type the
//! timing kernel doesn't recognize is NOT rejected here — it is passed
//! through as a [`RawFlight`] and the planner routes it to `unassigned`
//! per the `UnknownAircraftType` policy.

use anyhow::{bail, Result};
use tracing::warn;

use crate::services::planner::RawFlight;

/// Column names this parser recognizes, in priority order, for each
/// logical field. The first header that matches (case-insensitively)
/// wins.
const FLIGHT_ALTS: &[&str] = &["FLIGHT", "FLIGHT NO", "FLIGHT_NO", "FLIGHTNO"];
const TYPE_ALTS: &[&str] = &["TYPE", "FLIGHT TYPE", "FLIGHTTYPE"];
const AC_ALTS: &[&str] = &["AC", "ACTYPE", "AIRCRAFT TYPE"];
const STD_ALTS: &[&str] = &["STD", "SCHEDULED TIME DEPARTURE", "STDMIN"];
const ROUTE_ALTS: &[&str] = &["ROUTE"];
const FROM_ALTS: &[&str] = &["FROM", "DEPARTURE", "ORIGIN"];
const TO_ALTS: &[&str] = &["TO", "ARRIVAL", "DESTINATION", "DEST"];

fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

/// Counts occurrences of `;` vs `,` in the header line and picks whichever
/// is more frequent; `;` wins ties (matching the original's `>` check
/// favoring `,` only when strictly more numerous, so equal counts fall
/// through to `;`... in practice a header never ties, but the original's
/// `if ';' in line and count(';') > count(',')` means `,` is the default).
fn detect_delimiter(header_line: &str) -> char {
    if header_line.contains(';') && header_line.matches(';').count() > header_line.matches(',').count() {
        ';'
    } else {
        ','
    }
}

fn find_column(header: &[String], alts: &[&str]) -> Option<usize> {
    alts.iter().find_map(|alt| header.iter().position(|h| h == alt))
}

/// Parses `"DD.MM.YYYY HH:MM"` or `"HH:MM"` into minutes since midnight.
/// Returns `None` if neither pattern matches.
fn parse_std_text(raw: &str) -> Option<i64> {
    let raw = raw.replace('\u{a0}', " ");
    let raw = raw.trim();

    let hhmm = if let Some(time_part) = raw.rsplit(' ').next().filter(|_| raw.contains(' ')) {
        time_part
    } else {
        raw
    };

    let mut parts = hhmm.splitn(2, ':');
    let h: i64 = parts.next()?.parse().ok()?;
    let m: i64 = parts.next()?.parse().ok()?;
    Some(h * 60 + m)
}

/// Parses an `STD` field: a bare integer is taken as minutes directly,
/// otherwise it's parsed as a timestamp via [`parse_std_text`].
fn parse_std(raw: &str) -> Option<i64> {
    if let Ok(n) = raw.trim().parse::<i64>() {
        return Some(n);
    }
    parse_std_text(raw)
}

/// Parses flights CSV text into [`RawFlight`]s. Structural failures (no
/// header line) are an `Err`; individual bad rows are skipped with a
/// warning.
pub fn parse_flights_csv(text: &str) -> Result<Vec<RawFlight>> {
    let text = strip_bom(text).replace("\r\n", "\n").replace('\r', "\n");
    let lines: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();

    let Some((header_line, rows)) = lines.split_first() else {
        bail!("flights CSV is empty");
    };

    let delimiter = detect_delimiter(header_line);
    let header: Vec<String> = header_line.split(delimiter).map(|h| h.trim().to_uppercase()).collect();

    let i_flight = find_column(&header, FLIGHT_ALTS);
    let i_type = find_column(&header, TYPE_ALTS);
    let i_ac = find_column(&header, AC_ALTS);
    let i_std = find_column(&header, STD_ALTS);
    let i_route = find_column(&header, ROUTE_ALTS);
    let i_from = find_column(&header, FROM_ALTS);
    let i_to = find_column(&header, TO_ALTS);

    if i_flight.is_none() || i_std.is_none() {
        bail!("flights CSV header is missing FLIGHT or STD column: {header:?}");
    }

    let mut flights = Vec::with_capacity(rows.len());

    for (row_idx, line) in rows.iter().enumerate() {
        let parts: Vec<&str> = line.split(delimiter).collect();
        let get = |idx: Option<usize>| idx.and_then(|i| parts.get(i)).map(|s| s.trim()).unwrap_or("");

        let flight_no = get(i_flight);
        let std_str = get(i_std);
        if flight_no.is_empty() || std_str.is_empty() {
            warn!(row = row_idx + 2, "skipping flight row: missing FLIGHT or STD");
            continue;
        }

        let Some(std) = parse_std(std_str) else {
            warn!(row = row_idx + 2, flight_no, std_str, "skipping flight row: unparseable STD");
            continue;
        };

        // Route is accepted (FROM/TO or ROUTE) but the planner core has
        // no use for it; dropping it here matches the core's data model,
        // which carries no origin/destination fields.
        if let Some(i) = i_route {
            let _ = get(Some(i));
        } else {
            let _ = (get(i_from), get(i_to));
        }

        let ac_type = get(i_ac).to_string();
        let flight_type_hint = get(i_type);
        let ac_type = if ac_type.is_empty() { flight_type_hint.to_string() } else { ac_type };
        if ac_type.is_empty() {
            warn!(row = row_idx + 2, flight_no, "skipping flight row: no aircraft type in AC or TYPE column");
            continue;
        }

        flights.push(RawFlight {
            flight_no: flight_no.to_string(),
            ac_type,
            std,
        });
    }

    Ok(flights)
}
