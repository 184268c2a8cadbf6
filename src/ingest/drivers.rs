//! Drivers CSV ingestion: `;`-delimited `DRIVER_ID;FULL_NAME`, mirroring
//! the original `drivers_csv_parser.py`.

use anyhow::{bail, Result};
use tracing::warn;

use crate::types::Driver;

/// Parses drivers CSV text (header row skipped, BOM tolerated) into
/// [`Driver`]s. Rows missing either field are skipped with a warning.
pub fn parse_drivers_csv(text: &str) -> Result<Vec<Driver>> {
    let text = text
        .strip_prefix('\u{feff}')
        .unwrap_or(text)
        .replace("\r\n", "\n")
        .replace('\r', "\n");
    let lines: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();

    if lines.is_empty() {
        bail!("drivers CSV is empty");
    }

    let mut drivers = Vec::with_capacity(lines.len().saturating_sub(1));
    for (row_idx, line) in lines.iter().skip(1).enumerate() {
        let parts: Vec<&str> = line.split(';').collect();
        if parts.len() < 2 {
            warn!(row = row_idx + 2, "skipping driver row: fewer than 2 columns");
            continue;
        }
        let id = parts[0].trim();
        let full_name = parts[1].trim();
        if id.is_empty() || full_name.is_empty() {
            warn!(row = row_idx + 2, "skipping driver row: empty DRIVER_ID or FULL_NAME");
            continue;
        }
        drivers.push(Driver {
            id: id.to_string(),
            full_name: full_name.to_string(),
        });
    }

    Ok(drivers)
}
