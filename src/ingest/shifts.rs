//! Shifts CSV ingestion: `;`-delimited `SHIFT_START;SHIFT_END` via
//! `csv::Reader` with headers enabled, mirroring the original
//! `shifts_csv_parser.py`'s use of `csv.DictReader`.

use anyhow::{Context, Result};
use tracing::warn;

use crate::types::ShiftWindow;

/// Parses shifts CSV text into [`ShiftWindow`]s. A structurally broken
/// file (bad header, unreadable encoding) is an `Err`; a row missing
/// either column is skipped with a warning.
pub fn parse_shifts_csv(text: &str) -> Result<Vec<ShiftWindow>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers().context("shifts CSV has no header row")?.clone();
    let i_start = headers.iter().position(|h| h.trim() == "SHIFT_START");
    let i_end = headers.iter().position(|h| h.trim() == "SHIFT_END");
    let (Some(i_start), Some(i_end)) = (i_start, i_end) else {
        anyhow::bail!("shifts CSV header is missing SHIFT_START or SHIFT_END: {headers:?}");
    };

    let mut shifts = Vec::new();
    for (row_idx, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("malformed shift CSV row {}", row_idx + 2))?;
        let (Some(start), Some(end)) = (record.get(i_start), record.get(i_end)) else {
            warn!(row = row_idx + 2, "skipping shift row: missing column");
            continue;
        };
        let (start, end) = (start.trim(), end.trim());
        if start.is_empty() || end.is_empty() {
            warn!(row = row_idx + 2, "skipping shift row: empty SHIFT_START or SHIFT_END");
            continue;
        }
        shifts.push(ShiftWindow {
            shift_start: start.to_string(),
            shift_end: end.to_string(),
        });
    }

    Ok(shifts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_shift_start_and_end_columns() {
        let csv = "SHIFT_START;SHIFT_END\n06:00;14:00\n23:00;07:00\n";
        let shifts = parse_shifts_csv(csv).unwrap();
        assert_eq!(shifts.len(), 2);
        assert_eq!(shifts[0].shift_start, "06:00");
        assert_eq!(shifts[1].shift_end, "07:00");
    }

    #[test]
    fn row_with_empty_column_is_skipped() {
        let csv = "SHIFT_START;SHIFT_END\n;14:00\n08:00;16:00\n";
        let shifts = parse_shifts_csv(csv).unwrap();
        assert_eq!(shifts.len(), 1);
        assert_eq!(shifts[0].shift_start, "08:00");
    }

    #[test]
    fn missing_header_column_is_an_error() {
        let csv = "START;END\n06:00;14:00\n";
        assert!(parse_shifts_csv(csv).is_err());
    }
}
