//! Autolifts CSV ingestion: one numeric identifier per line after the
//! header row, mirroring the original `parse_autolifts_csv`.

use anyhow::{bail, Result};
use tracing::warn;

use crate::types::Autolift;

/// Parses autolifts CSV text into [`Autolift`]s. Blank lines (after the
/// header) are skipped silently; this format carries no other column to
/// validate a row against.
pub fn parse_autolifts_csv(text: &str) -> Result<Vec<Autolift>> {
    let text = text
        .strip_prefix('\u{feff}')
        .unwrap_or(text)
        .replace("\r\n", "\n")
        .replace('\r', "\n");
    let lines: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();

    if lines.is_empty() {
        bail!("autolifts CSV is empty");
    }

    let mut autolifts = Vec::with_capacity(lines.len().saturating_sub(1));
    for line in lines.iter().skip(1) {
        let number = line.trim();
        if number.is_empty() {
            warn!("skipping blank autolift row");
            continue;
        }
        autolifts.push(Autolift {
            id: format!("AL{number}"),
            number: number.to_string(),
        });
    }

    Ok(autolifts)
}
