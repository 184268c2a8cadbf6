//! Shift catalog and shift-to-driver assignment.

use serde::{Deserialize, Serialize};

/// A legal working period from the HR catalog, e.g. `"06:00"`-`"14:30"`.
/// Duration is computed modulo midnight — `shift_end` may be numerically
/// earlier than `shift_start` to express a midnight-crossing shift.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftWindow {
    pub shift_start: String,
    pub shift_end: String,
}

impl ShiftWindow {
    /// Parses both endpoints into minutes since midnight.
    pub fn as_minutes(&self) -> (i64, i64) {
        (
            crate::timing::to_hhmm_parse(&self.shift_start),
            crate::timing::to_hhmm_parse(&self.shift_end),
        )
    }
}

/// The shift a driver was fitted to, plus the brackets it covers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftAssignment {
    pub driver_id: String,
    pub shift_start: String,
    pub shift_end: String,
    pub bracket_ids: Vec<String>,
}
