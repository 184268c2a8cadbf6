//! Autolift identity: a catering vehicle, tracked only as a numeric
//! identifier. The core planner does not model autolifts as a separate
//! resource constraint — see `DESIGN.md`'s Open Question on the driver
//! pool being the only counted resource — but the CSV format is ingested
//! for completeness per spec.md §6.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Autolift {
    pub id: String,
    pub number: String,
}
