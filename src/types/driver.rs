//! Driver identity.

use serde::{Deserialize, Serialize};

/// A driver: identity plus full name. Holds at most two brackets per day —
/// one primary, one optionally chained by the Driver Chainer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: String,
    pub full_name: String,
}
