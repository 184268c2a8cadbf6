//! Error taxonomy for the planner core.
//!
//! Only one kind is a true error: an internal invariant violation
//! (`PlannerFault`). Empty input, unknown aircraft types, rejected mixes,
//! and unfitted shifts are all filters or warnings folded into the result
//! document rather than raised — see `PlanWarning` in `crate::types::plan`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    /// An emitted bracket's flight mix failed catalog validation, or some
    /// other internal invariant did not hold. Surfaced as fatal; the
    /// planning run's partial results are discarded.
    #[error("planner invariant violated: {0}")]
    PlannerFault(String),
}
