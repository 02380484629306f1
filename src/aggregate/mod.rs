// ============================================================================
// Aggregate Module
// Accumulator state for SUM and AVG over scaled decimals
// ============================================================================
//
// Each state is owned exclusively by one aggregation group; there is no
// shared mutable state and no locking. Partial aggregates computed on
// disjoint row ranges merge via `combine` in any order (tree or pairwise
// reduction both work).
//
// The host owns storage and lifecycle: initialize, update per row, combine
// partials, finalize to a scalar or NULL. NULL input rows are filtered by
// the host before update is called.

mod avg;
mod sum;

pub use avg::DecimalAvgState;
pub use sum::{DecimalSumState, IntegerSumState};
