// ============================================================================
// Engine Module
// Bind-once operation wrappers around the kernel
// ============================================================================
//
// These types model the host boundary: a query host infers operand decimal
// types at bind time (once per plan node), records the result type, scale
// adjustment and physical width, and then evaluates per row or per group.
// Registering the bound division under the host's default `/` operator so
// that decimal-typed operands route through it is the host's concern, not
// this crate's.

mod aggregates;
mod division;

pub use aggregates::{BoundAvg, BoundSum};
pub use division::BoundDivision;
