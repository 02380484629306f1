// ============================================================================
// Spark Decimal Kernel Library
// Bit-exact Spark decimal division, sum and average over scaled integers
// ============================================================================

//! # Spark Decimal Kernel
//!
//! A wide fixed-point arithmetic kernel reproducing Apache Spark's decimal
//! semantics bit for bit: precision/scale inference and HALF_UP
//! (round-half-away-from-zero) rounding for division, summation and
//! averaging over decimals of up to 38 significant digits.
//!
//! ## Features
//!
//! - **128-bit scaled-integer kernel** with 256-bit intermediates for
//!   dividends that outgrow 128 bits
//! - **HALF_UP division** — exact midpoints round away from zero, never to
//!   even
//! - **Spark precision rules** for division, SUM and AVG result types,
//!   including the 38-digit clamp
//! - **Bind-once operations** — type inference runs once per plan node,
//!   per-row evaluation is a single kernel call
//! - **Purely functional kernel** — no shared state, safe from any thread;
//!   aggregation partials merge in any order
//!
//! ## Example
//!
//! ```rust
//! use spark_decimal::prelude::*;
//!
//! // Bind DECIMAL(5,2) / DECIMAL(5,2) once: result is DECIMAL(13,8)
//! let lhs = DecimalType::new(5, 2).unwrap();
//! let rhs = DecimalType::new(5, 2).unwrap();
//! let div = BoundDivision::bind(lhs, rhs);
//! assert_eq!(div.result_type().scale(), 8);
//!
//! // 123.45 / 2.00 = 61.72500000
//! assert_eq!(div.evaluate(Some(12_345), Some(200)), Some(6_172_500_000));
//!
//! // NULL operands propagate; x / 0 is NULL, not an error
//! assert_eq!(div.evaluate(None, Some(200)), None);
//! assert_eq!(div.evaluate(Some(12_345), Some(0)), None);
//!
//! // AVG(1.00, 2.00, 4.00) = 2.333333 at the inferred scale 6
//! let avg = BoundAvg::bind(lhs);
//! let mut state = avg.init_state();
//! for value in [100, 200, 400] {
//!     state.update(value);
//! }
//! assert_eq!(avg.finalize(&state), Some(DecimalScalar::Int32(2_333_333)));
//! ```

pub mod aggregate;
pub mod engine;
pub mod numeric;
pub mod types;

// Re-exports for convenience
pub mod prelude {
    pub use crate::aggregate::{DecimalAvgState, DecimalSumState, IntegerSumState};
    pub use crate::engine::{BoundAvg, BoundDivision, BoundSum};
    pub use crate::numeric::{div_half_up, NumericError, NumericResult};
    pub use crate::types::{
        avg_type, division_type, format_scaled, sum_type, DecimalScalar, DecimalType,
        PhysicalWidth,
    };
}
