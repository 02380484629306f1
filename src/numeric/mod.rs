// ============================================================================
// Numeric Module
// Wide fixed-point arithmetic kernel for Spark decimal semantics
// ============================================================================
//
// This module provides:
// - abs128 / Int128Limbs: signed 128-bit primitives and the host limb form
// - UInt256 / mul128 / div256_by_128: 256-bit intermediates for products
//   too large for 128 bits
// - pow10_128: O(1) lookup of 10^0 .. 10^38
// - div_half_up: HALF_UP scaled division built on all of the above
//
// Design principles:
// - No floating-point operations
// - Purely functional: no owned state, safe to call from any thread
// - Preconditions (nonzero divisor, bounded exponents) are caller
//   contracts enforced by debug assertions, not runtime errors

mod divide;
mod errors;
mod pow10;
mod wide;

pub use divide::div_half_up;
pub use errors::{NumericError, NumericResult};
pub use pow10::{pow10_128, MAX_POW10_EXP};
pub use wide::{abs128, div256_by_128, mul128, Int128Limbs, UInt256};
