// ============================================================================
// Wide Integer Toolkit
// 128-bit signed/unsigned primitives with 256-bit intermediates
// ============================================================================

// ============================================================================
// Absolute Value and Host Limb Representation
// ============================================================================

/// Absolute value of a signed 128-bit integer as an unsigned 128-bit integer.
///
/// Goes through an unsigned cast so that `i128::MIN` (whose magnitude is not
/// representable as `i128`) is handled without overflow.
#[inline]
pub const fn abs128(x: i128) -> u128 {
    if x < 0 {
        (x as u128).wrapping_neg()
    } else {
        x as u128
    }
}

/// A signed 128-bit integer split into two 64-bit limbs.
///
/// This is the representation query hosts typically expose for their native
/// big-integer type (a signed upper limb and an unsigned lower limb). The
/// round trip through [`Int128Limbs::from_i128`] and [`Int128Limbs::to_i128`]
/// is lossless over the full signed 128-bit range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Int128Limbs {
    /// Upper 64 bits, carrying the sign
    pub hi: i64,
    /// Lower 64 bits
    pub lo: u64,
}

impl Int128Limbs {
    /// Split a signed 128-bit value into limbs.
    #[inline]
    pub const fn from_i128(value: i128) -> Self {
        Self {
            hi: (value >> 64) as i64,
            lo: value as u64,
        }
    }

    /// Reassemble the signed 128-bit value.
    #[inline]
    pub const fn to_i128(self) -> i128 {
        ((self.hi as i128) << 64) | (self.lo as i128)
    }
}

// ============================================================================
// 256-bit Unsigned Intermediate
// ============================================================================

/// An unsigned 256-bit value as two 128-bit halves: `hi * 2^128 + lo`.
///
/// Used only as scratch space for products too large for 128 bits; never
/// persisted or compared across calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UInt256 {
    /// Upper 128 bits
    pub hi: u128,
    /// Lower 128 bits
    pub lo: u128,
}

/// Multiply two unsigned 128-bit values into an exact 256-bit product.
///
/// Schoolbook multiplication on 64-bit limbs: four partial products combined
/// with explicit carry propagation. Carries on the middle-term addition and
/// the low-128-bit addition are detected by comparing the wrapped sum against
/// an addend; this is unsigned modular arithmetic, so no overflow trap fires.
#[inline]
pub const fn mul128(a: u128, b: u128) -> UInt256 {
    let a_lo = a as u64 as u128;
    let a_hi = (a >> 64) as u64 as u128;
    let b_lo = b as u64 as u128;
    let b_hi = (b >> 64) as u64 as u128;

    // Four partial products, each fits in u128
    let p0 = a_lo * b_lo;
    let p1 = a_lo * b_hi;
    let p2 = a_hi * b_lo;
    let p3 = a_hi * b_hi;

    // Middle terms; a carry here is worth 2^64 in the high half
    let mid = p1.wrapping_add(p2);
    let mid_carry = if mid < p1 { 1u128 << 64 } else { 0 };

    // Low 128 bits; a carry here is worth 1 in the high half
    let lo = p0.wrapping_add(mid << 64);
    let lo_carry = if lo < p0 { 1u128 } else { 0 };

    let hi = p3 + (mid >> 64) + mid_carry + lo_carry;

    UInt256 { hi, lo }
}

/// Divide a 256-bit unsigned value by a 128-bit unsigned divisor.
///
/// Returns `(quotient, remainder)` with `0 <= remainder < den`.
///
/// # Preconditions
/// - `den != 0`
/// - the true quotient fits in 128 bits, i.e. `num.hi < den`. The kernel's
///   use sites only ever divide a product of two values below 10^38 by a
///   divisor below 10^38 after sign stripping, so this always holds there;
///   violating it is a logic error, not a runtime condition.
///
/// When the high half is zero a single native division suffices. Otherwise
/// the low 128 bits are processed MSB-first with a running remainder seeded
/// from `num.hi`, shift-and-subtract style. The bit shifted out of the
/// remainder is tracked explicitly so divisors with the top bit set divide
/// correctly.
#[inline]
pub fn div256_by_128(num: UInt256, den: u128) -> (u128, u128) {
    debug_assert!(den != 0, "divisor must be nonzero");
    debug_assert!(num.hi < den, "quotient must fit in 128 bits");

    if num.hi == 0 {
        return (num.lo / den, num.lo % den);
    }

    let mut quotient: u128 = 0;
    let mut remainder = num.hi;

    for bit in (0..128u32).rev() {
        // remainder < den, so the shifted value is below 2 * den and at most
        // one subtraction restores the invariant. If the shift pushed the
        // remainder past 2^128 the subtraction is mandatory.
        let shifted_out = remainder >> 127;
        remainder = (remainder << 1) | ((num.lo >> bit) & 1);
        if shifted_out == 1 || remainder >= den {
            remainder = remainder.wrapping_sub(den);
            quotient |= 1 << bit;
        }
    }

    (quotient, remainder)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_abs128_basic() {
        assert_eq!(abs128(0), 0);
        assert_eq!(abs128(42), 42);
        assert_eq!(abs128(-42), 42);
        assert_eq!(abs128(i128::MAX), i128::MAX as u128);
    }

    #[test]
    fn test_abs128_most_negative() {
        // |i128::MIN| = 2^127, not representable as i128
        assert_eq!(abs128(i128::MIN), 1u128 << 127);
    }

    #[test]
    fn test_limbs_round_trip_extremes() {
        for v in [0i128, 1, -1, i128::MAX, i128::MIN, 10i128.pow(38) - 1] {
            assert_eq!(Int128Limbs::from_i128(v).to_i128(), v);
        }
    }

    #[test]
    fn test_limbs_sign_in_upper() {
        let limbs = Int128Limbs::from_i128(-1);
        assert_eq!(limbs.hi, -1);
        assert_eq!(limbs.lo, u64::MAX);
    }

    #[test]
    fn test_mul128_small() {
        let p = mul128(6, 7);
        assert_eq!(p, UInt256 { hi: 0, lo: 42 });
    }

    #[test]
    fn test_mul128_crosses_128_bits() {
        // (2^127) * 2 = 2^128
        let p = mul128(1u128 << 127, 2);
        assert_eq!(p, UInt256 { hi: 1, lo: 0 });
    }

    #[test]
    fn test_mul128_max_operands() {
        // (2^128 - 1)^2 = 2^256 - 2^129 + 1
        let p = mul128(u128::MAX, u128::MAX);
        assert_eq!(p.hi, u128::MAX - 1);
        assert_eq!(p.lo, 1);
    }

    #[test]
    fn test_mul128_middle_carry() {
        // Operands near u128::MAX make the p1 + p2 middle sum wrap
        let a = u128::MAX - 5;
        let b = u128::MAX - 11;
        let p = mul128(a, b);
        let (q, r) = div256_by_128(p, a);
        assert_eq!((q, r), (b, 0));
    }

    #[test]
    fn test_div256_fast_path() {
        let num = UInt256 { hi: 0, lo: 1000 };
        assert_eq!(div256_by_128(num, 7), (142, 6));
    }

    #[test]
    fn test_div256_slow_path() {
        // (10^38) * (10^38) / 10^38 = 10^38 exactly
        let pow38 = 10u128.pow(38);
        let p = mul128(pow38, pow38);
        assert!(p.hi != 0);
        assert_eq!(div256_by_128(p, pow38), (pow38, 0));
    }

    #[test]
    fn test_div256_remainder_bounds() {
        let pow38 = 10u128.pow(38);
        let p = mul128(pow38 - 1, pow38);
        let den = pow38 - 3;
        let (q, r) = div256_by_128(p, den);
        assert!(r < den);
        // Verify q * den + r reassembles the numerator
        let back = mul128(q, den);
        let (lo, carry) = back.lo.overflowing_add(r);
        let hi = back.hi + u128::from(carry);
        assert_eq!(UInt256 { hi, lo }, p);
    }

    #[test]
    fn test_div256_divisor_top_bit_set() {
        // Divisor with bit 127 set exercises the shift carry tracking
        let den = (1u128 << 127) | 12345;
        let num = mul128(den, 99999);
        assert_eq!(div256_by_128(num, den), (99999, 0));
    }

    proptest! {
        #[test]
        fn prop_limbs_round_trip(v in any::<i128>()) {
            prop_assert_eq!(Int128Limbs::from_i128(v).to_i128(), v);
        }

        #[test]
        fn prop_abs128_matches_unsigned_magnitude(v in any::<i128>()) {
            let expected = if v < 0 {
                (v as u128).wrapping_neg()
            } else {
                v as u128
            };
            prop_assert_eq!(abs128(v), expected);
        }

        #[test]
        fn prop_mul_then_div_round_trips(a in 1u128.., b in any::<u128>()) {
            let product = mul128(a, b);
            prop_assert_eq!(div256_by_128(product, a), (b, 0));
        }

        #[test]
        fn prop_mul128_matches_native_for_64_bit(a in any::<u64>(), b in any::<u64>()) {
            let p = mul128(u128::from(a), u128::from(b));
            prop_assert_eq!(p.hi, 0);
            prop_assert_eq!(p.lo, u128::from(a) * u128::from(b));
        }
    }
}
