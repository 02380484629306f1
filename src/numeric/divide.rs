// ============================================================================
// HALF_UP Decimal Division
// Scaled-integer division with round-half-away-from-zero semantics
// ============================================================================

use super::pow10::pow10_128;
use super::wide::{abs128, div256_by_128, mul128};

/// Divide two scaled 128-bit integers with HALF_UP rounding.
///
/// Computes `round_half_up((a * 10^scale_adj) / b)` as a signed 128-bit
/// integer. `scale_adj` is the power-of-ten factor that lands the quotient
/// at the result scale in one step (`result_scale - dividend_scale +
/// divisor_scale`, always non-negative for validly inferred types).
///
/// Rounding happens on unsigned magnitudes first and the sign is applied
/// second; rounding a signed quotient instead would be off by one at
/// negative midpoints. At an exact midpoint the quotient is always rounded
/// away from zero, never to even.
///
/// # Preconditions
/// - `b != 0` — callers map a zero divisor to a NULL/absent result before
///   invoking the kernel; there is no error channel here.
/// - the rounded quotient fits in `i128`, which holds by construction when
///   `scale_adj` comes from the precision rules.
pub fn div_half_up(a: i128, b: i128, scale_adj: u32) -> i128 {
    debug_assert!(b != 0, "caller must reject a zero divisor before dividing");

    let negative = (a < 0) != (b < 0);
    let abs_a = abs128(a);
    let abs_b = abs128(b);

    let (mut quotient, remainder) = if scale_adj == 0 {
        (abs_a / abs_b, abs_a % abs_b)
    } else {
        let pow10 = pow10_128(scale_adj);
        match abs_a.checked_mul(pow10) {
            // Fast path: the scaled dividend fits in 128 bits
            Some(scaled) => (scaled / abs_b, scaled % abs_b),
            // Slow path: 256-bit product, then 256/128 division. scale_adj
            // can reach 32 while |a| is itself near 10^38, so the scaled
            // dividend can need up to 256 bits even though the final
            // quotient fits in 128.
            None => div256_by_128(mul128(abs_a, pow10), abs_b),
        }
    };

    // HALF_UP: round away from zero once the remainder reaches half the
    // divisor. remainder < abs_b <= 10^38 and 2 * 10^38 < 2^128, so the
    // doubling cannot wrap.
    if remainder * 2 >= abs_b {
        quotient += 1;
    }

    let magnitude = quotient as i128;
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;
    use proptest::prelude::*;

    /// Arbitrary-precision reference: same contract as `div_half_up`, but
    /// computed with BigUint magnitudes. Returns None when the rounded
    /// quotient does not fit in i128.
    fn oracle(a: i128, b: i128, scale_adj: u32) -> Option<i128> {
        let negative = (a < 0) != (b < 0);
        let abs_a = BigUint::from(abs128(a));
        let abs_b = BigUint::from(abs128(b));
        let scaled = abs_a * BigUint::from(10u32).pow(scale_adj);
        let mut q = &scaled / &abs_b;
        let r = &scaled % &abs_b;
        if r * 2u32 >= abs_b {
            q += 1u32;
        }
        let magnitude = u128::try_from(q).ok()?;
        if negative {
            (magnitude <= (1u128 << 127)).then(|| (magnitude as i128).wrapping_neg())
        } else {
            (magnitude <= i128::MAX as u128).then_some(magnitude as i128)
        }
    }

    #[test]
    fn test_unscaled_truncation_and_rounding() {
        assert_eq!(div_half_up(10, 2, 0), 5);
        assert_eq!(div_half_up(1, 3, 0), 0); // 0.33 rounds down
        assert_eq!(div_half_up(2, 3, 0), 1); // 0.67 rounds up
        assert_eq!(div_half_up(7, 2, 0), 4); // 3.5 rounds up
    }

    #[test]
    fn test_midpoint_rounds_away_from_zero_not_to_even() {
        // 2.5 -> 3 under HALF_UP; half-to-even would give 2
        assert_eq!(div_half_up(5, 2, 0), 3);
        assert_eq!(div_half_up(-5, 2, 0), -3);
        assert_eq!(div_half_up(5, -2, 0), -3);
        assert_eq!(div_half_up(-5, -2, 0), 3);
        // 0.5 -> 1; half-to-even would give 0
        assert_eq!(div_half_up(1, 2, 0), 1);
    }

    #[test]
    fn test_known_quotient_at_scale_8() {
        // 123.45 / 2.00 at result scale 8: scale_adj = 8 - 2 + 2 = 8
        assert_eq!(div_half_up(12_345, 200, 8), 6_172_500_000);
    }

    #[test]
    fn test_scaled_fast_path() {
        // 1 / 3 at 6 fractional digits: 0.333333
        assert_eq!(div_half_up(1, 3, 6), 333_333);
        // 2 / 3 at 6 fractional digits: 0.666667 (HALF_UP on the last digit)
        assert_eq!(div_half_up(2, 3, 6), 666_667);
    }

    #[test]
    fn test_slow_path_known_values() {
        let near_max = 10i128.pow(38) - 1;
        // (10^38 - 1) * 100 needs more than 128 bits
        assert!(abs128(near_max).checked_mul(100).is_none());
        assert_eq!(
            div_half_up(near_max, 1000, 2),
            oracle(near_max, 1000, 2).unwrap()
        );
        assert_eq!(
            div_half_up(near_max, -7_777_777, 4),
            oracle(near_max, -7_777_777, 4).unwrap()
        );
    }

    #[test]
    fn test_slow_path_max_scale_adjustment() {
        let a = 10i128.pow(37);
        let b = 10i128.pow(37);
        // a * 10^38 is far past 128 bits; quotient is exactly 10^38
        assert_eq!(div_half_up(a, b, 38), 10i128.pow(38));
    }

    #[test]
    fn test_negative_dividend_positive_divisor() {
        // -1 / 8 at 2 fractional digits: -0.125 -> -0.13 (away from zero)
        assert_eq!(div_half_up(-1, 8, 3), -125);
        assert_eq!(div_half_up(-1, 8, 2), -13);
    }

    proptest! {
        #[test]
        fn prop_matches_oracle_unscaled(
            a in -(10i128.pow(38) - 1)..10i128.pow(38),
            b in -(10i128.pow(38) - 1)..10i128.pow(38),
        ) {
            prop_assume!(b != 0);
            // |a| / |b| <= |a| < 10^38, so the unscaled quotient always fits
            prop_assert_eq!(div_half_up(a, b, 0), oracle(a, b, 0).unwrap());
        }

        #[test]
        fn prop_matches_oracle_scaled(
            a in -(10i128.pow(38) - 1)..10i128.pow(38),
            b in -(10i128.pow(38) - 1)..10i128.pow(38),
            scale_adj in 0u32..=38,
        ) {
            prop_assume!(b != 0);
            let expected = oracle(a, b, scale_adj);
            prop_assume!(expected.is_some());
            prop_assert_eq!(div_half_up(a, b, scale_adj), expected.unwrap());
        }

        #[test]
        fn prop_sign_symmetry(
            a in -(10i128.pow(30))..10i128.pow(30),
            b in 1i128..10i128.pow(18),
            scale_adj in 0u32..=6,
        ) {
            let q = div_half_up(a, b, scale_adj);
            prop_assert_eq!(div_half_up(-a, b, scale_adj), -q);
            prop_assert_eq!(div_half_up(a, -b, scale_adj), -q);
            prop_assert_eq!(div_half_up(-a, -b, scale_adj), q);
        }

        #[test]
        fn prop_exact_midpoints_round_up_in_magnitude(
            half in 1i128..10i128.pow(18),
            q in 0i128..10i128.pow(18),
        ) {
            // a / b sits exactly halfway between q and q + 1
            let b = 2 * half;
            let a = q * b + half;
            prop_assert_eq!(div_half_up(a, b, 0), q + 1);
            prop_assert_eq!(div_half_up(-a, b, 0), -(q + 1));
        }
    }
}
