// ============================================================================
// Precision Rules
// Spark result-type inference for division, sum and average
// ============================================================================
//
// The formulas and their literal constants (38, 6, 10, 4, 18) are fixed by
// the reference engine's specification and must be reproduced exactly; they
// are not tunable.

use super::{DecimalType, MAX_PRECISION};

/// Minimum result scale a division is allowed to keep when the precision
/// is clamped to 38 digits.
pub const MIN_ADJUSTED_SCALE: u8 = 6;

/// SUM grows precision by 10 digits (headroom for ~10^10 rows).
const SUM_PRECISION_GROWTH: u8 = 10;

/// AVG grows precision by 4 digits and scale by 4 fractional digits.
const AVG_PRECISION_GROWTH: u8 = 4;
const AVG_SCALE_GROWTH: u8 = 4;

/// AVG's scale growth is capped at 18 fractional digits.
const AVG_MAX_SCALE: u8 = 18;

// ============================================================================
// Division
// ============================================================================

/// Result of division type inference: the output type plus the scale
/// adjustment the kernel applies to the dividend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivisionType {
    /// Inferred result type
    pub result: DecimalType,
    /// Power-of-ten factor applied to the dividend before dividing
    /// (`result_scale - s1 + s2`, non-negative by construction)
    pub scale_adjustment: u32,
}

/// Infer the result type for `DECIMAL(p1,s1) / DECIMAL(p2,s2)`.
///
/// ```text
/// result_scale     = max(6, s1 + p2 + 1)
/// result_precision = (p1 - s1) + s2 + result_scale
/// ```
///
/// When the raw precision exceeds 38 digits, integer digits are preserved
/// ahead of fractional ones: the scale gives way down to `min(result_scale,
/// 6)` and the precision is clamped to 38.
pub fn division_type(lhs: DecimalType, rhs: DecimalType) -> DivisionType {
    let (p1, s1) = (lhs.precision, lhs.scale);
    let (p2, s2) = (rhs.precision, rhs.scale);

    let mut scale = MIN_ADJUSTED_SCALE.max(s1 + p2 + 1);
    let mut precision = (p1 - s1) + s2 + scale;

    if precision > MAX_PRECISION {
        let int_digits = precision - scale;
        let min_scale = scale.min(MIN_ADJUSTED_SCALE);
        scale = if MAX_PRECISION > int_digits {
            (MAX_PRECISION - int_digits).max(min_scale)
        } else {
            min_scale
        };
        precision = MAX_PRECISION;
    }

    let scale_adjustment = i32::from(scale) - i32::from(s1) + i32::from(s2);
    debug_assert!(scale_adjustment >= 0, "negative adjustment is a type-inference bug");

    DivisionType {
        result: DecimalType { precision, scale },
        scale_adjustment: scale_adjustment as u32,
    }
}

// ============================================================================
// Sum and Average
// ============================================================================

/// Result type for `SUM(DECIMAL(p,s))`: `DECIMAL(min(p + 10, 38), s)`.
pub fn sum_type(input: DecimalType) -> DecimalType {
    DecimalType {
        precision: (input.precision + SUM_PRECISION_GROWTH).min(MAX_PRECISION),
        scale: input.scale,
    }
}

/// Result type for `AVG(DECIMAL(p,s))`:
/// `DECIMAL(min(p + 4, 38), min(min(s + 4, 18), precision))`.
///
/// The scale is additionally capped by the final precision so that
/// `scale <= precision` always holds.
pub fn avg_type(input: DecimalType) -> DecimalType {
    let precision = (input.precision + AVG_PRECISION_GROWTH).min(MAX_PRECISION);
    let scale = (input.scale + AVG_SCALE_GROWTH)
        .min(AVG_MAX_SCALE)
        .min(precision);
    DecimalType { precision, scale }
}

// ============================================================================
// Tests
// ============================================================================
