// ============================================================================
// Decimal Scalars
// Width-tagged result values and API-boundary conversions
// ============================================================================

use super::{DecimalType, PhysicalWidth};
use crate::numeric::{pow10_128, NumericError, NumericResult};
use rust_decimal::Decimal;

/// A decimal result value narrowed to its physical width.
///
/// The kernel computes every result as a canonical signed 128-bit scaled
/// integer; the host stores it at the width implied by the result precision.
/// The scale stays with the type descriptor, not the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecimalScalar {
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Int128(i128),
}

impl DecimalScalar {
    /// Narrow a canonical 128-bit result to the given width.
    ///
    /// Infallible by construction: the result precision bounds the digit
    /// count, and the width was chosen from that precision. A value outside
    /// the width's range indicates a defect upstream (debug assertion).
    #[inline]
    pub fn narrow(value: i128, width: PhysicalWidth) -> Self {
        match width {
            PhysicalWidth::Int16 => {
                debug_assert!(i16::try_from(value).is_ok(), "value exceeds 16-bit width");
                DecimalScalar::Int16(value as i16)
            },
            PhysicalWidth::Int32 => {
                debug_assert!(i32::try_from(value).is_ok(), "value exceeds 32-bit width");
                DecimalScalar::Int32(value as i32)
            },
            PhysicalWidth::Int64 => {
                debug_assert!(i64::try_from(value).is_ok(), "value exceeds 64-bit width");
                DecimalScalar::Int64(value as i64)
            },
            PhysicalWidth::Int128 => DecimalScalar::Int128(value),
        }
    }

    /// Widen back to the canonical 128-bit representation.
    #[inline]
    pub const fn widen(self) -> i128 {
        match self {
            DecimalScalar::Int16(v) => v as i128,
            DecimalScalar::Int32(v) => v as i128,
            DecimalScalar::Int64(v) => v as i128,
            DecimalScalar::Int128(v) => v,
        }
    }

    /// The width this scalar is stored at.
    #[inline]
    pub const fn width(self) -> PhysicalWidth {
        match self {
            DecimalScalar::Int16(_) => PhysicalWidth::Int16,
            DecimalScalar::Int32(_) => PhysicalWidth::Int32,
            DecimalScalar::Int64(_) => PhysicalWidth::Int64,
            DecimalScalar::Int128(_) => PhysicalWidth::Int128,
        }
    }

    /// Convert to a `rust_decimal::Decimal` at the given scale.
    ///
    /// Intended for API boundaries only (display, client protocols); the
    /// kernel never computes with `Decimal`.
    ///
    /// # Errors
    /// `PrecisionLoss` when the value or scale falls outside
    /// `rust_decimal`'s 96-bit / 28-digit range.
    pub fn to_decimal(self, scale: u8) -> NumericResult<Decimal> {
        Decimal::try_from_i128_with_scale(self.widen(), u32::from(scale))
            .map_err(|_| NumericError::PrecisionLoss)
    }

    /// Convert from a `rust_decimal::Decimal` into the scaled integer form
    /// of `ty`, narrowed to the type's width.
    ///
    /// Intended for API boundaries only (parsing user input).
    ///
    /// # Errors
    /// - `PrecisionLoss` when the decimal has more fractional digits than
    ///   `ty` and they are not all zero
    /// - `Overflow` when the rescaled value exceeds `ty`'s precision
    pub fn from_decimal(d: Decimal, ty: DecimalType) -> NumericResult<Self> {
        let value = scaled_from_decimal(d, ty)?;
        Ok(Self::narrow(value, ty.physical_width()))
    }
}

/// Rescale a `Decimal` to the canonical scaled-i128 form of `ty`.
pub(crate) fn scaled_from_decimal(d: Decimal, ty: DecimalType) -> NumericResult<i128> {
    let mantissa = d.mantissa();
    let from_scale = d.scale();
    let to_scale = u32::from(ty.scale());

    let value = if from_scale <= to_scale {
        let factor = pow10_128(to_scale - from_scale) as i128;
        mantissa.checked_mul(factor).ok_or(NumericError::Overflow)?
    } else {
        let factor = pow10_128(from_scale - to_scale) as i128;
        if mantissa % factor != 0 {
            return Err(NumericError::PrecisionLoss);
        }
        mantissa / factor
    };

    // Precision bound: |value| < 10^precision
    if value.unsigned_abs() >= pow10_128(u32::from(ty.precision())) {
        return Err(NumericError::Overflow);
    }
    Ok(value)
}

/// Render a scaled integer as a decimal string (`value * 10^-scale`).
///
/// Handles the `-0.xxx` case where the integer part is zero but the value
/// is negative.
pub fn format_scaled(value: i128, scale: u8) -> String {
    if scale == 0 {
        return value.to_string();
    }
    let magnitude = value.unsigned_abs();
    let divisor = pow10_128(u32::from(scale));
    let int_part = magnitude / divisor;
    let frac_part = magnitude % divisor;
    let sign = if value < 0 { "-" } else { "" };
    format!(
        "{sign}{int_part}.{frac_part:0>width$}",
        width = scale as usize
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ty(p: u8, s: u8) -> DecimalType {
        DecimalType::new(p, s).unwrap()
    }

    #[test]
    fn test_narrow_widen_round_trip() {
        let cases = [
            (42i128, PhysicalWidth::Int16),
            (-9_999i128, PhysicalWidth::Int16),
            (123_456_789i128, PhysicalWidth::Int32),
            (-(10i128.pow(17)), PhysicalWidth::Int64),
            (10i128.pow(37), PhysicalWidth::Int128),
        ];
        for (value, width) in cases {
            let scalar = DecimalScalar::narrow(value, width);
            assert_eq!(scalar.width(), width);
            assert_eq!(scalar.widen(), value);
        }
    }

    #[test]
    fn test_from_decimal_rescales_up() {
        // 123.45 into DECIMAL(9,6) -> 123450000 at scale 6
        let d = Decimal::new(12_345, 2);
        let scalar = DecimalScalar::from_decimal(d, ty(9, 6)).unwrap();
        assert_eq!(scalar, DecimalScalar::Int32(123_450_000));
    }

    #[test]
    fn test_from_decimal_rescales_down_when_exact() {
        // 1.500 into DECIMAL(5,1) is exact
        let d = Decimal::new(1_500, 3);
        let scalar = DecimalScalar::from_decimal(d, ty(5, 1)).unwrap();
        assert_eq!(scalar, DecimalScalar::Int16(15));

        // 1.501 into DECIMAL(5,1) loses digits
        let d = Decimal::new(1_501, 3);
        assert_eq!(
            DecimalScalar::from_decimal(d, ty(5, 1)).unwrap_err(),
            NumericError::PrecisionLoss
        );
    }

    #[test]
    fn test_from_decimal_enforces_precision() {
        // 1000.00 does not fit DECIMAL(5,2)
        let d = Decimal::new(100_000, 2);
        assert_eq!(
            DecimalScalar::from_decimal(d, ty(5, 2)).unwrap_err(),
            NumericError::Overflow
        );
        // 999.99 does
        let d = Decimal::new(99_999, 2);
        assert!(DecimalScalar::from_decimal(d, ty(5, 2)).is_ok());
    }

    #[test]
    fn test_to_decimal() {
        let scalar = DecimalScalar::Int64(6_172_500_000);
        let d = scalar.to_decimal(8).unwrap();
        assert_eq!(d.to_string(), "61.72500000");
    }

    #[test]
    fn test_to_decimal_scale_out_of_range() {
        // rust_decimal caps at 28 fractional digits
        let scalar = DecimalScalar::Int128(1);
        assert_eq!(
            scalar.to_decimal(29).unwrap_err(),
            NumericError::PrecisionLoss
        );
    }

    #[test]
    fn test_format_scaled() {
        assert_eq!(format_scaled(6_172_500_000, 8), "61.72500000");
        assert_eq!(format_scaled(-13, 2), "-0.13");
        assert_eq!(format_scaled(0, 4), "0.0000");
        assert_eq!(format_scaled(42, 0), "42");
        assert_eq!(format_scaled(-1, 6), "-0.000001");
    }
}
