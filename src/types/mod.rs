// ============================================================================
// Decimal Types Module
// Type descriptors, physical width dispatch and result scalars
// ============================================================================

use crate::numeric::{NumericError, NumericResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod rules;
mod scalar;

pub use rules::{avg_type, division_type, sum_type, DivisionType, MIN_ADJUSTED_SCALE};
pub use scalar::{format_scaled, DecimalScalar};

/// Maximum number of significant decimal digits in the domain.
pub const MAX_PRECISION: u8 = 38;

// ============================================================================
// Decimal Type Descriptor
// ============================================================================

/// A decimal type descriptor: `(precision, scale)` with
/// `0 <= scale <= precision <= 38`.
///
/// Values of this type are scaled integers: an integer `v` represents the
/// decimal value `v * 10^-scale`. The descriptor travels with the query
/// plan, not with the values; the kernel always computes in signed 128-bit
/// arithmetic and the result is narrowed to [`DecimalType::physical_width`]
/// at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecimalType {
    precision: u8,
    scale: u8,
}

impl DecimalType {
    /// Create a descriptor, validating the precision/scale bounds.
    ///
    /// # Errors
    /// - `InvalidInput` when `precision` is zero or above 38
    /// - `ScaleOutOfRange` when `scale > precision`
    pub fn new(precision: u8, scale: u8) -> NumericResult<Self> {
        if precision == 0 || precision > MAX_PRECISION {
            return Err(NumericError::InvalidInput);
        }
        if scale > precision {
            return Err(NumericError::ScaleOutOfRange);
        }
        Ok(Self { precision, scale })
    }

    /// Total number of significant digits.
    #[inline]
    pub const fn precision(self) -> u8 {
        self.precision
    }

    /// Number of digits after the decimal point.
    #[inline]
    pub const fn scale(self) -> u8 {
        self.scale
    }

    /// The physical integer width backing values of this type.
    ///
    /// Chosen once per bound operation from the result precision, never per
    /// row. Every precision up to 38 maps to a width, so this cannot fail.
    #[inline]
    pub const fn physical_width(self) -> PhysicalWidth {
        match self.precision {
            0..=4 => PhysicalWidth::Int16,
            5..=9 => PhysicalWidth::Int32,
            10..=18 => PhysicalWidth::Int64,
            _ => PhysicalWidth::Int128,
        }
    }
}

impl fmt::Display for DecimalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DECIMAL({},{})", self.precision, self.scale)
    }
}

// ============================================================================
// Physical Width
// ============================================================================

/// Physical integer width backing a decimal result.
///
/// The kernel computes canonically in 128 bits; the host narrows the result
/// to the smallest width the result precision fits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PhysicalWidth {
    /// Up to 4 digits
    Int16,
    /// Up to 9 digits
    Int32,
    /// Up to 18 digits
    Int64,
    /// Up to 38 digits
    Int128,
}

impl PhysicalWidth {
    /// Width in bits.
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            PhysicalWidth::Int16 => 16,
            PhysicalWidth::Int32 => 32,
            PhysicalWidth::Int64 => 64,
            PhysicalWidth::Int128 => 128,
        }
    }
}
