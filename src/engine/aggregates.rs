// ============================================================================
// Bound Aggregates
// Bind-once SUM and AVG: infer the result type, then drive the accumulators
// ============================================================================

use crate::aggregate::{DecimalAvgState, DecimalSumState};
use crate::types::{avg_type, sum_type, DecimalScalar, DecimalType, PhysicalWidth};

// ============================================================================
// SUM
// ============================================================================

/// `SUM` over a decimal input, bound to its input type.
///
/// The result type is `DECIMAL(min(p + 10, 38), s)`; the scale is unchanged,
/// so finalize needs no division or rounding.
#[derive(Debug, Clone, Copy)]
pub struct BoundSum {
    input: DecimalType,
    result: DecimalType,
    width: PhysicalWidth,
}

impl BoundSum {
    /// Bind `SUM` for a decimal input type.
    pub fn bind(input: DecimalType) -> Self {
        let result = sum_type(input);
        let width = result.physical_width();
        tracing::debug!(input = %input, result = %result, ?width, "bound decimal sum");
        Self {
            input,
            result,
            width,
        }
    }

    /// The inferred result type.
    #[inline]
    pub const fn result_type(&self) -> DecimalType {
        self.result
    }

    /// The bound input type.
    #[inline]
    pub const fn input_type(&self) -> DecimalType {
        self.input
    }

    /// Fresh accumulator for one aggregation group.
    #[inline]
    pub const fn init_state(&self) -> DecimalSumState {
        DecimalSumState::new()
    }

    /// Finalize a group's state to a scalar, or `None` when no rows were
    /// seen.
    #[inline]
    pub fn finalize(&self, state: &DecimalSumState) -> Option<DecimalScalar> {
        state
            .finalize()
            .map(|value| DecimalScalar::narrow(value, self.width))
    }
}

// ============================================================================
// AVG
// ============================================================================

/// `AVG` over a decimal input, bound to its input type.
///
/// The result type is `DECIMAL(min(p + 4, 38), min(min(s + 4, 18), p'))`.
/// Finalize divides the raw sum by the row count with HALF_UP rounding at
/// the output scale, using the scale adjustment derived here at bind time.
#[derive(Debug, Clone, Copy)]
pub struct BoundAvg {
    input: DecimalType,
    result: DecimalType,
    scale_adjustment: u32,
    width: PhysicalWidth,
}

impl BoundAvg {
    /// Bind `AVG` for a decimal input type.
    ///
    /// The result scale never drops below the input scale for input scales
    /// up to 18, which covers the reference engine's average domain; the
    /// adjustment is therefore non-negative.
    pub fn bind(input: DecimalType) -> Self {
        let result = avg_type(input);
        debug_assert!(
            result.scale() >= input.scale(),
            "input scale above 18 is outside the average domain"
        );
        let scale_adjustment = u32::from(result.scale() - input.scale());
        let width = result.physical_width();
        tracing::debug!(
            input = %input,
            result = %result,
            scale_adjustment,
            ?width,
            "bound decimal average"
        );
        Self {
            input,
            result,
            scale_adjustment,
            width,
        }
    }

    /// The inferred result type.
    #[inline]
    pub const fn result_type(&self) -> DecimalType {
        self.result
    }

    /// The bound input type.
    #[inline]
    pub const fn input_type(&self) -> DecimalType {
        self.input
    }

    /// The sum-to-average scale adjustment applied at finalize.
    #[inline]
    pub const fn scale_adjustment(&self) -> u32 {
        self.scale_adjustment
    }

    /// Fresh accumulator for one aggregation group.
    #[inline]
    pub const fn init_state(&self) -> DecimalAvgState {
        DecimalAvgState::new()
    }

    /// Finalize a group's state to a scalar, or `None` when no rows were
    /// seen.
    #[inline]
    pub fn finalize(&self, state: &DecimalAvgState) -> Option<DecimalScalar> {
        state
            .finalize(self.scale_adjustment)
            .map(|value| DecimalScalar::narrow(value, self.width))
    }
}
