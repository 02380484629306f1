// ============================================================================
// Bound Division
// Bind-once division operator: infer the result type, then evaluate per row
// ============================================================================

use crate::numeric::div_half_up;
use crate::types::{division_type, DecimalScalar, DecimalType, PhysicalWidth};

/// A decimal division bound to its operand types.
///
/// Binding runs the precision rules once per plan node: the result type,
/// scale adjustment and physical width are fixed before any row is
/// processed. Per-row evaluation is then a single kernel call.
///
/// NULL propagation and the zero-divisor case are handled here, at the host
/// boundary; the kernel itself assumes a nonzero divisor. The reference
/// engine substitutes NULL for `x / 0`, so [`BoundDivision::evaluate`]
/// returns `None` rather than an error.
#[derive(Debug, Clone, Copy)]
pub struct BoundDivision {
    lhs: DecimalType,
    rhs: DecimalType,
    result: DecimalType,
    scale_adjustment: u32,
    width: PhysicalWidth,
}

impl BoundDivision {
    /// Bind `lhs / rhs` for decimal operand types.
    pub fn bind(lhs: DecimalType, rhs: DecimalType) -> Self {
        let inferred = division_type(lhs, rhs);
        let width = inferred.result.physical_width();
        tracing::debug!(
            lhs = %lhs,
            rhs = %rhs,
            result = %inferred.result,
            scale_adjustment = inferred.scale_adjustment,
            ?width,
            "bound decimal division"
        );
        Self {
            lhs,
            rhs,
            result: inferred.result,
            scale_adjustment: inferred.scale_adjustment,
            width,
        }
    }

    /// The inferred result type.
    #[inline]
    pub const fn result_type(&self) -> DecimalType {
        self.result
    }

    /// The dividend scale adjustment applied by the kernel.
    #[inline]
    pub const fn scale_adjustment(&self) -> u32 {
        self.scale_adjustment
    }

    /// The physical width backing the result.
    #[inline]
    pub const fn physical_width(&self) -> PhysicalWidth {
        self.width
    }

    /// The bound operand types.
    #[inline]
    pub const fn operand_types(&self) -> (DecimalType, DecimalType) {
        (self.lhs, self.rhs)
    }

    /// Evaluate one row. `None` operands propagate, and a zero divisor
    /// yields `None` (the reference engine's NULL substitution for `x / 0`).
    #[inline]
    pub fn evaluate(&self, lhs: Option<i128>, rhs: Option<i128>) -> Option<i128> {
        let a = lhs?;
        let b = rhs?;
        if b == 0 {
            return None;
        }
        Some(div_half_up(a, b, self.scale_adjustment))
    }

    /// Evaluate one row and narrow the result to the bound physical width.
    #[inline]
    pub fn evaluate_scalar(
        &self,
        lhs: Option<i128>,
        rhs: Option<i128>,
    ) -> Option<DecimalScalar> {
        self.evaluate(lhs, rhs)
            .map(|value| DecimalScalar::narrow(value, self.width))
    }
}
