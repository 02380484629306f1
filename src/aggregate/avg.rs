// ============================================================================
// Average Accumulator
// Sum/count state for AVG; division happens only at finalize
// ============================================================================

use crate::numeric::div_half_up;

/// Accumulator for `AVG` over decimal inputs.
///
/// Holds the raw scaled sum and the row count; the average is one HALF_UP
/// division at finalize time, never computed incrementally. A zero count
/// finalizes to `None` (NULL), so the divide-by-zero case cannot reach the
/// kernel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecimalAvgState {
    sum: i128,
    count: u64,
}

impl DecimalAvgState {
    /// Fresh state: no rows seen.
    #[inline]
    pub const fn new() -> Self {
        Self { sum: 0, count: 0 }
    }

    /// Fold one scaled value into the state.
    #[inline]
    pub fn update(&mut self, input: i128) {
        self.count += 1;
        self.sum += input;
    }

    /// Fold a constant value repeated `count` times (constant-batch form).
    #[inline]
    pub fn update_repeated(&mut self, input: i128, count: u64) {
        self.count += count;
        self.sum += input * i128::from(count);
    }

    /// Merge a partial aggregate. Associative and commutative.
    #[inline]
    pub fn combine(&mut self, other: &Self) {
        self.count += other.count;
        self.sum += other.sum;
    }

    /// Rows folded so far.
    #[inline]
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Finalize to the average at the output scale.
    ///
    /// `scale_adjustment` is `result_scale - input_scale`, computed once at
    /// bind time. Returns `None` when no rows were seen.
    #[inline]
    pub fn finalize(&self, scale_adjustment: u32) -> Option<i128> {
        if self.count == 0 {
            return None;
        }
        Some(div_half_up(self.sum, self.count as i128, scale_adjustment))
    }
}
