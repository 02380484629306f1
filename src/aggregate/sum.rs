// ============================================================================
// Sum Accumulators
// Raw scaled-integer summation state for SUM
// ============================================================================

/// Accumulator for `SUM` over decimal inputs.
///
/// Accumulates raw 128-bit scaled integers; no rounding is ever needed. The
/// result precision grows by 10 digits over the input, which leaves headroom
/// for around 10^10 rows of maximal values — overflowing that is a defect in
/// the inferred types upstream, not a runtime condition.
///
/// `is_set` distinguishes "no rows seen" (a NULL result) from "rows summed
/// to zero". The host skips NULL input rows before they reach the state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecimalSumState {
    value: i128,
    is_set: bool,
}

impl DecimalSumState {
    /// Fresh state: no rows seen.
    #[inline]
    pub const fn new() -> Self {
        Self {
            value: 0,
            is_set: false,
        }
    }

    /// Fold one scaled value into the sum.
    #[inline]
    pub fn update(&mut self, input: i128) {
        self.is_set = true;
        self.value += input;
    }

    /// Fold a constant value repeated `count` times (constant-batch form).
    #[inline]
    pub fn update_repeated(&mut self, input: i128, count: u64) {
        self.is_set = true;
        self.value += input * i128::from(count);
    }

    /// Merge a partial aggregate. Associative and commutative, so partials
    /// computed on disjoint row ranges combine in any order.
    #[inline]
    pub fn combine(&mut self, other: &Self) {
        if other.is_set {
            self.is_set = true;
            self.value += other.value;
        }
    }

    /// The summed scaled value, or `None` when no rows were seen.
    #[inline]
    pub const fn finalize(&self) -> Option<i128> {
        if self.is_set {
            Some(self.value)
        } else {
            None
        }
    }
}

/// Accumulator for `SUM` over integer inputs (Spark returns BIGINT).
///
/// Accumulation wraps on overflow, matching the reference engine's
/// non-ANSI behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegerSumState {
    value: i64,
    is_set: bool,
}

impl IntegerSumState {
    /// Fresh state: no rows seen.
    #[inline]
    pub const fn new() -> Self {
        Self {
            value: 0,
            is_set: false,
        }
    }

    /// Fold one value into the sum.
    #[inline]
    pub fn update(&mut self, input: i64) {
        self.is_set = true;
        self.value = self.value.wrapping_add(input);
    }

    /// Fold a constant value repeated `count` times.
    #[inline]
    pub fn update_repeated(&mut self, input: i64, count: u64) {
        self.is_set = true;
        self.value = self.value.wrapping_add(input.wrapping_mul(count as i64));
    }

    /// Merge a partial aggregate.
    #[inline]
    pub fn combine(&mut self, other: &Self) {
        if other.is_set {
            self.is_set = true;
            self.value = self.value.wrapping_add(other.value);
        }
    }

    /// The sum as BIGINT, or `None` when no rows were seen.
    #[inline]
    pub const fn finalize(&self) -> Option<i64> {
        if self.is_set {
            Some(self.value)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sum_is_null() {
        assert_eq!(DecimalSumState::new().finalize(), None);
        assert_eq!(IntegerSumState::new().finalize(), None);
    }

    #[test]
    fn test_zero_sum_is_not_null() {
        let mut state = DecimalSumState::new();
        state.update(5);
        state.update(-5);
        assert_eq!(state.finalize(), Some(0));
    }

    #[test]
    fn test_update_repeated_matches_loop() {
        let mut batched = DecimalSumState::new();
        batched.update_repeated(123, 1000);

        let mut looped = DecimalSumState::new();
        for _ in 0..1000 {
            looped.update(123);
        }
        assert_eq!(batched, looped);
    }

    #[test]
    fn test_combine_is_order_independent() {
        let mut left = DecimalSumState::new();
        left.update(10);
        left.update(20);

        let mut right = DecimalSumState::new();
        right.update(-5);

        let mut ab = left;
        ab.combine(&right);
        let mut ba = right;
        ba.combine(&left);
        assert_eq!(ab.finalize(), ba.finalize());
        assert_eq!(ab.finalize(), Some(25));
    }

    #[test]
    fn test_combine_empty_partial_keeps_null() {
        let mut state = DecimalSumState::new();
        state.combine(&DecimalSumState::new());
        assert_eq!(state.finalize(), None);

        state.update(7);
        state.combine(&DecimalSumState::new());
        assert_eq!(state.finalize(), Some(7));
    }

    #[test]
    fn test_integer_sum_wraps() {
        let mut state = IntegerSumState::new();
        state.update(i64::MAX);
        state.update(1);
        assert_eq!(state.finalize(), Some(i64::MIN));
    }
}
