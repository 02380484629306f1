// ============================================================================
// Power-of-10 Table
// O(1) lookup of 10^0 .. 10^38 as unsigned 128-bit constants
// ============================================================================

/// Largest exponent in the table; 10^38 fills most of the u128 range.
pub const MAX_POW10_EXP: u32 = 38;

/// Compute the table at compile time by repeated multiplication by 10.
const fn build_pow10_table() -> [u128; 39] {
    let mut table = [0u128; 39];
    let mut value: u128 = 1;
    let mut i = 0;
    while i <= MAX_POW10_EXP as usize {
        table[i] = value;
        if i < MAX_POW10_EXP as usize {
            value *= 10;
        }
        i += 1;
    }
    table
}

const POW10: [u128; 39] = build_pow10_table();

/// Look up 10^exp as an unsigned 128-bit value.
///
/// # Preconditions
/// `exp <= 38`. The decimal domain never requires scaling beyond 10^38, so
/// an out-of-range exponent is a caller bug: fatal assertion in debug
/// builds, unreachable in correct callers.
#[inline]
pub fn pow10_128(exp: u32) -> u128 {
    debug_assert!(exp <= MAX_POW10_EXP, "pow10 exponent {exp} out of range");
    POW10[exp as usize]
}
