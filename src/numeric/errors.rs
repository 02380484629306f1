// ============================================================================
// Numeric Errors
// Error types for decimal kernel operations
// ============================================================================

use std::fmt;

/// Errors that can occur at the decimal kernel's API boundary.
///
/// The kernel proper (wide arithmetic, HALF_UP division) is precondition
/// based and never returns these; they surface from descriptor validation
/// and boundary conversions, which is where the host detects bad input
/// before any row is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Result exceeded the 38-digit decimal domain
    Overflow,
    /// Attempted division by zero
    DivisionByZero,
    /// Conversion would lose significant digits
    PrecisionLoss,
    /// Input string or value is invalid
    InvalidInput,
    /// Scale outside the 0..=precision..=38 range
    ScaleOutOfRange,
    /// Result precision maps to no supported physical width
    UnsupportedWidth,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded 38 decimal digits")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::ScaleOutOfRange => {
                write!(f, "scale outside the supported 0..=precision..=38 range")
            },
            NumericError::UnsupportedWidth => {
                write!(f, "no supported physical width for result precision")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
