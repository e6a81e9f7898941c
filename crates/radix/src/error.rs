//! Conversion error type.

use thiserror::Error;

use crate::constants::{MAX_RADIX, MIN_RADIX};

/// Errors returned by [`to_radix_string`](crate::to_radix_string).
///
/// Only [`RadixError::OutOfRange`] is a user input error. The remaining
/// variants report a broken arithmetic assumption inside the converter and
/// are never expected in correct operation; they carry the offending cursor
/// or value for diagnosis.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RadixError {
    /// The requested radix is outside the supported range.
    #[error("radix {0} out of range, must be between {min} and {max}", min = MIN_RADIX, max = MAX_RADIX)]
    OutOfRange(u32),
    /// The digit tolerance collapsed to zero or below.
    #[error("digit tolerance collapsed to {0}")]
    BadTolerance(f64),
    /// The fraction cursor ran past the end of the digit buffer.
    #[error("fraction cursor {0} ran past the digit buffer")]
    FractionOverflow(usize),
    /// The integer cursor ran past the start of the digit buffer.
    #[error("integer cursor underflowed the digit buffer at {0}")]
    IntegerUnderflow(usize),
    /// A carry walk reached the pivot cell but found no radix point there.
    #[error("carry walk reached index {0} without finding the radix point")]
    MissingRadixPoint(usize),
}
