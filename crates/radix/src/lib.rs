//! Exact conversion of `f64` values to their textual representation in an
//! arbitrary radix between 2 and 36.
//!
//! Unlike shortest-representation formatters, this crate reproduces the
//! digits a double actually carries: fraction digits are emitted until the
//! remainder is no longer distinguishable at the input's own precision, and
//! rounding is resolved round-to-even with carries propagated back through
//! already-written digits. Integer digits beyond double precision are
//! zero-padded rather than silently wrong.
//!
//! # Example
//!
//! ```
//! use radix::{to_radix_string, RadixError};
//!
//! assert_eq!(to_radix_string(1.2567, 16).unwrap(), "1.41b71758e2196");
//! assert_eq!(to_radix_string(-255.0, 16).unwrap(), "-ff");
//! assert_eq!(to_radix_string(f64::NAN, 8).unwrap(), "NaN");
//! assert_eq!(to_radix_string(1.0, 37), Err(RadixError::OutOfRange(37)));
//! ```

mod constants;
mod error;
mod to_radix_string;

pub use constants::{DIGITS, MAX_RADIX, MIN_RADIX};
pub use error::RadixError;
pub use to_radix_string::to_radix_string;
