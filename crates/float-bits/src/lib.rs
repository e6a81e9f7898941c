//! Bit-level inspection of IEEE-754 double-precision values.
//!
//! This crate provides [`F64Bits`], a read-only view of an `f64` bit pattern
//! that exposes the sign, significand, and binary exponent, plus the next
//! representable value. It exists so callers that reason about floating-point
//! precision (such as the `radix` formatter) can do so without ever touching
//! the bits through unchecked memory aliasing.
//!
//! # Example
//!
//! ```
//! use radix_float_bits::F64Bits;
//!
//! let one = F64Bits::wrap(1.0);
//! assert_eq!(one.sign(), 1);
//! assert_eq!(one.significand(), 1 << 52);
//! assert_eq!(one.exponent(), -52);
//! assert!(F64Bits::wrap(1.0).next() > 1.0);
//! ```

mod f64_bits;

pub use f64_bits::F64Bits;
