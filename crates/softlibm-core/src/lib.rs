//! # softlibm-core
//!
//! Pure-Rust software implementations of `<math.h>` floating-point
//! primitives for a hobby-OS C library.
//!
//! Every function here is computed without hardware transcendental
//! instructions and without calling a host math library: square root by
//! table-seeded Newton-Raphson on the reciprocal root, sine/cosine by
//! Taylor-series evaluation after range reduction, exponential/logarithm
//! by short series over a reduced argument. All operations are pure and
//! allocation-free; the fallible ones return [`MathError`] instead of
//! relying on a shared error side channel (the `errno` convention lives
//! at the ABI boundary).

#![deny(unsafe_code)]

pub mod errno;
pub mod error;
pub mod math;

pub use error::MathError;
