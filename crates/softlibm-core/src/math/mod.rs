//! Mathematical functions.
//!
//! Software implementations of `<math.h>` primitives: square root,
//! trigonometric, exponential/logarithmic, and floating-point splitting
//! and rounding utilities. No hardware FPU transcendentals, no host libm.

pub mod exp;
pub mod float;
pub mod sqrt;
pub mod trig;

pub use exp::{exp, log, pow};
pub use float::{ceil, fabs, floor, fmod, modf, trunc};
pub use sqrt::sqrt;
pub use trig::{cos, cosf, sin, sinf};
