//! Exponential, logarithm, and power.
//!
//! `exp` and `log` follow the same recipe as the rest of the library:
//! reduce the argument into a narrow interval through exact arithmetic on
//! the u64 bit view, sum a short fixed-length series, and scale back with
//! exponent-field arithmetic. `pow` handles integral exponents exactly by
//! repeated squaring and routes the general real case through
//! `exp(y * log(x))`.

use crate::error::MathError;
use crate::math::float::{floor, trunc};

const MANTISSA_BITS: u32 = 52;
const MANTISSA_MASK: u64 = 0x000f_ffff_ffff_ffff;
const EXPONENT_FIELD_MASK: u64 = 0x7ff0_0000_0000_0000;
const EXPONENT_BIAS: i64 = 1023;

const LN_2: f64 = std::f64::consts::LN_2;

/// Series lengths. With the argument reduced to |r| <= ln2/2 (exp) or
/// t <= 1/3 (log), the 15th term sits below a double ulp.
const EXP_TERMS: usize = 15;
const LOG_TERMS: usize = 15;

/// exp(x) is +inf above this input and 0 below the negative bound (the
/// result falls off the bottom of the subnormal range).
const EXP_OVERFLOW: f64 = 709.782_712_893_384;
const EXP_UNDERFLOW: f64 = -745.133_219_101_941_2;

/// Integral exponents up to this magnitude take the exact
/// squaring path; larger ones go through the exp/log route.
const MAX_SQUARING_EXPONENT: f64 = 2_147_483_648.0; // 2^31

/// 2^n as a double, for n within the normal exponent range.
#[inline]
fn pow2(n: i64) -> f64 {
    f64::from_bits(((EXPONENT_BIAS + n) as u64) << MANTISSA_BITS)
}

/// 2^n split into two normal-range factors, so intermediate scaling stays
/// well-defined even when the final result is subnormal or infinite.
#[inline]
fn scale(x: f64, n: i64) -> f64 {
    let half = n / 2;
    x * pow2(half) * pow2(n - half)
}

/// Computes e^x.
pub fn exp(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x > EXP_OVERFLOW {
        return f64::INFINITY;
    }
    if x < EXP_UNDERFLOW {
        return 0.0;
    }

    // x = n*ln2 + r with |r| <= ln2/2 keeps the series short.
    let n = floor(x / LN_2 + 0.5) as i64;
    let r = x - (n as f64) * LN_2;

    let mut term = 1.0;
    let mut sum = 1.0;
    for k in 1..EXP_TERMS {
        term *= r / k as f64;
        sum += term;
    }
    scale(sum, n)
}

/// Computes the natural logarithm of `x`.
///
/// # Errors
///
/// Returns [`MathError::Domain`] when `x` is zero or negative.
pub fn log(x: f64) -> Result<f64, MathError> {
    if x.is_nan() {
        return Ok(f64::NAN);
    }
    if x <= 0.0 {
        return Err(MathError::Domain);
    }
    if x.is_infinite() {
        return Ok(x);
    }

    // Subnormals: rescale onto the normal path, repay in the exponent.
    let (x, exponent_debt) = if x.to_bits() & EXPONENT_FIELD_MASK == 0 {
        (scale(x, 54), -54i64)
    } else {
        (x, 0i64)
    };

    let bits = x.to_bits();
    let e = ((bits >> MANTISSA_BITS) as i64 & 0x7ff) - EXPONENT_BIAS + exponent_debt;
    // Mantissa in [1.0, 2.0); ln(m) by the atanh series, which converges
    // for t = (m-1)/(m+1) in [0, 1/3].
    let m = f64::from_bits((bits & MANTISSA_MASK) | ((EXPONENT_BIAS as u64) << MANTISSA_BITS));

    let t = (m - 1.0) / (m + 1.0);
    let t2 = t * t;
    let mut term = t;
    let mut sum = 0.0;
    for k in 0..LOG_TERMS {
        sum += term / (2 * k + 1) as f64;
        term *= t2;
    }
    Ok(2.0 * sum + (e as f64) * LN_2)
}

/// Computes x^y.
///
/// A zero exponent yields 1 for every base. Integral exponents are
/// evaluated exactly by repeated squaring (with a reciprocal for negative
/// exponents); the general real case goes through `exp(y * log(x))`.
///
/// # Errors
///
/// Returns [`MathError::Domain`] for a negative base with a non-integral
/// exponent, and [`MathError::DivideByZero`] for a zero base with a
/// negative exponent.
pub fn pow(x: f64, y: f64) -> Result<f64, MathError> {
    if y == 0.0 {
        return Ok(1.0);
    }
    if x.is_nan() || y.is_nan() {
        return Ok(f64::NAN);
    }
    if y.is_finite() && trunc(y) == y && y.abs() <= MAX_SQUARING_EXPONENT {
        return pow_integral(x, y as i64);
    }
    if x < 0.0 {
        return Err(MathError::Domain);
    }
    if x == 0.0 {
        return if y > 0.0 {
            Ok(0.0)
        } else {
            Err(MathError::DivideByZero)
        };
    }
    Ok(exp(y * log(x)?))
}

fn pow_integral(x: f64, n: i64) -> Result<f64, MathError> {
    if x == 0.0 {
        return if n > 0 {
            Ok(0.0)
        } else {
            Err(MathError::DivideByZero)
        };
    }
    let mut base = x;
    let mut remaining = n.unsigned_abs();
    let mut acc = 1.0;
    while remaining > 0 {
        if remaining & 1 == 1 {
            acc *= base;
        }
        base *= base;
        remaining >>= 1;
    }
    Ok(if n < 0 { 1.0 / acc } else { acc })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::E;

    #[test]
    fn exp_anchors() {
        assert_eq!(exp(0.0), 1.0);
        assert!((exp(1.0) - E).abs() < 1e-14);
        assert!((exp(-1.0) - 1.0 / E).abs() < 1e-14);
        assert!((exp(10.0) - 22_026.465_794_806_718).abs() / 22_026.0 < 1e-13);
    }

    #[test]
    fn exp_extremes() {
        assert_eq!(exp(800.0), f64::INFINITY);
        assert_eq!(exp(-800.0), 0.0);
        assert!(exp(f64::NAN).is_nan());
    }

    #[test]
    fn log_anchors() {
        assert_eq!(log(1.0).unwrap(), 0.0);
        assert!((log(E).unwrap() - 1.0).abs() < 1e-14);
        assert!((log(10.0).unwrap() - 2.302_585_092_994_046).abs() < 1e-13);
        assert!((log(0.5).unwrap() + LN_2).abs() < 1e-14);
    }

    #[test]
    fn log_domain_errors() {
        assert_eq!(log(0.0), Err(MathError::Domain));
        assert_eq!(log(-1.0), Err(MathError::Domain));
    }

    #[test]
    fn exp_log_roundtrip() {
        let mut x = 0.01;
        while x < 1e6 {
            let rel = (exp(log(x).unwrap()) - x).abs() / x;
            assert!(rel < 1e-12, "roundtrip at {x}: {rel}");
            x *= 9.7;
        }
    }

    #[test]
    fn pow_integral_exponents() {
        assert_eq!(pow(2.0, 10.0).unwrap(), 1024.0);
        assert_eq!(pow(3.0, 4.0).unwrap(), 81.0);
        assert_eq!(pow(2.0, -2.0).unwrap(), 0.25);
        assert_eq!(pow(-2.0, 3.0).unwrap(), -8.0);
        assert_eq!(pow(-2.0, 2.0).unwrap(), 4.0);
    }

    #[test]
    fn pow_zero_exponent() {
        assert_eq!(pow(5.0, 0.0).unwrap(), 1.0);
        assert_eq!(pow(-5.0, 0.0).unwrap(), 1.0);
        assert_eq!(pow(0.0, 0.0).unwrap(), 1.0);
    }

    #[test]
    fn pow_real_exponents() {
        assert!((pow(9.0, 0.5).unwrap() - 3.0).abs() < 1e-12);
        assert!((pow(2.0, 0.5).unwrap() - std::f64::consts::SQRT_2).abs() < 1e-13);
        assert!((pow(10.0, 2.5).unwrap() - 316.227_766_016_837_9).abs() / 316.0 < 1e-12);
    }

    #[test]
    fn pow_error_cases() {
        assert_eq!(pow(-2.0, 0.5), Err(MathError::Domain));
        assert_eq!(pow(0.0, -1.0), Err(MathError::DivideByZero));
        assert_eq!(pow(0.0, -0.5), Err(MathError::DivideByZero));
        assert_eq!(pow(0.0, 2.0).unwrap(), 0.0);
    }
}
