//! ABI layer for the `<math.h>` surface.
//!
//! Fallible operations follow the C error convention: on failure the
//! thread-local errno is set (EDOM for domain and divide-by-zero errors,
//! EFAULT for a null output parameter) and the sentinel `0.0` is
//! returned. Infallible operations pass straight through. The `f32`
//! variants without a dedicated core implementation are evaluated
//! through the `f64` path and narrowed.

use softlibm_core::MathError;
use softlibm_core::errno::set_errno;
use softlibm_core::math;

#[inline]
fn fail(err: MathError) -> f64 {
    set_errno(err.errno());
    0.0
}

#[inline]
fn unwrap_or_errno(result: Result<f64, MathError>) -> f64 {
    match result {
        Ok(value) => value,
        Err(err) => fail(err),
    }
}

#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn sqrt(x: f64) -> f64 {
    unwrap_or_errno(math::sqrt(x))
}

#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn sqrtf(x: f32) -> f32 {
    unwrap_or_errno(math::sqrt(x as f64)) as f32
}

#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn sin(x: f64) -> f64 {
    math::sin(x)
}

#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn cos(x: f64) -> f64 {
    math::cos(x)
}

#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn sinf(x: f32) -> f32 {
    math::sinf(x)
}

#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn cosf(x: f32) -> f32 {
    math::cosf(x)
}

#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn fmod(x: f64, y: f64) -> f64 {
    unwrap_or_errno(math::fmod(x, y))
}

#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn fmodf(x: f32, y: f32) -> f32 {
    unwrap_or_errno(math::fmod(x as f64, y as f64)) as f32
}

/// Splits `x` into fractional and integral parts, storing the integral
/// part through `iptr`. A null `iptr` sets EFAULT and performs no write.
#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn modf(x: f64, iptr: *mut f64) -> f64 {
    if iptr.is_null() {
        return fail(MathError::NullParameter);
    }
    let (fractional, integral) = math::modf(x);
    unsafe { *iptr = integral };
    fractional
}

#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn pow(x: f64, y: f64) -> f64 {
    unwrap_or_errno(math::pow(x, y))
}

#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn powf(x: f32, y: f32) -> f32 {
    unwrap_or_errno(math::pow(x as f64, y as f64)) as f32
}

#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn ceil(x: f64) -> f64 {
    math::ceil(x)
}

#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn ceilf(x: f32) -> f32 {
    math::ceil(x as f64) as f32
}

#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn floor(x: f64) -> f64 {
    math::floor(x)
}

#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn floorf(x: f32) -> f32 {
    math::floor(x as f64) as f32
}

#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn trunc(x: f64) -> f64 {
    math::trunc(x)
}

#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn fabs(x: f64) -> f64 {
    math::fabs(x)
}

#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn fabsf(x: f32) -> f32 {
    math::fabs(x as f64) as f32
}

#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn exp(x: f64) -> f64 {
    math::exp(x)
}

#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn log(x: f64) -> f64 {
    unwrap_or_errno(math::log(x))
}
