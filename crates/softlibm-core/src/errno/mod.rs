//! Error number definitions.
//!
//! Implements the `<errno.h>` side-channel convention with thread-local
//! errno storage. The math primitives themselves report failures through
//! [`crate::MathError`]; the ABI boundary translates those into a stored
//! errno value plus a sentinel return.

use std::cell::Cell;

thread_local! {
    static ERRNO: Cell<i32> = const { Cell::new(0) };
}

/// Bad address (null output parameter).
pub const EFAULT: i32 = 14;
/// Invalid argument.
pub const EINVAL: i32 = 22;
/// Numerical argument out of domain.
pub const EDOM: i32 = 33;
/// Numerical result out of range.
pub const ERANGE: i32 = 34;

/// Returns the current thread-local errno value.
///
/// Equivalent to reading C `errno`.
pub fn get_errno() -> i32 {
    ERRNO.get()
}

/// Sets the current thread-local errno value.
///
/// Equivalent to assigning to C `errno`.
pub fn set_errno(value: i32) {
    ERRNO.set(value);
}

/// Returns the address of the thread-local errno cell, for the
/// `__errno_location` ABI export.
pub fn errno_location() -> *mut i32 {
    ERRNO.with(Cell::as_ptr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errno_roundtrip() {
        set_errno(0);
        assert_eq!(get_errno(), 0);
        set_errno(EDOM);
        assert_eq!(get_errno(), EDOM);
        set_errno(0);
    }

    #[test]
    fn errno_is_thread_local() {
        set_errno(EDOM);
        let other = std::thread::spawn(get_errno).join().unwrap();
        assert_eq!(other, 0);
        set_errno(0);
    }
}
