//! Error taxonomy for the fallible math operations.

use thiserror::Error;

use crate::errno;

/// Error returned by the fallible math primitives.
///
/// Every error is local to a single call: there is no retry, no
/// escalation, and no side effect beyond the caller's handling. The ABI
/// boundary maps each variant onto an errno value via
/// [`MathError::errno`] and returns the C-convention sentinel `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// Input outside the set of values for which a real-valued result
    /// exists (e.g. the square root of a negative number).
    #[error("numerical argument out of domain")]
    Domain,
    /// Zero divisor, or a zero base raised to a negative power.
    #[error("division by zero")]
    DivideByZero,
    /// Null output parameter at the ABI boundary.
    #[error("null output parameter")]
    NullParameter,
}

impl MathError {
    /// The errno value stored by the ABI boundary for this error.
    #[must_use]
    pub fn errno(self) -> i32 {
        match self {
            MathError::Domain | MathError::DivideByZero => errno::EDOM,
            MathError::NullParameter => errno::EFAULT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errno_mapping() {
        assert_eq!(MathError::Domain.errno(), errno::EDOM);
        assert_eq!(MathError::DivideByZero.errno(), errno::EDOM);
        assert_eq!(MathError::NullParameter.errno(), errno::EFAULT);
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            MathError::Domain.to_string(),
            "numerical argument out of domain"
        );
        assert_eq!(MathError::DivideByZero.to_string(), "division by zero");
    }
}
