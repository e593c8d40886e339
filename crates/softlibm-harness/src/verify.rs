//! Output comparison and verification.

use serde::{Deserialize, Serialize};

use crate::fixtures::Comparison;

/// Distance in units-in-the-last-place between two doubles.
///
/// Bit patterns are mapped onto a single ordered integer line (negatives
/// mirrored below zero) so the distance is monotone across the sign
/// boundary; +0.0 and -0.0 are zero apart.
#[must_use]
pub fn ulp_distance(a: f64, b: f64) -> u64 {
    fn ordered(x: f64) -> i64 {
        let bits = x.to_bits() as i64;
        if bits < 0 { i64::MIN - bits } else { bits }
    }
    ordered(a).abs_diff(ordered(b))
}

/// Checks an actual value against an expectation under the given
/// comparison discipline.
#[must_use]
pub fn value_matches(comparison: Comparison, tolerance: f64, expected: f64, actual: f64) -> bool {
    if expected.is_nan() || actual.is_nan() {
        return expected.is_nan() && actual.is_nan();
    }
    match comparison {
        Comparison::Exact => expected.to_bits() == actual.to_bits() || expected == actual,
        Comparison::Absolute => (actual - expected).abs() <= tolerance,
        Comparison::Relative => {
            if expected == 0.0 {
                (actual - expected).abs() <= tolerance
            } else {
                (actual - expected).abs() <= tolerance * expected.abs()
            }
        }
        Comparison::Ulp => ulp_distance(expected, actual) <= tolerance as u64,
    }
}

/// Result of verifying a single fixture case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Name of the test case.
    pub case_name: String,
    /// Function exercised.
    pub function: String,
    /// Whether the case passed (value and errno both matched).
    pub passed: bool,
    /// Expected output.
    pub expected: f64,
    /// Actual output from the implementation.
    pub actual: f64,
    /// Expected errno.
    pub expected_errno: i32,
    /// Actual errno observed after the call.
    pub actual_errno: i32,
    /// Failure detail, when the case failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Aggregate verification summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationSummary {
    /// Total cases run.
    pub total: usize,
    /// Cases passed.
    pub passed: usize,
    /// Cases failed.
    pub failed: usize,
    /// Individual results.
    pub results: Vec<VerificationResult>,
}

impl VerificationSummary {
    /// Build a summary from a list of results.
    #[must_use]
    pub fn from_results(results: Vec<VerificationResult>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        let failed = total - passed;
        Self {
            total,
            passed,
            failed,
            results,
        }
    }

    /// Returns true if all cases passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ulp_distance_sanity() {
        assert_eq!(ulp_distance(1.0, 1.0), 0);
        assert_eq!(ulp_distance(1.0, f64::from_bits(1.0f64.to_bits() + 1)), 1);
        assert_eq!(ulp_distance(0.0, -0.0), 0);
        assert!(ulp_distance(1.0, 2.0) > 1_000_000);
        // Monotone across the sign boundary.
        assert!(ulp_distance(-1e-300, 1e-300) > ulp_distance(0.0, 1e-300));
    }

    #[test]
    fn comparison_disciplines() {
        assert!(value_matches(Comparison::Exact, 0.0, 2.0, 2.0));
        assert!(!value_matches(Comparison::Exact, 0.0, 2.0, 2.0 + 1e-15));
        assert!(value_matches(Comparison::Absolute, 1e-9, 1.0, 1.0 + 1e-10));
        assert!(value_matches(Comparison::Relative, 1e-12, 1e300, 1e300));
        assert!(value_matches(Comparison::Ulp, 2.0, 1.5, 1.5));
        assert!(!value_matches(Comparison::Absolute, 1e-12, 1.0, 1.1));
    }

    #[test]
    fn nan_matches_only_nan() {
        assert!(value_matches(Comparison::Exact, 0.0, f64::NAN, f64::NAN));
        assert!(!value_matches(Comparison::Exact, 0.0, f64::NAN, 1.0));
        assert!(!value_matches(Comparison::Absolute, 1.0, 1.0, f64::NAN));
    }

    #[test]
    fn summary_counts() {
        let results = vec![
            VerificationResult {
                case_name: "a".into(),
                function: "sqrt".into(),
                passed: true,
                expected: 2.0,
                actual: 2.0,
                expected_errno: 0,
                actual_errno: 0,
                detail: None,
            },
            VerificationResult {
                case_name: "b".into(),
                function: "sqrt".into(),
                passed: false,
                expected: 3.0,
                actual: 2.9,
                expected_errno: 0,
                actual_errno: 0,
                detail: Some("value mismatch".into()),
            },
        ];
        let summary = VerificationSummary::from_results(results);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.passed, 1);
        assert_eq!(summary.failed, 1);
        assert!(!summary.all_passed());
    }
}
