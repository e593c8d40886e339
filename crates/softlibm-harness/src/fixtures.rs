//! Fixture loading and management.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised while loading or storing fixture sets.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("fixture I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("fixture JSON invalid: {0}")]
    Json(#[from] serde_json::Error),
}

/// How a case's actual output is compared against the expectation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    /// Bit-for-bit equality.
    Exact,
    /// |actual - expected| <= tolerance.
    Absolute,
    /// |actual - expected| <= tolerance * |expected|.
    Relative,
    /// ULP distance <= tolerance (read as a ULP count).
    Ulp,
}

/// A single fixture test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Function being tested (runner dispatch key).
    pub function: String,
    /// Input arguments.
    pub inputs: Vec<f64>,
    /// Expected output value (sentinel 0.0 for error cases).
    pub expected: f64,
    /// Expected errno after the call (0 for success).
    pub expected_errno: i32,
    /// Comparison discipline for the output value.
    pub comparison: Comparison,
    /// Tolerance, interpreted per the comparison kind.
    pub tolerance: f64,
}

/// A collection of fixture cases for a function family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Function family name.
    pub family: String,
    /// UTC timestamp of capture.
    pub captured_at: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load fixture set from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize fixture set to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load fixture set from a file path.
    pub fn from_file(path: &Path) -> Result<Self, FixtureError> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }

    /// Write fixture set to a file path.
    pub fn to_file(&self, path: &Path) -> Result<(), FixtureError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FixtureSet {
        FixtureSet {
            version: "v1".to_string(),
            family: "sqrt".to_string(),
            captured_at: "2026-01-01T00:00:00Z".to_string(),
            cases: vec![FixtureCase {
                name: "sqrt_four".to_string(),
                function: "sqrt".to_string(),
                inputs: vec![4.0],
                expected: 2.0,
                expected_errno: 0,
                comparison: Comparison::Exact,
                tolerance: 0.0,
            }],
        }
    }

    #[test]
    fn json_roundtrip() {
        let set = sample();
        let json = set.to_json().unwrap();
        let restored = FixtureSet::from_json(&json).unwrap();
        assert_eq!(restored.family, "sqrt");
        assert_eq!(restored.cases.len(), 1);
        assert_eq!(restored.cases[0].comparison, Comparison::Exact);
        assert_eq!(restored.cases[0].inputs, vec![4.0]);
    }

    #[test]
    fn comparison_serializes_snake_case() {
        let json = serde_json::to_string(&Comparison::Ulp).unwrap();
        assert_eq!(json, "\"ulp\"");
    }
}
