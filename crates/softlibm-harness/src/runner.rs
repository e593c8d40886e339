//! Fixture execution against the softlibm implementations.

use thiserror::Error;

use softlibm_core::MathError;
use softlibm_core::math;

use crate::fixtures::{FixtureCase, FixtureSet};
use crate::verify::{VerificationResult, value_matches};

/// Error raised when a fixture case cannot be executed.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("unknown function '{0}'")]
    UnknownFunction(String),
    #[error("function '{0}' expects {1} input(s), fixture has {2}")]
    ArityMismatch(String, usize, usize),
}

/// Runs fixture sets and collects verification results.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
}

impl TestRunner {
    /// Create a new test runner.
    #[must_use]
    pub fn new(campaign: impl Into<String>) -> Self {
        Self {
            campaign: campaign.into(),
        }
    }

    /// Run all fixtures in a set and return results.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        fixture_set
            .cases
            .iter()
            .map(|case| self.run_case(case))
            .collect()
    }

    fn run_case(&self, case: &FixtureCase) -> VerificationResult {
        match execute(&case.function, &case.inputs) {
            Ok((actual, actual_errno)) => {
                let value_ok = value_matches(case.comparison, case.tolerance, case.expected, actual);
                let errno_ok = actual_errno == case.expected_errno;
                let detail = match (value_ok, errno_ok) {
                    (true, true) => None,
                    (false, _) => Some(format!(
                        "value mismatch: expected {}, got {}",
                        case.expected, actual
                    )),
                    (_, false) => Some(format!(
                        "errno mismatch: expected {}, got {}",
                        case.expected_errno, actual_errno
                    )),
                };
                VerificationResult {
                    case_name: case.name.clone(),
                    function: case.function.clone(),
                    passed: value_ok && errno_ok,
                    expected: case.expected,
                    actual,
                    expected_errno: case.expected_errno,
                    actual_errno,
                    detail,
                }
            }
            Err(err) => VerificationResult {
                case_name: case.name.clone(),
                function: case.function.clone(),
                passed: false,
                expected: case.expected,
                actual: f64::NAN,
                expected_errno: case.expected_errno,
                actual_errno: 0,
                detail: Some(err.to_string()),
            },
        }
    }
}

fn arg(inputs: &[f64], function: &str, arity: usize) -> Result<(), RunnerError> {
    if inputs.len() == arity {
        Ok(())
    } else {
        Err(RunnerError::ArityMismatch(
            function.to_string(),
            arity,
            inputs.len(),
        ))
    }
}

/// Executes one call, mapping a core error onto the errno convention the
/// fixtures record: sentinel 0.0 plus the error's errno value.
fn execute(function: &str, inputs: &[f64]) -> Result<(f64, i32), RunnerError> {
    let unary = |f: &dyn Fn(f64) -> f64| -> Result<(f64, i32), RunnerError> {
        arg(inputs, function, 1)?;
        Ok((f(inputs[0]), 0))
    };
    let fallible = |r: Result<f64, MathError>| -> (f64, i32) {
        match r {
            Ok(v) => (v, 0),
            Err(e) => (0.0, e.errno()),
        }
    };

    match function {
        "sqrt" => {
            arg(inputs, function, 1)?;
            Ok(fallible(math::sqrt(inputs[0])))
        }
        "sin" => unary(&math::sin),
        "cos" => unary(&math::cos),
        "sinf" => {
            arg(inputs, function, 1)?;
            Ok((f64::from(math::sinf(inputs[0] as f32)), 0))
        }
        "cosf" => {
            arg(inputs, function, 1)?;
            Ok((f64::from(math::cosf(inputs[0] as f32)), 0))
        }
        "fmod" => {
            arg(inputs, function, 2)?;
            Ok(fallible(math::fmod(inputs[0], inputs[1])))
        }
        "modf_frac" => {
            arg(inputs, function, 1)?;
            Ok((math::modf(inputs[0]).0, 0))
        }
        "modf_int" => {
            arg(inputs, function, 1)?;
            Ok((math::modf(inputs[0]).1, 0))
        }
        "pow" => {
            arg(inputs, function, 2)?;
            Ok(fallible(math::pow(inputs[0], inputs[1])))
        }
        "ceil" => unary(&math::ceil),
        "floor" => unary(&math::floor),
        "trunc" => unary(&math::trunc),
        "fabs" => unary(&math::fabs),
        "exp" => unary(&math::exp),
        "log" => {
            arg(inputs, function, 1)?;
            Ok(fallible(math::log(inputs[0])))
        }
        other => Err(RunnerError::UnknownFunction(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::FixtureSet;

    #[test]
    fn runner_executes_and_discriminates() {
        let fixture = FixtureSet::from_json(
            r#"{
                "version":"v1",
                "family":"sqrt",
                "captured_at":"2026-01-01T00:00:00Z",
                "cases":[
                    {"name":"sqrt_four","function":"sqrt","inputs":[4.0],"expected":2.0,"expected_errno":0,"comparison":"exact","tolerance":0.0},
                    {"name":"sqrt_neg","function":"sqrt","inputs":[-1.0],"expected":0.0,"expected_errno":33,"comparison":"exact","tolerance":0.0},
                    {"name":"deliberate_fail","function":"sqrt","inputs":[4.0],"expected":3.0,"expected_errno":0,"comparison":"exact","tolerance":0.0}
                ]
            }"#,
        )
        .expect("valid fixture json");

        let results = TestRunner::new("smoke").run(&fixture);
        assert_eq!(results.len(), 3);
        assert!(results[0].passed);
        assert!(results[1].passed, "domain error case: {:?}", results[1]);
        assert!(!results[2].passed);
        assert!(results[2].detail.as_deref().unwrap().contains("value mismatch"));
    }

    #[test]
    fn unknown_function_fails_cleanly() {
        let case = FixtureCase {
            name: "bogus".into(),
            function: "tanh".into(),
            inputs: vec![1.0],
            expected: 0.0,
            expected_errno: 0,
            comparison: crate::fixtures::Comparison::Exact,
            tolerance: 0.0,
        };
        let fixture = FixtureSet {
            version: "v1".into(),
            family: "bogus".into(),
            captured_at: "2026-01-01T00:00:00Z".into(),
            cases: vec![case],
        };
        let results = TestRunner::new("smoke").run(&fixture);
        assert!(!results[0].passed);
        assert!(results[0].detail.as_deref().unwrap().contains("unknown function"));
    }

    #[test]
    fn modf_split_dispatch() {
        let mut set = FixtureSet {
            version: "v1".into(),
            family: "float".into(),
            captured_at: "2026-01-01T00:00:00Z".into(),
            cases: Vec::new(),
        };
        set.cases.push(FixtureCase {
            name: "modf_frac".into(),
            function: "modf_frac".into(),
            inputs: vec![-3.75],
            expected: -0.75,
            expected_errno: 0,
            comparison: crate::fixtures::Comparison::Exact,
            tolerance: 0.0,
        });
        set.cases.push(FixtureCase {
            name: "modf_int".into(),
            function: "modf_int".into(),
            inputs: vec![-3.75],
            expected: -3.0,
            expected_errno: 0,
            comparison: crate::fixtures::Comparison::Exact,
            tolerance: 0.0,
        });
        let results = TestRunner::new("smoke").run(&set);
        assert!(results.iter().all(|r| r.passed), "{results:?}");
    }
}
