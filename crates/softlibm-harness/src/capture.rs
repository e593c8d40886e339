//! Reference capture: records host math behavior as fixture sets.
//!
//! The host values act as the oracle the software implementations are
//! verified against. Error cases cannot be captured from the host (it
//! reports NaN/inf where softlibm reports errno), so their expectations
//! are written out explicitly from the documented contract.

use thiserror::Error;

use softlibm_core::errno::EDOM;

use crate::fixtures::{Comparison, FixtureCase, FixtureSet};

/// Schema version stamped into captured sets.
pub const FIXTURE_VERSION: &str = "v1";

/// Families `capture_family` knows how to produce.
pub const FAMILIES: [&str; 4] = ["sqrt", "trig", "float", "pow"];

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("unknown fixture family '{0}'")]
    UnknownFamily(String),
}

fn case(
    name: &str,
    function: &str,
    inputs: &[f64],
    expected: f64,
    expected_errno: i32,
    comparison: Comparison,
    tolerance: f64,
) -> FixtureCase {
    FixtureCase {
        name: name.to_string(),
        function: function.to_string(),
        inputs: inputs.to_vec(),
        expected,
        expected_errno,
        comparison,
        tolerance,
    }
}

fn sqrt_cases() -> Vec<FixtureCase> {
    let mut cases = vec![
        case("sqrt_zero", "sqrt", &[0.0], 0.0, 0, Comparison::Exact, 0.0),
        case("sqrt_four", "sqrt", &[4.0], 2.0, 0, Comparison::Exact, 0.0),
        case(
            "sqrt_negative_domain",
            "sqrt",
            &[-1.0],
            0.0,
            EDOM,
            Comparison::Exact,
            0.0,
        ),
    ];
    for (i, &x) in [2.0, 10.0, 0.5, 123.456, 1e-10, 1e10, 7.389_056].iter().enumerate() {
        cases.push(case(
            &format!("sqrt_host_{i}"),
            "sqrt",
            &[x],
            x.sqrt(),
            0,
            Comparison::Relative,
            1e-12,
        ));
    }
    cases
}

fn trig_cases() -> Vec<FixtureCase> {
    let mut cases = vec![
        case("sin_zero", "sin", &[0.0], 0.0, 0, Comparison::Exact, 0.0),
        case("cos_zero", "cos", &[0.0], 1.0, 0, Comparison::Exact, 0.0),
    ];
    for (i, &x) in [0.5, 1.0, std::f64::consts::FRAC_PI_2, 3.0, -2.5, 6.0, 100.0]
        .iter()
        .enumerate()
    {
        cases.push(case(
            &format!("sin_host_{i}"),
            "sin",
            &[x],
            x.sin(),
            0,
            Comparison::Absolute,
            1e-7,
        ));
        cases.push(case(
            &format!("cos_host_{i}"),
            "cos",
            &[x],
            x.cos(),
            0,
            Comparison::Absolute,
            1e-7,
        ));
    }
    for (i, &x) in [0.5f32, 1.5f32, -1.0f32].iter().enumerate() {
        cases.push(case(
            &format!("sinf_host_{i}"),
            "sinf",
            &[f64::from(x)],
            f64::from(x.sin()),
            0,
            Comparison::Absolute,
            1e-4,
        ));
        cases.push(case(
            &format!("cosf_host_{i}"),
            "cosf",
            &[f64::from(x)],
            f64::from(x.cos()),
            0,
            Comparison::Absolute,
            1e-4,
        ));
    }
    cases
}

fn float_cases() -> Vec<FixtureCase> {
    vec![
        case("fmod_basic", "fmod", &[5.5, 2.0], 1.5, 0, Comparison::Exact, 0.0),
        case(
            "fmod_zero_divisor",
            "fmod",
            &[5.5, 0.0],
            0.0,
            EDOM,
            Comparison::Exact,
            0.0,
        ),
        case(
            "modf_frac_pos",
            "modf_frac",
            &[3.75],
            0.75,
            0,
            Comparison::Exact,
            0.0,
        ),
        case(
            "modf_int_pos",
            "modf_int",
            &[3.75],
            3.0,
            0,
            Comparison::Exact,
            0.0,
        ),
        case(
            "modf_frac_neg",
            "modf_frac",
            &[-3.75],
            -0.75,
            0,
            Comparison::Exact,
            0.0,
        ),
        case(
            "modf_int_neg",
            "modf_int",
            &[-3.75],
            -3.0,
            0,
            Comparison::Exact,
            0.0,
        ),
        case("ceil_up", "ceil", &[4.2], 5.0, 0, Comparison::Exact, 0.0),
        case("ceil_integral", "ceil", &[4.0], 4.0, 0, Comparison::Exact, 0.0),
        case("ceil_negative", "ceil", &[-4.2], -4.0, 0, Comparison::Exact, 0.0),
        case("floor_down", "floor", &[2.9], 2.0, 0, Comparison::Exact, 0.0),
        case("floor_negative", "floor", &[-2.1], -3.0, 0, Comparison::Exact, 0.0),
        case("trunc_negative", "trunc", &[-3.75], -3.0, 0, Comparison::Exact, 0.0),
        case("fabs_negative", "fabs", &[-3.5], 3.5, 0, Comparison::Exact, 0.0),
    ]
}

fn pow_cases() -> Vec<FixtureCase> {
    let mut cases = vec![
        case("pow_2_10", "pow", &[2.0, 10.0], 1024.0, 0, Comparison::Exact, 0.0),
        case("pow_zero_exp", "pow", &[-7.5, 0.0], 1.0, 0, Comparison::Exact, 0.0),
        case(
            "pow_negative_base_real_exp",
            "pow",
            &[-2.0, 0.5],
            0.0,
            EDOM,
            Comparison::Exact,
            0.0,
        ),
        case(
            "pow_zero_base_negative_exp",
            "pow",
            &[0.0, -1.0],
            0.0,
            EDOM,
            Comparison::Exact,
            0.0,
        ),
    ];
    for (i, &(x, y)) in [(9.0, 0.5), (10.0, 2.5), (2.0, 0.5), (1.5, 7.3)].iter().enumerate() {
        cases.push(case(
            &format!("pow_host_{i}"),
            "pow",
            &[x, y],
            x.powf(y),
            0,
            Comparison::Relative,
            1e-10,
        ));
    }
    for (i, &x) in [1.0, 2.5, 100.0, 0.125].iter().enumerate() {
        cases.push(case(
            &format!("exp_host_{i}"),
            "exp",
            &[x],
            x.exp(),
            0,
            Comparison::Relative,
            1e-12,
        ));
        cases.push(case(
            &format!("log_host_{i}"),
            "log",
            &[x],
            x.ln(),
            0,
            Comparison::Absolute,
            1e-13,
        ));
    }
    cases
}

/// Captures the fixture set for one function family.
pub fn capture_family(family: &str, captured_at: &str) -> Result<FixtureSet, CaptureError> {
    let cases = match family {
        "sqrt" => sqrt_cases(),
        "trig" => trig_cases(),
        "float" => float_cases(),
        "pow" => pow_cases(),
        other => return Err(CaptureError::UnknownFamily(other.to_string())),
    };
    Ok(FixtureSet {
        version: FIXTURE_VERSION.to_string(),
        family: family.to_string(),
        captured_at: captured_at.to_string(),
        cases,
    })
}
