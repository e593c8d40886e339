//! Conformance testing harness for softlibm.
//!
//! This crate provides:
//! - Fixture capture: record host reference math behavior as JSON data
//! - Fixture verify: compare the software implementations against
//!   captured fixtures with exact/absolute/relative/ULP comparison
//! - Report generation: human-readable + machine-readable conformance
//!   reports carrying a SHA-256 digest of the case set
//! - Structured JSONL logging for test workflows

#![forbid(unsafe_code)]

pub mod capture;
pub mod fixtures;
pub mod report;
pub mod runner;
pub mod structured_log;
pub mod verify;

pub use fixtures::{Comparison, FixtureCase, FixtureError, FixtureSet};
pub use report::ConformanceReport;
pub use runner::TestRunner;
pub use verify::{VerificationResult, VerificationSummary, ulp_distance};
