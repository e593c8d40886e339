//! Report generation for conformance results.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::verify::VerificationSummary;

/// A conformance report tying verification results to the exact case set
/// they ran against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceReport {
    /// Report title.
    pub title: String,
    /// Campaign name the runner executed under.
    pub campaign: String,
    /// Timestamp (UTC).
    pub timestamp: String,
    /// SHA-256 digest of the serialized fixture set, hex-encoded, so a
    /// report can be matched to the case set that produced it.
    pub case_digest: String,
    /// Verification summary.
    pub summary: VerificationSummary,
}

impl ConformanceReport {
    /// Build a report over a verification summary, digesting the fixture
    /// JSON it was produced from.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        campaign: impl Into<String>,
        timestamp: impl Into<String>,
        fixture_json: &str,
        summary: VerificationSummary,
    ) -> Self {
        Self {
            title: title.into(),
            campaign: campaign.into(),
            timestamp: timestamp.into(),
            case_digest: sha256_hex(fixture_json.as_bytes()),
            summary,
        }
    }

    /// Render the report as markdown.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("# {}\n\n", self.title));
        out.push_str(&format!("- Campaign: {}\n", self.campaign));
        out.push_str(&format!("- Timestamp: {}\n", self.timestamp));
        out.push_str(&format!("- Case digest: {}\n", self.case_digest));
        out.push_str(&format!("- Total: {}\n", self.summary.total));
        out.push_str(&format!("- Passed: {}\n", self.summary.passed));
        out.push_str(&format!("- Failed: {}\n\n", self.summary.failed));

        out.push_str("| Case | Function | Status |\n");
        out.push_str("|------|----------|--------|\n");
        for r in &self.summary.results {
            let status = if r.passed { "PASS" } else { "FAIL" };
            out.push_str(&format!("| {} | {} | {} |\n", r.case_name, r.function, status));
        }
        out
    }

    /// Render the report as JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let digest = hasher.finalize();
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{b:02x}"));
    }
    out
}
