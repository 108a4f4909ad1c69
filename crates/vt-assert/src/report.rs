use serde::{Deserialize, Serialize};
use vt_core::errors::VtError;
use vt_core::serde::to_canonical_json_bytes;

use crate::case::TestCase;
use crate::ledger::Verdict;

/// Reporter-facing snapshot of a finished test case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestReport {
    /// Test description.
    pub description: String,
    /// Derived verdict.
    pub verdict: Verdict,
    /// Number of passing checks.
    pub success_count: usize,
    /// Planned assertion count, zero when unconstrained.
    #[serde(default)]
    pub planned: usize,
    /// Failure messages in recording order, plan mismatch last.
    #[serde(default)]
    pub failures: Vec<String>,
}

impl TestReport {
    /// Captures the current state of a test case.
    pub fn from_case(case: &TestCase) -> Self {
        let ledger = case.ledger();
        Self {
            description: case.description().to_string(),
            verdict: ledger.verdict(),
            success_count: ledger.success_count(),
            planned: ledger.planned(),
            failures: ledger.failures(),
        }
    }

    /// Persists the report as canonical JSON bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, VtError> {
        to_canonical_json_bytes(self)
    }
}
