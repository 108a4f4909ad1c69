//! Per-test accumulation of assertion outcomes and verdict derivation.

use serde::{Deserialize, Serialize};

/// Final classification of a test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Nothing was asserted yet.
    Pending,
    /// At least one success and no failures.
    Pass,
    /// At least one failure, including a planned-count mismatch.
    Fail,
    /// The test was skipped; overrides everything else.
    Skipped,
}

/// Result of a single check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionOutcome {
    passed: bool,
    message: String,
}

impl AssertionOutcome {
    /// Passing outcome.
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            passed: true,
            message: message.into(),
        }
    }

    /// Failing outcome carrying its diagnostic.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
        }
    }

    /// Builds an outcome from a check result.
    pub fn from_check(passed: bool, message: impl Into<String>) -> Self {
        Self {
            passed,
            message: message.into(),
        }
    }

    /// Whether the check passed.
    pub fn passed(&self) -> bool {
        self.passed
    }

    /// Fully interpolated diagnostic.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Accumulator of check outcomes for one test case.
///
/// The ledger is only mutated by recording outcomes and by the explicit
/// overrides ([`pass`](Self::pass), [`fail`](Self::fail), [`skip`](Self::skip),
/// [`plan`](Self::plan)). Reading failures or the verdict never mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssertionLedger {
    failures: Vec<String>,
    success_count: usize,
    planned: usize,
    skipped: bool,
}

impl AssertionLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an outcome; only failure messages are retained.
    pub fn record(&mut self, outcome: AssertionOutcome) -> bool {
        if outcome.passed {
            self.success_count += 1;
            tracing::trace!(successes = self.success_count, "assertion passed");
        } else {
            tracing::debug!(failure = %outcome.message, "assertion failed");
            self.failures.push(outcome.message);
        }
        outcome.passed
    }

    /// Declares how many assertions the test expects to run. Zero removes the constraint.
    pub fn plan(&mut self, count: usize) {
        self.planned = count;
    }

    /// Forces a green result, discarding earlier failures.
    pub fn pass(&mut self) {
        self.success_count = 1;
        self.failures.clear();
    }

    /// Appends a failure message directly.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.failures.push(message.into());
    }

    /// Marks the test as skipped.
    pub fn skip(&mut self) {
        self.skipped = true;
    }

    /// Number of passing checks.
    pub fn success_count(&self) -> usize {
        self.success_count
    }

    /// Number of recorded failures, excluding any planned-count mismatch.
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Planned assertion count, zero when unconstrained.
    pub fn planned(&self) -> usize {
        self.planned
    }

    /// Whether [`skip`](Self::skip) was called.
    pub fn is_skipped(&self) -> bool {
        self.skipped
    }

    /// Failure messages for reporting.
    ///
    /// When a plan is set and the number of executed assertions differs, a
    /// `Total assertions, {actual}, does not equal planned, {planned}` entry is
    /// appended to the returned copy.
    pub fn failures(&self) -> Vec<String> {
        let mut failures = self.failures.clone();
        if let Some(mismatch) = self.plan_mismatch() {
            failures.push(mismatch);
        }
        failures
    }

    fn plan_mismatch(&self) -> Option<String> {
        let actual = self.success_count + self.failures.len();
        if self.planned > 0 && actual != self.planned {
            tracing::debug!(actual, planned = self.planned, "assertion count differs from plan");
            Some(format!(
                "Total assertions, {actual}, does not equal planned, {}",
                self.planned
            ))
        } else {
            None
        }
    }

    /// Derives the verdict from the current state.
    pub fn verdict(&self) -> Verdict {
        if self.is_skipped() {
            return Verdict::Skipped;
        }
        let failing = !self.failures.is_empty() || self.plan_mismatch().is_some();
        if self.success_count == 0 && !failing {
            Verdict::Pending
        } else if failing {
            Verdict::Fail
        } else {
            Verdict::Pass
        }
    }
}
