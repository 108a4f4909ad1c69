use vt_core::errors::VtError;
use vt_core::{HostError, Value};

use crate::assertions::{Assertion, ExpectedError};
use crate::config::EngineConfig;
use crate::ledger::{AssertionLedger, Verdict};
use crate::report::TestReport;

/// One test case: a description, its own ledger, and the engine configuration.
///
/// Every check returns whether it passed and records the outcome; none of them
/// panic or short-circuit the rest of the test body.
#[derive(Debug, Clone)]
pub struct TestCase {
    description: String,
    ledger: AssertionLedger,
    config: EngineConfig,
}

impl TestCase {
    /// Creates a test case with the default configuration.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ledger: AssertionLedger::new(),
            config: EngineConfig::default(),
        }
    }

    /// Creates a test case with an explicit configuration.
    ///
    /// The configuration is validated first, so a hand-built value with an
    /// out-of-range precision is rejected here instead of failing every
    /// float comparison later.
    pub fn with_config(
        description: impl Into<String>,
        config: EngineConfig,
    ) -> Result<Self, VtError> {
        config.validate()?;
        Ok(Self {
            description: description.into(),
            ledger: AssertionLedger::new(),
            config,
        })
    }

    /// Human readable name of the test.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Configuration used by every check of this test.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Read access to the underlying ledger.
    pub fn ledger(&self) -> &AssertionLedger {
        &self.ledger
    }

    /// Evaluates a check with its default message and records the outcome.
    pub fn assert(&mut self, assertion: Assertion<'_>) -> bool {
        let outcome = assertion.evaluate(&self.config);
        self.ledger.record(outcome)
    }

    /// Evaluates a check with a caller supplied `{n}` template and records the outcome.
    pub fn assert_with(&mut self, assertion: Assertion<'_>, template: &str) -> bool {
        let outcome = assertion.evaluate_with(template, &self.config);
        self.ledger.record(outcome)
    }

    /// Checks deep equality.
    pub fn is_equal(&mut self, a: impl Into<Value>, b: impl Into<Value>) -> bool {
        let (a, b) = (a.into(), b.into());
        self.assert(Assertion::IsEqual(&a, &b))
    }

    /// Checks deep inequality.
    pub fn not_equal(&mut self, a: impl Into<Value>, b: impl Into<Value>) -> bool {
        let (a, b) = (a.into(), b.into());
        self.assert(Assertion::NotEqual(&a, &b))
    }

    /// Checks that a value is truthy.
    pub fn is_ok(&mut self, value: impl Into<Value>) -> bool {
        let value = value.into();
        self.assert(Assertion::IsOk(&value))
    }

    /// Checks that a value is not truthy.
    pub fn not_ok(&mut self, value: impl Into<Value>) -> bool {
        let value = value.into();
        self.assert(Assertion::NotOk(&value))
    }

    /// Checks that a value is Null, Empty, Nothing or Missing.
    pub fn is_undefined(&mut self, value: impl Into<Value>) -> bool {
        let value = value.into();
        self.assert(Assertion::IsUndefined(&value))
    }

    /// Checks that a value is defined.
    pub fn not_undefined(&mut self, value: impl Into<Value>) -> bool {
        let value = value.into();
        self.assert(Assertion::NotUndefined(&value))
    }

    /// Checks that `last_error` is pending and matches `expected`.
    ///
    /// Must run right after the operation that may have raised, before
    /// anything else can overwrite the host's last error.
    pub fn is_error(&mut self, last_error: &HostError, expected: &ExpectedError) -> bool {
        self.assert(Assertion::IsError(last_error, expected))
    }

    /// Checks that no error is pending.
    pub fn not_error(&mut self, last_error: &HostError) -> bool {
        self.assert(Assertion::NotError(last_error))
    }

    /// Checks that `value` occurs somewhere inside `container`.
    pub fn includes(&mut self, container: impl Into<Value>, value: impl Into<Value>) -> bool {
        let (container, value) = (container.into(), value.into());
        self.assert(Assertion::Includes(&container, &value))
    }

    /// Checks that `value` occurs nowhere inside `container`.
    pub fn not_includes(&mut self, container: impl Into<Value>, value: impl Into<Value>) -> bool {
        let (container, value) = (container.into(), value.into());
        self.assert(Assertion::NotIncludes(&container, &value))
    }

    /// Checks agreement to `significant_figures` digits.
    pub fn is_approximate(
        &mut self,
        a: impl Into<Value>,
        b: impl Into<Value>,
        significant_figures: u32,
    ) -> bool {
        let (a, b) = (a.into(), b.into());
        self.assert(Assertion::IsApproximate(&a, &b, significant_figures))
    }

    /// Checks disagreement at `significant_figures` digits.
    pub fn not_approximate(
        &mut self,
        a: impl Into<Value>,
        b: impl Into<Value>,
        significant_figures: u32,
    ) -> bool {
        let (a, b) = (a.into(), b.into());
        self.assert(Assertion::NotApproximate(&a, &b, significant_figures))
    }

    /// Declares the expected number of assertions.
    pub fn plan(&mut self, count: usize) {
        self.ledger.plan(count);
    }

    /// Marks the test as skipped.
    pub fn skip(&mut self) {
        self.ledger.skip();
    }

    /// Forces a passing result.
    pub fn pass(&mut self) {
        self.ledger.pass();
    }

    /// Records a failure without running a check.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.ledger.fail(message);
    }

    /// Current verdict.
    pub fn verdict(&self) -> Verdict {
        self.ledger.verdict()
    }

    /// Failure messages, including any planned-count mismatch.
    pub fn failures(&self) -> Vec<String> {
        self.ledger.failures()
    }

    /// Number of passing checks.
    pub fn success_count(&self) -> usize {
        self.ledger.success_count()
    }

    /// Snapshot for the reporter.
    pub fn report(&self) -> TestReport {
        let report = TestReport::from_case(self);
        tracing::debug!(
            description = %report.description,
            verdict = ?report.verdict,
            failures = report.failures.len(),
            "test case finished"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hand_built_config_is_validated() {
        let config = EngineConfig {
            equality_significant_figures: 0,
            ..EngineConfig::default()
        };
        let err = TestCase::with_config("zero precision", config).unwrap_err();
        assert_eq!(err.info().code, "equality-precision-out-of-range");

        let config = EngineConfig {
            max_depth: 0,
            ..EngineConfig::default()
        };
        assert!(TestCase::with_config("no depth", config).is_err());
    }

    #[test]
    fn validated_config_drives_float_equality() {
        let config = EngineConfig {
            equality_significant_figures: 3,
            ..EngineConfig::default()
        };
        let mut case = TestCase::with_config("three figures", config).unwrap();
        assert!(case.is_equal(1.0, 1.0));
        assert!(case.is_equal(1.001, 1.002));
        assert_eq!(case.verdict(), Verdict::Pass);
    }
}
