//! The assertion call surface: one variant per public check.
//!
//! Evaluating an [`Assertion`] never panics and never returns an error. Usage
//! errors become failing outcomes whose message carries a
//! ` (usage error: ...)` suffix.

use vt_core::classify::classify;
use vt_core::errors::VtError;
use vt_core::render::{render_with, RenderOptions};
use vt_core::{HostError, Value};

use crate::approx::approx_equal;
use crate::config::EngineConfig;
use crate::contains::includes_with;
use crate::equality::deep_equal_with;
use crate::ledger::AssertionOutcome;
use crate::message::format_message;

/// Optional fields an `is_error` check matches against; `None` is a wildcard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpectedError {
    /// Required error number.
    pub number: Option<i64>,
    /// Required error source.
    pub source: Option<String>,
    /// Required error description.
    pub description: Option<String>,
}

impl ExpectedError {
    /// Matches any pending error.
    pub fn any() -> Self {
        Self::default()
    }

    /// Requires a specific error number.
    pub fn number(mut self, number: i64) -> Self {
        self.number = Some(number);
        self
    }

    /// Requires a specific source.
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Requires a specific description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns whether `observed` is pending and agrees on every specified field.
    pub fn matches(&self, observed: &HostError) -> bool {
        observed.is_pending()
            && self.number.map_or(true, |number| number == observed.number)
            && self
                .source
                .as_deref()
                .map_or(true, |source| source == observed.source)
            && self
                .description
                .as_deref()
                .map_or(true, |description| description == observed.description)
    }
}

/// A single check and its operands.
#[derive(Debug, Clone, Copy)]
pub enum Assertion<'a> {
    /// Deep equality.
    IsEqual(&'a Value, &'a Value),
    /// Deep inequality.
    NotEqual(&'a Value, &'a Value),
    /// Truthy value.
    IsOk(&'a Value),
    /// Falsy value.
    NotOk(&'a Value),
    /// Null, Empty, Nothing or Missing.
    IsUndefined(&'a Value),
    /// Anything but Null, Empty, Nothing or Missing.
    NotUndefined(&'a Value),
    /// A pending error matching the expected fields.
    IsError(&'a HostError, &'a ExpectedError),
    /// No pending error.
    NotError(&'a HostError),
    /// Container holds the value somewhere.
    Includes(&'a Value, &'a Value),
    /// Container does not hold the value anywhere.
    NotIncludes(&'a Value, &'a Value),
    /// Agreement to the given significant figures.
    IsApproximate(&'a Value, &'a Value, u32),
    /// Disagreement at the given significant figures.
    NotApproximate(&'a Value, &'a Value, u32),
}

impl Assertion<'_> {
    /// Message used when the caller supplies none.
    pub fn default_template(&self) -> &'static str {
        match self {
            Assertion::IsEqual(..) => "Expected {0} to equal {1}",
            Assertion::NotEqual(..) => "Expected {0} to not equal {1}",
            Assertion::IsOk(_) => "Expected {0} to be ok",
            Assertion::NotOk(_) => "Expected {0} to not be ok",
            Assertion::IsUndefined(_) => "Expected {0} to be undefined",
            Assertion::NotUndefined(_) => "Expected {0} to not be undefined",
            Assertion::IsError(..) => {
                "Expected {0} to be an error (with number {1}, source {2}, description {3})"
            }
            Assertion::NotError(_) => "Expected {0} to not be an error",
            Assertion::Includes(..) => "Expected {1} to be included in {0}",
            Assertion::NotIncludes(..) => "Expected {1} to not be included in {0}",
            Assertion::IsApproximate(..) => {
                "Expected {0} to be approximately equal to {1} (with {2} significant figures of precision)"
            }
            Assertion::NotApproximate(..) => {
                "Expected {0} to not be approximately equal to {1} (with {2} significant figures of precision)"
            }
        }
    }

    /// Evaluates with the default message.
    pub fn evaluate(&self, config: &EngineConfig) -> AssertionOutcome {
        self.evaluate_with(self.default_template(), config)
    }

    /// Evaluates and fills `template` with the rendered operands.
    pub fn evaluate_with(&self, template: &str, config: &EngineConfig) -> AssertionOutcome {
        let options = config.render_options();
        let message = format_message(template, &self.rendered_operands(&options));
        match self.check(config) {
            Ok(passed) => AssertionOutcome::from_check(passed, message),
            Err(err) => {
                tracing::warn!(code = %err.info().code, "assertion misuse recorded as failure");
                AssertionOutcome::fail(format!("{message} (usage error: {})", err.info().message))
            }
        }
    }

    fn check(&self, config: &EngineConfig) -> Result<bool, VtError> {
        Ok(match *self {
            Assertion::IsEqual(a, b) => deep_equal_with(a, b, config),
            Assertion::NotEqual(a, b) => !deep_equal_with(a, b, config),
            Assertion::IsOk(value) => truthy(value),
            Assertion::NotOk(value) => !truthy(value),
            Assertion::IsUndefined(value) => is_undefined(value),
            Assertion::NotUndefined(value) => !is_undefined(value),
            Assertion::IsError(observed, expected) => expected.matches(observed),
            Assertion::NotError(observed) => !observed.is_pending(),
            Assertion::Includes(container, value) => includes_with(container, value, config)?,
            Assertion::NotIncludes(container, value) => !includes_with(container, value, config)?,
            Assertion::IsApproximate(a, b, sig) => approx_equal(a, b, sig)?,
            Assertion::NotApproximate(a, b, sig) => !approx_equal(a, b, sig)?,
        })
    }

    fn rendered_operands(&self, options: &RenderOptions) -> Vec<String> {
        let render = |value: &Value| render_with(value, 0, options);
        match *self {
            Assertion::IsEqual(a, b)
            | Assertion::NotEqual(a, b)
            | Assertion::Includes(a, b)
            | Assertion::NotIncludes(a, b) => vec![render(a), render(b)],
            Assertion::IsOk(value)
            | Assertion::NotOk(value)
            | Assertion::IsUndefined(value)
            | Assertion::NotUndefined(value) => vec![render(value)],
            Assertion::IsError(observed, expected) => vec![
                describe_error(observed),
                render(&Value::from(expected.number)),
                render(&Value::from(expected.source.clone())),
                render(&Value::from(expected.description.clone())),
            ],
            Assertion::NotError(observed) => vec![describe_error(observed)],
            Assertion::IsApproximate(a, b, sig) | Assertion::NotApproximate(a, b, sig) => {
                vec![render(a), render(b), sig.to_string()]
            }
        }
    }
}

fn describe_error(observed: &HostError) -> String {
    if observed.is_pending() {
        observed.to_string()
    } else {
        "[No error]".to_string()
    }
}

/// Host truthiness used by `is_ok` / `not_ok`.
///
/// Booleans are themselves, numbers are truthy when non-zero, text is truthy
/// when it reads as `true` or as a non-zero number. Every other shape is not ok.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::Int(number) => *number != 0,
        Value::Float(number) => *number != 0.0 && !number.is_nan(),
        Value::Text(text) => {
            let text = text.trim();
            if text.eq_ignore_ascii_case("true") {
                true
            } else if text.eq_ignore_ascii_case("false") {
                false
            } else {
                text.parse::<f64>().map_or(false, |number| number != 0.0)
            }
        }
        _ => false,
    }
}

/// Null, Empty, Nothing and Missing.
pub fn is_undefined(value: &Value) -> bool {
    classify(value).is_undefined()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(assertion: Assertion<'_>) -> AssertionOutcome {
        assertion.evaluate(&EngineConfig::default())
    }

    #[test]
    fn failing_equality_renders_operands() {
        let a = Value::seq([1, 2]);
        let b = Value::from("x");
        let outcome = run(Assertion::IsEqual(&a, &b));
        assert!(!outcome.passed());
        assert_eq!(outcome.message(), "Expected [\n  1,\n  2\n] to equal \"x\"");
    }

    #[test]
    fn includes_usage_error_gets_suffix() {
        let container = Value::Int(42);
        let value = Value::Int(1);
        for assertion in [
            Assertion::Includes(&container, &value),
            Assertion::NotIncludes(&container, &value),
        ] {
            let outcome = run(assertion);
            assert!(!outcome.passed());
            assert!(outcome.message().contains("(usage error: expected a sequence or collection, found Long)"));
        }
    }

    #[test]
    fn approximate_bounds_fail_both_polarities() {
        let a = Value::Float(1.0);
        for sig in [0, 16] {
            assert!(!run(Assertion::IsApproximate(&a, &a, sig)).passed());
            assert!(!run(Assertion::NotApproximate(&a, &a, sig)).passed());
        }
        let outcome = run(Assertion::NotApproximate(&Value::Float(1.001), &Value::Float(1.009), 3));
        assert!(outcome.passed());
    }

    #[test]
    fn error_fields_are_wildcards_when_unspecified() {
        let observed = HostError::new(11, "Calc", "Division by zero");
        assert!(ExpectedError::any().matches(&observed));
        assert!(ExpectedError::any().number(11).source("Calc").matches(&observed));
        assert!(!ExpectedError::any().number(13).matches(&observed));
        assert!(!ExpectedError::any().matches(&HostError::none()));

        let expected = ExpectedError::any().number(13);
        let outcome = run(Assertion::IsError(&observed, &expected));
        assert_eq!(
            outcome.message(),
            "Expected Error 11 (Calc): Division by zero to be an error (with number 13, source [Missing], description [Missing])"
        );
    }

    #[test]
    fn not_error_reports_the_pending_error() {
        let observed = HostError::new(5, "", "Invalid procedure call");
        let outcome = run(Assertion::NotError(&observed));
        assert!(!outcome.passed());
        assert_eq!(
            outcome.message(),
            "Expected Error 5: Invalid procedure call to not be an error"
        );
        assert!(run(Assertion::NotError(&HostError::none())).passed());
    }

    #[test]
    fn truthiness_follows_host_coercion() {
        assert!(truthy(&Value::Bool(true)));
        assert!(truthy(&Value::Int(-1)));
        assert!(truthy(&Value::from("TRUE")));
        assert!(truthy(&Value::from("2")));
        assert!(!truthy(&Value::from("False")));
        assert!(!truthy(&Value::from("abc")));
        assert!(!truthy(&Value::Float(0.0)));
        assert!(!truthy(&Value::Empty));
        assert!(!truthy(&Value::object("Range")));
    }

    #[test]
    fn undefined_covers_the_sentinels() {
        for value in [Value::Null, Value::Empty, Value::Nothing, Value::Missing] {
            assert!(is_undefined(&value));
        }
        assert!(!is_undefined(&Value::Int(0)));
        assert!(!is_undefined(&Value::from("")));
    }
}
