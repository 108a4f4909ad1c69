#![deny(missing_docs)]
#![doc = "Deep equality, containment, approximate comparison and the per-test verdict ledger for vtest."]

/// Significant-figure comparison.
pub mod approx;
/// Assertion call surface and message templates.
pub mod assertions;
/// Test case facade over the ledger.
pub mod case;
/// Engine configuration.
pub mod config;
/// Recursive containment search.
pub mod contains;
/// Structural equality.
pub mod equality;
/// Outcome ledger and verdict.
pub mod ledger;
/// Positional message templating.
pub mod message;
/// Reporter snapshot.
pub mod report;

pub use approx::{approx_equal, scientific};
pub use assertions::{Assertion, ExpectedError};
pub use case::TestCase;
pub use config::EngineConfig;
pub use contains::{includes, includes_with};
pub use equality::{deep_equal, deep_equal_with};
pub use ledger::{AssertionLedger, AssertionOutcome, Verdict};
pub use message::format_message;
pub use report::TestReport;
