#![deny(missing_docs)]
#![doc = "Value model, shape classifier and diagnostic pretty printer shared by the vtest crates."]

/// Shape classification and tie-break precedence.
pub mod classify;
/// Structured error types.
pub mod errors;
/// Diagnostic rendering of values.
pub mod render;
/// Canonical JSON and YAML helpers.
pub mod serde;
/// Dynamically shaped runtime values.
pub mod value;

pub use classify::{classify, dominant, is_error_sentinel, shape_name, ShapeTag};
pub use errors::{ErrorInfo, VtError};
pub use render::{render, render_indented, render_with, RenderOptions};
pub use value::{Dictionary, HostError, ObjectRef, Sequence, Value};
