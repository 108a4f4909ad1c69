//! Shape classification for [`Value`]s.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Recognized runtime shape of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeTag {
    /// Error sentinel carrying a host error snapshot.
    ErrorSentinel,
    /// Fixed-bounds array.
    Sequence,
    /// Ordered collection.
    Collection,
    /// Key/value dictionary.
    Map,
    /// Opaque host object.
    Object,
    /// Absent object reference.
    Nothing,
    /// IEEE double.
    Float,
    /// String scalar.
    Text,
    /// Boolean or integer scalar.
    Scalar,
    /// Null sentinel.
    Null,
    /// Empty sentinel.
    Empty,
    /// Omitted optional argument.
    Missing,
}

impl ShapeTag {
    /// Tie-break rank; the higher rank wins when a value could be read as two shapes
    /// and when the equality engine picks which rule governs a pair of operands.
    pub fn precedence(self) -> u8 {
        match self {
            ShapeTag::ErrorSentinel => 9,
            ShapeTag::Sequence => 8,
            ShapeTag::Collection => 7,
            ShapeTag::Map => 6,
            ShapeTag::Object => 5,
            ShapeTag::Nothing => 4,
            ShapeTag::Float => 3,
            ShapeTag::Text | ShapeTag::Scalar => 2,
            ShapeTag::Null | ShapeTag::Empty | ShapeTag::Missing => 1,
        }
    }

    /// Collections, maps, objects and absent references.
    pub fn is_object_shaped(self) -> bool {
        matches!(
            self,
            ShapeTag::Collection | ShapeTag::Map | ShapeTag::Object | ShapeTag::Nothing
        )
    }

    /// Shapes the containment engine can descend into.
    pub fn is_container(self) -> bool {
        matches!(self, ShapeTag::Sequence | ShapeTag::Collection)
    }

    /// Shapes that count as "undefined" for assertions.
    pub fn is_undefined(self) -> bool {
        matches!(
            self,
            ShapeTag::Null | ShapeTag::Empty | ShapeTag::Nothing | ShapeTag::Missing
        )
    }
}

/// Reports the shape of a value.
pub fn classify(value: &Value) -> ShapeTag {
    match value {
        Value::Error(_) => ShapeTag::ErrorSentinel,
        Value::Sequence(_) => ShapeTag::Sequence,
        Value::Collection(_) => ShapeTag::Collection,
        Value::Map(_) => ShapeTag::Map,
        Value::Object(_) => ShapeTag::Object,
        Value::Nothing => ShapeTag::Nothing,
        Value::Float(_) => ShapeTag::Float,
        Value::Text(_) => ShapeTag::Text,
        Value::Bool(_) | Value::Int(_) => ShapeTag::Scalar,
        Value::Null => ShapeTag::Null,
        Value::Empty => ShapeTag::Empty,
        Value::Missing => ShapeTag::Missing,
    }
}

/// Higher-precedence shape of two operands.
pub fn dominant(a: &Value, b: &Value) -> ShapeTag {
    let (lhs, rhs) = (classify(a), classify(b));
    if rhs.precedence() > lhs.precedence() {
        rhs
    } else {
        lhs
    }
}

/// Returns whether a value is the host error sentinel.
pub fn is_error_sentinel(value: &Value) -> bool {
    classify(value) == ShapeTag::ErrorSentinel
}

/// Concrete shape name as the host would report it.
///
/// Objects report their runtime type name, so two objects of different types
/// never share a shape name.
pub fn shape_name(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Missing => Cow::Borrowed("Missing"),
        Value::Empty => Cow::Borrowed("Empty"),
        Value::Null => Cow::Borrowed("Null"),
        Value::Nothing => Cow::Borrowed("Nothing"),
        Value::Bool(_) => Cow::Borrowed("Boolean"),
        Value::Int(_) => Cow::Borrowed("Long"),
        Value::Float(_) => Cow::Borrowed("Double"),
        Value::Text(_) => Cow::Borrowed("String"),
        Value::Sequence(_) => Cow::Borrowed("Array"),
        Value::Collection(_) => Cow::Borrowed("Collection"),
        Value::Map(_) => Cow::Borrowed("Dictionary"),
        Value::Error(_) => Cow::Borrowed("Error"),
        Value::Object(object) => Cow::Borrowed(object.type_name()),
    }
}
