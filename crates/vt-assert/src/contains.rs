//! Recursive membership search through sequences and collections.

use vt_core::classify::{classify, shape_name};
use vt_core::errors::{ErrorInfo, VtError};
use vt_core::Value;

use crate::config::EngineConfig;
use crate::equality::Equality;

/// Containment with the default configuration.
pub fn includes(container: &Value, value: &Value) -> Result<bool, VtError> {
    includes_with(container, value, &EngineConfig::default())
}

/// Returns whether `value` occurs anywhere inside `container`.
///
/// Nested sequences and collections are always descended rather than compared
/// as a whole, so `[[1, 2]]` does not include `[1, 2]`. Every other element is
/// a leaf compared with deep equality. A `container` that is neither a
/// sequence nor a collection is a usage error.
pub fn includes_with(
    container: &Value,
    value: &Value,
    config: &EngineConfig,
) -> Result<bool, VtError> {
    if !classify(container).is_container() {
        return Err(VtError::Usage(
            ErrorInfo::new(
                "incompatible-container",
                format!(
                    "expected a sequence or collection, found {}",
                    shape_name(container)
                ),
            )
            .with_hint("pass an array or a Collection as the first argument"),
        ));
    }
    let search = Search {
        equality: Equality::new(config),
        max_depth: config.max_depth,
    };
    Ok(search.descend(container, value, 0))
}

struct Search {
    equality: Equality,
    max_depth: usize,
}

impl Search {
    fn descend(&self, candidate: &Value, value: &Value, depth: usize) -> bool {
        if depth > self.max_depth {
            tracing::warn!(max_depth = self.max_depth, "containment search hit the depth limit");
            return false;
        }
        match candidate {
            Value::Sequence(seq) => seq
                .items()
                .iter()
                .any(|item| self.descend(item, value, depth + 1)),
            Value::Collection(items) => items
                .iter()
                .any(|item| self.descend(item, value, depth + 1)),
            leaf => self.equality.equal(leaf, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested() -> Value {
        Value::seq([Value::Int(1), Value::seq([2, 3]), Value::Int(4)])
    }

    #[test]
    fn finds_values_at_any_depth() {
        assert_eq!(includes(&nested(), &Value::Int(3)), Ok(true));
        assert_eq!(includes(&nested(), &Value::Int(5)), Ok(false));
    }

    #[test]
    fn mixes_sequences_and_collections() {
        let container = Value::collection([Value::seq([Value::collection(["deep"])])]);
        assert_eq!(includes(&container, &Value::from("deep")), Ok(true));
    }

    #[test]
    fn nested_containers_are_not_leaves() {
        let container = Value::seq([Value::seq([1, 2])]);
        assert_eq!(includes(&container, &Value::seq([1, 2])), Ok(false));
    }

    #[test]
    fn maps_are_compared_whole() {
        let container = Value::collection([Value::map([("a", 1)])]);
        assert_eq!(includes(&container, &Value::map([("a", 1)])), Ok(true));
        assert_eq!(includes(&container, &Value::Int(1)), Ok(false));
    }

    #[test]
    fn scalar_container_is_a_usage_error() {
        let err = includes(&Value::Int(42), &Value::Int(1)).unwrap_err();
        assert!(err.is_usage());
        assert_eq!(err.info().code, "incompatible-container");
        assert!(includes(&Value::map([("a", 1)]), &Value::Int(1)).is_err());
    }
}
