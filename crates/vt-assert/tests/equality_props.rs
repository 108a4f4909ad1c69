mod common;

use proptest::prelude::*;
use vt_assert::{approx_equal, deep_equal, includes};
use vt_core::Value;

use common::{any_value, reflexive_value};

proptest! {
    #[test]
    fn equality_is_reflexive(value in reflexive_value()) {
        prop_assert!(deep_equal(&value, &value.clone()), "{value}");
    }

    #[test]
    fn equality_is_symmetric(a in any_value(), b in any_value()) {
        prop_assert_eq!(deep_equal(&a, &b), deep_equal(&b, &a));
    }

    #[test]
    fn length_mismatch_is_never_equal(
        items in prop::collection::vec(reflexive_value(), 0..5),
        extra in reflexive_value(),
    ) {
        let mut longer = items.clone();
        longer.push(extra);
        prop_assert!(!deep_equal(&Value::seq(items.clone()), &Value::seq(longer.clone())));
        prop_assert!(!deep_equal(&Value::collection(items), &Value::collection(longer)));
    }

    #[test]
    fn every_element_is_included(items in prop::collection::vec(any::<i64>(), 1..6), pick in any::<prop::sample::Index>()) {
        let target = items[pick.index(items.len())];
        let container = Value::collection([Value::seq(items.clone())]);
        prop_assert_eq!(includes(&container, &Value::Int(target)), Ok(true));
    }

    #[test]
    fn approximation_is_reflexive_for_valid_precision(number in -1.0e6f64..1.0e6, sig in 1u32..=15) {
        prop_assert_eq!(approx_equal(&Value::Float(number), &Value::Float(number), sig), Ok(true));
    }

    #[test]
    fn approximation_rejects_invalid_precision(a in -1.0e6f64..1.0e6, b in -1.0e6f64..1.0e6, sig in 16u32..64) {
        prop_assert!(approx_equal(&Value::Float(a), &Value::Float(b), sig).is_err());
        prop_assert!(approx_equal(&Value::Float(a), &Value::Float(b), 0).is_err());
    }
}

#[test]
fn nested_sequence_containment() {
    let container = Value::seq([Value::Int(1), Value::seq([2, 3]), Value::Int(4)]);
    assert_eq!(includes(&container, &Value::Int(3)), Ok(true));
    assert_eq!(includes(&container, &Value::Int(5)), Ok(false));
    assert!(includes(&Value::Int(42), &Value::Int(1)).is_err());
}

#[test]
fn three_figure_approximation() {
    assert_eq!(
        approx_equal(&Value::Float(1.001), &Value::Float(1.002), 3),
        Ok(true)
    );
    assert_eq!(
        approx_equal(&Value::Float(1.001), &Value::Float(1.009), 3),
        Ok(false)
    );
}
