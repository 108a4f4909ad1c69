#![allow(dead_code)]

use proptest::prelude::*;
use vt_assert::TestCase;
use vt_core::Value;

/// Scalars that are equal to themselves under host equality.
pub fn reflexive_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        (-1.0e12f64..1.0e12).prop_map(Value::Float),
        "[a-z0-9]{0,6}".prop_map(Value::Text),
        Just(Value::Empty),
        Just(Value::Missing),
        Just(Value::Nothing),
    ]
}

/// Any leaf, including the ones that never equal anything.
pub fn any_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        reflexive_leaf(),
        Just(Value::Null),
        (1i64..20).prop_map(|number| Value::error(number, "", "")),
        "[A-C]".prop_map(|name| Value::object(name)),
    ]
}

fn nest(leaf: BoxedStrategy<Value>) -> BoxedStrategy<Value> {
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(|items| Value::seq(items)),
            prop::collection::vec(inner.clone(), 0..4).prop_map(|items| Value::collection(items)),
            prop::collection::vec(("[a-c]", inner), 0..3).prop_map(|entries| Value::map(entries)),
        ]
    })
    .boxed()
}

/// Nested values made only of self-equal leaves.
pub fn reflexive_value() -> BoxedStrategy<Value> {
    nest(reflexive_leaf().boxed())
}

/// Nested values of every shape.
pub fn any_value() -> BoxedStrategy<Value> {
    nest(any_leaf().boxed())
}

/// Test case after running `passes` passing and `fails` failing checks.
pub fn case_with(passes: usize, fails: usize) -> TestCase {
    let mut case = TestCase::new("fixture");
    for _ in 0..passes {
        case.is_equal(1, 1);
    }
    for _ in 0..fails {
        case.is_equal(1, 2);
    }
    case
}
