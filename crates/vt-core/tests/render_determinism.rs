use proptest::prelude::*;
use vt_core::{render, render_indented, Value};

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        (-1.0e9f64..1.0e9).prop_map(Value::Float),
        "[a-z ]{0,8}".prop_map(Value::Text),
        Just(Value::Null),
        Just(Value::Empty),
        Just(Value::Missing),
        Just(Value::Nothing),
        (1i64..100).prop_map(|number| Value::error(number, "Module1", "fault")),
    ]
}

fn any_value() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(|items| Value::seq(items)),
            prop::collection::vec(inner.clone(), 0..4).prop_map(|items| Value::collection(items)),
            prop::collection::vec(("[a-c]{1,2}", inner), 0..4).prop_map(|entries| Value::map(entries)),
        ]
    })
}

proptest! {
    #[test]
    fn rendering_is_byte_stable(value in any_value()) {
        let first = render(&value);
        let second = render(&value.clone());
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(value.to_string(), first);
    }

    #[test]
    fn nested_rendering_only_indents(value in any_value()) {
        let flat = render(&value);
        let nested = render_indented(&value, 1);
        prop_assert_eq!(flat.lines().count(), nested.lines().count());
        for (outer, inner) in flat.lines().skip(1).zip(nested.lines().skip(1)) {
            prop_assert_eq!(format!("  {outer}"), inner);
        }
    }
}

#[test]
fn dictionary_entries_keep_insertion_order() {
    let value = Value::map([("zeta", Value::Int(1)), ("alpha", Value::from("a"))]);
    assert_eq!(
        render(&value),
        "[Dictionary {\n  zeta: 1,\n  alpha: \"a\"\n}]"
    );
}

#[test]
fn error_sentinel_uses_its_display_form() {
    assert_eq!(
        render(&Value::error(9, "Sheet1", "Subscript out of range")),
        "Error 9 (Sheet1): Subscript out of range"
    );
}
