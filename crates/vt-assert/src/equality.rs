//! Structural equality over [`Value`] trees.

use vt_core::classify::{dominant, shape_name, ShapeTag};
use vt_core::{Dictionary, Sequence, Value};

use crate::approx::approx_equal;
use crate::config::EngineConfig;

/// Deep equality with the default configuration.
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    deep_equal_with(a, b, &EngineConfig::default())
}

/// Deep equality using the precision and depth limit of `config`.
pub fn deep_equal_with(a: &Value, b: &Value, config: &EngineConfig) -> bool {
    Equality::new(config).equal(a, b)
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Equality {
    significant_figures: u32,
    max_depth: usize,
}

impl Equality {
    pub(crate) fn new(config: &EngineConfig) -> Self {
        Self {
            significant_figures: config.equality_significant_figures,
            max_depth: config.max_depth,
        }
    }

    pub(crate) fn equal(&self, a: &Value, b: &Value) -> bool {
        self.equal_at(a, b, 0)
    }

    fn equal_at(&self, a: &Value, b: &Value, depth: usize) -> bool {
        if depth > self.max_depth {
            tracing::warn!(max_depth = self.max_depth, "deep equality hit the depth limit");
            return false;
        }
        match dominant(a, b) {
            ShapeTag::ErrorSentinel => false,
            ShapeTag::Sequence => match (a, b) {
                (Value::Sequence(lhs), Value::Sequence(rhs)) => self.sequences(lhs, rhs, depth),
                _ => false,
            },
            tag if tag.is_object_shaped() => self.objects(a, b, depth),
            ShapeTag::Float => approx_equal(a, b, self.significant_figures).unwrap_or(false),
            _ => primitive_equal(a, b),
        }
    }

    fn sequences(&self, lhs: &Sequence, rhs: &Sequence, depth: usize) -> bool {
        // Equal lower bounds and lengths imply equal upper bounds.
        lhs.lower_bound() == rhs.lower_bound() && self.aligned(lhs.items(), rhs.items(), depth)
    }

    fn aligned(&self, lhs: &[Value], rhs: &[Value], depth: usize) -> bool {
        lhs.len() == rhs.len()
            && lhs
                .iter()
                .zip(rhs)
                .all(|(a, b)| self.equal_at(a, b, depth + 1))
    }

    fn objects(&self, a: &Value, b: &Value, depth: usize) -> bool {
        if shape_name(a) != shape_name(b) {
            return false;
        }
        match (a, b) {
            (Value::Collection(lhs), Value::Collection(rhs)) => self.aligned(lhs, rhs, depth),
            (Value::Map(lhs), Value::Map(rhs)) => self.maps(lhs, rhs, depth),
            (Value::Object(lhs), Value::Object(rhs)) => lhs.same_instance(rhs),
            (Value::Nothing, Value::Nothing) => true,
            _ => false,
        }
    }

    fn maps(&self, lhs: &Dictionary, rhs: &Dictionary, depth: usize) -> bool {
        lhs.len() == rhs.len()
            && lhs.iter().zip(rhs).all(|((lkey, lvalue), (rkey, rvalue))| {
                lkey == rkey && self.equal_at(lvalue, rvalue, depth + 1)
            })
    }
}

fn bool_as_int(value: bool) -> i64 {
    if value {
        -1
    } else {
        0
    }
}

/// Host equality for non-container, non-float operands.
fn primitive_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Bool(lhs), Value::Bool(rhs)) => lhs == rhs,
        (Value::Int(lhs), Value::Int(rhs)) => lhs == rhs,
        (Value::Text(lhs), Value::Text(rhs)) => lhs == rhs,
        (Value::Bool(flag), Value::Int(number)) | (Value::Int(number), Value::Bool(flag)) => {
            bool_as_int(*flag) == *number
        }
        (Value::Int(number), Value::Text(text)) | (Value::Text(text), Value::Int(number)) => text
            .trim()
            .parse::<f64>()
            .map_or(false, |parsed| parsed == *number as f64),
        (Value::Empty, other) | (other, Value::Empty) => match other {
            Value::Empty | Value::Int(0) | Value::Bool(false) => true,
            Value::Text(text) => text.is_empty(),
            _ => false,
        },
        (Value::Missing, Value::Missing) => true,
        // Null propagates: it is not equal to anything, itself included.
        _ => false,
    }
}
