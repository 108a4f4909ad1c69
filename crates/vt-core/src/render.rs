//! Deterministic diagnostic rendering of values.
//!
//! Output is only ever used to interpolate failure messages, never for
//! comparisons.

use std::fmt::{self, Write};

use crate::value::Value;

/// Layout options for [`render_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Spaces per nesting level.
    pub indent_width: usize,
    /// Nesting level past which containers are elided as `[...]`.
    pub max_depth: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent_width: 2,
            max_depth: 256,
        }
    }
}

/// Renders a value at indentation level zero with default options.
pub fn render(value: &Value) -> String {
    render_with(value, 0, &RenderOptions::default())
}

/// Renders a value as if it were nested `indent` levels deep.
pub fn render_indented(value: &Value, indent: usize) -> String {
    render_with(value, indent, &RenderOptions::default())
}

/// Renders a value with explicit layout options.
pub fn render_with(value: &Value, indent: usize, options: &RenderOptions) -> String {
    let mut out = String::new();
    let mut printer = Printer { out: &mut out, options };
    // Writing into a String cannot fail.
    let _ = printer.value(value, indent);
    out
}

struct Printer<'a> {
    out: &'a mut String,
    options: &'a RenderOptions,
}

impl Printer<'_> {
    fn pad(&mut self, level: usize) {
        let width = level * self.options.indent_width;
        self.out.extend(std::iter::repeat(' ').take(width));
    }

    fn value(&mut self, value: &Value, indent: usize) -> fmt::Result {
        match value {
            Value::Missing => self.out.write_str("[Missing]"),
            Value::Nothing => self.out.write_str("[Nothing]"),
            Value::Empty => self.out.write_str("[Empty]"),
            Value::Null => self.out.write_str("[Null]"),
            Value::Text(text) => write!(self.out, "\"{text}\""),
            Value::Bool(true) => self.out.write_str("True"),
            Value::Bool(false) => self.out.write_str("False"),
            Value::Int(number) => write!(self.out, "{number}"),
            Value::Float(number) => write!(self.out, "{number}"),
            Value::Error(error) => write!(self.out, "{error}"),
            Value::Object(object) => write!(self.out, "[{}]", object.type_name()),
            Value::Sequence(seq) => self.entries("[", "]", seq.items().iter().map(|v| (None, v)), indent),
            Value::Collection(items) => self.entries(
                "[Collection [",
                "]]",
                items.iter().map(|v| (None, v)),
                indent,
            ),
            Value::Map(dict) => self.entries(
                "[Dictionary {",
                "}]",
                dict.iter().map(|(key, v)| (Some(key.as_str()), v)),
                indent,
            ),
        }
    }

    fn entries<'v, I>(&mut self, open: &str, close: &str, entries: I, indent: usize) -> fmt::Result
    where
        I: ExactSizeIterator<Item = (Option<&'v str>, &'v Value)>,
    {
        if indent >= self.options.max_depth {
            return self.out.write_str("[...]");
        }
        self.out.write_str(open)?;
        self.out.write_char('\n')?;
        let count = entries.len();
        for (idx, (key, item)) in entries.enumerate() {
            self.pad(indent + 1);
            if let Some(key) = key {
                write!(self.out, "{key}: ")?;
            }
            self.value(item, indent + 1)?;
            if idx + 1 != count {
                self.out.write_char(',')?;
            }
            self.out.write_char('\n')?;
        }
        self.pad(indent);
        self.out.write_str(close)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}
