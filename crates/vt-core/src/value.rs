//! Dynamically shaped runtime values inspected by the assertion engine.
//!
//! A [`Value`] is an owned tree. Host objects are the only shared part and
//! are compared by identity, so a value tree can never contain a cycle.

use std::fmt;
use std::rc::Rc;

use indexmap::map::Iter as IndexIter;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// By-value snapshot of the last error raised by the host environment.
///
/// Number `0` means no error is pending.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HostError {
    /// Numeric error code.
    pub number: i64,
    /// Component that raised the error.
    #[serde(default)]
    pub source: String,
    /// Human readable description.
    #[serde(default)]
    pub description: String,
}

impl HostError {
    /// Creates a snapshot of a raised error.
    pub fn new(number: i64, source: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            number,
            source: source.into(),
            description: description.into(),
        }
    }

    /// Snapshot representing "no error pending".
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns whether an error is pending.
    pub fn is_pending(&self) -> bool {
        self.number != 0
    }
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error {}", self.number)?;
        if !self.source.is_empty() {
            write!(f, " ({})", self.source)?;
        }
        if !self.description.is_empty() {
            write!(f, ": {}", self.description)?;
        }
        Ok(())
    }
}

#[derive(Debug)]
struct ObjectCell {
    type_name: String,
}

/// Handle to an opaque host object.
///
/// Clones share identity with the original; two handles created separately
/// are never the same instance, even with equal type names.
#[derive(Clone)]
pub struct ObjectRef {
    cell: Rc<ObjectCell>,
}

impl ObjectRef {
    /// Allocates a fresh object identity with the given runtime type name.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            cell: Rc::new(ObjectCell {
                type_name: type_name.into(),
            }),
        }
    }

    /// Runtime type name reported by the host.
    pub fn type_name(&self) -> &str {
        &self.cell.type_name
    }

    /// Returns whether both handles refer to the same object.
    pub fn same_instance(&self, other: &ObjectRef) -> bool {
        Rc::ptr_eq(&self.cell, &other.cell)
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectRef")
            .field("type_name", &self.cell.type_name)
            .field("ptr", &Rc::as_ptr(&self.cell))
            .finish()
    }
}

/// Fixed-bounds array. Multi-dimensional arrays are nested sequences.
#[derive(Debug, Clone, Default)]
pub struct Sequence {
    lower_bound: i64,
    items: Vec<Value>,
}

impl Sequence {
    /// Creates a zero-based sequence.
    pub fn new(items: Vec<Value>) -> Self {
        Self::with_lower_bound(0, items)
    }

    /// Creates a sequence whose first index is `lower_bound`.
    pub fn with_lower_bound(lower_bound: i64, items: Vec<Value>) -> Self {
        Self { lower_bound, items }
    }

    /// First valid index.
    pub fn lower_bound(&self) -> i64 {
        self.lower_bound
    }

    /// Last valid index; one below the lower bound when empty.
    ///
    /// `None` when that index does not fit in an `i64`.
    pub fn upper_bound(&self) -> Option<i64> {
        let len = i64::try_from(self.items.len()).ok()?;
        self.lower_bound.checked_add(len)?.checked_sub(1)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the sequence holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Element at a bound-relative index.
    pub fn get(&self, index: i64) -> Option<&Value> {
        let offset = index.checked_sub(self.lower_bound)?;
        usize::try_from(offset)
            .ok()
            .and_then(|offset| self.items.get(offset))
    }

    /// Elements in index order.
    pub fn items(&self) -> &[Value] {
        &self.items
    }
}

/// Insertion-ordered map with unique string keys.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: IndexMap<String, Value>,
}

impl Dictionary {
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a value. A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Looks up a value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns whether the key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes a key while preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the dictionary holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> IndexIter<'_, String, Value> {
        self.entries.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Dictionary
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = Dictionary::new();
        for (key, value) in iter {
            dict.insert(key, value);
        }
        dict
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = (&'a String, &'a Value);
    type IntoIter = IndexIter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Dynamically typed datum.
#[derive(Debug, Clone)]
pub enum Value {
    /// Omitted optional argument.
    Missing,
    /// Uninitialized variable.
    Empty,
    /// Explicit "no valid data".
    Null,
    /// Absent object reference.
    Nothing,
    /// Boolean scalar.
    Bool(bool),
    /// Integer scalar.
    Int(i64),
    /// IEEE double.
    Float(f64),
    /// String scalar.
    Text(String),
    /// Fixed-bounds array.
    Sequence(Sequence),
    /// Dynamically sized ordered list with 1-based enumeration.
    Collection(Vec<Value>),
    /// Insertion-ordered key/value map.
    Map(Dictionary),
    /// Error sentinel.
    Error(HostError),
    /// Opaque host object.
    Object(ObjectRef),
}

impl Value {
    /// Zero-based sequence from anything convertible to values.
    pub fn seq<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::Sequence(Sequence::new(items.into_iter().map(Into::into).collect()))
    }

    /// Sequence with an explicit lower bound.
    pub fn seq_from<I, T>(lower_bound: i64, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::Sequence(Sequence::with_lower_bound(
            lower_bound,
            items.into_iter().map(Into::into).collect(),
        ))
    }

    /// Ordered collection.
    pub fn collection<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::Collection(items.into_iter().map(Into::into).collect())
    }

    /// Dictionary built from key/value pairs in insertion order.
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Map(entries.into_iter().collect())
    }

    /// Fresh opaque object of the given runtime type.
    pub fn object(type_name: impl Into<String>) -> Self {
        Value::Object(ObjectRef::new(type_name))
    }

    /// Error sentinel.
    pub fn error(number: i64, source: impl Into<String>, description: impl Into<String>) -> Self {
        Value::Error(HostError::new(number, source, description))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

impl From<Sequence> for Value {
    fn from(value: Sequence) -> Self {
        Value::Sequence(value)
    }
}

impl From<Dictionary> for Value {
    fn from(value: Dictionary) -> Self {
        Value::Map(value)
    }
}

impl From<HostError> for Value {
    fn from(value: HostError) -> Self {
        Value::Error(value)
    }
}

impl From<ObjectRef> for Value {
    fn from(value: ObjectRef) -> Self {
        Value::Object(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::seq(items)
    }
}

/// `None` becomes [`Value::Missing`], mirroring an omitted optional argument.
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Missing, Into::into)
    }
}
