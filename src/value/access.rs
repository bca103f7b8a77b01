use std::ops;

use indexmap::IndexMap;

use super::{Number, Value};
use crate::JsonError;

/// Shared sentinel handed out by every failed lookup.
static INVALID: Value = Value::Invalid;

impl Value {
    // --- type probes (total, never fail) ---

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// True only for integer-classified numbers. `is_int` implies
    /// [`Value::is_double`].
    pub fn is_int(&self) -> bool {
        matches!(self, Value::Number(n) if n.is_int())
    }

    /// True for every number: integers are representable as doubles.
    pub fn is_double(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// False only for the [`Value::Invalid`] sentinel.
    pub fn is_valid(&self) -> bool {
        !matches!(self, Value::Invalid)
    }

    pub fn is_exception(&self) -> bool {
        matches!(self, Value::Exception(_))
    }

    // --- extraction (fail on variant mismatch, as `None`) ---

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Object(members) => Some(members),
            _ => None,
        }
    }

    /// The parse failure carried by an [`Value::Exception`] root.
    pub fn error(&self) -> Option<&JsonError> {
        match self {
            Value::Exception(err) => Some(err),
            _ => None,
        }
    }

    /// Element count for arrays and objects, zero for everything else.
    pub fn len(&self) -> usize {
        match self {
            Value::Array(items) => items.len(),
            Value::Object(members) => members.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // --- safe navigation ---

    /// Index into the value by array position or object key.
    ///
    /// Total and panic-free: any lookup the receiver cannot answer (wrong
    /// variant, out of range, missing key) returns [`Value::Invalid`], and
    /// `Invalid` absorbs further lookups, so chains like
    /// `root.get("a").get(2).get("b")` need no guards.
    pub fn get<I: ValueIndex>(&self, index: I) -> &Value {
        index.index_into(self)
    }
}

/// Index types usable with [`Value::get`] and the `[]` operator.
pub trait ValueIndex {
    fn index_into<'a>(&self, value: &'a Value) -> &'a Value;
}

impl ValueIndex for usize {
    fn index_into<'a>(&self, value: &'a Value) -> &'a Value {
        match value {
            Value::Array(items) => items.get(*self).unwrap_or(&INVALID),
            _ => &INVALID,
        }
    }
}

impl ValueIndex for &str {
    fn index_into<'a>(&self, value: &'a Value) -> &'a Value {
        match value {
            Value::Object(members) => members.get(*self).unwrap_or(&INVALID),
            _ => &INVALID,
        }
    }
}

impl ValueIndex for String {
    fn index_into<'a>(&self, value: &'a Value) -> &'a Value {
        self.as_str().index_into(value)
    }
}

impl<I: ValueIndex> ops::Index<I> for Value {
    type Output = Value;

    fn index(&self, index: I) -> &Value {
        index.index_into(self)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}
