use indexmap::IndexMap;

use crate::JsonError;

mod access;
mod conversion;
mod dynamic;

pub use access::ValueIndex;
pub use conversion::Fields;
pub use dynamic::{Cursor, Dynamic};

/// A parsed numeric payload.
///
/// An integer literal (no fraction or exponent) that fits `i64` is `Int`;
/// everything else is `Float`. Every `Int` is also viewable as a double, so
/// `is_int` implies `is_double` but not the other way around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn is_int(self) -> bool {
        matches!(self, Number::Int(_))
    }

    pub fn as_i64(self) -> Option<i64> {
        match self {
            Number::Int(i) => Some(i),
            Number::Float(_) => None,
        }
    }

    /// Total over both arms: integers are widened.
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }
}

/// The immutable tagged union representing any JSON construct, including the
/// two sentinels:
///
/// - [`Value::Invalid`] is what safe navigation degrades to on a missing key
///   or out-of-range index. It never appears in a freshly parsed tree and
///   absorbs further indexing.
/// - [`Value::Exception`] is the root produced when parsing fails; the error
///   is data, not a panic or an `Err` from [`crate::parse`].
///
/// The tree is immutable once built and holds no interior mutability, so it
/// can be shared freely across threads.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(IndexMap<String, Value>),
    Invalid,
    Exception(JsonError),
}

impl Value {
    /// Short name of the active variant, used in conversion diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(Number::Int(_)) => "int",
            Value::Number(Number::Float(_)) => "double",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Invalid => "invalid",
            Value::Exception(_) => "exception",
        }
    }
}

#[cfg(test)]
mod tests;
