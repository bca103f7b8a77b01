use super::Value;
use crate::JsonError;

/// Owner of a parsed tree for callers that want ad-hoc navigation instead of
/// declaring a static target shape. Produced by [`crate::parse_dynamic`].
pub struct Dynamic {
    root: Value,
}

impl Dynamic {
    pub fn new(root: Value) -> Self {
        Dynamic { root }
    }

    /// Cursor positioned at the root value.
    pub fn root(&self) -> Cursor<'_> {
        Cursor { value: &self.root }
    }

    /// One-call typed lookup using dot notation, e.g.
    /// `doc.get::<u16>("server.port")` or `doc.get::<i64>("items.2.id")`.
    pub fn get<T>(&self, path: &str) -> Result<T, JsonError>
    where
        T: TryFrom<Value, Error = JsonError>,
    {
        self.root().path(path).convert()
    }

    pub fn into_value(self) -> Value {
        self.root
    }
}

/// Navigation proxy over a [`Value`] tree.
///
/// Every step is total: navigating through a missing member or index yields a
/// cursor over [`Value::Invalid`], which keeps absorbing further steps, so a
/// whole path can be walked before checking [`Cursor::is_valid`] once.
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    value: &'a Value,
}

impl<'a> Cursor<'a> {
    pub fn new(value: &'a Value) -> Self {
        Cursor { value }
    }

    /// Object-key lookup by member name.
    pub fn member(self, name: &str) -> Cursor<'a> {
        Cursor {
            value: self.value.get(name),
        }
    }

    /// Array indexing.
    pub fn at(self, index: usize) -> Cursor<'a> {
        Cursor {
            value: self.value.get(index),
        }
    }

    /// Walk a dotted path in one call. An all-digit segment indexes arrays;
    /// any other segment is an object-key lookup.
    pub fn path(self, path: &str) -> Cursor<'a> {
        let mut cursor = self;
        for segment in path.split('.') {
            cursor = match segment.parse::<usize>() {
                Ok(index) => cursor.at(index),
                Err(_) => cursor.member(segment),
            };
        }
        cursor
    }

    /// The underlying node.
    pub fn value(self) -> &'a Value {
        self.value
    }

    pub fn is_valid(self) -> bool {
        self.value.is_valid()
    }

    // --- terminal scalar access ---

    pub fn as_bool(self) -> Option<bool> {
        self.value.as_bool()
    }

    pub fn as_i64(self) -> Option<i64> {
        self.value.as_i64()
    }

    pub fn as_f64(self) -> Option<f64> {
        self.value.as_f64()
    }

    pub fn as_str(self) -> Option<&'a str> {
        self.value.as_str()
    }

    pub fn convert<T>(self) -> Result<T, JsonError>
    where
        T: TryFrom<Value, Error = JsonError>,
    {
        self.value.convert()
    }
}
