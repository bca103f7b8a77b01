use indexmap::IndexMap;

use super::{Number, Value};
use crate::JsonError;

fn expected(what: &str, value: &Value) -> JsonError {
    JsonError::TypeError {
        message: format!("Expected {}, got {}", what, value.kind()),
        hint: None,
    }
}

fn no_truncation(f: f64, target: &str) -> JsonError {
    JsonError::TypeError {
        message: format!("Refusing to truncate {} to {}", f, target),
        hint: Some("Fractional numbers only convert to floating-point targets".into()),
    }
}

fn out_of_range(i: i64, target: &str) -> JsonError {
    JsonError::TypeError {
        message: format!("Number {} out of range for {}", i, target),
        hint: None,
    }
}

impl Value {
    /// Convert this value into `T`, failing with a [`JsonError`] on any
    /// structural mismatch. Converting an `Invalid` value always fails;
    /// converting an `Exception` value surfaces the embedded parse error.
    pub fn convert<T>(&self) -> Result<T, JsonError>
    where
        T: TryFrom<Value, Error = JsonError>,
    {
        T::try_from(self.clone())
    }

    /// Non-failing form of [`Value::convert`].
    pub fn try_convert<T>(&self) -> Option<T>
    where
        T: TryFrom<Value, Error = JsonError>,
    {
        self.convert().ok()
    }

    /// View an object value as a record binder for mapping members onto a
    /// struct. Key matching is exact first, then ASCII case-insensitive.
    pub fn fields(&self) -> Result<Fields<'_>, JsonError> {
        match self {
            Value::Object(members) => Ok(Fields { members }),
            Value::Exception(err) => Err(err.clone()),
            other => Err(expected("object", other)),
        }
    }
}

/// Record binder over an object's members, used by `TryFrom<Value>` impls on
/// struct targets.
pub struct Fields<'a> {
    members: &'a IndexMap<String, Value>,
}

impl<'a> Fields<'a> {
    fn lookup(&self, name: &str) -> Option<&'a Value> {
        if let Some(value) = self.members.get(name) {
            return Some(value);
        }
        self.members
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }

    /// Bind a member that must be present.
    pub fn required<T>(&self, name: &str) -> Result<T, JsonError>
    where
        T: TryFrom<Value, Error = JsonError>,
    {
        match self.lookup(name) {
            Some(value) => T::try_from(value.clone()),
            None => Err(JsonError::MissingKey {
                key: name.to_string(),
            }),
        }
    }

    /// Bind a member that may be absent or `null`.
    pub fn optional<T>(&self, name: &str) -> Result<Option<T>, JsonError>
    where
        T: TryFrom<Value, Error = JsonError>,
    {
        match self.lookup(name) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => Ok(Some(T::try_from(value.clone())?)),
        }
    }

    /// Bind a member, falling back to the target type's default when the key
    /// is absent.
    pub fn or_default<T>(&self, name: &str) -> Result<T, JsonError>
    where
        T: TryFrom<Value, Error = JsonError> + Default,
    {
        match self.lookup(name) {
            Some(value) => T::try_from(value.clone()),
            None => Ok(T::default()),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            Value::Exception(err) => Err(err),
            other => Err(expected("string", &other)),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(b),
            Value::Exception(err) => Err(err),
            other => Err(expected("bool", &other)),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => Ok(n.as_f64()),
            Value::Exception(err) => Err(err),
            other => Err(expected("number", &other)),
        }
    }
}

impl TryFrom<Value> for f32 {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => Ok(n.as_f64() as f32),
            Value::Exception(err) => Err(err),
            other => Err(expected("number", &other)),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(Number::Int(i)) => Ok(i),
            Value::Number(Number::Float(f)) => Err(no_truncation(f, "i64")),
            Value::Exception(err) => Err(err),
            other => Err(expected("integer", &other)),
        }
    }
}

impl TryFrom<Value> for i32 {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(Number::Int(i)) => {
                i32::try_from(i).map_err(|_| out_of_range(i, "i32"))
            }
            Value::Number(Number::Float(f)) => Err(no_truncation(f, "i32")),
            Value::Exception(err) => Err(err),
            other => Err(expected("integer", &other)),
        }
    }
}

impl TryFrom<Value> for u64 {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(Number::Int(i)) => {
                u64::try_from(i).map_err(|_| out_of_range(i, "u64"))
            }
            Value::Number(Number::Float(f)) => Err(no_truncation(f, "u64")),
            Value::Exception(err) => Err(err),
            other => Err(expected("integer", &other)),
        }
    }
}

impl TryFrom<Value> for u32 {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(Number::Int(i)) => {
                u32::try_from(i).map_err(|_| out_of_range(i, "u32"))
            }
            Value::Number(Number::Float(f)) => Err(no_truncation(f, "u32")),
            Value::Exception(err) => Err(err),
            other => Err(expected("integer", &other)),
        }
    }
}

impl TryFrom<Value> for u16 {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(Number::Int(i)) => {
                u16::try_from(i).map_err(|_| out_of_range(i, "u16"))
            }
            Value::Number(Number::Float(f)) => Err(no_truncation(f, "u16")),
            Value::Exception(err) => Err(err),
            other => Err(expected("integer", &other)),
        }
    }
}

impl TryFrom<Value> for u8 {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(Number::Int(i)) => {
                u8::try_from(i).map_err(|_| out_of_range(i, "u8"))
            }
            Value::Number(Number::Float(f)) => Err(no_truncation(f, "u8")),
            Value::Exception(err) => Err(err),
            other => Err(expected("integer", &other)),
        }
    }
}

impl TryFrom<Value> for usize {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(Number::Int(i)) => {
                usize::try_from(i).map_err(|_| out_of_range(i, "usize"))
            }
            Value::Number(Number::Float(f)) => Err(no_truncation(f, "usize")),
            Value::Exception(err) => Err(err),
            other => Err(expected("integer", &other)),
        }
    }
}

impl<T> TryFrom<Value> for Vec<T>
where
    T: TryFrom<Value, Error = JsonError>,
{
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(items) => {
                let mut result = Vec::with_capacity(items.len());
                for item in items {
                    result.push(T::try_from(item)?);
                }
                Ok(result)
            }
            Value::Exception(err) => Err(err),
            other => Err(expected("array", &other)),
        }
    }
}

impl<T> TryFrom<Value> for Option<T>
where
    T: TryFrom<Value, Error = JsonError>,
{
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(None),
            v => Ok(Some(T::try_from(v)?)),
        }
    }
}

impl TryFrom<Value> for IndexMap<String, Value> {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(members) => Ok(members),
            Value::Exception(err) => Err(err),
            other => Err(expected("object", &other)),
        }
    }
}

impl TryFrom<Value> for IndexMap<String, String> {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(members) => {
                let mut map = IndexMap::with_capacity(members.len());
                for (key, val) in members {
                    map.insert(key, String::try_from(val)?);
                }
                Ok(map)
            }
            Value::Exception(err) => Err(err),
            other => Err(expected("object", &other)),
        }
    }
}
