use crate::error::TypeMismatch;
use crate::kind::ValueKind;
use std::collections::BTreeMap;

/// Map type backing object values. Entries iterate in key order.
pub type ObjectMap = BTreeMap<String, Value>;

/// An owned JSON value.
///
/// Every payload is owned by the enclosing value, so `clone` produces a fully
/// independent deep copy and dropping a value releases the whole subtree.
/// Heap payloads are boxed to keep `Value` at two words.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Double(f64),
    String(Box<String>),
    Array(Box<Vec<Value>>),
    Object(Box<ObjectMap>),
}

impl Value {
    pub fn bool(value: bool) -> Value {
        Value::Bool(value)
    }
    pub fn int(value: impl Into<i64>) -> Value {
        Value::Int(value.into())
    }
    pub fn double(value: impl Into<f64>) -> Value {
        Value::Double(value.into())
    }
    pub fn string(value: impl Into<String>) -> Value {
        Value::String(Box::new(value.into()))
    }
    pub fn array() -> Value {
        Value::Array(Box::default())
    }
    pub fn object() -> Value {
        Value::Object(Box::default())
    }

    /// The zero value of `kind`: `false`, `0`, `0.0`, `""`, `[]` or `{}`.
    pub fn with_kind(kind: ValueKind) -> Value {
        match kind {
            ValueKind::Null => Value::Null,
            ValueKind::Bool => Value::Bool(false),
            ValueKind::Int => Value::Int(0),
            ValueKind::Double => Value::Double(0.0),
            ValueKind::String => Value::string(""),
            ValueKind::Array => Value::array(),
            ValueKind::Object => Value::object(),
        }
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Double(_) => ValueKind::Double,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }
    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }
    pub fn is_double(&self) -> bool {
        matches!(self, Value::Double(_))
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

    /// Element count of an array, entry count of an object, 0 for anything else.
    pub fn len(&self) -> usize {
        match self {
            Value::Array(items) => items.len(),
            Value::Object(entries) => entries.len(),
            _ => 0,
        }
    }

    /// Null and containers without entries are empty. Scalars never are.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Array(items) => items.is_empty(),
            Value::Object(entries) => entries.is_empty(),
            _ => false,
        }
    }

    pub(crate) fn mismatch(&self, expected: ValueKind) -> TypeMismatch {
        TypeMismatch::new(expected, self.kind())
    }

    pub fn as_bool(&self) -> Result<bool, TypeMismatch> {
        match self {
            Value::Bool(value) => Ok(*value),
            _ => Err(self.mismatch(ValueKind::Bool)),
        }
    }

    pub fn as_int(&self) -> Result<i64, TypeMismatch> {
        match self {
            Value::Int(value) => Ok(*value),
            _ => Err(self.mismatch(ValueKind::Int)),
        }
    }

    pub fn as_double(&self) -> Result<f64, TypeMismatch> {
        match self {
            Value::Double(value) => Ok(*value),
            _ => Err(self.mismatch(ValueKind::Double)),
        }
    }

    pub fn as_str(&self) -> Result<&str, TypeMismatch> {
        match self {
            Value::String(value) => Ok(value.as_str()),
            _ => Err(self.mismatch(ValueKind::String)),
        }
    }

    pub fn as_array(&self) -> Result<&[Value], TypeMismatch> {
        match self {
            Value::Array(items) => Ok(items.as_slice()),
            _ => Err(self.mismatch(ValueKind::Array)),
        }
    }

    pub fn as_array_mut(&mut self) -> Result<&mut Vec<Value>, TypeMismatch> {
        match self {
            Value::Array(items) => Ok(&mut **items),
            _ => Err(self.mismatch(ValueKind::Array)),
        }
    }

    pub fn as_object(&self) -> Result<&ObjectMap, TypeMismatch> {
        match self {
            Value::Object(entries) => Ok(&**entries),
            _ => Err(self.mismatch(ValueKind::Object)),
        }
    }

    pub fn as_object_mut(&mut self) -> Result<&mut ObjectMap, TypeMismatch> {
        match self {
            Value::Object(entries) => Ok(&mut **entries),
            _ => Err(self.mismatch(ValueKind::Object)),
        }
    }

    /// Releases the payload and leaves `Null` behind.
    pub fn clear(&mut self) {
        *self = Value::Null;
    }

    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            // Identical bit patterns compare equal so NaN stays reflexive
            (Value::Double(a), Value::Double(b)) => a == b || a.to_bits() == b.to_bits(),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Double(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::string(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(Box::new(value))
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(Box::new(items))
    }
}

impl From<ObjectMap> for Value {
    fn from(entries: ObjectMap) -> Self {
        Value::Object(Box::new(entries))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Value::from(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect::<ObjectMap>(),
        )
    }
}
