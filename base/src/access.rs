//! Operator forms of navigation: `value[0]`, `value["key"]`.
//!
//! Writing through `value[...]` auto-vivifies like [`Value::element_mut`] and
//! [`Value::member_mut`]. Reading never changes the value: absent entries
//! read as `Null`.

use crate::kind::ValueKind;
use crate::value::Value;
use std::ops::{Index, IndexMut};

static NULL: Value = Value::Null;

impl Index<usize> for Value {
    type Output = Value;

    /// # Panics
    ///
    /// Panics if the value is neither an array nor `Null`.
    fn index(&self, index: usize) -> &Value {
        match self {
            Value::Array(items) => items.get(index).unwrap_or(&NULL),
            Value::Null => &NULL,
            other => panic!("{}", other.mismatch(ValueKind::Array)),
        }
    }
}

impl IndexMut<usize> for Value {
    /// # Panics
    ///
    /// Panics if the value is neither an array nor `Null`.
    fn index_mut(&mut self, index: usize) -> &mut Value {
        match self.element_mut(index) {
            Ok(element) => element,
            Err(mismatch) => panic!("{}", mismatch),
        }
    }
}

impl Index<&str> for Value {
    type Output = Value;

    /// # Panics
    ///
    /// Panics if the value is neither an object nor `Null`.
    fn index(&self, key: &str) -> &Value {
        match self {
            Value::Object(entries) => entries.get(key).unwrap_or(&NULL),
            Value::Null => &NULL,
            other => panic!("{}", other.mismatch(ValueKind::Object)),
        }
    }
}

impl IndexMut<&str> for Value {
    /// # Panics
    ///
    /// Panics if the value is neither an object nor `Null`.
    fn index_mut(&mut self, key: &str) -> &mut Value {
        match self.member_mut(key) {
            Ok(member) => member,
            Err(mismatch) => panic!("{}", mismatch),
        }
    }
}
