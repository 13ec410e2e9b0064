//! Container mutation and navigation on [`Value`].
//!
//! Mutable references handed out here borrow the receiver, so they are
//! invalidated by the next structural change to the same container.

use crate::error::TypeMismatch;
use crate::value::{ObjectMap, Value};
use std::collections::btree_map;
use std::slice;

impl Value {
    /// True iff this is an array and `index` is in bounds.
    pub fn has_index(&self, index: usize) -> bool {
        match self {
            Value::Array(items) => index < items.len(),
            _ => false,
        }
    }

    /// True iff this is an object holding `key`.
    pub fn has_key(&self, key: &str) -> bool {
        match self {
            Value::Object(entries) => entries.contains_key(key),
            _ => false,
        }
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Array(items) => items.get(index),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        match self {
            Value::Array(items) => items.get_mut(index),
            _ => None,
        }
    }

    pub fn get_key(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(entries) => entries.get(key),
            _ => None,
        }
    }

    pub fn get_key_mut(&mut self, key: &str) -> Option<&mut Value> {
        match self {
            Value::Object(entries) => entries.get_mut(key),
            _ => None,
        }
    }

    /// Removes the element at `index`, shifting later elements down.
    ///
    /// Out-of-range indices and non-array receivers are left untouched.
    pub fn remove_index(&mut self, index: usize) -> Option<Value> {
        match self {
            Value::Array(items) if index < items.len() => Some(items.remove(index)),
            _ => None,
        }
    }

    /// Removes `key` from an object. Anything else is left untouched.
    pub fn remove_key(&mut self, key: &str) -> Option<Value> {
        match self {
            Value::Object(entries) => entries.remove(key),
            _ => None,
        }
    }

    /// Appends `value` at the end of the array.
    ///
    /// A receiver that is not an array is replaced by an empty array first,
    /// whatever it held before. Pass a clone to keep the original around.
    pub fn append(&mut self, value: impl Into<Value>) {
        if !self.is_array() {
            *self = Value::array();
        }
        if let Value::Array(items) = self {
            items.push(value.into());
        }
    }

    /// Turns a `Null` receiver into an empty array and returns the elements.
    ///
    /// An array is returned as is. Any other kind fails without being touched.
    pub fn materialize_array(&mut self) -> Result<&mut Vec<Value>, TypeMismatch> {
        if self.is_null() {
            *self = Value::array();
        }
        self.as_array_mut()
    }

    /// Turns a `Null` receiver into an empty object and returns the entries.
    ///
    /// An object is returned as is. Any other kind fails without being touched.
    pub fn materialize_object(&mut self) -> Result<&mut ObjectMap, TypeMismatch> {
        if self.is_null() {
            *self = Value::object();
        }
        self.as_object_mut()
    }

    /// Returns the element at `index`, creating structure as needed.
    ///
    /// A `Null` receiver becomes an array. Missing positions up to and
    /// including `index` are padded with `Null`.
    pub fn element_mut(&mut self, index: usize) -> Result<&mut Value, TypeMismatch> {
        let items = self.materialize_array()?;
        if index >= items.len() {
            items.resize(index + 1, Value::Null);
        }
        Ok(&mut items[index])
    }

    /// Returns the value under `key`, creating structure as needed.
    ///
    /// A `Null` receiver becomes an object. A missing key is inserted as `Null`.
    pub fn member_mut(&mut self, key: &str) -> Result<&mut Value, TypeMismatch> {
        let entries = self.materialize_object()?;
        Ok(entries.entry(key.to_owned()).or_default())
    }

    /// Iterates array elements in storage order.
    pub fn iter(&self) -> Result<slice::Iter<'_, Value>, TypeMismatch> {
        Ok(self.as_array()?.iter())
    }

    pub fn iter_mut(&mut self) -> Result<slice::IterMut<'_, Value>, TypeMismatch> {
        Ok(self.as_array_mut()?.iter_mut())
    }

    /// Iterates object entries in key order.
    pub fn entries(&self) -> Result<btree_map::Iter<'_, String, Value>, TypeMismatch> {
        Ok(self.as_object()?.iter())
    }

    pub fn entries_mut(&mut self) -> Result<btree_map::IterMut<'_, String, Value>, TypeMismatch> {
        Ok(self.as_object_mut()?.iter_mut())
    }

    pub fn keys(&self) -> Result<btree_map::Keys<'_, String, Value>, TypeMismatch> {
        Ok(self.as_object()?.keys())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::TypeMismatch;
    use crate::kind::ValueKind;
    use crate::value::Value;
    use crate::value::tests::fixture;
    use expect_test::expect;

    #[test]
    fn test_append_then_has_last() {
        let mut value = Value::array();
        for item in [Value::from(1), Value::from("two"), fixture()] {
            value.append(item.clone());
            assert!(value.has_index(value.len() - 1));
            assert_eq!(value.get(value.len() - 1), Some(&item));
        }
        assert_eq!(value.len(), 3);
    }

    #[test]
    fn test_append_coerces_any_kind() {
        let mut value = Value::Null;
        value.append(Value::from(1));
        assert_eq!(value, Value::from(vec![Value::from(1)]));

        let mut value = Value::from("discarded");
        value.append(Value::from(true));
        assert_eq!(value, Value::from(vec![Value::from(true)]));

        let mut value = fixture();
        value.append(Value::Null);
        assert_eq!(value.len(), 1);
    }

    #[test]
    fn test_append_copy_is_independent() {
        let item = fixture();
        let mut value = Value::Null;
        value.append(item.clone());
        value[0]["int"] = Value::from(1);
        assert_eq!(item["int"].as_int(), Ok(-42));
    }

    #[test]
    fn test_has_index() {
        let value: Value = [1, 2].into_iter().map(Value::from).collect();
        assert!(value.has_index(0));
        assert!(value.has_index(1));
        assert!(!value.has_index(2));
        assert!(!Value::Null.has_index(0));
        assert!(!Value::from("abc").has_index(0));
        assert!(!Value::object().has_index(0));
    }

    #[test]
    fn test_insert_then_has_then_remove_key() {
        let mut value = Value::object();
        *value.member_mut("k").unwrap() = Value::from(1);
        assert!(value.has_key("k"));
        assert_eq!(value.remove_key("k"), Some(Value::from(1)));
        assert!(!value.has_key("k"));
        assert!(!Value::from("k").has_key("k"));
        assert!(!Value::array().has_key("k"));
    }

    #[test]
    fn test_member_mut_replaces_existing_key() {
        let mut value = Value::Null;
        *value.member_mut("k").unwrap() = Value::from(1);
        *value.member_mut("k").unwrap() = Value::from("one");
        assert_eq!(value.len(), 1);
        assert_eq!(value["k"].as_str(), Ok("one"));
    }

    #[test]
    fn test_remove_index_shifts_later_elements() {
        let mut value: Value = [10, 20, 30].into_iter().map(Value::from).collect();
        assert_eq!(value.remove_index(1), Some(Value::from(20)));
        assert_eq!(value.len(), 2);
        assert_eq!(value[1].as_int(), Ok(30));
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut value: Value = [10, 20].into_iter().map(Value::from).collect();
        assert_eq!(value.remove_index(2), None);
        assert_eq!(value.remove_index(usize::MAX), None);
        assert_eq!(value.remove_key("10"), None);
        assert_eq!(value.len(), 2);

        let mut value = fixture();
        assert_eq!(value.remove_key("missing"), None);
        assert_eq!(value.remove_index(0), None);
        assert_eq!(value.len(), 7);

        let mut value = Value::from(1.5);
        assert_eq!(value.remove_index(0), None);
        assert_eq!(value.remove_key("x"), None);
        assert_eq!(value, Value::from(1.5));
    }

    #[test]
    fn test_element_mut_vivifies_and_pads() {
        let mut value = Value::Null;
        *value.element_mut(2).unwrap() = Value::from(7);
        assert!(value.is_array());
        assert_eq!(value.len(), 3);
        assert!(value[0].is_null());
        assert!(value[1].is_null());
        assert_eq!(value[2].as_int(), Ok(7));

        // index == len appends
        *value.element_mut(3).unwrap() = Value::from(8);
        assert_eq!(value.len(), 4);
        // in bounds returns the existing element
        assert_eq!(value.element_mut(2).unwrap().as_int(), Ok(7));
        assert_eq!(value.len(), 4);
    }

    #[test]
    fn test_member_mut_vivifies_nested() {
        let mut value = Value::Null;
        *value
            .member_mut("a")
            .and_then(|a| a.member_mut("b"))
            .unwrap() = Value::from("x");
        assert!(value.is_object());
        assert!(value["a"].is_object());
        assert_eq!(value["a"]["b"].as_str(), Ok("x"));
    }

    #[test]
    fn test_materialize_rejects_scalars_untouched() {
        let mut value = Value::from("text");
        assert_eq!(
            value.element_mut(0).unwrap_err(),
            TypeMismatch::new(ValueKind::Array, ValueKind::String)
        );
        assert_eq!(
            value.member_mut("a").unwrap_err(),
            TypeMismatch::new(ValueKind::Object, ValueKind::String)
        );
        assert_eq!(value, Value::from("text"));

        let mut value = Value::object();
        assert!(value.materialize_array().is_err());
        assert!(value.is_object());
        let mut value = Value::array();
        assert!(value.materialize_object().is_err());
        assert!(value.is_array());
    }

    #[test]
    fn test_materialize_keeps_existing_container() {
        let mut value = fixture();
        value.materialize_object().unwrap();
        assert_eq!(value, fixture());

        let mut value: Value = [1].into_iter().map(Value::from).collect();
        value.materialize_array().unwrap().push(Value::from(2));
        assert_eq!(value.len(), 2);
    }

    #[test]
    fn test_iteration_order() {
        let mut object = Value::Null;
        object["b"] = Value::from(1);
        object["a"] = Value::from(2);
        let keys: Vec<&String> = object.keys().unwrap().collect();
        expect![[r#"["a", "b"]"#]].assert_eq(&format!("{:?}", keys));

        let mut array = Value::Null;
        for item in [3, 1, 2] {
            array.append(Value::from(item));
        }
        let items: Vec<i64> = array.iter().unwrap().map(|item| item.as_int().unwrap()).collect();
        assert_eq!(items, vec![3, 1, 2]);
    }

    #[test]
    fn test_iter_is_restartable() {
        let value: Value = [1, 2, 3].into_iter().map(Value::from).collect();
        let first: Vec<&Value> = value.iter().unwrap().collect();
        let second: Vec<&Value> = value.iter().unwrap().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_iter_mut_writes_through() {
        let mut value: Value = [1, 2, 3].into_iter().map(Value::from).collect();
        for item in value.iter_mut().unwrap() {
            *item = Value::from(item.as_int().unwrap() * 10);
        }
        let expected: Value = [10, 20, 30].into_iter().map(Value::from).collect();
        assert_eq!(value, expected);

        let mut value = fixture();
        for (_, entry) in value.entries_mut().unwrap() {
            entry.clear();
        }
        assert!(value.entries().unwrap().all(|(_, entry)| entry.is_null()));
    }

    #[test]
    fn test_iteration_requires_matching_kind() {
        assert_eq!(
            Value::object().iter().unwrap_err(),
            TypeMismatch::new(ValueKind::Array, ValueKind::Object)
        );
        assert!(Value::Null.iter_mut().is_err());
        assert_eq!(
            Value::array().entries().unwrap_err(),
            TypeMismatch::new(ValueKind::Object, ValueKind::Array)
        );
        assert!(Value::from(1).keys().is_err());
    }

    #[test]
    fn test_get_does_not_vivify() {
        let mut value = Value::Null;
        assert_eq!(value.get(0), None);
        assert_eq!(value.get_key("a"), None);
        assert_eq!(value.get_mut(0), None);
        assert_eq!(value.get_key_mut("a"), None);
        assert!(value.is_null());

        let mut value = fixture();
        if let Some(int) = value.get_key_mut("int") {
            *int = Value::from(1);
        }
        assert_eq!(value.get_key("int"), Some(&Value::from(1)));
    }
}
