//! Safe navigation over `serde_json::Value`.
//!
//! Object fields are reachable both as attributes and as string-keyed
//! items; arrays are reachable by index. A JSON `null` found along the way
//! navigates to absence.

use serde_json::Value;

use super::navigate::{GetAttr, GetItem, SetItem};
use crate::error::NavigationError;

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

const fn unsupported(operation: &'static str, value: &Value) -> NavigationError {
    NavigationError::Unsupported {
        operation,
        type_name: kind(value),
    }
}

fn non_null(value: &Value) -> Option<Value> {
    if value.is_null() {
        None
    } else {
        Some(value.clone())
    }
}

impl GetAttr for Value {
    type Output = Self;

    fn get_attr(&self, name: &str) -> Result<Option<Self>, NavigationError> {
        let Self::Object(fields) = self else {
            return Err(unsupported("get_attr", self));
        };
        fields
            .get(name)
            .map(non_null)
            .ok_or_else(|| NavigationError::no_such_attribute::<Self>(name))
    }
}

impl GetItem<str> for Value {
    type Output = Self;

    fn get_item(&self, key: &str) -> Result<Option<Self>, NavigationError> {
        let Self::Object(fields) = self else {
            return Err(unsupported("get_item", self));
        };
        fields
            .get(key)
            .map(non_null)
            .ok_or_else(|| NavigationError::key_not_found(key))
    }
}

impl GetItem<usize> for Value {
    type Output = Self;

    fn get_item(&self, key: &usize) -> Result<Option<Self>, NavigationError> {
        let Self::Array(items) = self else {
            return Err(unsupported("get_item", self));
        };
        items
            .get(*key)
            .map(non_null)
            .ok_or(NavigationError::IndexOutOfBounds {
                index: *key,
                length: items.len(),
            })
    }
}

impl SetItem<String, Value> for Value {
    fn set_item(&mut self, key: String, value: Self) -> Result<(), NavigationError> {
        let Self::Object(fields) = self else {
            return Err(unsupported("set_item", self));
        };
        fields.insert(key, value);
        Ok(())
    }
}

impl SetItem<&str, Value> for Value {
    fn set_item(&mut self, key: &str, value: Self) -> Result<(), NavigationError> {
        self.set_item(key.to_owned(), value)
    }
}

impl SetItem<usize, Value> for Value {
    fn set_item(&mut self, key: usize, value: Self) -> Result<(), NavigationError> {
        let Self::Array(items) = self else {
            return Err(unsupported("set_item", self));
        };
        items.as_mut_slice().set_item(key, value)
    }
}
