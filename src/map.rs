//! Ordered map type for NaN0 objects.
//!
//! [`Nan0Map`] wraps an [`IndexMap`] so that object fields keep the order in
//! which they were read. `stringify` writes them back in that same order,
//! which keeps a parse/stringify cycle stable line for line.
//!
//! ```rust
//! use nan0::{Nan0Map, Value};
//!
//! let mut map = Nan0Map::new();
//! map.insert("name".to_string(), Value::from("Alice"));
//! map.insert("age".to_string(), Value::from(30));
//!
//! let keys: Vec<_> = map.keys().cloned().collect();
//! assert_eq!(keys, vec!["name", "age"]);
//! ```

use crate::Value;
use indexmap::IndexMap;
use std::collections::HashMap;

/// An insertion-ordered map of string keys to NaN0 values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Nan0Map(IndexMap<String, Value>);

impl Nan0Map {
    #[must_use]
    pub fn new() -> Self {
        Nan0Map(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Nan0Map(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair. An existing key keeps its position and the
    /// old value is returned.
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes a key, shifting later fields up so that order is preserved.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    /// The first field in insertion order.
    #[must_use]
    pub fn first(&self) -> Option<(&String, &Value)> {
        self.0.first()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, String, Value> {
        self.0.iter_mut()
    }
}

impl From<HashMap<String, Value>> for Nan0Map {
    fn from(map: HashMap<String, Value>) -> Self {
        Nan0Map(map.into_iter().collect())
    }
}

impl From<Nan0Map> for HashMap<String, Value> {
    fn from(map: Nan0Map) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for Nan0Map {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Nan0Map {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for Nan0Map {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Nan0Map(IndexMap::from_iter(iter))
    }
}
