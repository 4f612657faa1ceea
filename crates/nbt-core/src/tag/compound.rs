//! Compound Tag
//!
//! Very small string-keyed map of named tags.
//! Holds values only; reading and writing compounds belongs to the codec layer.

use std::collections::btree_map::{self, BTreeMap};

use super::value::Value;

/// Named tags, kept in key order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Compound {
    tags: BTreeMap<String, Value>,
}

impl Compound {
    pub fn new() -> Self {
        Compound { tags: BTreeMap::new() }
    }

    /// Insert a named tag, returning the tag it replaced
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.tags.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.tags.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.tags.get_mut(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.tags.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.tags.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.tags.iter()
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Compound {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Compound {
            tags: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
