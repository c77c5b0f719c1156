//! Flattened key sets.
//!
//! A [`KeySet`] holds dot-joined leaf paths. It is backed by a `BTreeSet`, so
//! iteration is always in ascending ordinal string order.

use std::collections::btree_set;
use std::collections::BTreeSet;

/// An ordered set of dot-joined leaf-key paths.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeySet {
    keys: BTreeSet<String>,
}

impl KeySet {
    /// Create an empty key set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key. Returns `true` if it was not already present.
    pub fn insert(&mut self, key: impl Into<String>) -> bool {
        self.keys.insert(key.into())
    }

    /// Returns `true` if `key` is in the set.
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if the set holds no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterate keys in ascending order.
    pub fn iter(&self) -> btree_set::Iter<'_, String> {
        self.keys.iter()
    }

    /// Keys in `self` that are absent from `other`.
    pub fn difference(&self, other: &KeySet) -> KeySet {
        self.keys.difference(&other.keys).cloned().collect()
    }

    /// Keys present in both sets.
    pub fn intersection(&self, other: &KeySet) -> KeySet {
        self.keys.intersection(&other.keys).cloned().collect()
    }

    /// Keys present in either set.
    pub fn union(&self, other: &KeySet) -> KeySet {
        self.keys.union(&other.keys).cloned().collect()
    }
}

impl FromIterator<String> for KeySet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for KeySet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_owned).collect()
    }
}

impl Extend<String> for KeySet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.keys.extend(iter);
    }
}

impl IntoIterator for KeySet {
    type Item = String;
    type IntoIter = btree_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.into_iter()
    }
}

impl<'a> IntoIterator for &'a KeySet {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}
