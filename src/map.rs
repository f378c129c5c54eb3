//! Ordered key-presence map.
//!
//! This module provides [`ClassMap`], a wrapper around [`IndexMap`] whose keys are
//! candidate class tokens and whose values decide, by their truthiness, whether
//! the key makes it into the output.
//!
//! ## Why IndexMap?
//!
//! Class strings are compared, snapshotted and diffed by callers, so the order
//! keys come out in must not depend on hashing:
//!
//! - **Deterministic output**: Keys are emitted in insertion order
//! - **Stable overwrites**: Re-inserting a key replaces its flag in place
//!
//! ## Examples
//!
//! ```rust
//! use clsify::{ClassMap, ClassValue};
//!
//! let mut map = ClassMap::new();
//! map.insert("active", true);
//! map.insert("disabled", false);
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(ClassValue::from(map).to_string(), "active");
//! ```

use crate::ClassValue;
use indexmap::IndexMap;

/// An insertion-ordered map of class tokens to inclusion flags.
///
/// # Examples
///
/// ```rust
/// use clsify::ClassMap;
///
/// let map: ClassMap = [("first", true), ("second", false)].into_iter().collect();
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// assert_eq!(map.active_keys().collect::<Vec<_>>(), vec!["first"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClassMap(IndexMap<String, ClassValue>);

impl ClassMap {
    /// Creates an empty `ClassMap`.
    #[must_use]
    pub fn new() -> Self {
        ClassMap(IndexMap::new())
    }

    /// Creates an empty `ClassMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        ClassMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a token with its flag.
    ///
    /// If the map already contained this token, the old flag is returned and the
    /// token keeps its original position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use clsify::ClassMap;
    ///
    /// let mut map = ClassMap::new();
    /// assert!(map.insert("a", true).is_none());
    /// map.insert("b", true);
    /// assert!(map.insert("a", false).is_some());
    ///
    /// let keys: Vec<_> = map.keys().cloned().collect();
    /// assert_eq!(keys, vec!["a", "b"]);
    /// ```
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<ClassValue>
    where
        K: Into<String>,
        V: Into<ClassValue>,
    {
        self.0.insert(key.into(), value.into())
    }

    /// Returns a reference to the flag stored for the token.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ClassValue> {
        self.0.get(key)
    }

    /// Returns `true` if the token is present, whatever its flag.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of tokens in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the tokens, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, ClassValue> {
        self.0.keys()
    }

    /// Returns an iterator over the flags, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, ClassValue> {
        self.0.values()
    }

    /// Returns an iterator over the token/flag pairs, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, ClassValue> {
        self.0.iter()
    }

    /// Returns the tokens whose flag is truthy, in insertion order.
    pub fn active_keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.0
            .iter()
            .filter(|(_, flag)| flag.is_truthy())
            .map(|(key, _)| key.as_str())
    }
}

impl<'a> IntoIterator for &'a ClassMap {
    type Item = (&'a String, &'a ClassValue);
    type IntoIter = indexmap::map::Iter<'a, String, ClassValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for ClassMap {
    type Item = (String, ClassValue);
    type IntoIter = indexmap::map::IntoIter<String, ClassValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K, V> FromIterator<(K, V)> for ClassMap
where
    K: Into<String>,
    V: Into<ClassValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        ClassMap(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl<K, V> Extend<(K, V)> for ClassMap
where
    K: Into<String>,
    V: Into<ClassValue>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}
