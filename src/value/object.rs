//! Represents a JSON object.
use std::iter::FusedIterator;

use faststr::FastStr;

use super::node::AnyValue;

#[cfg(not(feature = "sort_keys"))]
type Map = std::collections::HashMap<FastStr, AnyValue, ahash::RandomState>;
#[cfg(feature = "sort_keys")]
type Map = std::collections::BTreeMap<FastStr, AnyValue>;

/// Represents the JSON object: unique string keys mapping to values.
///
/// The iteration order is unspecified and is not the order of the original JSON text. With the
/// `sort_keys` feature the keys are kept sorted, so iteration and encoding follow key order.
/// Equality ignores the order either way.
///
/// # Examples
/// ```
/// use anyvalue::{AnyValue, Object};
///
/// let mut obj = Object::new();
///
/// assert_eq!(obj.insert("a", 1), None);
/// assert_eq!(obj.insert("a", "alpha"), Some(AnyValue::from(1)));
/// assert_eq!(obj.get("a"), Some(&AnyValue::from("alpha")));
/// assert_eq!(obj.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Object(Map);

impl Object {
    /// Create a new empty object.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty object with capacity for `capacity` entries.
    #[cfg(not(feature = "sort_keys"))]
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        let hasher = ahash::RandomState::new();
        Object(Map::with_capacity_and_hasher(capacity, hasher))
    }

    /// Create a new empty object. A `BTreeMap` has no capacity, so the hint is ignored.
    #[cfg(feature = "sort_keys")]
    #[inline]
    pub fn with_capacity(_capacity: usize) -> Self {
        Self::new()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns a reference to the value corresponding to the key.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&AnyValue> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    #[inline]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut AnyValue> {
        self.0.get_mut(key)
    }

    /// Inserts a key-value pair, returning the old value if the key was present.
    #[inline]
    pub fn insert<K, V>(&mut self, key: &K, value: V) -> Option<AnyValue>
    where
        K: AsRef<str> + ?Sized,
        V: Into<AnyValue>,
    {
        self.0.insert(FastStr::new(key.as_ref()), value.into())
    }

    /// Inserts with an owned key, without copying it.
    #[inline]
    pub fn insert_faststr(&mut self, key: FastStr, value: AnyValue) -> Option<AnyValue> {
        self.0.insert(key, value)
    }

    /// Removes a key, returning its value if it was present.
    #[inline]
    pub fn remove(&mut self, key: &str) -> Option<AnyValue> {
        self.0.remove(key)
    }

    #[inline]
    pub fn clear(&mut self) {
        self.0.clear()
    }

    /// Returns an iterator over the entries.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.0.iter())
    }

    /// Returns an iterator over the entries, with mutable values.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_> {
        IterMut(self.0.iter_mut())
    }

    #[inline]
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.0.keys().map(FastStr::as_str)
    }

    #[inline]
    pub fn values(&self) -> impl ExactSizeIterator<Item = &AnyValue> + '_ {
        self.0.values()
    }

    /// Retains only the entries specified by the predicate.
    #[inline]
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&str, &mut AnyValue) -> bool,
    {
        self.0.retain(|k, v| f(k.as_str(), v));
    }
}

/// An iterator over the entries of a `Object`.
pub struct Iter<'a>(
    #[cfg(not(feature = "sort_keys"))] std::collections::hash_map::Iter<'a, FastStr, AnyValue>,
    #[cfg(feature = "sort_keys")] std::collections::btree_map::Iter<'a, FastStr, AnyValue>,
);

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a AnyValue);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, v)| (k.as_str(), v))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {
    #[inline]
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl FusedIterator for Iter<'_> {}

/// A mutable iterator over the entries of a `Object`.
pub struct IterMut<'a>(
    #[cfg(not(feature = "sort_keys"))] std::collections::hash_map::IterMut<'a, FastStr, AnyValue>,
    #[cfg(feature = "sort_keys")] std::collections::btree_map::IterMut<'a, FastStr, AnyValue>,
);

impl<'a> Iterator for IterMut<'a> {
    type Item = (&'a str, &'a mut AnyValue);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, v)| (k.as_str(), v))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for IterMut<'_> {
    #[inline]
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl FusedIterator for IterMut<'_> {}

/// An owning iterator over the entries of a `Object`.
pub struct IntoIter(
    #[cfg(not(feature = "sort_keys"))] std::collections::hash_map::IntoIter<FastStr, AnyValue>,
    #[cfg(feature = "sort_keys")] std::collections::btree_map::IntoIter<FastStr, AnyValue>,
);

impl Iterator for IntoIter {
    type Item = (FastStr, AnyValue);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for IntoIter {
    #[inline]
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl FusedIterator for IntoIter {}

impl IntoIterator for Object {
    type Item = (FastStr, AnyValue);
    type IntoIter = IntoIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.0.into_iter())
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a str, &'a AnyValue);
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut Object {
    type Item = (&'a str, &'a mut AnyValue);
    type IntoIter = IterMut<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<K: AsRef<str>, V: Into<AnyValue>> FromIterator<(K, V)> for Object {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut object = Object::new();
        object.extend(iter);
        object
    }
}

impl<K: AsRef<str>, V: Into<AnyValue>> Extend<(K, V)> for Object {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k.as_ref(), v);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn test_object_basic() {
        let mut obj: Object = [("a", "alpha"), ("b", "bravo"), ("c", "charlie")]
            .into_iter()
            .collect();
        assert_eq!(obj.len(), 3);
        assert!(obj.contains_key("b"));
        assert_eq!(obj.get("c"), Some(&AnyValue::from("charlie")));
        assert_eq!(obj.get("d"), None);

        assert_eq!(obj.remove("b"), Some(AnyValue::from("bravo")));
        assert_eq!(obj.remove("b"), None);
        assert_eq!(obj.len(), 2);

        if let Some(v) = obj.get_mut("a") {
            *v = AnyValue::from(1);
        }
        assert_eq!(obj.get("a"), Some(&AnyValue::from(1)));

        obj.retain(|k, _| k == "a");
        assert_eq!(obj.keys().collect::<Vec<_>>(), vec!["a"]);

        obj.clear();
        assert!(obj.is_empty());
    }

    #[test]
    fn test_object_eq_ignores_order() {
        let mut a = Object::with_capacity(2);
        a.insert("x", 1);
        a.insert("y", 2);
        let mut b = Object::new();
        b.insert("y", 2);
        b.insert("x", 1);
        assert_eq!(a, b);

        b.insert("x", 1.0);
        assert_ne!(a, b);
    }

    #[test]
    fn test_object_iter() {
        let mut obj: Object = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();

        let iter = obj.iter();
        assert_eq!(iter.len(), 3);
        let mut sum = 0;
        for (_, v) in &obj {
            sum += v.as_i64().unwrap_or_default();
        }
        assert_eq!(sum, 6);

        for (_, v) in &mut obj {
            *v = AnyValue::from(0);
        }
        assert!(obj.values().all(|v| *v == 0));

        let mut keys: Vec<String> = obj.into_iter().map(|(k, _)| k.to_string()).collect();
        keys.sort();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[cfg(feature = "sort_keys")]
    #[test]
    fn test_object_sorted() {
        let obj: Object = [("c", 3), ("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(obj.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(AnyValue::from(obj).to_string(), r#"{"a":1,"b":2,"c":3}"#);
    }

    #[test]
    fn test_object_in_value() {
        let value = json!({"nested": {"a": "alpha"}});
        let nested = match &value {
            AnyValue::Object(obj) => obj.get("nested"),
            _ => None,
        };
        assert_eq!(nested, Some(&json!({"a": "alpha"})));
    }
}
