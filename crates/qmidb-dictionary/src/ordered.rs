//! Insertion-ordered map used by tables and the assembled schema.

use std::hash::{BuildHasherDefault, Hash};

use hashbrown::HashMap as FastHashMap;
use rustc_hash::FxHasher;

pub(crate) type FxHashMap<K, V> = FastHashMap<K, V, BuildHasherDefault<FxHasher>>;

/// A map that iterates in first-insertion order.
///
/// Re-inserting an existing key replaces the value but keeps the key's
/// original position.
#[derive(Debug, Clone)]
pub struct OrderedMap<K, V> {
    values: FxHashMap<K, V>,
    order: Vec<K>,
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self {
            values: FxHashMap::default(),
            order: Vec::new(),
        }
    }
}

impl<K: Clone + Eq + Hash, V> OrderedMap<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the one it replaced.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let replaced = self.values.insert(key.clone(), value);
        if replaced.is_none() {
            self.order.push(key);
        }
        replaced
    }

    /// Get the value for `key`, inserting one built by `make` if absent.
    pub fn get_or_insert_with(&mut self, key: K, make: impl FnOnce() -> V) -> &mut V {
        if !self.values.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.values.entry(key).or_insert_with(make)
    }

    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.values.get(key)
    }

    #[inline]
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.values.get_mut(key)
    }

    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.values.contains_key(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.order.iter()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.order.iter().map(move |k| (k, &self.values[k]))
    }

    /// Values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, v)| v)
    }

    /// Consume the map, yielding values in insertion order.
    pub fn into_values(mut self) -> impl Iterator<Item = V> {
        let order = std::mem::take(&mut self.order);
        order.into_iter().filter_map(move |k| self.values.remove(&k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order() {
        let mut map = OrderedMap::new();
        map.insert(3, "c");
        map.insert(1, "a");
        map.insert(2, "b");
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![3, 1, 2]);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut map = OrderedMap::new();
        map.insert("x", 1);
        map.insert("y", 2);
        assert_eq!(map.insert("x", 3), Some(1));
        assert_eq!(map.len(), 2);
        assert_eq!(map.iter().collect::<Vec<_>>(), vec![(&"x", &3), (&"y", &2)]);
    }

    #[test]
    fn test_get_or_insert_with() {
        let mut map: OrderedMap<i64, Vec<i64>> = OrderedMap::new();
        map.get_or_insert_with(7, Vec::new).push(1);
        map.get_or_insert_with(7, Vec::new).push(2);
        assert_eq!(map.get(&7), Some(&vec![1, 2]));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_into_values_in_order() {
        let mut map = OrderedMap::new();
        map.insert("b", 2);
        map.insert("a", 1);
        assert_eq!(map.into_values().collect::<Vec<_>>(), vec![2, 1]);
    }
}
