use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

/// Unlocked state of a [`SafeOrderedMap`].
///
/// Every public map operation takes the lock once and then works through these
/// methods, so composite operations never re-enter the lock they already hold.
/// `order` always holds exactly the keys of `entries`, each once.
#[derive(Clone)]
pub(crate) struct Inner<V> {
    entries: HashMap<String, V>,
    order: Vec<String>,
}

impl<V> Inner<V> {
    pub(crate) fn new() -> Self {
        Self::with_capacity(0)
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
        }
    }

    /// Upserts `value`; a new key goes to the back of the order, an existing one stays put.
    pub(crate) fn insert(&mut self, key: String, value: V) {
        match self.entries.entry(key) {
            Entry::Occupied(mut occupied) => {
                occupied.insert(value);
            }
            Entry::Vacant(vacant) => {
                self.order.push(vacant.key().clone());
                vacant.insert(value);
            }
        }
    }

    pub(crate) fn remove(&mut self, key: &str) -> Option<V> {
        let value = self.entries.remove(key)?;
        if let Some(position) = self.order.iter().position(|k| k == key) {
            self.order.remove(position);
        }
        Some(value)
    }

    pub(crate) fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.entries.get_mut(key)
    }

    pub(crate) fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }

    pub(crate) fn keys(&self) -> &[String] {
        &self.order
    }

    /// Entry at `position` in insertion order.
    pub(crate) fn get_index(&self, position: usize) -> Option<(&str, &V)> {
        let key = self.order.get(position)?;
        self.entries.get(key).map(|value| (key.as_str(), value))
    }

    pub(crate) fn position(&self, key: &str) -> Option<usize> {
        self.order.iter().position(|k| k == key)
    }

    /// Iterates entries in insertion order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.order
            .iter()
            .filter_map(move |key| self.entries.get(key).map(|value| (key.as_str(), value)))
    }
}

impl<V: Clone> Inner<V> {
    fn collect<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a V)>,
        V: 'a,
    {
        let mut inner = Self::new();
        for (key, value) in entries {
            inner.insert(key.to_string(), value.clone());
        }
        inner
    }
}

/// A thread-safe map that remembers the order in which keys were first added
///
/// `SafeOrderedMap` maps string keys to values of a single type. Every traversal,
/// whether `keys`, `values` or any of the higher-order operations, visits entries
/// in first-insertion order. Re-adding an existing key replaces its value without
/// moving it; deleting a key and adding it again places it at the back.
///
/// All operations take `&self`: mutations hold the internal lock exclusively and
/// reads share it, so a map wrapped in an `Arc` can be used from many threads at
/// once. Operations that produce a new map (`filter`, `union`, ...) hold the
/// source's read lock while building the result and never touch the source again.
///
/// # Examples
///
/// ```
/// use sovran_collections::SafeOrderedMap;
///
/// let map = SafeOrderedMap::new();
/// map.add("b", 2).add("a", 1).add("c", 3);
///
/// assert_eq!(map.keys(), vec!["b", "a", "c"]);
/// assert_eq!(map.values(), vec![2, 1, 3]);
///
/// // Upserting keeps the original position
/// map.add("b", 20);
/// assert_eq!(map.values(), vec![20, 1, 3]);
///
/// let large = map.filter(|_, v| *v > 1);
/// assert_eq!(large.keys(), vec!["b", "c"]);
/// ```
pub struct SafeOrderedMap<V> {
    inner: RwLock<Inner<V>>,
}

impl<V> SafeOrderedMap<V> {
    /// Creates a new, empty map
    pub fn new() -> Self {
        Self::from_inner(Inner::new())
    }

    /// Creates an empty map with room for `capacity` entries before reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_inner(Inner::with_capacity(capacity))
    }

    pub(crate) fn from_inner(inner: Inner<V>) -> Self {
        Self {
            inner: RwLock::new(inner),
        }
    }

    pub(crate) fn into_inner(self) -> Inner<V> {
        self.inner.into_inner()
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, Inner<V>> {
        self.inner.read()
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, Inner<V>> {
        self.inner.write()
    }

    /// Read guards for `self` and `other`, in that order.
    ///
    /// The second guard is taken with `read_recursive` so that `a.op(&a)` works and
    /// two threads running `a.op(&b)` and `b.op(&a)` cannot stall behind queued writers.
    pub(crate) fn read_pair<'a>(
        &'a self,
        other: &'a Self,
    ) -> (RwLockReadGuard<'a, Inner<V>>, RwLockReadGuard<'a, Inner<V>>) {
        let this = self.inner.read();
        let that = other.inner.read_recursive();
        (this, that)
    }

    /// Inserts or updates a value
    ///
    /// A key that is not yet present is appended to the end of the order. A key that
    /// is already present keeps its position and only its value changes.
    ///
    /// Returns `&self` so calls can be chained.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_collections::SafeOrderedMap;
    ///
    /// let map = SafeOrderedMap::new();
    /// map.add("1", 1).add("2", 2).add("3", 3);
    /// assert_eq!(map.len(), 3);
    /// ```
    pub fn add(&self, key: impl Into<String>, value: V) -> &Self {
        self.inner.write().insert(key.into(), value);
        self
    }

    /// Removes a key if present, keeping the relative order of the remaining keys
    ///
    /// Deleting a missing key does nothing.
    pub fn delete(&self, key: &str) -> &Self {
        let removed = self.inner.write().remove(key).is_some();
        if removed {
            tracing::trace!(key, "removed key from ordered map");
        }
        self
    }

    /// Runs a closure against a stored value without cloning it
    ///
    /// Returns `None` if the key doesn't exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_collections::SafeOrderedMap;
    ///
    /// let map = SafeOrderedMap::new();
    /// map.add("numbers", vec![1, 2, 3]);
    ///
    /// assert_eq!(map.with("numbers", |v| v.len()), Some(3));
    /// assert_eq!(map.with("missing", |v| v.len()), None);
    /// ```
    pub fn with<F, R>(&self, key: &str, f: F) -> Option<R>
    where
        F: FnOnce(&V) -> R,
    {
        let inner = self.inner.read();
        inner.get(key).map(f)
    }

    /// Runs a closure with write access to a stored value
    ///
    /// The key's position is unaffected. Returns `None` if the key doesn't exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_collections::SafeOrderedMap;
    ///
    /// let map = SafeOrderedMap::new();
    /// map.add("numbers", vec![1, 2, 3]);
    ///
    /// let len = map.with_mut("numbers", |v| {
    ///     v.push(4);
    ///     v.len()
    /// });
    /// assert_eq!(len, Some(4));
    /// ```
    pub fn with_mut<F, R>(&self, key: &str, f: F) -> Option<R>
    where
        F: FnOnce(&mut V) -> R,
    {
        let mut inner = self.inner.write();
        inner.get_mut(key).map(f)
    }

    /// Returns the keys in insertion order
    pub fn keys(&self) -> Vec<String> {
        self.inner.read().keys().to_vec()
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns true if the map holds no entries
    pub fn is_empty(&self) -> bool {
        self.inner.read().len() == 0
    }

    /// Returns true if the key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.read().contains_key(key)
    }

    /// Returns true if every entry satisfies the predicate
    ///
    /// Stops at the first entry that fails. An empty map returns `true`.
    pub fn all<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&str, &V) -> bool,
    {
        let inner = self.inner.read();
        let all = inner.iter().all(|(key, value)| predicate(key, value));
        all
    }

    /// Returns true if at least one entry satisfies the predicate
    ///
    /// Stops at the first match. An empty map returns `false`.
    pub fn any<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&str, &V) -> bool,
    {
        let inner = self.inner.read();
        let any = inner.iter().any(|(key, value)| predicate(key, value));
        any
    }

    /// Builds a new map with the same keys and order and values produced by `f`
    ///
    /// The receiver is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_collections::SafeOrderedMap;
    ///
    /// let map = SafeOrderedMap::new();
    /// map.add("a", 1).add("b", 2);
    ///
    /// let labels = map.map(|key, value| format!("{key}={value}"));
    /// assert_eq!(labels.values(), vec!["a=1", "b=2"]);
    /// ```
    pub fn map<U, F>(&self, mut f: F) -> SafeOrderedMap<U>
    where
        F: FnMut(&str, &V) -> U,
    {
        let inner = self.inner.read();
        let mut mapped = Inner::with_capacity(inner.len());
        for (key, value) in inner.iter() {
            mapped.insert(key.to_string(), f(key, value));
        }
        SafeOrderedMap::from_inner(mapped)
    }

    /// Calls `f` for every entry in order, for its side effects
    pub fn for_each<F>(&self, mut f: F) -> &Self
    where
        F: FnMut(&str, &V),
    {
        {
            let inner = self.inner.read();
            for (key, value) in inner.iter() {
                f(key, value);
            }
        }
        self
    }

    /// Folds the entries in order into a single value
    ///
    /// Returns `initial` unchanged when the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_collections::SafeOrderedMap;
    ///
    /// let map = SafeOrderedMap::new();
    /// map.add("a", 2).add("b", 3).add("c", 4);
    ///
    /// assert_eq!(map.reduce(1, |acc, _, value| acc + value), 10);
    /// ```
    pub fn reduce<A, F>(&self, initial: A, mut f: F) -> A
    where
        F: FnMut(A, &str, &V) -> A,
    {
        let inner = self.inner.read();
        inner
            .iter()
            .fold(initial, |acc, (key, value)| f(acc, key, value))
    }

    /// Returns true if every key of this map is also a key of `other`
    ///
    /// Values are not compared.
    pub fn is_subset(&self, other: &Self) -> bool {
        let (this, that) = self.read_pair(other);
        this.keys().iter().all(|key| that.contains_key(key))
    }

    /// Returns true if every key of `other` is also a key of this map
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }
}

impl<V: Clone> SafeOrderedMap<V> {
    /// Returns a clone of the value stored under `key`
    pub fn get(&self, key: &str) -> Option<V> {
        self.inner.read().get(key).cloned()
    }

    /// Returns the values in insertion order
    ///
    /// `values()[i]` always belongs to `keys()[i]` when both are read without an
    /// intervening mutation; use [`entries`](Self::entries) to get both atomically.
    pub fn values(&self) -> Vec<V> {
        let inner = self.inner.read();
        inner.iter().map(|(_, value)| value.clone()).collect()
    }

    /// Returns a snapshot of all key/value pairs in insertion order
    pub fn entries(&self) -> Vec<(String, V)> {
        let inner = self.inner.read();
        inner
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }

    /// Returns the zero-based position of `key` in the order, with its value
    pub fn index_of(&self, key: &str) -> Option<(usize, V)> {
        let inner = self.inner.read();
        let position = inner.position(key)?;
        inner.get(key).map(|value| (position, value.clone()))
    }

    /// Returns a new map with only the entries that satisfy the predicate, order preserved
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&str, &V) -> bool,
    {
        let inner = self.inner.read();
        Self::from_inner(Inner::collect(
            inner.iter().filter(|(key, value)| predicate(key, value)),
        ))
    }

    /// Returns the first entry that satisfies the predicate
    pub fn find<F>(&self, mut predicate: F) -> Option<(String, V)>
    where
        F: FnMut(&str, &V) -> bool,
    {
        let inner = self.inner.read();
        let found = inner
            .iter()
            .find(|(key, value)| predicate(key, value))
            .map(|(key, value)| (key.to_string(), value.clone()));
        found
    }

    /// Returns the longest prefix of entries that satisfy the predicate
    ///
    /// Collection stops at the first entry that fails; later matches are not included.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_collections::SafeOrderedMap;
    ///
    /// let map: SafeOrderedMap<i32> = [("1", 1), ("2", 2), ("3", 3), ("4", 1)]
    ///     .into_iter()
    ///     .collect();
    ///
    /// assert_eq!(map.take_while(|_, v| *v < 3).values(), vec![1, 2]);
    /// assert_eq!(map.drop_while(|_, v| *v < 3).values(), vec![3, 1]);
    /// ```
    pub fn take_while<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&str, &V) -> bool,
    {
        let inner = self.inner.read();
        Self::from_inner(Inner::collect(
            inner.iter().take_while(|(key, value)| predicate(key, value)),
        ))
    }

    /// Returns every entry from the first one that fails the predicate onward
    pub fn drop_while<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&str, &V) -> bool,
    {
        let inner = self.inner.read();
        Self::from_inner(Inner::collect(
            inner.iter().skip_while(|(key, value)| predicate(key, value)),
        ))
    }

    /// Combines two maps
    ///
    /// The result holds this map's entries in its order, followed by the entries of
    /// `other` whose keys this map lacks, in `other`'s order. Where both maps hold a
    /// key, this map's value wins.
    pub fn union(&self, other: &Self) -> Self {
        let (this, that) = self.read_pair(other);
        let mut result = Inner::collect(this.iter());
        for (key, value) in that.iter() {
            if !this.contains_key(key) {
                result.insert(key.to_string(), value.clone());
            }
        }
        Self::from_inner(result)
    }

    /// Returns this map's entries whose keys are absent from `other`
    pub fn difference(&self, other: &Self) -> Self {
        let (this, that) = self.read_pair(other);
        Self::from_inner(Inner::collect(
            this.iter().filter(|(key, _)| !that.contains_key(key)),
        ))
    }

    /// Returns this map's entries whose keys are also present in `other`
    ///
    /// Values come from this map.
    pub fn intersection(&self, other: &Self) -> Self {
        let (this, that) = self.read_pair(other);
        Self::from_inner(Inner::collect(
            this.iter().filter(|(key, _)| that.contains_key(key)),
        ))
    }
}

/// Produces an independent copy; later changes to either map don't affect the other.
impl<V: Clone> Clone for SafeOrderedMap<V> {
    fn clone(&self) -> Self {
        Self::from_inner(self.inner.read().clone())
    }
}

impl<V> Default for SafeOrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for SafeOrderedMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.read();
        f.debug_map().entries(inner.iter()).finish()
    }
}

impl<K, V> FromIterator<(K, V)> for SafeOrderedMap<V>
where
    K: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut inner = Inner::new();
        for (key, value) in iter {
            inner.insert(key.into(), value);
        }
        Self::from_inner(inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(values: &[i32]) -> SafeOrderedMap<i32> {
        values.iter().map(|v| (v.to_string(), *v)).collect()
    }

    #[test]
    fn test_add_preserves_order() {
        let map = SafeOrderedMap::new();
        map.add("1", 1).add("2", 2).add("3", 3);

        assert_eq!(map.keys(), vec!["1", "2", "3"]);
        assert_eq!(map.values(), vec![1, 2, 3]);
        assert_eq!(map.len(), 3);
        assert!(!map.is_empty());
    }

    #[test]
    fn test_upsert_keeps_position() {
        let map = numbered(&[1, 2, 3]);
        map.add("1", 10);

        assert_eq!(map.keys(), vec!["1", "2", "3"]);
        assert_eq!(map.values(), vec![10, 2, 3]);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_delete() {
        let map = numbered(&[1, 2, 3]);

        map.delete("2");
        assert_eq!(map.keys(), vec!["1", "3"]);

        map.delete("1").delete("3");
        assert_eq!(map.len(), 0);
        assert!(map.is_empty());
        for key in ["1", "2", "3"] {
            assert!(!map.contains_key(key));
        }

        // Deleting a missing key is a no-op
        map.delete("nope");
        assert!(map.is_empty());
    }

    #[test]
    fn test_readd_after_delete_moves_to_back() {
        let map = numbered(&[1, 2, 3]);
        map.delete("1").add("1", 1);
        assert_eq!(map.keys(), vec!["2", "3", "1"]);
    }

    #[test]
    fn test_get_and_index() {
        let map = numbered(&[1, 2, 3]);

        assert_eq!(map.get("2"), Some(2));
        assert_eq!(map.get("4"), None);

        assert_eq!(map.index_of("3"), Some((2, 3)));
        assert_eq!(map.index_of("1"), Some((0, 1)));
        assert_eq!(map.index_of("4"), None);
    }

    #[test]
    fn test_with_and_with_mut() {
        let map = SafeOrderedMap::new();
        map.add("list", vec![1, 2]);

        assert_eq!(map.with("list", |v| v.iter().sum::<i32>()), Some(3));
        assert_eq!(map.with_mut("list", |v| v.push(3)), Some(()));
        assert_eq!(map.get("list"), Some(vec![1, 2, 3]));
        assert_eq!(map.with_mut("missing", |v| v.len()), None);
    }

    #[test]
    fn test_entries_align_keys_and_values() {
        let map = numbered(&[5, 3, 9]);
        let entries = map.entries();
        assert_eq!(
            entries,
            vec![
                ("5".to_string(), 5),
                ("3".to_string(), 3),
                ("9".to_string(), 9)
            ]
        );
    }

    #[test]
    fn test_clone_is_independent() {
        let map = numbered(&[1, 2, 3]);
        let cloned = map.clone();

        cloned.add("4", 4).delete("1");
        map.add("1", 100);

        assert_eq!(map.keys(), vec!["1", "2", "3"]);
        assert_eq!(map.get("1"), Some(100));
        assert_eq!(cloned.keys(), vec!["2", "3", "4"]);
    }

    #[test]
    fn test_all_and_any() {
        let map = numbered(&[2, 4, 6]);
        assert!(map.all(|_, v| v % 2 == 0));
        assert!(!map.all(|_, v| *v < 5));
        assert!(map.any(|_, v| *v == 4));
        assert!(!map.any(|_, v| *v > 6));

        let empty = SafeOrderedMap::<i32>::new();
        assert!(empty.all(|_, _| false));
        assert!(!empty.any(|_, _| true));
    }

    #[test]
    fn test_all_short_circuits() {
        let map = numbered(&[1, 2, 3, 4]);
        let mut visited = Vec::new();
        assert!(!map.all(|key, v| {
            visited.push(key.to_string());
            *v < 2
        }));
        assert_eq!(visited, vec!["1", "2"]);
    }

    #[test]
    fn test_map_and_filter_leave_receiver() {
        let map = numbered(&[1, 2, 3, 4]);

        let doubled = map.map(|_, v| v * 2);
        assert_eq!(doubled.keys(), map.keys());
        assert_eq!(doubled.values(), vec![2, 4, 6, 8]);

        let odd = map.filter(|_, v| v % 2 == 1);
        assert_eq!(odd.keys(), vec!["1", "3"]);

        assert_eq!(map.values(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_for_each_visits_in_order() {
        let map = numbered(&[3, 1, 2]);
        let mut seen = Vec::new();
        map.for_each(|key, v| seen.push((key.to_string(), *v)))
            .add("4", 4);

        assert_eq!(
            seen,
            vec![
                ("3".to_string(), 3),
                ("1".to_string(), 1),
                ("2".to_string(), 2)
            ]
        );
        assert_eq!(map.len(), 4);
    }

    #[test]
    fn test_reduce() {
        let map = numbered(&[2, 3, 4]);
        assert_eq!(map.reduce(1, |acc, _, v| acc + v), 10);

        let keys = map.reduce(String::new(), |mut acc, key, _| {
            acc.push_str(key);
            acc
        });
        assert_eq!(keys, "234");

        let empty = SafeOrderedMap::<i32>::new();
        assert_eq!(empty.reduce(7, |acc, _, v| acc + v), 7);
    }

    #[test]
    fn test_traversals_release_the_lock() {
        let map = numbered(&[1, 2, 3]);

        assert!(map.all(|_, v| *v > 0));
        map.add("4", 4);
        assert!(map.any(|_, v| *v == 4));
        map.delete("1");
        assert_eq!(map.find(|_, v| *v > 2), Some(("3".to_string(), 3)));
        map.with_mut("3", |v| *v = 30);
        assert_eq!(map.values(), vec![2, 30, 4]);
    }

    #[test]
    fn test_find() {
        let map = numbered(&[1, 2, 3, 4]);
        assert_eq!(map.find(|_, v| *v > 2), Some(("3".to_string(), 3)));
        assert_eq!(map.find(|_, v| *v > 10), None);
    }

    #[test]
    fn test_take_while_and_drop_while() {
        let map = numbered(&[1, 2, 3, 4]);

        assert_eq!(map.take_while(|_, v| *v < 3).values(), vec![1, 2]);
        assert_eq!(map.drop_while(|_, v| *v < 3).values(), vec![3, 4]);

        // Prefix semantics: later matches are not picked up
        let bumpy = numbered(&[1, 5, 2]);
        assert_eq!(bumpy.take_while(|_, v| *v < 3).values(), vec![1]);
        assert_eq!(bumpy.drop_while(|_, v| *v < 3).values(), vec![5, 2]);

        assert!(map.take_while(|_, _| false).is_empty());
        assert_eq!(map.drop_while(|_, _| false).len(), 4);
    }

    #[test]
    fn test_union() {
        let a = numbered(&[1, 2, 3]);
        let b = numbered(&[4, 5, 6]);
        assert_eq!(a.union(&b).values(), vec![1, 2, 3, 4, 5, 6]);

        // Receiver values win on shared keys
        let c = SafeOrderedMap::new();
        c.add("3", 30).add("7", 7);
        assert_eq!(a.union(&c).values(), vec![1, 2, 3, 7]);
    }

    #[test]
    fn test_difference_and_intersection() {
        let a = numbered(&[1, 2, 3]);
        let b = numbered(&[2, 3, 4]);

        assert_eq!(a.difference(&b).values(), vec![1]);
        assert_eq!(b.difference(&a).values(), vec![4]);
        assert_eq!(a.intersection(&b).keys(), vec!["2", "3"]);
    }

    #[test]
    fn test_subset_superset() {
        let a = numbered(&[1, 2]);
        let b = numbered(&[1, 2, 3]);

        assert!(a.is_subset(&b));
        assert!(!b.is_subset(&a));
        assert!(b.is_superset(&a));
        assert!(!a.is_superset(&b));
        assert!(SafeOrderedMap::<i32>::new().is_subset(&a));
    }

    #[test]
    fn test_self_operations_do_not_deadlock() {
        let a = numbered(&[1, 2, 3]);
        assert_eq!(a.union(&a).values(), vec![1, 2, 3]);
        assert!(a.difference(&a).is_empty());
        assert_eq!(a.intersection(&a).len(), 3);
        assert!(a.is_subset(&a));
        assert!(a.is_superset(&a));
    }

    #[test]
    fn test_debug_lists_entries_in_order() {
        let map = numbered(&[2, 1]);
        assert_eq!(format!("{:?}", map), r#"{"2": 2, "1": 1}"#);
    }

    #[test]
    fn test_inner_keeps_order_and_entries_aligned() {
        let mut inner = Inner::new();
        inner.insert("a".to_string(), 1);
        inner.insert("b".to_string(), 2);
        inner.insert("a".to_string(), 3);
        assert_eq!(inner.keys(), ["a", "b"]);
        assert_eq!(inner.get_index(0), Some(("a", &3)));
        assert_eq!(inner.remove("a"), Some(3));
        assert_eq!(inner.remove("a"), None);
        assert_eq!(inner.keys(), ["b"]);
        assert_eq!(inner.position("b"), Some(0));
        assert_eq!(inner.get_index(1), None);
    }
}
