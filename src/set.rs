use crate::fingerprint::fingerprint;
use crate::ordered_map::{Inner, SafeOrderedMap};
use crate::slice::write_list;
use std::fmt;
use std::hash::Hash;

/// A thread-safe set that remembers insertion order
///
/// `SafeSet` is a [`SafeOrderedMap`] keyed by each value's [`fingerprint`]. Adding
/// a value that is already present changes nothing, so the set keeps the position
/// of each value's first insertion. Membership checks compare the stored value
/// with `==` as well as the fingerprint.
///
/// # Examples
///
/// ```
/// use sovran_collections::SafeSet;
///
/// let tags: SafeSet<&str> = ["rust", "sync", "rust", "json"].into_iter().collect();
///
/// assert_eq!(tags.values(), vec!["rust", "sync", "json"]);
/// assert!(tags.contains(&"sync"));
///
/// let other = SafeSet::from(vec!["json", "yaml"]);
/// assert_eq!(tags.union(&other).values(), vec!["rust", "sync", "json", "yaml"]);
/// assert_eq!(tags.intersection(&other).values(), vec!["json"]);
/// ```
pub struct SafeSet<V> {
    map: SafeOrderedMap<V>,
}

fn insert_value<V: Hash + Eq>(inner: &mut Inner<V>, value: V) {
    let key = fingerprint(&value);
    match inner.get(&key) {
        Some(existing) if *existing == value => {}
        Some(_) => {
            tracing::warn!(fingerprint = %key, "fingerprint collision, value not added to set");
        }
        None => inner.insert(key, value),
    }
}

fn holds<V: Hash + Eq>(inner: &Inner<V>, value: &V) -> bool {
    inner
        .get(&fingerprint(value))
        .is_some_and(|existing| existing == value)
}

fn collect_values<'a, V, I>(values: I) -> Inner<V>
where
    V: Hash + Eq + Clone + 'a,
    I: IntoIterator<Item = &'a V>,
{
    let mut inner = Inner::new();
    for value in values {
        insert_value(&mut inner, value.clone());
    }
    inner
}

impl<V> SafeSet<V> {
    /// Creates a new, empty set
    pub fn new() -> Self {
        Self {
            map: SafeOrderedMap::new(),
        }
    }

    fn from_inner(inner: Inner<V>) -> Self {
        Self {
            map: SafeOrderedMap::from_inner(inner),
        }
    }

    pub(crate) fn map_ref(&self) -> &SafeOrderedMap<V> {
        &self.map
    }

    pub(crate) fn into_map(self) -> SafeOrderedMap<V> {
        self.map
    }

    /// Returns the number of values
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if the set holds no values
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns true if every value satisfies the predicate; true when empty
    pub fn all<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&V) -> bool,
    {
        self.map.all(|_, value| predicate(value))
    }

    /// Returns true if any value satisfies the predicate; false when empty
    pub fn any<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&V) -> bool,
    {
        self.map.any(|_, value| predicate(value))
    }

    /// Calls `f` for every value in order
    pub fn for_each<F>(&self, mut f: F) -> &Self
    where
        F: FnMut(&V),
    {
        self.map.for_each(|_, value| f(value));
        self
    }

    /// Folds the values in order into a single value
    pub fn reduce<A, F>(&self, initial: A, mut f: F) -> A
    where
        F: FnMut(A, &V) -> A,
    {
        self.map.reduce(initial, |acc, _, value| f(acc, value))
    }
}

impl<V: Hash + Eq> SafeSet<V> {
    /// Adds a value unless an equal one is already present
    pub fn add(&self, value: V) -> &Self {
        insert_value(&mut *self.map.write(), value);
        self
    }

    /// Returns true if an equal value is present
    pub fn contains(&self, value: &V) -> bool {
        holds(&*self.map.read(), value)
    }

    /// Removes a value, returning true if it was present
    pub fn remove(&self, value: &V) -> bool {
        let mut inner = self.map.write();
        if !holds(&*inner, value) {
            return false;
        }
        inner.remove(&fingerprint(value)).is_some()
    }

    /// Removes the value at position `index`
    ///
    /// An out-of-range index does nothing.
    pub fn delete(&self, index: usize) -> &Self {
        {
            let mut inner = self.map.write();
            if let Some(key) = inner.keys().get(index).cloned() {
                inner.remove(&key);
            }
        }
        self
    }

    /// Returns true if every value of this set is also in `other`
    pub fn is_subset(&self, other: &Self) -> bool {
        let (this, that) = self.map.read_pair(&other.map);
        let contained = this.iter().all(|(_, value)| holds(&*that, value));
        contained
    }

    /// Returns true if every value of `other` is also in this set
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }
}

impl<V: Clone> SafeSet<V> {
    /// Returns the value at position `index`
    pub fn get(&self, index: usize) -> Option<V> {
        self.map
            .read()
            .get_index(index)
            .map(|(_, value)| value.clone())
    }

    /// Returns the earliest inserted value
    pub fn first(&self) -> Option<V> {
        self.get(0)
    }

    /// Returns the most recently inserted value
    pub fn last(&self) -> Option<V> {
        let inner = self.map.read();
        let last = inner.len().checked_sub(1)?;
        inner.get_index(last).map(|(_, value)| value.clone())
    }

    /// Returns the values in insertion order
    pub fn values(&self) -> Vec<V> {
        self.map.values()
    }
}

impl<V: Hash + Eq + Clone> SafeSet<V> {
    /// Builds a new set from the results of `f`
    ///
    /// Results that compare equal collapse into one value at the position of the
    /// first. The receiver is left untouched.
    pub fn map<U, F>(&self, mut f: F) -> SafeSet<U>
    where
        U: Hash + Eq,
        F: FnMut(&V) -> U,
    {
        let inner = self.map.read();
        let mut mapped = Inner::new();
        for (_, value) in inner.iter() {
            insert_value(&mut mapped, f(value));
        }
        SafeSet::from_inner(mapped)
    }

    /// Returns a new set with only the values that satisfy the predicate
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&V) -> bool,
    {
        let inner = self.map.read();
        Self::from_inner(collect_values(
            inner.iter().map(|(_, value)| value).filter(|value| predicate(value)),
        ))
    }

    /// Returns the first value that satisfies the predicate
    pub fn find<F>(&self, mut predicate: F) -> Option<V>
    where
        F: FnMut(&V) -> bool,
    {
        self.map
            .find(|_, value| predicate(value))
            .map(|(_, value)| value)
    }

    /// Returns the longest prefix of values that satisfy the predicate
    pub fn take_while<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&V) -> bool,
    {
        let inner = self.map.read();
        Self::from_inner(collect_values(
            inner
                .iter()
                .map(|(_, value)| value)
                .take_while(|value| predicate(value)),
        ))
    }

    /// Returns every value from the first one that fails the predicate onward
    pub fn drop_while<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&V) -> bool,
    {
        let inner = self.map.read();
        Self::from_inner(collect_values(
            inner
                .iter()
                .map(|(_, value)| value)
                .skip_while(|value| predicate(value)),
        ))
    }

    /// Returns this set's values followed by the values of `other` it lacks
    pub fn union(&self, other: &Self) -> Self {
        let (this, that) = self.map.read_pair(&other.map);
        let mut result = collect_values(this.iter().map(|(_, value)| value));
        for (_, value) in that.iter() {
            insert_value(&mut result, value.clone());
        }
        Self::from_inner(result)
    }

    /// Returns the values of this set that are not in `other`
    pub fn difference(&self, other: &Self) -> Self {
        let (this, that) = self.map.read_pair(&other.map);
        Self::from_inner(collect_values(
            this.iter()
                .map(|(_, value)| value)
                .filter(|&value| !holds(&*that, value)),
        ))
    }

    /// Returns the values of this set that are also in `other`
    pub fn intersection(&self, other: &Self) -> Self {
        let (this, that) = self.map.read_pair(&other.map);
        Self::from_inner(collect_values(
            this.iter()
                .map(|(_, value)| value)
                .filter(|&value| holds(&*that, value)),
        ))
    }
}

/// Produces an independent copy of the set.
impl<V: Clone> Clone for SafeSet<V> {
    fn clone(&self) -> Self {
        Self {
            map: self.map.clone(),
        }
    }
}

impl<V> Default for SafeSet<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Hash + Eq> FromIterator<V> for SafeSet<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut inner = Inner::new();
        for value in iter {
            insert_value(&mut inner, value);
        }
        Self::from_inner(inner)
    }
}

impl<V: Hash + Eq> From<Vec<V>> for SafeSet<V> {
    fn from(values: Vec<V>) -> Self {
        values.into_iter().collect()
    }
}

impl<V: fmt::Debug> fmt::Debug for SafeSet<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.map.read();
        f.debug_set().entries(inner.iter().map(|(_, value)| value)).finish()
    }
}

/// Renders the values as `[a, b, c]`.
impl<V: fmt::Display> fmt::Display for SafeSet<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.map.read();
        write_list(f, inner.iter().map(|(_, value)| value))
    }
}
