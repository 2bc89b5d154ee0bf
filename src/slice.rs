use crate::statistics;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// A thread-safe growable sequence
///
/// `SafeSlice` wraps a `Vec` behind a reader/writer lock and offers the same
/// operation vocabulary as [`SafeOrderedMap`](crate::SafeOrderedMap), indexed by
/// position instead of key. Duplicates are allowed; use [`unique`](Self::unique)
/// or a [`SafeSet`](crate::SafeSet) when they aren't wanted.
///
/// # Examples
///
/// ```
/// use sovran_collections::SafeSlice;
///
/// let slice = SafeSlice::from(vec![3, 1, 3, 2]);
/// slice.add(5);
///
/// assert_eq!(slice.get(1), Some(1));
/// assert_eq!(slice.unique().values(), vec![3, 1, 2, 5]);
/// assert_eq!(slice.mode(), vec![3]);
/// ```
pub struct SafeSlice<V> {
    inner: RwLock<Vec<V>>,
}

impl<V> SafeSlice<V> {
    /// Creates a new, empty slice
    pub fn new() -> Self {
        Self::from(Vec::new())
    }

    /// Creates an empty slice with room for `capacity` items before reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from(Vec::with_capacity(capacity))
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, Vec<V>> {
        self.inner.read()
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, Vec<V>> {
        self.inner.write()
    }

    fn read_pair<'a>(
        &'a self,
        other: &'a Self,
    ) -> (RwLockReadGuard<'a, Vec<V>>, RwLockReadGuard<'a, Vec<V>>) {
        let this = self.inner.read();
        let that = other.inner.read_recursive();
        (this, that)
    }

    /// Appends an item to the end
    pub fn add(&self, item: V) -> &Self {
        self.inner.write().push(item);
        self
    }

    /// Removes the item at `index`, shifting later items down
    ///
    /// An out-of-range index does nothing.
    pub fn delete(&self, index: usize) -> &Self {
        {
            let mut items = self.inner.write();
            if index < items.len() {
                items.remove(index);
            }
        }
        self
    }

    /// Returns the number of items
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns true if the slice holds no items
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Returns true if every item satisfies the predicate; true when empty
    pub fn all<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&V) -> bool,
    {
        self.inner.read().iter().all(predicate)
    }

    /// Returns true if any item satisfies the predicate; false when empty
    pub fn any<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&V) -> bool,
    {
        self.inner.read().iter().any(predicate)
    }

    /// Builds a new slice from the results of `f`, in the same order
    pub fn map<U, F>(&self, f: F) -> SafeSlice<U>
    where
        F: FnMut(&V) -> U,
    {
        let items = self.inner.read();
        SafeSlice::from(items.iter().map(f).collect::<Vec<_>>())
    }

    /// Calls `f` for every item in order
    pub fn for_each<F>(&self, f: F) -> &Self
    where
        F: FnMut(&V),
    {
        self.inner.read().iter().for_each(f);
        self
    }

    /// Folds the items in order into a single value
    pub fn reduce<A, F>(&self, initial: A, f: F) -> A
    where
        F: FnMut(A, &V) -> A,
    {
        self.inner.read().iter().fold(initial, f)
    }
}

impl<V: Clone> SafeSlice<V> {
    /// Returns a clone of the item at `index`
    pub fn get(&self, index: usize) -> Option<V> {
        self.inner.read().get(index).cloned()
    }

    /// Returns the first item
    pub fn first(&self) -> Option<V> {
        self.inner.read().first().cloned()
    }

    /// Returns the last item
    pub fn last(&self) -> Option<V> {
        self.inner.read().last().cloned()
    }

    /// Returns a copy of all items
    pub fn values(&self) -> Vec<V> {
        self.inner.read().to_vec()
    }

    /// Returns a new slice with only the items that satisfy the predicate
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&V) -> bool,
    {
        let items = self.inner.read();
        Self::from(
            items
                .iter()
                .filter(|item| predicate(item))
                .cloned()
                .collect::<Vec<_>>(),
        )
    }

    /// Returns the first item that satisfies the predicate
    pub fn find<F>(&self, mut predicate: F) -> Option<V>
    where
        F: FnMut(&V) -> bool,
    {
        let items = self.inner.read();
        items.iter().find(|item| predicate(item)).cloned()
    }

    /// Returns the longest prefix of items that satisfy the predicate
    pub fn take_while<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&V) -> bool,
    {
        let items = self.inner.read();
        Self::from(
            items
                .iter()
                .take_while(|item| predicate(item))
                .cloned()
                .collect::<Vec<_>>(),
        )
    }

    /// Returns every item from the first one that fails the predicate onward
    pub fn drop_while<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&V) -> bool,
    {
        let items = self.inner.read();
        Self::from(
            items
                .iter()
                .skip_while(|item| predicate(item))
                .cloned()
                .collect::<Vec<_>>(),
        )
    }
}

impl<V: PartialEq> SafeSlice<V> {
    /// Returns true if an equal item is present
    pub fn contains(&self, item: &V) -> bool {
        self.inner.read().contains(item)
    }

    /// Returns the position of the first item equal to `item`
    pub fn index_of(&self, item: &V) -> Option<usize> {
        self.inner.read().iter().position(|candidate| candidate == item)
    }

    /// Returns true if every item of this slice also occurs in `other`
    pub fn is_subset(&self, other: &Self) -> bool {
        let (this, that) = self.read_pair(other);
        this.iter().all(|item| that.contains(item))
    }

    /// Returns true if every item of `other` also occurs in this slice
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }
}

impl<V: Clone + PartialEq> SafeSlice<V> {
    /// Returns a new slice keeping only the first occurrence of each item
    pub fn unique(&self) -> Self {
        let items = self.inner.read();
        Self::from(dedup_first(items.iter()))
    }

    /// Combines two slices
    ///
    /// The result holds every item of this slice, duplicates included, followed by
    /// the items of `other` that are not already in the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_collections::SafeSlice;
    ///
    /// let a = SafeSlice::from(vec![1, 1, 2]);
    /// let b = SafeSlice::from(vec![2, 3, 3]);
    ///
    /// assert_eq!(a.union(&b).values(), vec![1, 1, 2, 3]);
    /// ```
    pub fn union(&self, other: &Self) -> Self {
        let (this, that) = self.read_pair(other);
        let mut result = this.to_vec();
        for item in that.iter() {
            if !result.contains(item) {
                result.push(item.clone());
            }
        }
        Self::from(result)
    }

    /// Returns the items of this slice that don't occur in `other`
    pub fn difference(&self, other: &Self) -> Self {
        let (this, that) = self.read_pair(other);
        Self::from(
            this.iter()
                .filter(|item| !that.contains(item))
                .cloned()
                .collect::<Vec<_>>(),
        )
    }

    /// Returns the items of this slice that also occur in `other`
    pub fn intersection(&self, other: &Self) -> Self {
        let (this, that) = self.read_pair(other);
        Self::from(
            this.iter()
                .filter(|item| that.contains(item))
                .cloned()
                .collect::<Vec<_>>(),
        )
    }
}

impl<V: Clone + Eq + Hash> SafeSlice<V> {
    /// Counts how often each item occurs
    pub fn frequency(&self) -> HashMap<V, usize> {
        statistics::frequency(self.inner.read().as_slice())
    }

    /// Returns the most frequent items in first-occurrence order
    ///
    /// When every item occurs once, all of them are modes. An empty slice has no mode.
    pub fn mode(&self) -> Vec<V> {
        statistics::mode(self.inner.read().as_slice())
    }
}

fn dedup_first<'a, V, I>(items: I) -> Vec<V>
where
    V: Clone + PartialEq + 'a,
    I: IntoIterator<Item = &'a V>,
{
    let mut seen: Vec<V> = Vec::new();
    for item in items {
        if !seen.contains(item) {
            seen.push(item.clone());
        }
    }
    seen
}

/// Produces an independent copy of the items.
impl<V: Clone> Clone for SafeSlice<V> {
    fn clone(&self) -> Self {
        Self::from(self.inner.read().to_vec())
    }
}

impl<V> Default for SafeSlice<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> From<Vec<V>> for SafeSlice<V> {
    fn from(items: Vec<V>) -> Self {
        Self {
            inner: RwLock::new(items),
        }
    }
}

impl<V> FromIterator<V> for SafeSlice<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<V: fmt::Debug> fmt::Debug for SafeSlice<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.read().iter()).finish()
    }
}

/// Renders the items as `[a, b, c]`.
impl<V: fmt::Display> fmt::Display for SafeSlice<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, self.inner.read().iter())
    }
}

pub(crate) fn write_list<'a, V, I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    V: fmt::Display + 'a,
    I: IntoIterator<Item = &'a V>,
{
    f.write_str("[")?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    f.write_str("]")
}
