//! Binary Min-Heap implementation
//!
//! An array-backed binary heap of (key, value) entries. The store is a dense
//! vector read as an implicit complete binary tree:
//!
//! - children of position `i` live at `2i + 1` and `2i + 2`
//! - the parent of position `i > 0` lives at `(i - 1) / 2`
//! - position 0 has no parent and holds the entry whose key comes first
//!
//! Entries are appended at the end and removed from the end, so the tree stays
//! complete. Positions are not stable: an entry moves whenever the heap
//! property has to be restored around it.
//!
//! # Time Complexity
//!
//! | Operation     | Complexity |
//! |---------------|------------|
//! | `insert`      | O(log n)   |
//! | `extract_min` | O(log n)   |
//! | `peek`        | O(1)       |
//! | `is_empty`    | O(1)       |
//!
//! Both sift operations are loops and use O(1) auxiliary space.
//!
//! # Ordering of equal keys
//!
//! The heap is not stable. Entries with equal keys come out in whatever order
//! the sift operations leave them, which is not necessarily insertion order.
//!
//! # Example
//!
//! ```rust
//! use rust_min_heap::{HeapError, MinHeap};
//!
//! let mut heap = MinHeap::new();
//! heap.insert(2, "b");
//! heap.insert(1, "a");
//!
//! assert_eq!(heap.peek().map(|e| *e.key()), Some(1));
//! assert_eq!(heap.extract_min(), Ok("a"));
//! assert_eq!(heap.extract_min(), Ok("b"));
//! assert_eq!(heap.extract_min(), Err(HeapError::EmptyHeap));
//! ```

use std::fmt;
use std::marker::PhantomData;

use log::{debug, trace};

use crate::entry::HeapEntry;
use crate::traits::{Heap, HeapError, KeyOrder, MinOrder};

/// A binary min-heap
///
/// This heap stores (key, value) entries and always extracts the entry whose
/// key comes first under `O` (by default the smallest key).
///
/// The value type defaults to the key type, for heaps where the key is also
/// the payload; see [`insert_key`](MinHeap::insert_key).
pub struct MinHeap<K, V = K, O = MinOrder> {
    /// Entries in implicit-tree order
    store: Vec<HeapEntry<K, V>>,
    _order: PhantomData<O>,
}

impl<K: Ord, V> MinHeap<K, V, MinOrder> {
    /// Creates an empty heap ordered by ascending key
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty heap with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            store: Vec::with_capacity(capacity),
            _order: PhantomData,
        }
    }
}

impl<K, V, O: KeyOrder<K>> MinHeap<K, V, O> {
    /// Returns true if the heap holds no entries
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns the number of entries in the heap
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Removes every entry
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Inserts `value` under `key`
    ///
    /// The entry is appended at the end of the store and moved toward the
    /// root while its key strictly precedes its parent's.
    pub fn insert(&mut self, key: K, value: V) {
        self.store.push(HeapEntry::new(key, value));
        let placed = self.sift_up(self.store.len() - 1);
        trace!("insert: placed at position {} of {}", placed, self.store.len());

        debug_assert!(
            self.is_ordered_at(placed),
            "heap property violated at position {} after insert",
            placed
        );
    }

    /// Returns the entry at the root without removing it
    pub fn peek(&self) -> Option<&HeapEntry<K, V>> {
        self.store.first()
    }

    /// Removes the root entry and returns its value
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap has no entries.
    pub fn extract_min(&mut self) -> Result<V, HeapError> {
        self.extract_min_entry().map(HeapEntry::into_value)
    }

    /// Removes the root entry and returns it whole
    ///
    /// The root is swapped with the last entry, popped off the end, and the
    /// entry now at the root is moved down until the heap property holds.
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap has no entries. The heap
    /// is left untouched in that case.
    pub fn extract_min_entry(&mut self) -> Result<HeapEntry<K, V>, HeapError> {
        if self.store.is_empty() {
            debug!("extract_min called on an empty heap");
            return Err(HeapError::EmptyHeap);
        }

        let last_idx = self.store.len() - 1;
        self.store.swap(0, last_idx);
        let min = self.store.pop().ok_or(HeapError::EmptyHeap)?;
        let settled = self.sift_down(0);
        trace!("extract_min: root settled at position {} of {}", settled, self.store.len());

        debug_assert!(
            self.is_ordered_at(settled),
            "heap property violated at position {} after extract_min",
            settled
        );

        Ok(min)
    }

    /// Iterates over the entries in store order
    ///
    /// Store order is the implicit-tree layout, not sorted order. Only the
    /// first entry is guaranteed to hold the minimum key.
    pub fn iter(&self) -> std::slice::Iter<'_, HeapEntry<K, V>> {
        self.store.iter()
    }

    /// Drains the heap into a vector sorted by key
    pub fn into_sorted_vec(mut self) -> Vec<HeapEntry<K, V>> {
        let mut sorted = Vec::with_capacity(self.store.len());
        while let Ok(entry) = self.extract_min_entry() {
            sorted.push(entry);
        }
        sorted
    }

    /// Checks the heap property over the whole store
    ///
    /// Returns false if any entry's key strictly precedes its parent's.
    pub fn is_heap(&self) -> bool {
        (1..self.store.len()).all(|index| {
            let parent = (index - 1) / 2;
            !O::precedes(self.store[index].key(), self.store[parent].key())
        })
    }

    /// Checks the entry at `index` against its parent and its children
    ///
    /// Constant time, so it can run after every sift in debug builds.
    fn is_ordered_at(&self, index: usize) -> bool {
        let len = self.store.len();
        if index >= len {
            return true;
        }
        let key = self.store[index].key();

        if index > 0 && O::precedes(key, self.store[(index - 1) / 2].key()) {
            return false;
        }
        [2 * index + 1, 2 * index + 2]
            .into_iter()
            .filter(|&child| child < len)
            .all(|child| !O::precedes(self.store[child].key(), key))
    }

    /// Move entry at index up to maintain heap property
    ///
    /// Returns the position the entry ends up at. Position 0 is never
    /// compared against a parent.
    fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let parent = (index - 1) / 2;
            if O::precedes(self.store[index].key(), self.store[parent].key()) {
                self.store.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
        index
    }

    /// Move entry at index down to maintain heap property
    ///
    /// Returns the position the entry ends up at.
    fn sift_down(&mut self, mut index: usize) -> usize {
        let len = self.store.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;

            // No left child means no children at all
            if left >= len {
                break;
            }

            let child = if right < len
                && O::precedes(self.store[right].key(), self.store[left].key())
            {
                right
            } else {
                left
            };

            if O::precedes(self.store[child].key(), self.store[index].key()) {
                self.store.swap(index, child);
                index = child;
            } else {
                break;
            }
        }
        index
    }
}

impl<K: Clone, O: KeyOrder<K>> MinHeap<K, K, O> {
    /// Inserts `key` as both the ordering key and the payload
    pub fn insert_key(&mut self, key: K) {
        self.insert(key.clone(), key);
    }
}

// Written by hand so the order type needs neither `Debug` nor `Clone`
impl<K: fmt::Debug, V: fmt::Debug, O> fmt::Debug for MinHeap<K, V, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinHeap").field("store", &self.store).finish()
    }
}

impl<K: Clone, V: Clone, O> Clone for MinHeap<K, V, O> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _order: PhantomData,
        }
    }
}

impl<K, V, O> Default for MinHeap<K, V, O> {
    fn default() -> Self {
        Self {
            store: Vec::new(),
            _order: PhantomData,
        }
    }
}

impl<K: Ord, V, O: KeyOrder<K>> Heap<V, K> for MinHeap<K, V, O> {
    fn new() -> Self {
        Self::default()
    }

    fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    fn len(&self) -> usize {
        self.store.len()
    }

    fn push(&mut self, priority: K, item: V) {
        self.insert(priority, item);
    }

    fn peek(&self) -> Option<(&K, &V)> {
        self.store.first().map(|entry| (entry.key(), entry.value()))
    }

    fn pop(&mut self) -> Option<(K, V)> {
        self.extract_min_entry().ok().map(HeapEntry::into_parts)
    }
}

impl<K, V, O: KeyOrder<K>> FromIterator<(K, V)> for MinHeap<K, V, O> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut heap = Self::default();
        heap.extend(iter);
        heap
    }
}

impl<K, V, O: KeyOrder<K>> Extend<(K, V)> for MinHeap<K, V, O> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.store.reserve(iter.size_hint().0);
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

/// Renders the values in store order, e.g. `[1, 3, 2]`
///
/// This is a debugging aid: store order is the tree layout, not sorted order.
impl<K, V: fmt::Display, O> fmt::Display for MinHeap<K, V, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, entry) in self.store.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", entry.value())?;
        }
        write!(f, "]")
    }
}
