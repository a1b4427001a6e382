//! Heap entries
//!
//! A [`HeapEntry`] pairs an ordering key with a payload. Entries are never
//! mutated once built; the heap only moves them between positions.

/// A (key, value) pair stored in a heap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapEntry<K, V> {
    key: K,
    value: V,
}

impl<K, V> HeapEntry<K, V> {
    /// Creates an entry ordered by `key` carrying `value`
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// The ordering key
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The payload
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Consumes the entry, returning the key
    pub fn into_key(self) -> K {
        self.key
    }

    /// Consumes the entry, returning the payload
    pub fn into_value(self) -> V {
        self.value
    }

    /// Consumes the entry, returning `(key, value)`
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: Clone> HeapEntry<K, K> {
    /// Creates an entry whose payload is a copy of its key
    ///
    /// ```rust
    /// use rust_min_heap::HeapEntry;
    ///
    /// let entry = HeapEntry::from_key(4);
    /// assert_eq!(entry.key(), entry.value());
    /// ```
    pub fn from_key(key: K) -> Self {
        Self {
            value: key.clone(),
            key,
        }
    }
}

impl<K, V> From<(K, V)> for HeapEntry<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}
