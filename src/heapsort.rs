//! Heapsort on top of [`MinHeap`]
//!
//! Every element is inserted into a fresh heap, which is then drained in key
//! order. The sort is not in place and not stable: equal elements may come
//! out in any relative order.
//!
//! # Time Complexity
//! O(n log n) comparisons; O(n) extra space for the heap and the output.

use log::debug;

use crate::min_heap::MinHeap;

/// Sorts `items` in non-decreasing order
///
/// Inputs of length 0 or 1 are returned as they are, without building a heap.
///
/// # Example
///
/// ```rust
/// use rust_min_heap::heapsort;
///
/// assert_eq!(heapsort(vec![4, 1, 3, 2]), vec![1, 2, 3, 4]);
/// assert_eq!(heapsort(Vec::<i32>::new()), vec![]);
/// assert_eq!(heapsort(vec![7]), vec![7]);
/// ```
pub fn heapsort<T: Ord>(items: Vec<T>) -> Vec<T> {
    if items.len() <= 1 {
        return items;
    }

    let n = items.len();
    debug!("heapsort: sorting {} elements", n);

    let mut heap: MinHeap<T, ()> = MinHeap::with_capacity(n);
    for item in items {
        heap.insert(item, ());
    }

    let mut sorted = Vec::with_capacity(n);
    while let Ok(entry) = heap.extract_min_entry() {
        sorted.push(entry.into_key());
    }

    debug_assert_eq!(sorted.len(), n);
    debug!("heapsort: sorted {} elements", sorted.len());
    sorted
}

/// Sorts `items` in non-decreasing order of the key `f` extracts
///
/// `f` is called once per element. The element itself rides along as the
/// heap payload.
///
/// # Example
///
/// ```rust
/// use rust_min_heap::heapsort_by_key;
///
/// let words = vec!["pear", "fig", "banana"];
/// assert_eq!(heapsort_by_key(words, |w| w.len()), vec!["fig", "pear", "banana"]);
/// ```
pub fn heapsort_by_key<T, K, F>(items: Vec<T>, mut f: F) -> Vec<T>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    if items.len() <= 1 {
        return items;
    }

    let n = items.len();
    debug!("heapsort_by_key: sorting {} elements", n);

    let mut heap: MinHeap<K, T> = MinHeap::with_capacity(n);
    for item in items {
        heap.insert(f(&item), item);
    }

    let mut sorted = Vec::with_capacity(n);
    while let Ok(item) = heap.extract_min() {
        sorted.push(item);
    }

    debug!("heapsort_by_key: sorted {} elements", sorted.len());
    sorted
}
