//! Common traits for heap data structures
//!
//! This module provides the shared pieces of the heap API:
//!
//! - [`Heap`]: Base trait for push/pop/peek heaps, used to drive any heap
//!   generically from tests and benchmarks
//! - [`KeyOrder`]: The strict order a heap arranges its keys by
//! - [`HeapError`]: Errors reported by fallible heap operations

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// An extraction was attempted on a heap with no entries
    EmptyHeap,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::EmptyHeap => write!(f, "cannot extract from an empty heap"),
        }
    }
}

impl std::error::Error for HeapError {}

/// A strict order over heap keys
///
/// `precedes(a, b)` returns true when a key `a` must sit closer to the root
/// than a key `b`. Implementations must be irreflexive and transitive, and
/// must agree with a total order on the key domain: two keys where neither
/// precedes the other are treated as equal.
///
/// [`MinOrder`] is the only order shipped with this crate. A different
/// arrangement (for example largest-first) is obtained by implementing this
/// trait and naming it as the heap's third type parameter.
///
/// # Example
///
/// ```rust
/// use rust_min_heap::{KeyOrder, MinOrder};
///
/// assert!(MinOrder::precedes(&1, &2));
/// assert!(!MinOrder::precedes(&2, &2));
/// ```
pub trait KeyOrder<K> {
    /// Returns true if `a` must be extracted before `b`
    fn precedes(a: &K, b: &K) -> bool;
}

/// Ascending key order: the smallest key sits at the root
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinOrder;

impl<K: Ord> KeyOrder<K> for MinOrder {
    #[inline]
    fn precedes(a: &K, b: &K) -> bool {
        a < b
    }
}

/// Base trait for heap/priority queue data structures
///
/// This trait provides a simple API similar to Rust's `BinaryHeap`:
/// - `push` inserts an element (returns `()`)
/// - `pop` removes and returns the minimum
/// - `peek` returns the minimum without removing it
///
/// Unlike `BinaryHeap` which stores values directly (using `Ord`), these heaps
/// store (priority, item) pairs to separate the ordering key from the data.
///
/// `pop` reports an empty heap as `None`. Callers that treat extraction from
/// an empty heap as a bug should use [`MinHeap::extract_min`](crate::MinHeap::extract_min),
/// which returns [`HeapError::EmptyHeap`] instead.
///
/// # Example
///
/// ```rust
/// use rust_min_heap::Heap;
/// use rust_min_heap::MinHeap;
///
/// let mut heap: MinHeap<i32, &str> = Heap::new();
/// heap.push(3, "three");
/// heap.push(1, "one");
/// heap.push(2, "two");
///
/// assert_eq!(Heap::peek(&heap), Some((&1, &"one")));
/// assert_eq!(heap.pop(), Some((1, "one")));
/// ```
pub trait Heap<T, P: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element with the given priority
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, priority: P, item: T);

    /// Returns the minimum priority and associated item without removing it
    ///
    /// Note that `BinaryHeap` is a max-heap, while these heaps are min-heaps.
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<(&P, &T)>;

    /// Removes and returns the minimum priority and associated item
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<(P, T)>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_order_is_strict() {
        assert!(MinOrder::precedes(&-1, &0));
        assert!(!MinOrder::precedes(&0, &-1));
        assert!(!MinOrder::precedes(&7, &7));
        assert!(MinOrder::precedes(&"apple", &"banana"));
    }

    #[test]
    fn test_empty_heap_error_display() {
        let err = HeapError::EmptyHeap;
        assert_eq!(err.to_string(), "cannot extract from an empty heap");

        let boxed: Box<dyn std::error::Error> = Box::new(err);
        assert!(boxed.source().is_none());
    }
}
