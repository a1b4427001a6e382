//! Binary Min-Heap for Rust
//!
//! This crate provides an array-backed binary min-heap priority queue and a
//! heapsort routine built on top of it.
//!
//! # Features
//!
//! - **MinHeap**: O(log n) insert and extract-min; O(1) peek and emptiness check
//! - **heapsort**: O(n log n) sort that drains a fresh [`MinHeap`] in key order
//!
//! The heap stores (key, value) entries in a dense vector interpreted as an
//! implicit complete binary tree: the entry at position `i` has children at
//! `2i + 1` and `2i + 2` and its parent at `(i - 1) / 2`.
//!
//! # Example
//!
//! ```rust
//! use rust_min_heap::MinHeap;
//!
//! let mut heap = MinHeap::new();
//! heap.insert(5, "five");
//! heap.insert(3, "three");
//! heap.insert(8, "eight");
//!
//! assert_eq!(heap.extract_min(), Ok("three"));
//! assert_eq!(heap.extract_min(), Ok("five"));
//! assert_eq!(heap.extract_min(), Ok("eight"));
//! assert!(heap.is_empty());
//! ```
//!
//! ```rust
//! use rust_min_heap::heapsort;
//!
//! assert_eq!(heapsort(vec![4, 1, 3, 2]), vec![1, 2, 3, 4]);
//! ```

pub mod entry;
pub mod heapsort;
pub mod min_heap;
pub mod traits;

// Re-export the main types for convenience
pub use entry::HeapEntry;
pub use heapsort::{heapsort, heapsort_by_key};
pub use min_heap::MinHeap;
pub use traits::{Heap, HeapError, KeyOrder, MinOrder};
