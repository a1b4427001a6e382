//! Proofs for the sift operations
//!
//! Sift-up must stop at position 0 instead of comparing the root against a
//! parent it does not have, and both sifts must leave the heap property
//! intact for every key assignment Kani can pick.

#[cfg(kani)]
use rust_min_heap::{HeapError, MinHeap};

/// Proof: a new minimum inserted into any small heap ends at the root
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_sift_up_stops_at_root() {
    let mut heap: MinHeap<u8> = MinHeap::new();

    let k1: u8 = kani::any();
    let k2: u8 = kani::any();
    let k3: u8 = kani::any();
    let k4: u8 = kani::any();
    kani::assume(k1 > 0 && k2 > 0 && k3 > 0 && k4 > 0);

    heap.insert_key(k1);
    heap.insert_key(k2);
    heap.insert_key(k3);
    heap.insert_key(k4);
    heap.insert_key(0);

    assert!(heap.is_heap());
    assert_eq!(heap.peek().map(|e| *e.key()), Some(0));
    assert_eq!(heap.len(), 5);
}

/// Proof: extraction returns the minimum and keeps the heap property
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_extract_min_returns_minimum() {
    let mut heap: MinHeap<u8> = MinHeap::new();

    let k1: u8 = kani::any();
    let k2: u8 = kani::any();
    let k3: u8 = kani::any();
    let k4: u8 = kani::any();

    heap.insert_key(k1);
    heap.insert_key(k2);
    heap.insert_key(k3);
    heap.insert_key(k4);

    let min = heap.extract_min();
    assert_eq!(min, Ok(k1.min(k2).min(k3).min(k4)));
    assert!(heap.is_heap());
    assert_eq!(heap.len(), 3);
}

/// Proof: extraction from an empty heap reports the error and changes nothing
#[cfg(kani)]
#[kani::proof]
fn verify_empty_extraction_fails() {
    let mut heap: MinHeap<u8> = MinHeap::new();
    assert_eq!(heap.extract_min(), Err(HeapError::EmptyHeap));
    assert!(heap.is_empty());
}
