//! Kani proof harnesses
//!
//! - `sift_proofs.rs`: Termination and heap-property proofs for both sift directions

#[cfg(kani)]
#[path = "sift_proofs.rs"]
mod sift_proofs;
