//! # Pinnacles
//!
//! Pinnacles is a Rust library for enumerating permutations of `0..n` whose
//! *pinnacle set* (the values sitting at interior local maxima) equals a
//! prescribed target set, without brute-force search over the symmetric
//! group.
//!
//! Instead of generating all `n!` permutations and filtering, the library
//! builds a small number of canonical representatives directly from the
//! target set and expands each one into its full equivalence class under the
//! Foata-Strehl action, recovering every matching permutation exactly once.
//!
//! The entry point is [`pinnacle::generate`].

pub mod permutation;
pub mod pinnacle;
