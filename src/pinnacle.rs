//! # Pinnacle-set enumeration
//!
//! A *pinnacle* of a permutation word is a value at an interior position that
//! is strictly greater than both of its neighbors; the boundary positions can
//! never hold one. A *vale* is a value strictly smaller than all of its
//! existing neighbors, with the position after the last element treated as a
//! virtual plus-infinity, so the smallest value `0` is always a vale.
//!
//! [`generate`] yields every permutation of `0..n` whose pinnacle set equals
//! a target set, each exactly once, without scanning all `n!` words. The
//! pipeline runs strictly forward through the submodules:
//!
//! 1. [`vale_sets`] enumerates every vale set that can co-occur with the
//!    target pinnacle set,
//! 2. [`arrangements`] realizes each pinnacle/vale pair as minimal
//!    "PV-arrangement" skeletons,
//! 3. [`roots`] fills each skeleton up to a full canonical representative,
//! 4. [`orbit`] expands each representative into its Foata-Strehl orbit, all
//!    of whose members share the representative's pinnacle set.
//!
//! The output order depends on the enumeration order of each stage and is
//! otherwise unspecified.

use std::collections::BTreeSet;
use std::iter;

use thiserror::Error;

use crate::permutation::Permutation;

pub mod analysis;
pub mod arrangements;
pub mod orbit;
pub mod roots;
pub mod vale_sets;

#[cfg(test)]
mod tests;

/// Rejection of a target pinnacle set that no permutation could ever attain
/// for structural reasons, before any enumeration work happens.
///
/// An in-range target that merely has no realization (such as `{1}` for
/// `n = 3`) is not an error; [`generate`] returns an empty sequence for it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PinnacleError {
    #[error("0 can never be a pinnacle: it is a vale of every permutation")]
    ZeroPinnacle,

    #[error("pinnacle value {value} is out of range for permutations of 0..{n}")]
    ValueOutOfRange { value: usize, n: usize },
}

/// Yields every permutation of `0..n` whose pinnacle set equals `pins`,
/// each exactly once.
///
/// The sequence is lazy: canonical representatives are constructed on demand
/// and only one orbit is expanded at a time. Input is validated before the
/// first element is produced.
///
/// # Errors
///
/// Returns [`PinnacleError`] if `pins` contains 0 or a value not in `0..n`.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use pinnacles::pinnacle::generate;
///
/// let pins = BTreeSet::from([2]);
/// let mut words: Vec<Vec<usize>> = generate(3, &pins)
///     .unwrap()
///     .map(|p| p.map().to_vec())
///     .collect();
/// words.sort();
/// assert_eq!(words, vec![vec![0, 2, 1], vec![1, 2, 0]]);
/// ```
pub fn generate(
    n: usize,
    pins: &BTreeSet<usize>,
) -> Result<Box<dyn Iterator<Item = Permutation>>, PinnacleError> {
    for &p in pins {
        if p == 0 {
            return Err(PinnacleError::ZeroPinnacle);
        }
        if p >= n {
            return Err(PinnacleError::ValueOutOfRange { value: p, n });
        }
    }
    if n == 0 {
        // S0 holds exactly the empty permutation, whose pinnacle set is empty.
        return Ok(Box::new(iter::once(Permutation::id(0))));
    }
    let pins: Vec<usize> = pins.iter().copied().collect();
    Ok(Box::new(
        roots::canonical_roots(pins, n)
            .flat_map(|root| orbit::orbit(&root))
            .map(Permutation::from_map),
    ))
}
